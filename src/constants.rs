//! Physical and mathematical constants.

/// Floating-point precision to use for constants.
#[allow(non_camel_case_types)]
pub type fcn = f64;

// Mathematical constants

pub const PI: fcn = std::f64::consts::PI;
/// sqrt(2*pi), the integral of a unit-peak Gaussian in units of its dispersion.
pub const SQRT_TWO_PI: fcn = 2.506_628_274_631_000_7;

// Physical constants (CODATA 2018, exact SI definitions)

/// Speed of light in vacuum [cm/s].
pub const CLIGHT: fcn = 2.997_924_58e10;
/// Boltzmann constant [erg/K].
pub const KBOLTZMANN: fcn = 1.380_649e-16;
/// Planck constant [erg s].
pub const HPLANCK: fcn = 6.626_070_15e-27;
/// Temperature of the cosmic microwave background [K].
pub const T_BACKGROUND: fcn = 2.73;

/// h/k_B, converts a frequency to its temperature equivalent [K s].
pub const H_OVER_K: fcn = HPLANCK / KBOLTZMANN;
/// hc/k_B, converts a wavenumber to its temperature equivalent [K cm].
pub const WAVENUMBER_TO_K: fcn = HPLANCK * CLIGHT / KBOLTZMANN;

// Unit conversion factors

/// Conversion factor from kilohertz to hertz.
pub const KHZ_TO_HZ: fcn = 1e3;
/// Conversion factor from megahertz to hertz.
pub const MHZ_TO_HZ: fcn = 1e6;
/// Conversion factor from gigahertz to hertz.
pub const GHZ_TO_HZ: fcn = 1e9;
/// Conversion factor from meters to centimeters.
pub const M_TO_CM: fcn = 1e2;
/// Conversion factor from kilometers to centimeters.
pub const KM_TO_CM: fcn = 1e5;
/// Conversion factor from inverse square meters to inverse square centimeters.
pub const PER_M2_TO_PER_CM2: fcn = 1e-4;
