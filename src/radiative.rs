//! Radiative transfer relations shared by all species.

use crate::{
    constants::{fcn, H_OVER_K, SQRT_TWO_PI},
    error::{ColumnError, Result},
    units::{Frequency, Temperature, Velocity},
};
use ndarray::{Array, ArrayView, Dimension, Zip};

/// Evaluates the Planck function in temperature units (the radiation temperature)
///
/// J_nu(T) = (h*nu/k_B) / (exp(h*nu/(k_B*T)) - 1)
///
/// The temperature is not validated; a non-positive temperature gives a
/// non-physical result.
pub fn planck_temperature(temperature: Temperature, frequency: Frequency) -> Temperature {
    let line_temperature = H_OVER_K * frequency.to_hz();
    Temperature::from_kelvin(
        line_temperature / fcn::exp_m1(line_temperature / temperature.to_kelvin()),
    )
}

/// Computes the factor tau/(1 - exp(-tau)) correcting an optically thin column
/// density for the given optical depth.
///
/// Returns NaN when the optical depth is not positive or is NaN.
pub fn depth_correction_factor(optical_depth: fcn) -> fcn {
    if optical_depth.is_nan() || optical_depth <= 0.0 {
        fcn::NAN
    } else {
        -optical_depth / fcn::exp_m1(-optical_depth)
    }
}

/// Computes the depth correction factor for each element of the given array of
/// optical depths.
pub fn depth_correction_factors<D: Dimension>(optical_depths: ArrayView<fcn, D>) -> Array<fcn, D> {
    optical_depths.mapv(depth_correction_factor)
}

/// Inverts the radiative transfer equation for a homogeneous slab to find the
/// optical depth giving the observed peak brightness temperature:
///
/// tau = -ln(1 - T_peak/(J_nu(T_ex) - J_nu(T_bg)))
///
/// Returns NaN when the excitation temperature is zero or NaN. An excitation
/// temperature below the background temperature has no solution and is an error.
pub fn optical_depth_from_peak(
    excitation_temperature: Temperature,
    background_temperature: Temperature,
    frequency: Frequency,
    peak_temperature: Temperature,
) -> Result<fcn> {
    if excitation_temperature.is_nan() || excitation_temperature.to_kelvin() == 0.0 {
        return Ok(fcn::NAN);
    }
    if excitation_temperature < background_temperature {
        return Err(ColumnError::InvalidInput(format!(
            "Excitation temperature {} K is lower than the background temperature {} K",
            excitation_temperature.to_kelvin(),
            background_temperature.to_kelvin()
        )));
    }
    let contrast = planck_temperature(excitation_temperature, frequency)
        - planck_temperature(background_temperature, frequency);
    Ok(-fcn::ln_1p(-(peak_temperature / contrast)))
}

/// Evaluates the peak brightness temperature of a homogeneous slab with the given
/// optical depth:
///
/// T_peak = (J_nu(T_ex) - J_nu(T_bg))*(1 - exp(-tau))
pub fn peak_temperature(
    excitation_temperature: Temperature,
    background_temperature: Temperature,
    frequency: Frequency,
    optical_depth: fcn,
) -> Temperature {
    let contrast = planck_temperature(excitation_temperature, frequency)
        - planck_temperature(background_temperature, frequency);
    contrast * (-fcn::exp_m1(-optical_depth))
}

/// Computes the optical depth integrated over velocity for a Gaussian line profile
/// with the given peak optical depth and velocity dispersion: sqrt(2*pi)*tau*sigma_v.
pub fn gaussian_integrated_optical_depth(
    optical_depth: fcn,
    velocity_dispersion: Velocity,
) -> Velocity {
    velocity_dispersion * (SQRT_TWO_PI * optical_depth)
}

/// Inverts the peak brightness temperature of every pixel of a map, sharing the
/// excitation temperature, background temperature and frequency.
pub fn optical_depths_from_peaks<D: Dimension>(
    excitation_temperature: Temperature,
    background_temperature: Temperature,
    frequency: Frequency,
    peak_temperatures: ArrayView<Temperature, D>,
) -> Result<Array<fcn, D>> {
    // Validate once so that an invalid excitation temperature fails before any work.
    optical_depth_from_peak(
        excitation_temperature,
        background_temperature,
        frequency,
        Temperature::from_kelvin(0.0),
    )?;
    let contrast = planck_temperature(excitation_temperature, frequency)
        - planck_temperature(background_temperature, frequency);
    let is_undefined =
        excitation_temperature.is_nan() || excitation_temperature.to_kelvin() == 0.0;
    Ok(Zip::from(&peak_temperatures).par_map_collect(|&peak| {
        if is_undefined {
            fcn::NAN
        } else {
            -fcn::ln_1p(-(peak / contrast))
        }
    }))
}
