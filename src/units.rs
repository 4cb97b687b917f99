//! Dimensioned physical quantities.
//!
//! Every quantity is a newtype over `f64` holding the value in a fixed base unit
//! (CGS, with kelvin for temperature). Passing a frequency where a temperature is
//! expected is therefore a compile-time error. Values with a dimension only known
//! at runtime are represented by [`Quantity`](quantity::Quantity) and are converted
//! with `TryFrom`, which fails with [`ColumnError::UnitMismatch`] on a wrong dimension.

pub mod quantity;

pub use quantity::{Quantity, Unit};

use crate::constants::{GHZ_TO_HZ, KHZ_TO_HZ, KM_TO_CM, MHZ_TO_HZ, M_TO_CM, PER_M2_TO_PER_CM2};
use crate::error::ColumnError;
use std::{
    fmt,
    ops::{Add, Div, Mul, Sub},
};

/// Floating-point precision to use for units.
#[allow(non_camel_case_types)]
pub type fun = f64;

/// Physical dimension of a quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    Dimensionless,
    Temperature,
    Frequency,
    Rate,
    Time,
    Length,
    Velocity,
    IntegratedIntensity,
    ColumnDensity,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dimensionless => "dimensionless",
            Self::Temperature => "temperature [K]",
            Self::Frequency => "frequency [Hz]",
            Self::Rate => "rate [1/s]",
            Self::Time => "time [s]",
            Self::Length => "length [cm]",
            Self::Velocity => "velocity [cm/s]",
            Self::IntegratedIntensity => "integrated intensity [K cm/s]",
            Self::ColumnDensity => "column density [1/cm^2]",
        };
        write!(f, "{}", name)
    }
}

macro_rules! define_quantity {
    ($(#[$attr:meta])* $name:ident, $dimension:ident) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
        #[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(fun);

        impl $name {
            /// Dimension of this quantity.
            pub const DIMENSION: Dimension = Dimension::$dimension;

            /// A NaN-valued quantity, used to signal a missing result.
            pub fn nan() -> Self {
                Self(fun::NAN)
            }

            pub fn is_nan(&self) -> bool {
                self.0.is_nan()
            }

            pub fn is_finite(&self) -> bool {
                self.0.is_finite()
            }
        }

        impl Add for $name {
            type Output = $name;

            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = $name;

            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl Mul<fun> for $name {
            type Output = $name;

            fn mul(self, rhs: fun) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl Mul<$name> for fun {
            type Output = $name;

            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl Div<fun> for $name {
            type Output = $name;

            fn div(self, rhs: fun) -> $name {
                $name(self.0 / rhs)
            }
        }

        /// Ratio of two quantities of the same dimension.
        impl Div for $name {
            type Output = fun;

            fn div(self, rhs: $name) -> fun {
                self.0 / rhs.0
            }
        }

        impl TryFrom<Quantity> for $name {
            type Error = ColumnError;

            fn try_from(quantity: Quantity) -> Result<Self, Self::Error> {
                quantity.value_in_base_units(Dimension::$dimension).map($name)
            }
        }

        impl From<$name> for Quantity {
            fn from(value: $name) -> Quantity {
                Quantity::from_base_units(value.0, Dimension::$dimension)
            }
        }
    };
}

define_quantity!(
    /// Temperature, stored in kelvin.
    Temperature,
    Temperature
);

define_quantity!(
    /// Frequency, stored in hertz.
    Frequency,
    Frequency
);

define_quantity!(
    /// Rate of a spontaneous process (e.g. an Einstein A-coefficient), stored in 1/s.
    Rate,
    Rate
);

define_quantity!(
    /// Velocity, stored in cm/s.
    Velocity,
    Velocity
);

define_quantity!(
    /// Brightness temperature integrated over velocity, stored in K cm/s.
    IntegratedIntensity,
    IntegratedIntensity
);

define_quantity!(
    /// Number of particles per unit area along the line of sight, stored in 1/cm^2.
    ColumnDensity,
    ColumnDensity
);

impl Temperature {
    pub fn from_kelvin(value: fun) -> Self {
        Self(value)
    }

    pub fn to_kelvin(&self) -> fun {
        self.0
    }
}

impl Frequency {
    pub fn from_hz(value: fun) -> Self {
        Self(value)
    }

    pub fn from_khz(value: fun) -> Self {
        Self(value * KHZ_TO_HZ)
    }

    pub fn from_mhz(value: fun) -> Self {
        Self(value * MHZ_TO_HZ)
    }

    pub fn from_ghz(value: fun) -> Self {
        Self(value * GHZ_TO_HZ)
    }

    pub fn to_hz(&self) -> fun {
        self.0
    }

    pub fn to_mhz(&self) -> fun {
        self.0 / MHZ_TO_HZ
    }

    pub fn to_ghz(&self) -> fun {
        self.0 / GHZ_TO_HZ
    }
}

impl Rate {
    pub fn per_second(value: fun) -> Self {
        Self(value)
    }

    /// Creates a rate from its base-10 logarithm, as tabulated in line catalogs.
    pub fn from_log10_per_second(log_value: fun) -> Self {
        Self(fun::powf(10.0, log_value))
    }

    pub fn to_per_second(&self) -> fun {
        self.0
    }
}

impl Velocity {
    pub fn from_cm_per_sec(value: fun) -> Self {
        Self(value)
    }

    pub fn from_m_per_sec(value: fun) -> Self {
        Self(value * M_TO_CM)
    }

    pub fn from_km_per_sec(value: fun) -> Self {
        Self(value * KM_TO_CM)
    }

    pub fn to_cm_per_sec(&self) -> fun {
        self.0
    }

    pub fn to_km_per_sec(&self) -> fun {
        self.0 / KM_TO_CM
    }
}

impl IntegratedIntensity {
    pub fn from_kelvin_cm_per_sec(value: fun) -> Self {
        Self(value)
    }

    pub fn from_kelvin_km_per_sec(value: fun) -> Self {
        Self(value * KM_TO_CM)
    }

    pub fn to_kelvin_cm_per_sec(&self) -> fun {
        self.0
    }

    pub fn to_kelvin_km_per_sec(&self) -> fun {
        self.0 / KM_TO_CM
    }
}

impl ColumnDensity {
    pub fn per_cm2(value: fun) -> Self {
        Self(value)
    }

    pub fn per_m2(value: fun) -> Self {
        Self(value * PER_M2_TO_PER_CM2)
    }

    pub fn to_per_cm2(&self) -> fun {
        self.0
    }

    pub fn to_per_m2(&self) -> fun {
        self.0 / PER_M2_TO_PER_CM2
    }
}

/// A brightness temperature integrated over a velocity interval.
impl Mul<Velocity> for Temperature {
    type Output = IntegratedIntensity;

    fn mul(self, rhs: Velocity) -> IntegratedIntensity {
        IntegratedIntensity(self.0 * rhs.0)
    }
}

impl Mul<Temperature> for Velocity {
    type Output = IntegratedIntensity;

    fn mul(self, rhs: Temperature) -> IntegratedIntensity {
        rhs * self
    }
}
