//! Quantities whose dimension is only known at runtime.

use super::{fun, Dimension};
use crate::{
    constants::{GHZ_TO_HZ, KHZ_TO_HZ, KM_TO_CM, MHZ_TO_HZ, M_TO_CM, PER_M2_TO_PER_CM2},
    error::{ColumnError, Result},
};
use lazy_static::lazy_static;
use regex::Regex;
use std::{fmt, str::FromStr};

/// Units recognized when parsing quantities from text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    Dimensionless,
    Kelvin,
    Hertz,
    Kilohertz,
    Megahertz,
    Gigahertz,
    PerSecond,
    Second,
    Centimeter,
    Meter,
    Kilometer,
    CentimeterPerSecond,
    MeterPerSecond,
    KilometerPerSecond,
    KelvinCentimeterPerSecond,
    KelvinKilometerPerSecond,
    PerSquareCentimeter,
    PerSquareMeter,
}

impl Unit {
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Dimensionless => Dimension::Dimensionless,
            Self::Kelvin => Dimension::Temperature,
            Self::Hertz | Self::Kilohertz | Self::Megahertz | Self::Gigahertz => {
                Dimension::Frequency
            }
            Self::PerSecond => Dimension::Rate,
            Self::Second => Dimension::Time,
            Self::Centimeter | Self::Meter | Self::Kilometer => Dimension::Length,
            Self::CentimeterPerSecond | Self::MeterPerSecond | Self::KilometerPerSecond => {
                Dimension::Velocity
            }
            Self::KelvinCentimeterPerSecond | Self::KelvinKilometerPerSecond => {
                Dimension::IntegratedIntensity
            }
            Self::PerSquareCentimeter | Self::PerSquareMeter => Dimension::ColumnDensity,
        }
    }

    /// Factor converting a value in this unit to the base unit of its dimension.
    pub fn to_base_factor(&self) -> fun {
        match self {
            Self::Kilohertz => KHZ_TO_HZ,
            Self::Megahertz => MHZ_TO_HZ,
            Self::Gigahertz => GHZ_TO_HZ,
            Self::Meter | Self::MeterPerSecond => M_TO_CM,
            Self::Kilometer | Self::KilometerPerSecond | Self::KelvinKilometerPerSecond => {
                KM_TO_CM
            }
            Self::PerSquareMeter => PER_M2_TO_PER_CM2,
            _ => 1.0,
        }
    }

    /// The unit in which quantities of the given dimension are stored.
    pub fn base_unit_of(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Dimensionless => Self::Dimensionless,
            Dimension::Temperature => Self::Kelvin,
            Dimension::Frequency => Self::Hertz,
            Dimension::Rate => Self::PerSecond,
            Dimension::Time => Self::Second,
            Dimension::Length => Self::Centimeter,
            Dimension::Velocity => Self::CentimeterPerSecond,
            Dimension::IntegratedIntensity => Self::KelvinCentimeterPerSecond,
            Dimension::ColumnDensity => Self::PerSquareCentimeter,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Dimensionless => "",
            Self::Kelvin => "K",
            Self::Hertz => "Hz",
            Self::Kilohertz => "kHz",
            Self::Megahertz => "MHz",
            Self::Gigahertz => "GHz",
            Self::PerSecond => "1/s",
            Self::Second => "s",
            Self::Centimeter => "cm",
            Self::Meter => "m",
            Self::Kilometer => "km",
            Self::CentimeterPerSecond => "cm/s",
            Self::MeterPerSecond => "m/s",
            Self::KilometerPerSecond => "km/s",
            Self::KelvinCentimeterPerSecond => "K cm/s",
            Self::KelvinKilometerPerSecond => "K km/s",
            Self::PerSquareCentimeter => "cm^-2",
            Self::PerSquareMeter => "m^-2",
        }
    }
}

impl FromStr for Unit {
    type Err = ColumnError;

    fn from_str(symbol: &str) -> Result<Self> {
        let normalized: String = symbol
            .split(|c: char| c.is_whitespace() || c == '*' || c == '.')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        match normalized.as_str() {
            "" => Ok(Self::Dimensionless),
            "K" => Ok(Self::Kelvin),
            "Hz" => Ok(Self::Hertz),
            "kHz" => Ok(Self::Kilohertz),
            "MHz" => Ok(Self::Megahertz),
            "GHz" => Ok(Self::Gigahertz),
            "1/s" | "s^-1" | "s-1" => Ok(Self::PerSecond),
            "s" => Ok(Self::Second),
            "cm" => Ok(Self::Centimeter),
            "m" => Ok(Self::Meter),
            "km" => Ok(Self::Kilometer),
            "cm/s" | "cm s^-1" | "cm s-1" => Ok(Self::CentimeterPerSecond),
            "m/s" | "m s^-1" | "m s-1" => Ok(Self::MeterPerSecond),
            "km/s" | "km s^-1" | "km s-1" => Ok(Self::KilometerPerSecond),
            "K cm/s" | "K cm s^-1" | "K cm s-1" => Ok(Self::KelvinCentimeterPerSecond),
            "K km/s" | "K km s^-1" | "K km s-1" => Ok(Self::KelvinKilometerPerSecond),
            "cm^-2" | "cm-2" | "1/cm^2" | "1/cm2" => Ok(Self::PerSquareCentimeter),
            "m^-2" | "m-2" | "1/m^2" | "1/m2" => Ok(Self::PerSquareMeter),
            _ => Err(ColumnError::InvalidInput(format!(
                "Unit {} not supported",
                symbol
            ))),
        }
    }
}

/// A value together with a unit, as read from user input or a data file.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity {
    value: fun,
    unit: Unit,
}

impl Quantity {
    pub fn new(value: fun, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn from_base_units(value: fun, dimension: Dimension) -> Self {
        Self::new(value, Unit::base_unit_of(dimension))
    }

    pub fn value(&self) -> fun {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Returns the value converted to the base unit of the given dimension.
    ///
    /// Fails with [`ColumnError::UnitMismatch`] if the quantity has a different dimension.
    pub fn value_in_base_units(&self, expected: Dimension) -> Result<fun> {
        let found = self.dimension();
        if found == expected {
            Ok(self.value * self.unit.to_base_factor())
        } else {
            Err(ColumnError::UnitMismatch { expected, found })
        }
    }

    /// Converts the quantity to another unit of the same dimension.
    pub fn to(&self, unit: Unit) -> Result<Self> {
        let base_value = self.value_in_base_units(unit.dimension())?;
        Ok(Self::new(base_value / unit.to_base_factor(), unit))
    }
}

lazy_static! {
    static ref QUANTITY_REGEX: Regex =
        Regex::new(r"^\s*([-+]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][-+]?[0-9]+)?|[nN]a[nN])\s*(.*?)\s*$")
            .unwrap();
}

impl FromStr for Quantity {
    type Err = ColumnError;

    fn from_str(text: &str) -> Result<Self> {
        let groups = QUANTITY_REGEX.captures(text).ok_or_else(|| {
            ColumnError::InvalidInput(format!("Could not interpret {} as a quantity", text))
        })?;
        let value = groups
            .get(1)
            .expect("Missing capture group")
            .as_str()
            .parse::<fun>()
            .map_err(|err| ColumnError::InvalidInput(format!("{}: {}", text, err)))?;
        let unit = groups.get(2).map_or("", |unit| unit.as_str()).parse()?;
        Ok(Self::new(value, unit))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Dimensionless => write!(f, "{}", self.value),
            unit => write!(f, "{} {}", self.value, unit.symbol()),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::units::{Frequency, IntegratedIntensity, Temperature, Velocity};
    use approx::assert_relative_eq;

    #[test]
    fn quantity_parsing_works() {
        let quantity: Quantity = "110.153594 GHz".parse().unwrap();
        assert_eq!(quantity.unit(), Unit::Gigahertz);
        assert_relative_eq!(quantity.value(), 110.153594);

        let quantity: Quantity = "1.0 K*km/s".parse().unwrap();
        assert_eq!(quantity.unit(), Unit::KelvinKilometerPerSecond);

        let quantity: Quantity = "-1.02E-07 cm^-2".parse().unwrap();
        assert_eq!(quantity.unit(), Unit::PerSquareCentimeter);
        assert_relative_eq!(quantity.value(), -1.02e-7);

        let quantity: Quantity = "2".parse().unwrap();
        assert_eq!(quantity.dimension(), Dimension::Dimensionless);

        assert!("five K".parse::<Quantity>().is_err());
        assert!("5 furlongs".parse::<Quantity>().is_err());
    }

    #[test]
    fn compatible_units_convert_transparently() {
        let in_mhz = Quantity::new(109_782.1734, Unit::Megahertz);
        let in_ghz = in_mhz.to(Unit::Gigahertz).unwrap();
        assert_relative_eq!(in_ghz.value(), 109.782_173_4, max_relative = 1e-14);
        assert_relative_eq!(
            Frequency::try_from(in_mhz).unwrap().to_hz(),
            Frequency::try_from(in_ghz).unwrap().to_hz(),
            max_relative = 1e-14
        );

        let velocity = Velocity::try_from(Quantity::new(0.2, Unit::KilometerPerSecond)).unwrap();
        assert_relative_eq!(velocity.to_cm_per_sec(), 2e4);

        let intensity: IntegratedIntensity = "1000 K cm/s".parse::<Quantity>().unwrap().try_into().unwrap();
        assert_relative_eq!(intensity.to_kelvin_km_per_sec(), 0.01);
    }

    #[test]
    fn mismatched_dimension_is_rejected() {
        let length = Quantity::new(5.0, Unit::Meter);
        match Temperature::try_from(length) {
            Err(ColumnError::UnitMismatch { expected, found }) => {
                assert_eq!(expected, Dimension::Temperature);
                assert_eq!(found, Dimension::Length);
            }
            other => panic!("Expected unit mismatch, got {:?}", other),
        }
        assert!(Quantity::new(100.0, Unit::Kelvin).to(Unit::Gigahertz).is_err());
    }

    #[test]
    fn typed_quantities_round_trip_through_dynamic_ones() {
        let temperature = Temperature::from_kelvin(5.0);
        let quantity = Quantity::from(temperature);
        assert_eq!(quantity.to_string(), "5 K");
        assert_eq!(Temperature::try_from(quantity).unwrap(), temperature);
    }
}
