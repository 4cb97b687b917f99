//! Closed-form column density calibrations from the literature.

use crate::{
    constants::fcn,
    units::{ColumnDensity, IntegratedIntensity, Temperature},
};

/// Computes the C18O column density from the integrated intensity of the J=3-2 line
/// with the relation of Curtis et al. (2010, MNRAS 408, 1516):
///
/// N = 5e12 * T_ex * exp(31.6/T_ex) * int T dv   [cm^-2, with T_ex in K and
/// int T dv in K km/s]
pub fn empirical_column_fit(
    excitation_temperature: Temperature,
    integrated_intensity: IntegratedIntensity,
) -> ColumnDensity {
    let temperature = excitation_temperature.to_kelvin();
    ColumnDensity::per_cm2(
        5e12 * temperature
            * fcn::exp(31.6 / temperature)
            * integrated_intensity.to_kelvin_km_per_sec(),
    )
}

#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn curtis_fit_is_correct() {
        let intensity = IntegratedIntensity::from_kelvin_km_per_sec(1.0);
        assert_relative_eq!(
            empirical_column_fit(Temperature::from_kelvin(10.0), intensity).to_per_cm2(),
            1.178_529_796_453_406_2e15,
            max_relative = 1e-10
        );
        assert_relative_eq!(
            empirical_column_fit(Temperature::from_kelvin(31.6), intensity).to_per_cm2(),
            4.294_885_288_965_291e14,
            max_relative = 1e-10
        );
    }

    #[test]
    fn curtis_fit_has_minimum_at_energy_scale() {
        let intensity = IntegratedIntensity::from_kelvin_km_per_sec(0.4);
        let at = |kelvin| empirical_column_fit(Temperature::from_kelvin(kelvin), intensity);
        assert!(at(31.6) < at(25.0));
        assert!(at(31.6) < at(40.0));
    }
}
