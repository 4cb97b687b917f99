//! Column densities from integrated line intensities in LTE.

use crate::{
    constants::{fcn, CLIGHT, HPLANCK, H_OVER_K, KBOLTZMANN, PI, T_BACKGROUND},
    error::{ColumnError, Result},
    radiative::{gaussian_integrated_optical_depth, planck_temperature},
    species::{Line, SpeciesTable, TransitionSelector},
    units::{ColumnDensity, IntegratedIntensity, Temperature, Velocity},
};
use log::warn;
use ndarray::{Array, ArrayView, Dimension, Zip};

/// Computes column densities for the lines of one species table.
#[derive(Clone, Copy, Debug)]
pub struct ColumnDensityCalculator<'a> {
    table: &'a SpeciesTable,
    background_temperature: Temperature,
}

impl<'a> ColumnDensityCalculator<'a> {
    /// Creates a calculator for the given table, assuming the cosmic microwave
    /// background as background radiation.
    pub fn new(table: &'a SpeciesTable) -> Self {
        Self {
            table,
            background_temperature: Temperature::from_kelvin(T_BACKGROUND),
        }
    }

    pub fn with_background_temperature(mut self, background_temperature: Temperature) -> Self {
        self.background_temperature = background_temperature;
        self
    }

    pub fn table(&self) -> &'a SpeciesTable {
        self.table
    }

    pub fn background_temperature(&self) -> Temperature {
        self.background_temperature
    }

    fn resolve(&self, selector: &TransitionSelector) -> Option<&'a Line> {
        let line = self.table.resolve(selector);
        if line.is_none() {
            warn!(
                "Transition {} is not tabulated for {}",
                selector,
                self.table.name()
            );
        }
        line
    }

    /// Computes the total column density from the integrated intensity of the
    /// selected line, assuming the line is optically thin and all levels are
    /// populated at the given excitation temperature:
    ///
    /// N = 8*pi*nu^3/(c^3*A_ul) * Q(T_ex)/(g_u*exp(-E_u/T_ex)) / (exp(h*nu/(k_B*T_ex)) - 1)
    ///     * int T dv / (J_nu(T_ex) - J_nu(T_bg))
    ///
    /// Returns NaN if the line is not tabulated for the species.
    pub fn column_density_thin(
        &self,
        selector: &TransitionSelector,
        excitation_temperature: Temperature,
        integrated_intensity: IntegratedIntensity,
    ) -> ColumnDensity {
        self.resolve(selector).map_or(ColumnDensity::nan(), |line| {
            self.thin_column_for_line(line, excitation_temperature, integrated_intensity)
        })
    }

    /// Computes the column density of a line with a Gaussian profile of the given
    /// peak optical depth and velocity dispersion, by treating sqrt(2*pi)*tau*sigma_v
    /// (times 1 K) as the integrated intensity of an optically thin line.
    pub fn column_density_thick(
        &self,
        selector: &TransitionSelector,
        excitation_temperature: Temperature,
        velocity_dispersion: Velocity,
        optical_depth: fcn,
    ) -> ColumnDensity {
        let integrated_intensity = Temperature::from_kelvin(1.0)
            * gaussian_integrated_optical_depth(optical_depth, velocity_dispersion);
        self.column_density_thin(selector, excitation_temperature, integrated_intensity)
    }

    /// Computes the column density directly from the velocity-integrated optical
    /// depth sqrt(2*pi)*tau*sigma_v of a Gaussian line:
    ///
    /// N = 8*pi*nu^3/(c^3*A_ul) * Q(T_ex)/(g_u*exp(-E_u/T_ex)) / (exp(h*nu/(k_B*T_ex)) - 1)
    ///     * sqrt(2*pi)*tau*sigma_v
    pub fn column_density_from_optical_depth(
        &self,
        selector: &TransitionSelector,
        excitation_temperature: Temperature,
        velocity_dispersion: Velocity,
        optical_depth: fcn,
    ) -> ColumnDensity {
        self.resolve(selector).map_or(ColumnDensity::nan(), |line| {
            let integrated_depth =
                gaussian_integrated_optical_depth(optical_depth, velocity_dispersion);
            ColumnDensity::per_cm2(
                self.upper_level_factor(line, excitation_temperature)
                    * integrated_depth.to_cm_per_sec(),
            )
        })
    }

    /// Computes the column density of the upper level divided by its degeneracy,
    /// N_u/g_u = 8*pi*k_B*nu^2/(h*c^3*A_ul*g_u) * int T dv, for an optically thin line.
    ///
    /// Returns NaN if the line is not tabulated for the species.
    pub fn line_ratio_quantity(
        &self,
        selector: &TransitionSelector,
        integrated_intensity: IntegratedIntensity,
    ) -> ColumnDensity {
        self.line_ratio_quantity_with_energy(selector, integrated_intensity)
            .0
    }

    /// Like [`line_ratio_quantity`](Self::line_ratio_quantity), but also returns the
    /// energy of the upper level.
    pub fn line_ratio_quantity_with_energy(
        &self,
        selector: &TransitionSelector,
        integrated_intensity: IntegratedIntensity,
    ) -> (ColumnDensity, Temperature) {
        match self.resolve(selector) {
            Some(line) => {
                let upper = &self.table.levels()[line.upper()];
                let frequency = line.frequency().to_hz();
                let per_weight = 8.0 * PI * KBOLTZMANN * frequency * frequency
                    / (HPLANCK
                        * CLIGHT
                        * CLIGHT
                        * CLIGHT
                        * line.einstein_a().to_per_second()
                        * upper.degeneracy())
                    * integrated_intensity.to_kelvin_cm_per_sec();
                (ColumnDensity::per_cm2(per_weight), upper.energy())
            }
            None => (ColumnDensity::nan(), Temperature::nan()),
        }
    }

    /// Computes the points (E_u, ln(N_u/g_u [cm^-2])) of a rotational diagram for
    /// the given transitions and their integrated intensities.
    ///
    /// Transitions that are not tabulated are left out.
    pub fn rotational_diagram<'s, I>(&self, measurements: I) -> Vec<(Temperature, fcn)>
    where
        I: IntoIterator<Item = (&'s TransitionSelector, IntegratedIntensity)>,
    {
        measurements
            .into_iter()
            .filter_map(|(selector, integrated_intensity)| {
                let (per_weight, energy) =
                    self.line_ratio_quantity_with_energy(selector, integrated_intensity);
                (!per_weight.is_nan()).then(|| (energy, fcn::ln(per_weight.to_per_cm2())))
            })
            .collect()
    }

    /// Computes the optically thin column density of the selected line for every
    /// pixel of a map of excitation temperatures and integrated intensities.
    ///
    /// The two maps must have the same shape. If the line is not tabulated, every
    /// pixel is NaN.
    pub fn column_density_thin_map<D: Dimension>(
        &self,
        selector: &TransitionSelector,
        excitation_temperatures: ArrayView<Temperature, D>,
        integrated_intensities: ArrayView<IntegratedIntensity, D>,
    ) -> Result<Array<ColumnDensity, D>> {
        if excitation_temperatures.shape() != integrated_intensities.shape() {
            return Err(ColumnError::InvalidInput(format!(
                "Excitation temperature map has shape {:?} but integrated intensity map has shape {:?}",
                excitation_temperatures.shape(),
                integrated_intensities.shape()
            )));
        }
        let line = self.resolve(selector);
        if line.is_some() {
            self.table
                .warn_rejected_excitations(excitation_temperatures.iter());
        }
        Ok(Zip::from(&excitation_temperatures)
            .and(&integrated_intensities)
            .par_map_collect(|&excitation_temperature, &integrated_intensity| {
                line.map_or(ColumnDensity::nan(), |line| {
                    self.thin_column_for_line(line, excitation_temperature, integrated_intensity)
                })
            }))
    }

    fn thin_column_for_line(
        &self,
        line: &Line,
        excitation_temperature: Temperature,
        integrated_intensity: IntegratedIntensity,
    ) -> ColumnDensity {
        let contrast = planck_temperature(excitation_temperature, line.frequency())
            - planck_temperature(self.background_temperature, line.frequency());
        let velocity_integral = integrated_intensity.to_kelvin_cm_per_sec() / contrast.to_kelvin();
        ColumnDensity::per_cm2(
            self.upper_level_factor(line, excitation_temperature) * velocity_integral,
        )
    }

    /// Computes 8*pi*nu^3/(c^3*A_ul) * Q/(g_u*exp(-E_u/T_ex)) / (exp(h*nu/(k_B*T_ex)) - 1),
    /// the column density per unit velocity-integrated optical depth [1/cm^3 s].
    fn upper_level_factor(&self, line: &Line, excitation_temperature: Temperature) -> fcn {
        let frequency = line.frequency().to_hz();
        let wavelength_factor = frequency / CLIGHT;
        8.0 * PI * wavelength_factor * wavelength_factor * wavelength_factor
            / line.einstein_a().to_per_second()
            * self.table.partition_function(excitation_temperature)
            / self.table.level_occupancy(line.upper(), excitation_temperature)
            / fcn::exp_m1(H_OVER_K * frequency / excitation_temperature.to_kelvin())
    }
}
