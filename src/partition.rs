//! Level populations and partition functions in local thermodynamic equilibrium.

use crate::{
    constants::fcn,
    species::{EnergyLevel, LevelRef, SpeciesTable},
    units::Temperature,
};
use log::{debug, warn};
use ndarray::{Array, ArrayView, Dimension, Zip};

/// Computes the Boltzmann factor g*exp(-E/(k_B*T)) of a level.
fn boltzmann_weight(level: &EnergyLevel, excitation_temperature: Temperature) -> fcn {
    level.degeneracy() * fcn::exp(-(level.energy() / excitation_temperature))
}

impl SpeciesTable {
    /// Computes the relative occupancy g*exp(-E/(k_B*T_ex)) of the given level.
    ///
    /// Returns NaN if the level is not in the table.
    pub fn level_occupancy<'a, L: Into<LevelRef<'a>>>(
        &self,
        level: L,
        excitation_temperature: Temperature,
    ) -> fcn {
        self.level(level.into())
            .map_or(fcn::NAN, |level| boltzmann_weight(level, excitation_temperature))
    }

    /// Computes the occupancy of each of the given levels, in order.
    pub fn level_occupancies<'a, I>(&self, levels: I, excitation_temperature: Temperature) -> Vec<fcn>
    where
        I: IntoIterator,
        I::Item: Into<LevelRef<'a>>,
    {
        levels
            .into_iter()
            .map(|level| self.level_occupancy(level, excitation_temperature))
            .collect()
    }

    /// Sums the occupancies of all tabulated levels at the given excitation
    /// temperature.
    ///
    /// If the table validates excitation temperatures, a temperature that is not
    /// finite and positive gives NaN.
    pub fn partition_function(&self, excitation_temperature: Temperature) -> fcn {
        if self.rejects_excitation(excitation_temperature) {
            debug!(
                "Rejected excitation temperature {} K for {}",
                excitation_temperature.to_kelvin(),
                self.name()
            );
            return fcn::NAN;
        }
        self.levels()
            .iter()
            .map(|level| boltzmann_weight(level, excitation_temperature))
            .sum()
    }

    /// Evaluates the partition function for every temperature in the given array.
    pub fn partition_function_array<D: Dimension>(
        &self,
        excitation_temperatures: ArrayView<Temperature, D>,
    ) -> Array<fcn, D> {
        self.warn_rejected_excitations(excitation_temperatures.iter());
        Zip::from(&excitation_temperatures)
            .par_map_collect(|&temperature| self.partition_function(temperature))
    }

    fn rejects_excitation(&self, excitation_temperature: Temperature) -> bool {
        self.validates_excitation()
            && !(excitation_temperature.is_finite() && excitation_temperature.to_kelvin() > 0.0)
    }

    /// Counts the excitation temperatures for which the partition function is NaN
    /// because they fail validation.
    pub(crate) fn rejected_excitation_count<'t, I>(&self, excitation_temperatures: I) -> usize
    where
        I: IntoIterator<Item = &'t Temperature>,
    {
        excitation_temperatures
            .into_iter()
            .filter(|&&temperature| self.rejects_excitation(temperature))
            .count()
    }

    /// Logs a single warning summarizing the rejected excitation temperatures of a
    /// batch evaluation.
    pub(crate) fn warn_rejected_excitations<'t, I>(&self, excitation_temperatures: I)
    where
        I: IntoIterator<Item = &'t Temperature>,
    {
        let count = self.rejected_excitation_count(excitation_temperatures);
        if count > 0 {
            warn!(
                "Rejected {} excitation temperatures for {}",
                count,
                self.name()
            );
        }
    }
}
