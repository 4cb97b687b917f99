//! The `molecular_columns` crate computes column densities and partition functions
//! of interstellar molecules from observed radio line intensities, assuming local
//! thermodynamic equilibrium.
pub mod constants;
pub mod error;
pub mod units;
pub mod radiative;
pub mod species;
pub mod partition;
pub mod column;
pub mod empirical;

pub use column::ColumnDensityCalculator;
pub use error::{ColumnError, Result};
pub use species::{Species, SpeciesTable, TransitionSelector};
