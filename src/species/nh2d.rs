//! Ortho and para NH2D.
//!
//! The two nuclear-spin symmetry species do not interconvert radiatively, so each
//! has its own table and partition function. Levels from the LAMDA database
//! (p-nh2d.dat, o-nh2d.dat), truncated at the 30 lowest levels of each species.
//! Only the 1_11-1_01 line is tabulated: 110.153594 GHz for para-NH2D and
//! 85.92627 GHz for ortho-NH2D. Levels up to J = 2 carry their `J_KaKc` labels, so
//! the line is selected by its label pair, `1_11-1_01`.

use super::{EnergyLevel, Line, SpeciesTable, TransitionSelector, Transitions};
use crate::{
    constants::fcn,
    units::{Frequency, Rate},
};

/// Index of the upper level of the 1_11-1_01 line in both tables.
pub const UPPER_LEVEL_1_11: usize = 2;

/// Labels of the lowest levels, in the energy order shared by both tables.
const LABELS: [&str; 9] = [
    "0_00", "1_01", "1_11", "1_10", "2_02", "2_12", "2_11", "2_21", "2_20",
];

/// Energy [1/cm] and statistical weight of the para-NH2D levels.
const PARA_LEVELS: [(fcn, fcn); 30] = [
    (0.0, 3.0),
    (11.1018, 9.0),
    (14.7761, 9.0),
    (16.4932, 9.0),
    (32.782, 15.0),
    (35.2555, 15.0),
    (40.4052, 15.0),
    (49.8154, 15.0),
    (50.3348, 15.0),
    (64.2466, 21.0),
    (65.6823, 21.0),
    (75.8736, 21.0),
    (83.0973, 21.0),
    (85.4414, 21.0),
    (104.3779, 21.0),
    (104.4807, 21.0),
    (104.9901, 27.0),
    (105.8248, 27.0),
    (122.2922, 27.0),
    (127.0495, 27.0),
    (133.0003, 27.0),
    (149.5094, 27.0),
    (150.1873, 27.0),
    (154.9357, 33.0),
    (155.5045, 33.0),
    (177.2895, 27.0),
    (177.3063, 27.0),
    (178.7962, 33.0),
    (181.3445, 33.0),
    (192.6501, 33.0),
];

/// Energy [1/cm] and statistical weight of the ortho-NH2D levels.
const ORTHO_LEVELS: [(fcn, fcn); 30] = [
    (0.4059, 9.0),
    (11.5063, 27.0),
    (14.3725, 27.0),
    (16.0925, 27.0),
    (33.1852, 45.0),
    (34.8518, 45.0),
    (40.0099, 45.0),
    (50.2077, 45.0),
    (50.7258, 45.0),
    (64.6502, 63.0),
    (65.2776, 63.0),
    (75.4853, 63.0),
    (83.4858, 63.0),
    (85.8243, 63.0),
    (104.0016, 63.0),
    (104.1048, 63.0),
    (105.3963, 81.0),
    (105.4179, 81.0),
    (121.9107, 81.0),
    (127.4339, 81.0),
    (133.3719, 81.0),
    (149.1397, 81.0),
    (149.8199, 81.0),
    (155.0938, 99.0),
    (155.346, 99.0),
    (177.6453, 81.0),
    (177.662, 81.0),
    (178.4192, 99.0),
    (181.7254, 99.0),
    (193.0089, 99.0),
];

fn table(name: &str, levels: &[(fcn, fcn)], ghz: fcn, einstein_a: fcn) -> SpeciesTable {
    SpeciesTable::new(
        name,
        levels
            .iter()
            .enumerate()
            .map(|(idx, &(wavenumber, degeneracy))| {
                let level = EnergyLevel::from_wavenumber(degeneracy, wavenumber);
                match LABELS.get(idx) {
                    Some(&label) => level.with_label(label),
                    None => level,
                }
            })
            .collect(),
        Transitions::network([Line::new(
            UPPER_LEVEL_1_11,
            UPPER_LEVEL_1_11 - 1,
            Frequency::from_ghz(ghz),
            Rate::per_second(einstein_a),
        )]),
    )
}

/// Selects the 1_11-1_01 line.
pub fn line_1_11_1_01() -> TransitionSelector {
    TransitionSelector::labels("1_11", "1_01")
}

/// Builds the para-NH2D table.
pub fn para_table() -> SpeciesTable {
    table("p-nh2d", &PARA_LEVELS, 110.153594, 0.165e-4)
}

/// Builds the ortho-NH2D table.
pub fn ortho_table() -> SpeciesTable {
    table("o-nh2d", &ORTHO_LEVELS, 85.92627, 0.782e-5)
}
