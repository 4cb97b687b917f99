//! H13CO+ rotational ladder.
//!
//! Levels and lines from the LAMDA database (h13co+@xpol.dat). The table holds the
//! 31 lowest rotational levels (J = 0..30) and the 30 lines between them.
//!
//! Every tabulated line can be selected, including J = 30-29. Selecting J_up = 30
//! therefore gives a finite column density. Earlier column density codes for this
//! species returned NaN for J_up = 30 even though the line is tabulated.

use super::{ladder_from_wavenumbers, SpeciesTable};
use crate::constants::fcn;

/// Energy [1/cm] and statistical weight of levels J = 0..30.
const LEVELS: [(fcn, fcn); 31] = [
    (0.0, 1.0),
    (2.8938, 3.0),
    (8.6814, 5.0),
    (17.3626, 7.0),
    (28.9372, 9.0),
    (43.405, 11.0),
    (60.7656, 13.0),
    (81.0188, 15.0),
    (104.164, 17.0),
    (130.2008, 19.0),
    (159.1286, 21.0),
    (190.9467, 23.0),
    (225.6545, 25.0),
    (263.2512, 27.0),
    (303.736, 29.0),
    (347.108, 31.0),
    (393.3663, 33.0),
    (442.5099, 35.0),
    (494.5377, 37.0),
    (549.4486, 39.0),
    (607.2413, 41.0),
    (667.9147, 43.0),
    (731.4674, 45.0),
    (797.8981, 47.0),
    (867.2052, 49.0),
    (939.3873, 51.0),
    (1014.4428, 53.0),
    (1092.3701, 55.0),
    (1173.1675, 57.0),
    (1256.8332, 59.0),
    (1343.3655, 61.0),
];

/// Frequency [GHz] and Einstein A-coefficient [1/s] of lines J -> J-1 for J = 1..30.
const LINES: [(fcn, fcn); 30] = [
    (86.7542884, 3.8534e-05),
    (173.5066953, 3.6987e-04),
    (260.255339, 1.3374e-03),
    (346.9983381, 3.2879e-03),
    (433.733811, 6.5667e-03),
    (520.4598762, 1.1520e-02),
    (607.174652, 1.8492e-02),
    (693.876257, 2.7831e-02),
    (780.5628096, 3.9885e-02),
    (867.2324283, 5.4985e-02),
    (953.8832314, 7.3483e-02),
    (1040.5133375, 9.5725e-02),
    (1127.120865, 1.2205e-01),
    (1213.7039324, 1.5282e-01),
    (1300.260658, 1.8830e-01),
    (1386.7891604, 2.2894e-01),
    (1473.287558, 2.7496e-01),
    (1559.7539693, 3.2678e-01),
    (1646.1865126, 3.8472e-01),
    (1732.5833065, 4.4914e-01),
    (1818.9424694, 5.2030e-01),
    (1905.2621198, 5.9864e-01),
    (1991.540376, 6.8427e-01),
    (2077.7753566, 7.7774e-01),
    (2163.96518, 8.7941e-01),
    (2250.1079647, 9.8946e-01),
    (2336.201829, 1.1080e+00),
    (2422.2448915, 1.2358e+00),
    (2508.2352706, 1.3731e+00),
    (2594.1710848, 1.5199e+00),
];

/// Builds the H13CO+ table.
pub fn table() -> SpeciesTable {
    ladder_from_wavenumbers("h13co+", &LEVELS, &LINES)
}
