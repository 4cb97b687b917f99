//! DCO+ rotational ladder.
//!
//! Levels and lines from the LAMDA database (dco+@xpol.dat). The table holds the
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
    (2.403, 3.0),
    (7.2089, 5.0),
    (14.4176, 7.0),
    (24.0291, 9.0),
    (36.043, 11.0),
    (50.4593, 13.0),
    (67.2776, 15.0),
    (86.4976, 17.0),
    (108.119, 19.0),
    (132.1414, 21.0),
    (158.5642, 23.0),
    (187.3871, 25.0),
    (218.6094, 27.0),
    (252.2307, 29.0),
    (288.2502, 31.0),
    (326.6673, 33.0),
    (367.4813, 35.0),
    (410.6915, 37.0),
    (456.2969, 39.0),
    (504.2968, 41.0),
    (554.6903, 43.0),
    (607.4764, 45.0),
    (662.6541, 47.0),
    (720.2224, 49.0),
    (780.1803, 51.0),
    (842.5266, 53.0),
    (907.2602, 55.0),
    (974.3798, 57.0),
    (1043.8842, 59.0),
    (1115.772, 61.0),
];

/// Frequency [GHz] and Einstein A-coefficient [1/s] of lines J -> J-1 for J = 1..30.
const LINES: [(fcn, fcn); 30] = [
    (72.039354, 2.2247e-05),
    (144.077319, 2.1358e-04),
    (216.1126045, 7.7217e-04),
    (288.143911, 1.8976e-03),
    (360.169881, 3.7892e-03),
    (432.189033, 6.6460e-03),
    (504.2002, 1.0667e-02),
    (576.2019724, 1.6045e-02),
    (648.1930137, 2.2986e-02),
    (720.1719825, 3.1675e-02),
    (792.1375375, 4.2311e-02),
    (864.0883373, 5.5091e-02),
    (936.0230404, 7.0203e-02),
    (1007.9403056, 8.7829e-02),
    (1079.8387915, 1.0816e-01),
    (1151.7171566, 1.3141e-01),
    (1223.5740595, 1.5772e-01),
    (1295.408159, 1.8731e-01),
    (1367.2181135, 2.2036e-01),
    (1439.0025818, 2.5705e-01),
    (1510.7602224, 2.9754e-01),
    (1582.4896939, 3.4206e-01),
    (1654.1896551, 3.9074e-01),
    (1725.8587644, 4.4372e-01),
    (1797.4956805, 5.0127e-01),
    (1869.099062, 5.6348e-01),
    (1940.6675676, 6.3071e-01),
    (2012.1998558, 7.0278e-01),
    (2083.6945853, 7.8028e-01),
    (2155.1504147, 8.6303e-01),
];

/// Builds the DCO+ table.
pub fn table() -> SpeciesTable {
    ladder_from_wavenumbers("dco+", &LEVELS, &LINES)
}
