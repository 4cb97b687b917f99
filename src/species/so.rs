//! SO fine-structure levels.
//!
//! SO is a ³Σ⁻ radical, so its levels are labeled `N_J` and its lines form a
//! network rather than a ladder; lines are selected by their upper and lower labels
//! (e.g. `2_1-1_1`). Levels and lines from the LAMDA database (so@lique.dat), with
//! the 91 lowest levels and the 298 lines between them.

use super::{EnergyLevel, Line, SpeciesTable, Transitions};
use crate::{
    constants::fcn,
    units::{Frequency, Rate},
};
use std::collections::HashMap;

/// Label, energy [1/cm] and statistical weight of each level, by increasing energy.
const LEVELS: [(&str, fcn, fcn); 91] = [
    ("1_0", 0.0000, 1.0),
    ("0_1", 1.0007, 3.0),
    ("1_2", 3.0999, 5.0),
    ("2_3", 6.4122, 7.0),
    ("1_1", 10.5520, 3.0),
    ("2_1", 10.9871, 3.0),
    ("3_4", 11.0213, 9.0),
    ("2_2", 13.4238, 5.0),
    ("3_2", 14.6314, 5.0),
    ("4_5", 16.9790, 11.0),
    ("3_3", 17.7314, 7.0),
    ("4_3", 19.9341, 7.0),
    ("4_4", 23.4748, 9.0),
    ("5_6", 24.3157, 13.0),
    ("5_4", 26.8114, 9.0),
    ("5_5", 30.6538, 11.0),
    ("6_7", 33.0499, 15.0),
    ("6_5", 35.2114, 11.0),
    ("6_6", 39.2682, 13.0),
    ("7_8", 43.1928, 17.0),
    ("7_6", 45.1032, 13.0),
    ("7_7", 49.3181, 15.0),
    ("8_9", 54.7518, 19.0),
    ("8_7", 56.4683, 15.0),
    ("8_8", 60.8030, 17.0),
    ("9_10", 67.7314, 21.0),
    ("9_8", 69.2947, 17.0),
    ("9_9", 73.7229, 19.0),
    ("10_11", 82.1350, 23.0),
    ("10_9", 83.5749, 19.0),
    ("10_10", 88.0775, 21.0),
    ("11_12", 97.9646, 25.0),
    ("11_10", 99.3037, 21.0),
    ("11_11", 103.8665, 23.0),
    ("12_13", 115.2217, 27.0),
    ("12_11", 116.4774, 23.0),
    ("12_12", 121.0896, 25.0),
    ("13_14", 133.9073, 29.0),
    ("13_12", 135.0932, 25.0),
    ("13_13", 139.7465, 27.0),
    ("14_15", 154.0219, 31.0),
    ("14_13", 155.1490, 27.0),
    ("14_14", 159.8369, 29.0),
    ("15_16", 175.5660, 33.0),
    ("15_14", 176.6432, 29.0),
    ("15_15", 181.3602, 31.0),
    ("16_17", 198.5397, 35.0),
    ("16_15", 199.5743, 31.0),
    ("16_16", 204.3163, 33.0),
    ("17_18", 222.9432, 37.0),
    ("17_16", 223.9412, 33.0),
    ("17_17", 228.7045, 35.0),
    ("18_19", 248.7762, 39.0),
    ("18_17", 249.7428, 35.0),
    ("18_18", 254.5245, 37.0),
    ("19_20", 276.0386, 41.0),
    ("19_18", 276.9782, 37.0),
    ("19_19", 281.7758, 39.0),
    ("20_21", 304.7302, 43.0),
    ("20_19", 305.6464, 39.0),
    ("20_20", 310.4578, 41.0),
    ("21_22", 334.8506, 45.0),
    ("21_20", 335.7466, 41.0),
    ("21_21", 340.5700, 43.0),
    ("22_23", 366.3994, 47.0),
    ("22_21", 367.2780, 43.0),
    ("22_22", 372.1119, 45.0),
    ("23_24", 399.3762, 49.0),
    ("23_22", 400.2398, 45.0),
    ("23_23", 405.0827, 47.0),
    ("24_25", 433.7804, 51.0),
    ("24_23", 434.6312, 47.0),
    ("24_24", 439.4820, 49.0),
    ("25_26", 469.6115, 53.0),
    ("25_24", 470.4514, 49.0),
    ("25_25", 475.3091, 51.0),
    ("26_27", 506.8689, 55.0),
    ("26_25", 507.6996, 51.0),
    ("26_26", 512.5632, 53.0),
    ("27_28", 545.5520, 57.0),
    ("27_26", 546.3750, 53.0),
    ("27_27", 551.2437, 55.0),
    ("28_29", 585.6602, 59.0),
    ("28_27", 586.4767, 55.0),
    ("28_28", 591.3499, 57.0),
    ("29_30", 627.1926, 61.0),
    ("29_28", 628.0040, 57.0),
    ("29_29", 632.8809, 59.0),
    ("30_31", 670.1486, 63.0),
    ("30_29", 670.9559, 59.0),
    ("30_30", 675.8360, 61.0),
];

/// Upper label, lower label, frequency [GHz] and Einstein A-coefficient [1/s].
const LINES: [(&str, &str, fcn, fcn); 298] = [
    ("0_1", "1_0", 30.0015800, 2.361e-07),
    ("1_2", "0_1", 62.9318000, 2.646e-06),
    ("2_3", "1_2", 99.2998700, 1.125e-05),
    ("1_1", "1_0", 316.3416930, 8.468e-08),
    ("1_1", "0_1", 286.3401520, 1.403e-05),
    ("2_1", "1_0", 329.3854770, 1.423e-05),
    ("2_1", "0_1", 299.3839573, 1.203e-07),
    ("2_1", "1_2", 236.4522934, 1.417e-06),
    ("2_1", "1_1", 13.0438070, 2.911e-08),
    ("3_4", "2_3", 138.1786000, 3.165e-05),
    ("2_2", "0_1", 372.4341073, 8.575e-08),
    ("2_2", "1_2", 309.5024440, 1.419e-05),
    ("2_2", "2_3", 210.2025571, 2.843e-08),
    ("2_2", "1_1", 86.0939500, 5.250e-06),
    ("3_2", "0_1", 408.6361383, 1.583e-05),
    ("3_2", "1_2", 345.7044744, 1.390e-07),
    ("3_2", "2_3", 246.4045881, 1.007e-06),
    ("3_2", "2_1", 109.2522200, 1.080e-05),
    ("3_2", "2_2", 36.2020220, 1.942e-07),
    ("4_5", "3_4", 178.6054030, 7.021e-05),
    ("3_3", "1_2", 438.6413448, 8.999e-08),
    ("3_3", "2_3", 339.3414590, 1.455e-05),
    ("3_3", "3_4", 201.1628047, 2.751e-08),
    ("3_3", "2_2", 129.1389230, 2.250e-05),
    ("4_3", "1_2", 504.6762856, 1.595e-05),
    ("4_3", "2_3", 405.3763993, 1.629e-07),
    ("4_3", "3_4", 267.1977455, 7.117e-07),
    ("4_3", "3_2", 158.9718112, 4.233e-05),
    ("4_3", "3_3", 66.0349400, 5.509e-07),
    ("4_4", "2_3", 511.5228619, 9.537e-08),
    ("4_4", "3_4", 373.3442081, 1.508e-05),
    ("4_4", "4_5", 194.7388438, 2.632e-08),
    ("4_4", "3_3", 172.1814034, 5.833e-05),
    ("5_6", "4_5", 219.9494420, 1.335e-04),
    ("5_4", "2_3", 611.5524120, 1.507e-05),
    ("5_4", "3_4", 473.3737582, 1.903e-07),
    ("5_4", "4_5", 294.7683939, 5.326e-07),
    ("5_4", "4_3", 206.1760050, 1.010e-04),
    ("5_4", "4_4", 100.0296400, 1.083e-06),
    ("5_5", "3_4", 588.5648577, 1.015e-07),
    ("5_5", "4_5", 409.9594934, 1.575e-05),
    ("5_5", "4_4", 215.2206530, 1.193e-04),
    ("5_5", "5_6", 190.0101048, 2.524e-08),
    ("6_7", "5_6", 261.8437210, 2.282e-04),
    ("6_5", "3_4", 725.1995176, 1.384e-05),
    ("6_5", "4_5", 546.5941534, 2.197e-07),
    ("6_5", "5_6", 326.6447648, 4.200e-07),
    ("6_5", "5_4", 251.8257700, 1.925e-04),
    ("6_5", "5_5", 136.6347990, 1.749e-06),
    ("6_6", "4_5", 668.2153193, 1.081e-07),
    ("6_6", "5_6", 448.2659307, 1.651e-05),
    ("6_6", "5_5", 258.2558259, 2.120e-04),
    ("6_6", "6_7", 186.4222261, 2.433e-08),
    ("6_6", "6_5", 121.6211660, 6.473e-09),
    ("7_8", "6_7", 304.0778440, 3.609e-04),
    ("7_6", "4_5", 843.1442060, 1.259e-05),
    ("7_6", "5_6", 623.1948174, 2.505e-07),
    ("7_6", "6_7", 361.3511128, 3.450e-07),
    ("7_6", "6_5", 296.5500640, 3.229e-04),
    ("7_6", "6_6", 174.9288600, 2.514e-06),
    ("7_7", "5_6", 749.5520491, 1.152e-07),
    ("7_7", "6_7", 487.7083445, 1.735e-05),
    ("7_7", "6_6", 301.2861240, 3.429e-04),
    ("7_7", "7_8", 183.6304862, 2.359e-08),
    ("7_7", "7_6", 126.3572317, 7.465e-09),
    ("8_9", "7_8", 346.5284810, 5.382e-04),
    ("8_7", "5_6", 963.9091039, 1.143e-05),
    ("8_7", "6_7", 702.0653993, 2.823e-07),
    ("8_7", "6_6", 515.6431731, 2.521e-08),
    ("8_7", "7_8", 397.9875410, 2.921e-07),
    ("8_7", "7_6", 340.7141550, 4.985e-04),
    ("8_7", "7_7", 214.3570390, 3.351e-06),
    ("8_8", "6_7", 832.0190575, 1.226e-07),
    ("8_8", "7_8", 527.9411992, 1.823e-05),
    ("8_8", "7_7", 344.3106120, 5.186e-04),
    ("8_8", "8_9", 181.4126712, 2.297e-08),
    ("8_8", "8_7", 129.9536582, 8.274e-09),
    ("9_10", "8_9", 389.1209320, 7.665e-04),
    ("9_8", "6_7", 1086.5926858, 1.042e-05),
    ("9_8", "7_8", 782.5148275, 3.146e-07),
    ("9_8", "7_7", 598.8843413, 3.211e-08),
    ("9_8", "8_9", 435.9862996, 2.532e-07),
    ("9_8", "8_7", 384.5272866, 7.255e-04),
    ("9_8", "8_8", 254.5736284, 4.239e-06),
    ("9_9", "7_8", 915.2699946, 1.302e-07),
    ("9_9", "8_9", 568.7414667, 1.916e-05),
    ("9_9", "8_8", 387.3287950, 7.456e-04),
    ("9_9", "9_10", 179.6204980, 2.246e-08),
    ("9_9", "9_8", 132.7551671, 8.935e-09),
    ("10_11", "9_10", 431.8081960, 1.053e-03),
    ("10_9", "7_8", 1210.6255742, 9.541e-06),
    ("10_9", "8_9", 864.0970463, 3.475e-07),
    ("10_9", "8_8", 682.6843751, 3.934e-08),
    ("10_9", "9_10", 474.9760777, 2.234e-07),
    ("10_9", "9_8", 428.1107467, 1.011e-03),
    ("10_9", "9_9", 295.3556960, 5.167e-06),
    ("10_10", "8_9", 999.0810184, 1.380e-07),
    ("10_10", "9_10", 609.9600498, 2.012e-05),
    ("10_10", "9_9", 430.3395440, 1.030e-03),
    ("10_10", "10_11", 178.1518554, 2.204e-08),
    ("10_10", "10_9", 134.9839721, 9.482e-09),
    ("11_12", "10_11", 474.5596050, 1.403e-03),
    ("11_10", "8_9", 1335.6348296, 8.777e-06),
    ("11_10", "9_10", 946.5138609, 3.806e-07),
    ("11_10", "9_9", 766.8933629, 4.679e-08),
    ("11_10", "10_11", 514.7056665, 1.999e-07),
    ("11_10", "10_9", 471.5378180, 1.360e-03),
    ("11_10", "10_10", 336.5538112, 6.125e-06),
    ("11_11", "9_10", 1083.3022174, 1.460e-07),
    ("11_11", "10_11", 651.4940230, 2.110e-05),
    ("11_11", "10_10", 473.3421677, 1.379e-03),
    ("11_11", "11_12", 176.9344298, 2.169e-08),
    ("11_11", "11_10", 136.7883565, 9.935e-09),
    ("12_13", "11_12", 517.3545316, 1.824e-03),
    ("12_11", "9_10", 1461.3676149, 8.114e-06),
    ("12_11", "10_11", 1029.5594205, 4.140e-07),
    ("12_11", "10_10", 851.4075651, 5.444e-08),
    ("12_11", "11_12", 554.9998273, 1.809e-07),
    ("12_11", "11_10", 514.8537539, 1.780e-03),
    ("12_11", "11_11", 378.0653974, 7.104e-06),
    ("12_12", "10_11", 1167.8298519, 1.540e-07),
    ("12_12", "11_12", 693.2702588, 2.209e-05),
    ("12_12", "11_11", 516.3358289, 1.799e-03),
    ("12_12", "12_13", 175.9157271, 2.139e-08),
    ("12_12", "12_11", 138.2704315, 1.031e-08),
    ("13_14", "12_13", 560.1786500, 2.323e-03),
    ("13_12", "10_11", 1587.6470627, 7.536e-06),
    ("13_12", "11_12", 1113.0874695, 4.477e-07),
    ("13_12", "11_11", 936.1530397, 6.222e-08),
    ("13_12", "12_13", 595.7329379, 1.651e-07),
    ("13_12", "12_11", 558.0876422, 2.278e-03),
    ("13_12", "12_12", 419.8172108, 8.102e-06),
    ("13_13", "11_12", 1252.5899799, 1.621e-07),
    ("13_13", "12_13", 735.2354483, 2.311e-05),
    ("13_13", "12_12", 559.3197212, 2.297e-03),
    ("13_13", "13_14", 175.0567983, 2.113e-08),
    ("13_13", "13_12", 139.5025104, 1.064e-08),
    ("14_15", "13_14", 603.0216500, 2.905e-03),
    ("14_13", "11_12", 1714.3459223, 7.030e-06),
    ("14_13", "12_13", 1196.9913907, 4.815e-07),
    ("14_13", "12_12", 1021.0756636, 7.012e-08),
    ("14_13", "13_14", 636.8127407, 1.520e-07),
    ("14_13", "13_12", 601.2584520, 2.859e-03),
    ("14_13", "13_13", 461.7559424, 9.113e-06),
    ("14_14", "12_13", 1337.5284784, 1.703e-07),
    ("14_14", "13_14", 777.3498284, 2.413e-05),
    ("14_14", "13_13", 602.2930210, 2.878e-03),
    ("14_14", "14_15", 174.3281807, 2.092e-08),
    ("14_14", "14_13", 140.5370877, 1.091e-08),
    ("15_16", "14_15", 645.8759240, 3.577e-03),
    ("15_14", "12_13", 1841.3703074, 6.583e-06),
    ("15_14", "13_14", 1281.1916573, 5.154e-07),
    ("15_14", "13_13", 1106.1348591, 7.811e-08),
    ("15_14", "14_15", 678.1700097, 1.407e-07),
    ("15_14", "14_13", 644.3789180, 3.532e-03),
    ("15_14", "14_14", 503.8418290, 1.013e-05),
    ("15_15", "13_14", 1422.6047695, 1.786e-07),
    ("15_15", "14_15", 819.5831218, 2.516e-05),
    ("15_15", "14_14", 645.2549330, 3.550e-03),
    ("15_15", "15_16", 173.7072018, 2.074e-08),
    ("15_15", "15_14", 141.4131122, 1.115e-08),
    ("16_17", "15_16", 688.7357000, 4.346e-03),
    ("16_15", "13_14", 1968.6493628, 6.186e-06),
    ("16_15", "14_15", 1365.6277152, 5.494e-07),
    ("16_15", "14_14", 1191.2995345, 8.619e-08),
    ("16_15", "15_16", 719.7517951, 1.311e-07),
    ("16_15", "15_14", 687.4576940, 4.300e-03),
    ("16_15", "15_15", 546.0445933, 1.116e-05),
    ("16_16", "14_15", 1507.7877617, 1.869e-07),
    ("16_16", "15_16", 861.9118416, 2.619e-05),
    ("16_16", "15_15", 688.2046300, 4.317e-03),
    ("16_16", "16_17", 173.1761453, 2.058e-08),
    ("16_16", "16_15", 142.1600465, 1.135e-08),
    ("17_18", "16_17", 731.5964800, 5.217e-03),
    ("17_16", "14_15", 2096.1285099, 5.833e-06),
    ("17_16", "15_16", 1450.2525899, 5.836e-07),
    ("17_16", "15_15", 1276.5453881, 9.433e-08),
    ("17_16", "16_17", 761.5168935, 1.226e-07),
    ("17_16", "16_15", 730.5007947, 5.171e-03),
    ("17_16", "16_16", 588.3407482, 1.220e-05),
    ("17_17", "15_16", 1593.0531532, 1.952e-07),
    ("17_17", "16_17", 904.3174568, 2.723e-05),
    ("17_17", "16_16", 731.1413115, 5.188e-03),
    ("17_17", "17_18", 172.7209769, 2.044e-08),
    ("17_17", "17_16", 142.8005633, 1.152e-08),
    ("18_19", "17_18", 774.4546775, 6.199e-03),
    ("18_17", "16_17", 1535.0292195, 6.177e-07),
    ("18_17", "16_16", 1361.8530742, 1.025e-07),
    ("18_17", "17_18", 803.4327395, 1.152e-07),
    ("18_17", "17_16", 773.5123260, 6.152e-03),
    ("18_17", "17_17", 630.7117627, 1.325e-05),
    ("18_18", "16_17", 1678.3815983, 2.036e-07),
    ("18_18", "17_18", 946.7851183, 2.829e-05),
    ("18_18", "17_17", 774.0641414, 6.169e-03),
    ("18_18", "18_19", 172.3304408, 2.033e-08),
    ("18_18", "18_17", 143.3523788, 1.167e-08),
    ("19_20", "18_19", 817.3073600, 7.297e-03),
    ("19_18", "16_17", 2351.5243857, 5.229e-06),
    ("19_18", "17_18", 1619.9279057, 6.521e-07),
    ("19_18", "17_17", 1447.2069289, 1.108e-07),
    ("19_18", "18_19", 845.4732283, 1.086e-07),
    ("19_18", "18_17", 816.4951840, 7.249e-03),
    ("19_18", "18_18", 673.1427874, 1.430e-05),
    ("19_19", "17_18", 1763.7574331, 2.120e-07),
    ("19_19", "18_19", 989.3027556, 2.933e-05),
    ("19_19", "18_18", 816.9723280, 7.265e-03),
    ("19_19", "19_20", 171.9954092, 2.023e-08),
    ("19_19", "19_18", 143.8295274, 1.181e-08),
    ("20_21", "19_20", 860.1520215, 8.515e-03),
    ("20_19", "17_18", 2479.3791851, 4.969e-06),
    ("20_19", "18_19", 1704.9245077, 6.864e-07),
    ("20_19", "19_20", 887.6171613, 1.028e-07),
    ("20_19", "19_18", 859.4512794, 8.467e-03),
    ("20_19", "19_19", 715.6217520, 1.535e-05),
    ("20_20", "18_19", 1849.1677723, 2.204e-07),
    ("20_20", "19_20", 1031.8604259, 3.039e-05),
    ("20_20", "19_19", 859.8650167, 8.485e-03),
    ("20_20", "20_21", 171.7084044, 2.014e-08),
    ("20_20", "20_19", 144.2432647, 1.192e-08),
    ("21_22", "20_21", 902.9865820, 9.864e-03),
    ("21_20", "18_19", 2607.3064857, 4.733e-06),
    ("21_20", "19_20", 1789.9991393, 7.206e-07),
    ("21_20", "20_21", 929.8471178, 9.748e-08),
    ("21_20", "20_19", 902.3819640, 9.817e-03),
    ("21_20", "20_20", 758.1387134, 1.640e-05),
    ("21_21", "19_20", 1934.6018580, 2.289e-07),
    ("21_21", "20_21", 1074.4498364, 3.144e-05),
    ("21_21", "20_20", 902.7414190, 9.831e-03),
    ("21_21", "21_22", 171.4632440, 2.007e-08),
    ("21_21", "21_20", 144.6027186, 1.202e-08),
    ("22_21", "19_20", 2735.2872367, 4.518e-06),
    ("22_21", "20_21", 1875.1352152, 7.550e-07),
    ("22_21", "21_22", 972.1486228, 9.271e-08),
    ("22_21", "21_20", 945.2880974, 1.130e-02),
    ("22_21", "21_21", 800.6853788, 1.746e-05),
    ("22_22", "21_22", 1117.0639897, 3.250e-05),
    ("22_22", "21_21", 945.6007457, 1.131e-02),
    ("22_22", "22_23", 171.2547735, 2.001e-08),
    ("22_22", "22_21", 144.9153669, 1.211e-08),
    ("23_24", "22_23", 988.6182539, 1.297e-02),
    ("23_22", "20_21", 2863.3053327, 4.320e-06),
    ("23_22", "21_22", 1960.3187402, 7.895e-07),
    ("23_22", "22_21", 988.1701175, 1.292e-02),
    ("23_22", "22_22", 843.2547505, 1.852e-05),
    ("23_23", "22_23", 1159.6969159, 3.356e-05),
    ("23_23", "22_22", 988.4421425, 1.293e-02),
    ("23_23", "23_24", 171.0786621, 1.996e-08),
    ("23_23", "23_22", 145.1873920, 1.219e-08),
    ("24_25", "23_24", 1031.4122130, 1.474e-02),
    ("24_23", "21_22", 2991.3469909, 4.139e-06),
    ("24_23", "22_23", 2045.5377746, 8.239e-07),
    ("24_23", "23_22", 1031.0282490, 1.469e-02),
    ("24_23", "23_23", 885.8408550, 1.958e-05),
    ("24_24", "23_24", 1202.3434690, 3.462e-05),
    ("24_24", "23_23", 1031.2648040, 1.471e-02),
    ("24_24", "24_25", 170.9312452, 1.992e-08),
    ("24_24", "24_23", 145.4239482, 1.226e-08),
    ("25_26", "24_25", 1074.1897671, 1.666e-02),
    ("25_24", "22_23", 3119.4002799, 3.971e-06),
    ("25_24", "23_24", 2130.7820260, 8.584e-07),
    ("25_24", "24_23", 1073.8625052, 1.662e-02),
    ("25_24", "24_24", 928.4385570, 2.064e-05),
    ("25_25", "24_25", 1244.9991686, 3.568e-05),
    ("25_25", "24_24", 1074.0679234, 1.663e-02),
    ("25_25", "25_26", 170.8094016, 1.989e-08),
    ("26_27", "25_26", 1116.9496215, 1.875e-02),
    ("26_25", "23_24", 3247.4547576, 3.815e-06),
    ("26_25", "24_25", 2216.0425339, 8.929e-07),
    ("26_25", "25_24", 1116.6727316, 1.870e-02),
    ("26_25", "25_25", 971.0433652, 2.170e-05),
    ("26_26", "25_26", 1287.6600780, 3.674e-05),
    ("26_26", "25_25", 1116.8506765, 1.872e-02),
    ("26_26", "26_27", 170.7104566, 1.986e-08),
    ("27_28", "26_27", 1159.6906013, 2.100e-02),
    ("27_26", "24_25", 3375.5011913, 3.671e-06),
    ("27_26", "25_26", 2301.3114243, 9.275e-07),
    ("27_26", "26_25", 1159.4586575, 2.095e-02),
    ("27_26", "26_26", 1013.6513462, 2.277e-05),
    ("27_27", "26_27", 1330.3227067, 3.780e-05),
    ("27_27", "26_26", 1159.6122502, 2.096e-02),
    ("28_29", "27_28", 1202.4115823, 2.342e-02),
    ("28_27", "25_26", 3503.5313377, 3.537e-06),
    ("28_27", "26_27", 2386.5817162, 9.620e-07),
    ("28_27", "27_26", 1202.2199134, 2.338e-02),
    ("28_27", "27_27", 1056.2590095, 2.383e-05),
    ("28_28", "27_28", 1372.9839340, 3.887e-05),
    ("28_28", "27_27", 1202.3518286, 2.339e-02),
    ("29_30", "28_29", 1245.1111280, 2.602e-02),
    ("29_28", "28_27", 1244.9555080, 2.598e-02),
    ("29_28", "28_28", 1098.8632340, 2.489e-05),
    ("29_29", "28_29", 1415.6409473, 3.993e-05),
    ("29_29", "28_28", 1245.0678590, 2.599e-02),
    ("30_31", "29_30", 1287.7892740, 2.881e-02),
    ("30_29", "27_28", 3759.5137368, 3.295e-06),
    ("30_29", "29_28", 1287.6670620, 2.876e-02),
    ("30_29", "29_29", 1141.4612072, 2.596e-05),
    ("30_30", "29_30", 1458.2911923, 4.098e-05),
    ("30_30", "29_29", 1287.7617510, 2.877e-02),
];

/// Builds the SO table.
pub fn table() -> SpeciesTable {
    let indices: HashMap<&str, usize> = LEVELS
        .iter()
        .enumerate()
        .map(|(idx, &(label, _, _))| (label, idx))
        .collect();
    let levels = LEVELS
        .iter()
        .map(|&(label, wavenumber, degeneracy)| {
            EnergyLevel::from_wavenumber(degeneracy, wavenumber).with_label(label)
        })
        .collect();
    let lines = LINES.iter().map(|&(upper, lower, ghz, einstein_a)| {
        Line::new(
            indices[upper],
            indices[lower],
            Frequency::from_ghz(ghz),
            Rate::per_second(einstein_a),
        )
    });
    SpeciesTable::new("so", levels, Transitions::network(lines))
}
