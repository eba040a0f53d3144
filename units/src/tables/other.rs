/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::unit_defs::*;
use crate::PreciseUnit;

/// Counting, data, currency, flag, logarithmic and assorted
/// scientific units.
pub(super) const UNITS: &[(&str, PreciseUnit)] = &[
    ("count", COUNT),
    ("ct", COUNT),
    ("each", COUNT),
    ("ea", COUNT),
    ("item", COUNT),
    ("#", COUNT),
    ("dozen", DOZEN),
    ("doz", DOZEN),
    ("gross", GROSS),
    ("%", PERCENT),
    ("percent", PERCENT),
    ("\u{2030}", PERMILLE),
    ("permille", PERMILLE),
    ("ppm", PPM),
    ("ppb", PPB),
    ("ppt", PPT),
    ("bit", BIT),
    ("b", BIT),
    ("nibble", NIBBLE),
    ("B", BYTE),
    ("byte", BYTE),
    ("octet", BYTE),
    ("$", CURRENCY),
    ("dollar", CURRENCY),
    ("USD", CURRENCY),
    ("currency", CURRENCY),
    ("pu", PU),
    ("perunit", PU),
    ("per unit", PU),
    ("iflag", IFLAG),
    ("eflag", EFLAG),
    ("Np", NEPER),
    ("neper", NEPER),
    ("bel", BEL),
    ("dB", DB),
    ("decibel", DB),
    ("dBm", DBM),
    ("dBW", DBW),
    ("dBV", DBV),
    ("dBSPL", DB_SPL),
    ("dB(SPL)", DB_SPL),
    ("log", LOG10),
    ("log10", LOG10),
    ("lg", LOG10),
    ("ln", LN),
    ("log2", LOG2),
    ("neglog10", NEGLOG10),
    ("neglog100", NEGLOG100),
    ("neglog1000", NEGLOG1000),
    ("neglog50000", NEGLOG50000),
    ("belP", BEL_POWER),
    ("dBP", DB_POWER),
    ("belA", BEL_AMPLITUDE),
    ("dBA", DB_AMPLITUDE),
    ("NpP", NEPER_POWER),
    ("trit", TRIT),
    ("pH", PH),
    ("sshws", SAFFIR_SIMPSON),
    ("saffir simpson", SAFFIR_SIMPSON),
    ("beaufort", BEAUFORT),
    ("fujita", FUJITA),
    ("gasmark", GAS_MARK),
    ("gas mark", GAS_MARK),
    ("regulo", GAS_MARK),
    ("prism diopter", PRISM_DIOPTER),
    ("Mw", MOMENT_MAGNITUDE),
    ("moment magnitude", MOMENT_MAGNITUDE),
    ("Me", ENERGY_MAGNITUDE),
    ("gauss", GAUSS),
    ("Gs", GAUSS),
    ("Mx", MAXWELL),
    ("maxwell", MAXWELL),
    ("faraday", FARADAY),
    ("P", POISE),
    ("poise", POISE),
    ("St", STOKES),
    ("stokes", STOKES),
    ("Ci", CURIE),
    ("curie", CURIE),
    ("rem", REM),
    ("diopter", DIOPTER),
    ("mesh", MESH),
    ("drop", DROP),
    ("IU", custom_count_unit(2)),
    ("arbU", custom_count_unit(1)),
    ("HPF", custom_count_unit(5)),
    ("hounsfield", custom_unit(37)),
    ("ERROR", ERROR),
    ("error", ERROR),
];
