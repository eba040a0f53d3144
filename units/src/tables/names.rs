/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::unit_defs::*;
use crate::PreciseUnit;

/// Preferred output names, in priority order. The flag marks names
/// that take a prefix when rendering (`km`, `MiB`). Bq and Gy only
/// parse: their dimensions are those of Hz and m^2/s^2.
pub(super) const NAMES: &[(PreciseUnit, &str, bool)] = &[
    (M, "m", true),
    (KG, "kg", false),
    (G, "g", true),
    (S, "s", true),
    (A, "A", true),
    (K, "K", true),
    (MOL, "mol", true),
    (CD, "cd", true),
    (RAD, "rad", true),
    (SR, "sr", false),
    (COUNT, "count", false),
    (CURRENCY, "$", false),
    (HZ, "Hz", true),
    (N, "N", true),
    (PA, "Pa", true),
    (J, "J", true),
    (W, "W", true),
    (C, "C", true),
    (V, "V", true),
    (F, "F", true),
    (OHM, "Ohm", true),
    (SIEMENS, "S", true),
    (WB, "Wb", true),
    (T, "T", true),
    (H, "H", true),
    (LM, "lm", true),
    (LX, "lx", true),
    (KAT, "kat", true),
    (DEG_C, "degC", false),
    (DEG_F, "degF", false),
    (DEG_R, "degR", false),
    (DEG_RE, "degRe", false),
    (L, "L", true),
    (TONNE, "t", false),
    (MIN, "min", false),
    (HR, "hr", false),
    (DAY, "day", false),
    (WEEK, "week", false),
    (YR, "yr", false),
    (HA, "ha", false),
    (BAR, "bar", true),
    (EV, "eV", true),
    (WH, "Wh", true),
    (AH, "Ah", true),
    (ANGSTROM, "angstrom", false),
    (AU, "au", false),
    (LIGHT_YEAR, "ly", false),
    (PARSEC, "pc", true),
    (DEG, "deg", false),
    (ARCMIN, "arcmin", false),
    (ARCSEC, "arcsec", false),
    (REV, "rev", false),
    (RPM, "rpm", false),
    (IN, "in", false),
    (FT, "ft", false),
    (YD, "yd", false),
    (MI, "mi", false),
    (NMI, "nmi", false),
    (MIL, "mil", false),
    (ACRE, "acre", false),
    (LB, "lb", false),
    (OZ, "oz", false),
    (TON, "ton", false),
    (GAL, "gal", false),
    (QT, "qt", false),
    (PT, "pt", false),
    (CUP, "cup", false),
    (FLOZ, "floz", false),
    (TBSP, "tbsp", false),
    (TSP, "tsp", false),
    (BARREL, "bbl", false),
    (MPH, "mph", false),
    (KNOT, "kn", false),
    (LBF, "lbf", false),
    (PSI, "psi", false),
    (PSIG, "psig", false),
    (BARG, "barg", false),
    (ATM, "atm", false),
    (TORR, "torr", false),
    (MMHG, "mmHg", false),
    (INHG, "inHg", false),
    (CAL, "cal", true),
    (BTU, "BTU", false),
    (THERM, "therm", false),
    (HP, "hp", false),
    (PERCENT, "%", false),
    (PPM, "ppm", false),
    (PPB, "ppb", false),
    (BYTE, "B", true),
    (PU, "pu", false),
    (IFLAG, "iflag", false),
    (EFLAG, "eflag", false),
    (MOLAR, "M", true),
    (DB, "dB", false),
    (DBM, "dBm", false),
    (DBW, "dBW", false),
    (NEPER, "Np", false),
    (BEL, "bel", false),
    (LOG10, "log", false),
    (LN, "ln", false),
    (LOG2, "log2", false),
    (PH, "pH", false),
    (SAFFIR_SIMPSON, "sshws", false),
    (BEAUFORT, "beaufort", false),
    (FUJITA, "fujita", false),
    (GAS_MARK, "gasmark", false),
];
