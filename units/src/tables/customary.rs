/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::unit_defs::*;
use crate::PreciseUnit;

/// US customary and imperial units, temperature scales, pressure,
/// energy and power.
pub(super) const UNITS: &[(&str, PreciseUnit)] = &[
    ("in", IN),
    ("inch", IN),
    ("ft", FT),
    ("foot", FT),
    ("feet", FT),
    ("yd", YD),
    ("yard", YD),
    ("mi", MI),
    ("mile", MI),
    ("nmi", NMI),
    ("nautical mile", NMI),
    ("mil", MIL),
    ("thou", MIL),
    ("rd", ROD),
    ("rod", ROD),
    ("ch", CHAIN),
    ("chain", CHAIN),
    ("fur", FURLONG),
    ("furlong", FURLONG),
    ("ftm", FATHOM),
    ("fathom", FATHOM),
    ("acre", ACRE),
    ("ac", ACRE),
    ("lb", LB),
    ("lbm", LB),
    ("pound", LB),
    ("oz", OZ),
    ("ounce", OZ),
    ("gr", GRAIN),
    ("grain", GRAIN),
    ("st", STONE),
    ("stone", STONE),
    ("ton", TON),
    ("short ton", TON),
    ("long ton", LONG_TON),
    ("slug", SLUG),
    ("ozt", TROY_OZ),
    ("troy ounce", TROY_OZ),
    ("gal", GAL),
    ("gallon", GAL),
    ("qt", QT),
    ("quart", QT),
    ("pt", PT),
    ("pint", PT),
    ("cup", CUP),
    ("floz", FLOZ),
    ("fl oz", FLOZ),
    ("fluid ounce", FLOZ),
    ("tbsp", TBSP),
    ("tablespoon", TBSP),
    ("tsp", TSP),
    ("teaspoon", TSP),
    ("bbl", BARREL),
    ("barrel", BARREL),
    ("bu", BUSHEL),
    ("bushel", BUSHEL),
    ("imperial gallon", IMP_GAL),
    ("imp gal", IMP_GAL),
    ("imperial pint", IMP_PT),
    ("mph", MPH),
    ("kph", KPH),
    ("kmh", KPH),
    ("kn", KNOT),
    ("kt", KNOT),
    ("knot", KNOT),
    ("lbf", LBF),
    ("pound force", LBF),
    ("kgf", KGF),
    ("dyn", DYN),
    ("dyne", DYN),
    ("g0", G0),
    ("gravity", G0),
    ("degF", DEG_F),
    ("fahrenheit", DEG_F),
    ("degree fahrenheit", DEG_F),
    ("degrees fahrenheit", DEG_F),
    ("degR", DEG_R),
    ("rankine", DEG_R),
    ("degRe", DEG_RE),
    ("reaumur", DEG_RE),
    ("psi", PSI),
    ("psia", PSI),
    ("psig", PSIG),
    ("barg", BARG),
    ("atm", ATM),
    ("atmosphere", ATM),
    ("torr", TORR),
    ("Torr", TORR),
    ("mmHg", MMHG),
    ("inHg", INHG),
    ("inH2O", INH2O),
    ("cal", CAL),
    ("calorie", CAL),
    ("kcal", KCAL),
    ("Cal", KCAL),
    ("BTU", BTU),
    ("Btu", BTU),
    ("therm", THERM),
    ("erg", ERG),
    ("tonTNT", TNT),
    ("hp", HP),
    ("horsepower", HP),
    ("TR", TON_REFRIGERATION),
];
