/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::unit_defs::*;
use crate::PreciseUnit;

/// SI base and derived units, their spelled out names and the non-SI
/// units accepted for use with the SI.
pub(super) const UNITS: &[(&str, PreciseUnit)] = &[
    ("m", M),
    ("meter", M),
    ("metre", M),
    ("kg", KG),
    ("kilogram", KG),
    ("g", G),
    ("gm", G),
    ("gram", G),
    ("gramme", G),
    ("s", S),
    ("sec", S),
    ("second", S),
    ("A", A),
    ("amp", A),
    ("ampere", A),
    ("K", K),
    ("kelvin", K),
    ("mol", MOL),
    ("mole", MOL),
    ("cd", CD),
    ("candela", CD),
    ("rad", RAD),
    ("radian", RAD),
    ("sr", SR),
    ("steradian", SR),
    ("Hz", HZ),
    ("hertz", HZ),
    ("N", N),
    ("newton", N),
    ("Pa", PA),
    ("pascal", PA),
    ("J", J),
    ("joule", J),
    ("W", W),
    ("watt", W),
    ("C", C),
    ("coulomb", C),
    ("V", V),
    ("volt", V),
    ("F", F),
    ("farad", F),
    ("Ohm", OHM),
    ("ohm", OHM),
    ("\u{3a9}", OHM),
    ("\u{2126}", OHM),
    ("S", SIEMENS),
    ("siemens", SIEMENS),
    ("mho", SIEMENS),
    ("Wb", WB),
    ("weber", WB),
    ("T", T),
    ("tesla", T),
    ("H", H),
    ("henry", H),
    ("lm", LM),
    ("lumen", LM),
    ("lx", LX),
    ("lux", LX),
    ("Bq", BQ),
    ("becquerel", BQ),
    ("Gy", GY),
    ("gray", GY),
    ("Sv", GY),
    ("sievert", GY),
    ("kat", KAT),
    ("katal", KAT),
    ("degC", DEG_C),
    ("celsius", DEG_C),
    ("centigrade", DEG_C),
    ("degree celsius", DEG_C),
    ("degrees celsius", DEG_C),
    ("t", TONNE),
    ("tonne", TONNE),
    ("metric ton", TONNE),
    ("Da", DALTON),
    ("dalton", DALTON),
    ("amu", DALTON),
    ("L", L),
    ("l", L),
    ("liter", L),
    ("litre", L),
    ("cc", ML),
    ("min", MIN),
    ("minute", MIN),
    ("h", HR),
    ("hr", HR),
    ("hour", HR),
    ("d", DAY),
    ("day", DAY),
    ("wk", WEEK),
    ("week", WEEK),
    ("yr", YR),
    ("year", YR),
    ("a", JULIAN_YR),
    ("annum", JULIAN_YR),
    ("ha", HA),
    ("hectare", HA),
    ("are", ARE),
    ("bar", BAR),
    ("eV", EV),
    ("electronvolt", EV),
    ("Ah", AH),
    ("Wh", WH),
    ("kWh", KWH),
    ("angstrom", ANGSTROM),
    ("\u{c5}", ANGSTROM),
    ("au", AU),
    ("AU", AU),
    ("ly", LIGHT_YEAR),
    ("light year", LIGHT_YEAR),
    ("lightyear", LIGHT_YEAR),
    ("pc", PARSEC),
    ("parsec", PARSEC),
    ("deg", DEG),
    ("degree", DEG),
    ("arcmin", ARCMIN),
    ("arcminute", ARCMIN),
    ("'", ARCMIN),
    ("arcsec", ARCSEC),
    ("arcsecond", ARCSEC),
    ("\"", ARCSEC),
    ("gon", GON),
    ("grad", GON),
    ("rev", REV),
    ("revolution", REV),
    ("rpm", RPM),
    ("M", MOLAR),
    ("molar", MOLAR),
    ("one", ONE),
    ("unit", ONE),
];
