/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Named unit constants. Multipliers are written as literals so every
//! constant is the nearest double to its defined value.

use crate::equation::equation_dimension;
use crate::{Dimension, PreciseUnit};

#[allow(clippy::too_many_arguments)]
const fn dim(
    m: i32,
    kg: i32,
    s: i32,
    a: i32,
    k: i32,
    mol: i32,
    cd: i32,
    count: i32,
    currency: i32,
    rad: i32,
) -> Dimension {
    Dimension::new([m, kg, s, a, k, mol, cd, count, currency, rad])
}

const fn unit(multiplier: f64, base: Dimension) -> PreciseUnit {
    PreciseUnit::new(multiplier, base)
}

const fn eq(code: u8, multiplier: f64, base: Dimension) -> PreciseUnit {
    PreciseUnit::new(multiplier, merge(equation_dimension(code), base))
}

/// Combine an equation marker with a plain dimension. Only valid when
/// the base leaves count and radian free.
const fn merge(marker: Dimension, base: Dimension) -> Dimension {
    Dimension::from_bits(marker.bits() | base.bits())
}

pub const ONE: PreciseUnit = PreciseUnit::ONE;
pub const ERROR: PreciseUnit = PreciseUnit::ERROR;

// Base units.
pub const M: PreciseUnit = unit(1.0, dim(1, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const KG: PreciseUnit = unit(1.0, dim(0, 1, 0, 0, 0, 0, 0, 0, 0, 0));
pub const S: PreciseUnit = unit(1.0, dim(0, 0, 1, 0, 0, 0, 0, 0, 0, 0));
pub const A: PreciseUnit = unit(1.0, dim(0, 0, 0, 1, 0, 0, 0, 0, 0, 0));
pub const K: PreciseUnit = unit(1.0, dim(0, 0, 0, 0, 1, 0, 0, 0, 0, 0));
pub const MOL: PreciseUnit = unit(1.0, dim(0, 0, 0, 0, 0, 1, 0, 0, 0, 0));
pub const CD: PreciseUnit = unit(1.0, dim(0, 0, 0, 0, 0, 0, 1, 0, 0, 0));
pub const COUNT: PreciseUnit = unit(1.0, dim(0, 0, 0, 0, 0, 0, 0, 1, 0, 0));
pub const CURRENCY: PreciseUnit =
    unit(1.0, dim(0, 0, 0, 0, 0, 0, 0, 0, 1, 0));
pub const RAD: PreciseUnit = unit(1.0, dim(0, 0, 0, 0, 0, 0, 0, 0, 0, 1));

// Flags.
pub const PU: PreciseUnit = unit(1.0, Dimension::NONE.with_per_unit(true));
pub const IFLAG: PreciseUnit = unit(1.0, Dimension::NONE.with_i_flag(true));
pub const EFLAG: PreciseUnit = unit(1.0, Dimension::NONE.with_e_flag(true));

// SI derived units.
pub const HZ: PreciseUnit = unit(1.0, dim(0, 0, -1, 0, 0, 0, 0, 0, 0, 0));
pub const N: PreciseUnit = unit(1.0, dim(1, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const PA: PreciseUnit = unit(1.0, dim(-1, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const J: PreciseUnit = unit(1.0, dim(2, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const W: PreciseUnit = unit(1.0, dim(2, 1, -3, 0, 0, 0, 0, 0, 0, 0));
pub const C: PreciseUnit = unit(1.0, dim(0, 0, 1, 1, 0, 0, 0, 0, 0, 0));
pub const V: PreciseUnit = unit(1.0, dim(2, 1, -3, -1, 0, 0, 0, 0, 0, 0));
pub const F: PreciseUnit = unit(1.0, dim(-2, -1, 4, 2, 0, 0, 0, 0, 0, 0));
pub const OHM: PreciseUnit = unit(1.0, dim(2, 1, -3, -2, 0, 0, 0, 0, 0, 0));
pub const SIEMENS: PreciseUnit =
    unit(1.0, dim(-2, -1, 3, 2, 0, 0, 0, 0, 0, 0));
pub const WB: PreciseUnit = unit(1.0, dim(2, 1, -2, -1, 0, 0, 0, 0, 0, 0));
pub const T: PreciseUnit = unit(1.0, dim(0, 1, -2, -1, 0, 0, 0, 0, 0, 0));
pub const H: PreciseUnit = unit(1.0, dim(2, 1, -2, -2, 0, 0, 0, 0, 0, 0));
pub const SR: PreciseUnit = unit(1.0, dim(0, 0, 0, 0, 0, 0, 0, 0, 0, 2));
pub const LM: PreciseUnit = unit(1.0, dim(0, 0, 0, 0, 0, 0, 1, 0, 0, 2));
pub const LX: PreciseUnit = unit(1.0, dim(-2, 0, 0, 0, 0, 0, 1, 0, 0, 2));
pub const BQ: PreciseUnit = unit(1.0, dim(0, 0, -1, 0, 0, 0, 0, 1, 0, 0));
pub const GY: PreciseUnit = unit(1.0, dim(2, 0, -2, 0, 0, 0, 0, 0, 0, 0));
pub const KAT: PreciseUnit = unit(1.0, dim(0, 0, -1, 0, 0, 1, 0, 0, 0, 0));
pub const DEG_C: PreciseUnit =
    unit(1.0, dim(0, 0, 0, 0, 1, 0, 0, 0, 0, 0).with_e_flag(true));

// Non-SI units accepted with the SI.
pub const G: PreciseUnit = unit(1e-3, dim(0, 1, 0, 0, 0, 0, 0, 0, 0, 0));
pub const TONNE: PreciseUnit = unit(1000.0, dim(0, 1, 0, 0, 0, 0, 0, 0, 0, 0));
pub const DALTON: PreciseUnit =
    unit(1.66053906660e-27, dim(0, 1, 0, 0, 0, 0, 0, 0, 0, 0));
pub const L: PreciseUnit = unit(1e-3, dim(3, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const ML: PreciseUnit = unit(1e-6, dim(3, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const MIN: PreciseUnit = unit(60.0, dim(0, 0, 1, 0, 0, 0, 0, 0, 0, 0));
pub const HR: PreciseUnit = unit(3600.0, dim(0, 0, 1, 0, 0, 0, 0, 0, 0, 0));
pub const DAY: PreciseUnit = unit(86400.0, dim(0, 0, 1, 0, 0, 0, 0, 0, 0, 0));
pub const WEEK: PreciseUnit = unit(604800.0, dim(0, 0, 1, 0, 0, 0, 0, 0, 0, 0));
pub const YR: PreciseUnit = unit(31536000.0, dim(0, 0, 1, 0, 0, 0, 0, 0, 0, 0));
pub const JULIAN_YR: PreciseUnit =
    unit(31557600.0, dim(0, 0, 1, 0, 0, 0, 0, 0, 0, 0));
pub const HA: PreciseUnit = unit(1e4, dim(2, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const ARE: PreciseUnit = unit(100.0, dim(2, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const BAR: PreciseUnit = unit(1e5, dim(-1, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const EV: PreciseUnit =
    unit(1.602176634e-19, dim(2, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const ANGSTROM: PreciseUnit = unit(1e-10, dim(1, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const AU: PreciseUnit =
    unit(149597870700.0, dim(1, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const LIGHT_YEAR: PreciseUnit =
    unit(9460730472580800.0, dim(1, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const PARSEC: PreciseUnit =
    unit(3.0856775814913673e16, dim(1, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const DEG: PreciseUnit =
    unit(0.017453292519943295, dim(0, 0, 0, 0, 0, 0, 0, 0, 0, 1));
pub const ARCMIN: PreciseUnit =
    unit(2.908882086657216e-4, dim(0, 0, 0, 0, 0, 0, 0, 0, 0, 1));
pub const ARCSEC: PreciseUnit =
    unit(4.84813681109536e-6, dim(0, 0, 0, 0, 0, 0, 0, 0, 0, 1));
pub const GON: PreciseUnit =
    unit(0.015707963267948967, dim(0, 0, 0, 0, 0, 0, 0, 0, 0, 1));
pub const REV: PreciseUnit =
    unit(6.283185307179586, dim(0, 0, 0, 0, 0, 0, 0, 0, 0, 1));
pub const RPM: PreciseUnit =
    unit(0.10471975511965977, dim(0, 0, -1, 0, 0, 0, 0, 0, 0, 1));

// Temperature scales.
pub const DEG_F: PreciseUnit = unit(
    0.5555555555555556,
    dim(0, 0, 0, 0, 1, 0, 0, 0, 0, 0).with_e_flag(true),
);
pub const DEG_R: PreciseUnit =
    unit(0.5555555555555556, dim(0, 0, 0, 0, 1, 0, 0, 0, 0, 0));
pub const DEG_RE: PreciseUnit = unit(
    1.25,
    dim(0, 0, 0, 0, 1, 0, 0, 0, 0, 0).with_e_flag(true),
);

// US customary and imperial.
pub const IN: PreciseUnit = unit(0.0254, dim(1, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const FT: PreciseUnit = unit(0.3048, dim(1, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const YD: PreciseUnit = unit(0.9144, dim(1, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const MI: PreciseUnit = unit(1609.344, dim(1, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const NMI: PreciseUnit = unit(1852.0, dim(1, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const MIL: PreciseUnit = unit(2.54e-5, dim(1, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const ROD: PreciseUnit = unit(5.0292, dim(1, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const CHAIN: PreciseUnit = unit(20.1168, dim(1, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const FURLONG: PreciseUnit =
    unit(201.168, dim(1, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const FATHOM: PreciseUnit = unit(1.8288, dim(1, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const ACRE: PreciseUnit =
    unit(4046.8564224, dim(2, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const LB: PreciseUnit = unit(0.45359237, dim(0, 1, 0, 0, 0, 0, 0, 0, 0, 0));
pub const OZ: PreciseUnit =
    unit(0.028349523125, dim(0, 1, 0, 0, 0, 0, 0, 0, 0, 0));
pub const GRAIN: PreciseUnit =
    unit(6.479891e-5, dim(0, 1, 0, 0, 0, 0, 0, 0, 0, 0));
pub const STONE: PreciseUnit =
    unit(6.35029318, dim(0, 1, 0, 0, 0, 0, 0, 0, 0, 0));
pub const TON: PreciseUnit =
    unit(907.18474, dim(0, 1, 0, 0, 0, 0, 0, 0, 0, 0));
pub const LONG_TON: PreciseUnit =
    unit(1016.0469088, dim(0, 1, 0, 0, 0, 0, 0, 0, 0, 0));
pub const SLUG: PreciseUnit =
    unit(14.593902937206364, dim(0, 1, 0, 0, 0, 0, 0, 0, 0, 0));
pub const TROY_OZ: PreciseUnit =
    unit(0.0311034768, dim(0, 1, 0, 0, 0, 0, 0, 0, 0, 0));
pub const GAL: PreciseUnit =
    unit(3.785411784e-3, dim(3, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const QT: PreciseUnit =
    unit(9.46352946e-4, dim(3, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const PT: PreciseUnit =
    unit(4.73176473e-4, dim(3, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const CUP: PreciseUnit =
    unit(2.365882365e-4, dim(3, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const FLOZ: PreciseUnit =
    unit(2.95735295625e-5, dim(3, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const TBSP: PreciseUnit =
    unit(1.478676478125e-5, dim(3, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const TSP: PreciseUnit =
    unit(4.92892159375e-6, dim(3, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const BARREL: PreciseUnit =
    unit(0.158987294928, dim(3, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const BUSHEL: PreciseUnit =
    unit(0.03523907016688, dim(3, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const IMP_GAL: PreciseUnit =
    unit(4.54609e-3, dim(3, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const IMP_PT: PreciseUnit =
    unit(5.6826125e-4, dim(3, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const MPH: PreciseUnit = unit(0.44704, dim(1, 0, -1, 0, 0, 0, 0, 0, 0, 0));
pub const KPH: PreciseUnit =
    unit(0.2777777777777778, dim(1, 0, -1, 0, 0, 0, 0, 0, 0, 0));
pub const KNOT: PreciseUnit =
    unit(0.5144444444444445, dim(1, 0, -1, 0, 0, 0, 0, 0, 0, 0));
pub const LBF: PreciseUnit =
    unit(4.4482216152605, dim(1, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const KGF: PreciseUnit = unit(9.80665, dim(1, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const DYN: PreciseUnit = unit(1e-5, dim(1, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const G0: PreciseUnit = unit(9.80665, dim(1, 0, -2, 0, 0, 0, 0, 0, 0, 0));

// Pressure.
pub const PSI: PreciseUnit =
    unit(6894.757293168361, dim(-1, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const PSIG: PreciseUnit = unit(
    6894.757293168361,
    dim(-1, 1, -2, 0, 0, 0, 0, 0, 0, 0).with_e_flag(true),
);
pub const BARG: PreciseUnit = unit(
    1e5,
    dim(-1, 1, -2, 0, 0, 0, 0, 0, 0, 0).with_e_flag(true),
);
pub const ATM: PreciseUnit =
    unit(101325.0, dim(-1, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const TORR: PreciseUnit =
    unit(133.32236842105263, dim(-1, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const MMHG: PreciseUnit =
    unit(133.322387415, dim(-1, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const INHG: PreciseUnit =
    unit(3386.389, dim(-1, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const INH2O: PreciseUnit =
    unit(249.0889, dim(-1, 1, -2, 0, 0, 0, 0, 0, 0, 0));

// Energy and power.
pub const CAL: PreciseUnit = unit(4.184, dim(2, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const KCAL: PreciseUnit = unit(4184.0, dim(2, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const BTU: PreciseUnit =
    unit(1055.05585262, dim(2, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const THERM: PreciseUnit =
    unit(105505585.262, dim(2, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const WH: PreciseUnit = unit(3600.0, dim(2, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const KWH: PreciseUnit = unit(3.6e6, dim(2, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const ERG: PreciseUnit = unit(1e-7, dim(2, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const TNT: PreciseUnit = unit(4.184e9, dim(2, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const HP: PreciseUnit =
    unit(745.6998715822702, dim(2, 1, -3, 0, 0, 0, 0, 0, 0, 0));
pub const TON_REFRIGERATION: PreciseUnit =
    unit(3516.8528420667, dim(2, 1, -3, 0, 0, 0, 0, 0, 0, 0));

// Electrical (CGS and others).
pub const GAUSS: PreciseUnit = unit(1e-4, dim(0, 1, -2, -1, 0, 0, 0, 0, 0, 0));
pub const MAXWELL: PreciseUnit =
    unit(1e-8, dim(2, 1, -2, -1, 0, 0, 0, 0, 0, 0));
pub const AH: PreciseUnit = unit(3600.0, dim(0, 0, 1, 1, 0, 0, 0, 0, 0, 0));
pub const FARADAY: PreciseUnit =
    unit(96485.33212, dim(0, 0, 1, 1, 0, 0, 0, 0, 0, 0));

// Viscosity and others.
pub const POISE: PreciseUnit = unit(0.1, dim(-1, 1, -1, 0, 0, 0, 0, 0, 0, 0));
pub const STOKES: PreciseUnit = unit(1e-4, dim(2, 0, -1, 0, 0, 0, 0, 0, 0, 0));
pub const CURIE: PreciseUnit = unit(3.7e10, dim(0, 0, -1, 0, 0, 0, 0, 1, 0, 0));
pub const REM: PreciseUnit = unit(0.01, dim(2, 0, -2, 0, 0, 0, 0, 0, 0, 0));
pub const DIOPTER: PreciseUnit = unit(1.0, dim(-1, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const MESH: PreciseUnit =
    unit(39.37007874015748, dim(-1, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const DROP: PreciseUnit = unit(5e-8, dim(3, 0, 0, 0, 0, 0, 0, 0, 0, 0));
pub const MOLAR: PreciseUnit =
    unit(1000.0, dim(-3, 0, 0, 0, 0, 1, 0, 0, 0, 0));

// Counting and ratios.
pub const PERCENT: PreciseUnit = unit(0.01, Dimension::NONE);
pub const PERMILLE: PreciseUnit = unit(1e-3, Dimension::NONE);
pub const PPM: PreciseUnit = unit(1e-6, Dimension::NONE);
pub const PPB: PreciseUnit = unit(1e-9, Dimension::NONE);
pub const PPT: PreciseUnit = unit(1e-12, Dimension::NONE);
pub const DOZEN: PreciseUnit = unit(12.0, Dimension::NONE);
pub const GROSS: PreciseUnit = unit(144.0, Dimension::NONE);
pub const BIT: PreciseUnit = unit(1.0, dim(0, 0, 0, 0, 0, 0, 0, 1, 0, 0));
pub const NIBBLE: PreciseUnit = unit(4.0, dim(0, 0, 0, 0, 0, 0, 0, 1, 0, 0));
pub const BYTE: PreciseUnit = unit(8.0, dim(0, 0, 0, 0, 0, 0, 0, 1, 0, 0));
pub const AVOGADRO: f64 = 6.02214076e23;
pub const STANDARD_GRAVITY: f64 = 9.80665;

// Equation units.
pub const LOG10: PreciseUnit = eq(0, 1.0, Dimension::NONE);
pub const NEPER: PreciseUnit = eq(1, 1.0, Dimension::NONE);
pub const BEL: PreciseUnit = eq(2, 1.0, Dimension::NONE);
pub const DB: PreciseUnit = eq(3, 1.0, Dimension::NONE);
pub const NEGLOG10: PreciseUnit = eq(4, 1.0, Dimension::NONE);
pub const NEGLOG100: PreciseUnit = eq(5, 1.0, Dimension::NONE);
pub const NEGLOG1000: PreciseUnit = eq(6, 1.0, Dimension::NONE);
pub const NEGLOG50000: PreciseUnit = eq(7, 1.0, Dimension::NONE);
pub const LOG2: PreciseUnit = eq(8, 1.0, Dimension::NONE);
pub const LN: PreciseUnit = eq(9, 1.0, Dimension::NONE);
pub const BEL_POWER: PreciseUnit = eq(10, 1.0, Dimension::NONE);
pub const DB_POWER: PreciseUnit = eq(11, 1.0, Dimension::NONE);
pub const BEL_AMPLITUDE: PreciseUnit = eq(12, 1.0, Dimension::NONE);
pub const DB_AMPLITUDE: PreciseUnit = eq(13, 1.0, Dimension::NONE);
pub const TRIT: PreciseUnit = eq(14, 1.0, Dimension::NONE);
pub const NEPER_POWER: PreciseUnit = eq(15, 1.0, Dimension::NONE);
pub const DBM: PreciseUnit =
    eq(3, 1e-3, dim(2, 1, -3, 0, 0, 0, 0, 0, 0, 0));
pub const DBW: PreciseUnit = eq(3, 1.0, dim(2, 1, -3, 0, 0, 0, 0, 0, 0, 0));
pub const DBV: PreciseUnit = eq(3, 1.0, dim(2, 1, -3, -1, 0, 0, 0, 0, 0, 0));
pub const DB_SPL: PreciseUnit =
    eq(3, 2e-5, dim(-1, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const PH: PreciseUnit = eq(4, 1000.0, dim(-3, 0, 0, 0, 0, 1, 0, 0, 0, 0));
pub const SAFFIR_SIMPSON: PreciseUnit =
    eq(22, 0.44704, dim(1, 0, -1, 0, 0, 0, 0, 0, 0, 0));
pub const BEAUFORT: PreciseUnit =
    eq(23, 0.44704, dim(1, 0, -1, 0, 0, 0, 0, 0, 0, 0));
pub const FUJITA: PreciseUnit =
    eq(24, 0.44704, dim(1, 0, -1, 0, 0, 0, 0, 0, 0, 0));
pub const GAS_MARK: PreciseUnit =
    eq(25, 1.0, dim(0, 0, 0, 0, 1, 0, 0, 0, 0, 0));
pub const PRISM_DIOPTER: PreciseUnit = eq(27, 1.0, Dimension::NONE);
pub const MOMENT_MAGNITUDE: PreciseUnit =
    eq(29, 1e-7, dim(2, 1, -2, 0, 0, 0, 0, 0, 0, 0));
pub const ENERGY_MAGNITUDE: PreciseUnit =
    eq(30, 1.0, dim(2, 1, -2, 0, 0, 0, 0, 0, 0, 0));

const fn bit(n: u16, i: u16) -> i32 {
    ((n >> i) & 1) as i32
}

/// Custom unit number `n` (0..1024): an opaque unit that only supports
/// division by simple units.
pub const fn custom_unit(n: u16) -> PreciseUnit {
    unit(
        1.0,
        dim(
            7 - 4 * bit(n, 8),
            -2 + 3 * bit(n, 7),
            7 * bit(n, 9),
            -3 - bit(n, 6),
            3 * bit(n, 4),
            -2,
            -2 + 2 * bit(n, 5),
            0,
            -2 * bit(n, 3),
            0,
        )
        .with_per_unit(bit(n, 2) != 0)
        .with_i_flag(bit(n, 1) != 0)
        .with_e_flag(bit(n, 0) != 0),
    )
}

/// Custom counting unit number `n` (0..16).
pub const fn custom_count_unit(n: u16) -> PreciseUnit {
    unit(
        1.0,
        dim(0, 0, 0, 3, -3, 0, -bit(n, 3), 0, 0, 0)
            .with_per_unit(bit(n, 2) != 0)
            .with_i_flag(bit(n, 1) != 0)
            .with_e_flag(bit(n, 0) != 0),
    )
}

/// Inverse of [`custom_unit`], for units that carry the custom marker.
pub fn custom_unit_number(base: Dimension) -> Option<u16> {
    use crate::BaseDimension::*;
    if base.exponent(Mole) != -2 || base.exponent(Ampere).abs() < 2 {
        return None;
    }
    let mut n = 0;
    n += base.e_flag() as u16 + 2 * base.i_flag() as u16;
    n += 4 * base.per_unit() as u16;
    n += if base.exponent(Meter).abs() < 4 { 256 } else { 0 };
    n += if base.exponent(Second).abs() >= 6 { 512 } else { 0 };
    n += if base.exponent(Kilogram).abs() <= 1 { 128 } else { 0 };
    n += if base.exponent(Kelvin).abs() == 3 { 16 } else { 0 };
    n += if base.exponent(Ampere) == -4 { 64 } else { 0 };
    n += if base.exponent(Candela).abs() >= 2 { 0 } else { 32 };
    n += if base.exponent(Currency).abs() >= 2 { 8 } else { 0 };
    Some(n)
}

/// Inverse of [`custom_count_unit`].
pub fn custom_count_unit_number(base: Dimension) -> Option<u16> {
    use crate::BaseDimension::*;
    let marked = base.exponent(Kelvin) == -3 && base.exponent(Ampere) == 3;
    if !marked || base.exponent(Mole) == -2 {
        return None;
    }
    let mut n = base.e_flag() as u16 + 2 * base.i_flag() as u16;
    n += 4 * base.per_unit() as u16;
    n += if base.exponent(Candela) == 0 { 0 } else { 8 };
    Some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_numbers_round_trip() {
        for n in 0..1024 {
            assert_eq!(custom_unit_number(custom_unit(n).base()), Some(n));
        }
        for n in 0..16 {
            assert_eq!(
                custom_count_unit_number(custom_count_unit(n).base()),
                Some(n)
            );
        }
    }

    #[test]
    fn derived_relations() {
        assert_eq!(N, KG * M / S.pow(2));
        assert_eq!(J, N * M);
        assert_eq!(W, J / S);
        assert_eq!(V, W / A);
        assert_eq!(OHM, V / A);
        assert!(KWH.equivalent(&(W.scale(1000.0) * HR)));
    }

    #[test]
    fn equation_units_carry_marker() {
        assert!(DB.is_equation());
        assert!(PH.is_equation());
        assert!(!DEG_C.is_equation());
        assert!(DEG_C.is_temperature());
        assert!(!GAS_MARK.is_temperature());
    }
}
