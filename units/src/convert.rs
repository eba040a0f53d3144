/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Value conversion between units.
//!
//! Linear units convert by the ratio of their multipliers. Offset
//! temperature scales, gauge pressures, per-unit values and equation
//! units go through their linear base first. Incompatible units give
//! NaN.

use std::f64::consts::PI;

use crate::equation::{linear_dimension, Equation};
use crate::precise_unit::round_equals;
use crate::unit_defs::{AVOGADRO, DEG_F, STANDARD_GRAVITY};
use crate::{BaseDimension, Dimension, PreciseUnit, UnitError};

const ZERO_CELSIUS: f64 = 273.15;
/// Reference for gauge units when none is given (one atmosphere, in Pa).
const STANDARD_PRESSURE: f64 = 101_325.0;

const MASS: Dimension = Dimension::new([0, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
const FORCE: Dimension = Dimension::new([1, 1, -2, 0, 0, 0, 0, 0, 0, 0]);
const PRESSURE: Dimension = Dimension::new([-1, 1, -2, 0, 0, 0, 0, 0, 0, 0]);

/// Convert `value` from one unit to another. Returns NaN when the
/// units are not convertible.
pub fn convert(value: f64, from: &PreciseUnit, to: &PreciseUnit) -> f64 {
    if !from.is_valid() || !to.is_valid() || from.commodity() != to.commodity()
    {
        return f64::NAN;
    }
    if from == to {
        return value;
    }
    if from.is_equation() || to.is_equation() {
        return convert_equation(value, from, to, None);
    }
    if from.is_temperature() || to.is_temperature() {
        return convert_temperature(value, from, to);
    }
    if is_gauge_pair(from, to) {
        let absolute = if from.base().e_flag() { to } else { from };
        let reference = STANDARD_PRESSURE / absolute.multiplier();
        return convert_gauge(value, from, to, reference);
    }
    convert_linear(value, from, to)
}

/// Convert with a reference value: the base of per-unit values, or the
/// offset between gauge and absolute units. The reference is expressed
/// in the units of the side without the per-unit or gauge flag.
pub fn convert_with_reference(
    value: f64,
    from: &PreciseUnit,
    to: &PreciseUnit,
    reference: f64,
) -> f64 {
    if !from.is_valid() || !to.is_valid() {
        return f64::NAN;
    }
    if from.is_equation() || to.is_equation() {
        return convert_equation(value, from, to, Some(reference));
    }
    let (fb, tb) = (from.base(), to.base());
    if fb.per_unit() != tb.per_unit() {
        return convert_per_unit(value, from, to, reference);
    }
    if is_gauge_pair(from, to) {
        return convert_gauge(value, from, to, reference);
    }
    convert(value, from, to)
}

/// Like [`convert`], reporting incompatible units as an error.
pub fn try_convert(
    value: f64,
    from: &PreciseUnit,
    to: &PreciseUnit,
) -> Result<f64, UnitError> {
    let result = convert(value, from, to);
    match result.is_nan() && !value.is_nan() {
        true => Err(UnitError::Conversion(
            crate::render_unit(from),
            crate::render_unit(to),
        )),
        false => Ok(result),
    }
}

fn convert_linear(value: f64, from: &PreciseUnit, to: &PreciseUnit) -> f64 {
    let (fb, tb) = (from.base(), to.base());
    if fb == tb {
        return value * from.multiplier() / to.multiplier();
    }
    if flags(fb) != flags(tb) {
        return f64::NAN;
    }
    if fb.has_same_base(tb) {
        return value * from.multiplier() / to.multiplier();
    }
    if fb.equivalent_non_counting(tb) {
        let factor = counting_factor(fb, tb);
        return value * from.multiplier() * factor / to.multiplier();
    }
    if let Some(inverse) = fb.checked_inv() {
        if inverse.has_same_base(tb) {
            return 1.0 / (value * from.multiplier()) / to.multiplier();
        }
    }
    match (fb.without_flags(), tb.without_flags()) {
        (MASS, FORCE) => {
            value * from.multiplier() * STANDARD_GRAVITY / to.multiplier()
        }
        (FORCE, MASS) => {
            value * from.multiplier() / STANDARD_GRAVITY / to.multiplier()
        }
        _ => f64::NAN,
    }
}

fn flags(dim: Dimension) -> (bool, bool, bool) {
    (dim.per_unit(), dim.i_flag(), dim.e_flag())
}

/// Factor between units that differ in mole, count or radian exponents
/// only: Avogadro's number per mole traded for a count, 2π per radian
/// traded for a count (cycle), and nothing for bare counts.
fn counting_factor(from: Dimension, to: Dimension) -> f64 {
    let diff = |d: BaseDimension| from.exponent(d) - to.exponent(d);
    let (mole, count, radian) = (
        diff(BaseDimension::Mole),
        diff(BaseDimension::Count),
        diff(BaseDimension::Radian),
    );
    let mut factor = 1.0;
    if mole != 0 {
        if count + radian != -mole && count != -mole {
            return f64::NAN;
        }
        factor *= AVOGADRO.powi(mole);
    }
    if radian != 0 {
        factor *= (2.0 * PI).powi(-radian);
    }
    factor
}

/// Offset temperature scales carry the e flag on a kelvin base.
/// Conversions go through degrees Celsius so that the common scales
/// convert exactly.
fn convert_temperature(
    value: f64,
    from: &PreciseUnit,
    to: &PreciseUnit,
) -> f64 {
    let kelvin = |u: &PreciseUnit| {
        u.base()
            .without_flags()
            .has_same_base(Dimension::new([0, 0, 0, 0, 1, 0, 0, 0, 0, 0]))
    };
    if !kelvin(from) || !kelvin(to) {
        return f64::NAN;
    }
    from_celsius(to_celsius(value, from), to)
}

fn is_fahrenheit(unit: &PreciseUnit) -> bool {
    unit.is_temperature() && round_equals(unit.multiplier(), DEG_F.multiplier())
}

fn to_celsius(value: f64, unit: &PreciseUnit) -> f64 {
    if is_fahrenheit(unit) {
        (value - 32.0) * 5.0 / 9.0
    } else if unit.is_temperature() {
        value * unit.multiplier()
    } else {
        value * unit.multiplier() - ZERO_CELSIUS
    }
}

fn from_celsius(celsius: f64, unit: &PreciseUnit) -> f64 {
    if is_fahrenheit(unit) {
        celsius * 9.0 / 5.0 + 32.0
    } else if unit.is_temperature() {
        celsius / unit.multiplier()
    } else {
        (celsius + ZERO_CELSIUS) / unit.multiplier()
    }
}

/// Gauge units carry the e flag on a pressure base.
fn is_gauge_pair(from: &PreciseUnit, to: &PreciseUnit) -> bool {
    let (fb, tb) = (from.base(), to.base());
    fb.e_flag() != tb.e_flag()
        && fb.without_flags() == PRESSURE
        && tb.without_flags() == PRESSURE
}

/// `reference` is the absolute pressure at gauge zero, in the units of
/// the absolute side.
fn convert_gauge(
    value: f64,
    from: &PreciseUnit,
    to: &PreciseUnit,
    reference: f64,
) -> f64 {
    if !is_gauge_pair(from, to) {
        return f64::NAN;
    }
    match from.base().e_flag() {
        true => value * from.multiplier() / to.multiplier() + reference,
        false => (value - reference) * from.multiplier() / to.multiplier(),
    }
}

/// `reference` is the base quantity of the per-unit side, in the units
/// of the other side.
fn convert_per_unit(
    value: f64,
    from: &PreciseUnit,
    to: &PreciseUnit,
    reference: f64,
) -> f64 {
    let (fb, tb) = (from.base(), to.base());
    let compatible = |pu: Dimension, other: Dimension| {
        pu.without_flags().is_empty() || pu.has_same_base(other)
    };
    if fb.per_unit() {
        match compatible(fb, tb) {
            true => value * from.multiplier() * reference,
            false => f64::NAN,
        }
    } else {
        match compatible(tb, fb) {
            true => value / reference / to.multiplier(),
            false => f64::NAN,
        }
    }
}

/// The linear unit underlying an equation unit.
fn linear_unit(unit: &PreciseUnit) -> PreciseUnit {
    unit.with_base(linear_dimension(unit.base()))
}

fn convert_equation(
    value: f64,
    from: &PreciseUnit,
    to: &PreciseUnit,
    reference: Option<f64>,
) -> f64 {
    let (linear_from, x) = match Equation::of(from.base()) {
        Some(eq) if from.is_equation() => {
            (linear_unit(from), eq.to_linear(value, from.base()))
        }
        _ => (*from, value),
    };
    let linear_to = match to.is_equation() {
        true => linear_unit(to),
        false => *to,
    };
    let y = match reference {
        Some(reference) => {
            convert_with_reference(x, &linear_from, &linear_to, reference)
        }
        None => convert(x, &linear_from, &linear_to),
    };
    match Equation::of(to.base()) {
        Some(eq) if to.is_equation() => eq.from_linear(y, to.base()),
        _ => y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit_defs::*;
    use approx::assert_relative_eq;

    #[test]
    fn linear() {
        assert_relative_eq!(convert(1.0, &FT, &IN), 12.0, epsilon = 1e-12);
        assert_relative_eq!(convert(1.0, &KWH, &J), 3.6e6, epsilon = 1e-6);
        assert!(convert(1.0, &M, &S).is_nan());
    }

    #[test]
    fn temperatures() {
        assert_eq!(convert(-40.0, &DEG_C, &DEG_F), -40.0);
        assert_relative_eq!(convert(100.0, &DEG_C, &K), 373.15, epsilon = 1e-9);
        assert_relative_eq!(convert(0.0, &K, &DEG_F), -459.67, epsilon = 1e-9);
        assert_relative_eq!(convert(491.67, &DEG_R, &DEG_C), 0.0, epsilon = 1e-9);
        assert_relative_eq!(convert(80.0, &DEG_RE, &DEG_C), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn counting() {
        assert_relative_eq!(convert(1.0, &MOL, &COUNT), AVOGADRO, max_relative = 1e-12);
        assert_relative_eq!(convert(1.0, &HZ, &(RAD / S)), 2.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(convert(60.0, &RPM, &HZ), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn cross_domain() {
        assert_relative_eq!(convert(1.0, &KG, &N), STANDARD_GRAVITY, epsilon = 1e-12);
        assert_relative_eq!(convert(1.0, &LBF, &LB), 1.0, epsilon = 1e-9);
        assert_relative_eq!(convert(4.0, &HZ, &S), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn gauge_and_per_unit() {
        assert_relative_eq!(convert(0.0, &PSIG, &PA), 101_325.0, epsilon = 1e-6);
        assert_relative_eq!(
            convert_with_reference(10.0, &PSIG, &PSI, 14.0),
            24.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            convert_with_reference(0.5, &PU, &W, 1000.0),
            500.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            convert_with_reference(250.0, &W, &PU, 1000.0),
            0.25,
            epsilon = 1e-12
        );
        assert!(convert(1.0, &PU, &W).is_nan());
    }

    #[test]
    fn equations() {
        assert_relative_eq!(convert(20.0, &DB, &ONE), 10.0, epsilon = 1e-9);
        assert_relative_eq!(convert(0.0, &DBM, &W), 1e-3, epsilon = 1e-12);
        assert_relative_eq!(convert(1.0, &W, &DBM), 30.0, epsilon = 1e-9);
        assert_relative_eq!(convert(3.0, &GAS_MARK, &DEG_F), 325.0, epsilon = 1e-6);
        assert_relative_eq!(convert(7.0, &PH, &MOLAR), 1e-7, max_relative = 1e-9);
    }

    #[test]
    fn errors() {
        assert!(try_convert(1.0, &M, &KG).is_err());
        assert_eq!(try_convert(1.0, &M, &M), Ok(1.0));
        assert!(convert(1.0, &PreciseUnit::ERROR, &M).is_nan());
        assert!(convert(1.0, &PreciseUnit::ERROR, &PreciseUnit::ERROR).is_nan());
        assert!(try_convert(1.0, &PreciseUnit::ERROR, &PreciseUnit::ERROR)
            .is_err());
        let error = crate::parse_unit("m/0m");
        assert!(convert(5.0, &error, &error).is_nan());
    }
}
