/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Div, Mul};
use std::str::FromStr;

use crate::commodity::{invert_code, multiply_codes, pow_code};
use crate::{BaseDimension, Dimension, UnitError};

/// A unit of measurement: a multiplier relative to the base dimensions,
/// the dimensions themselves and an optional commodity code.
///
/// All operations are total: invalid combinations produce
/// [`PreciseUnit::ERROR`] rather than failing.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    not(feature = "serialize_as_string"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(
    feature = "serialize_as_string",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
#[cfg_attr(
    all(feature = "schemars", not(feature = "serialize_as_string")),
    derive(schemars::JsonSchema)
)]
pub struct PreciseUnit {
    multiplier: f64,
    base: Dimension,
    commodity: u32,
}

impl PreciseUnit {
    pub const ONE: Self = PreciseUnit::new(1.0, Dimension::NONE);

    pub const ERROR: Self = PreciseUnit {
        multiplier: f64::NAN,
        base: Dimension::ERROR,
        commodity: 0,
    };

    pub const fn new(multiplier: f64, base: Dimension) -> Self {
        PreciseUnit {
            multiplier,
            base,
            commodity: 0,
        }
    }

    pub const fn with_commodity_code(
        multiplier: f64,
        base: Dimension,
        commodity: u32,
    ) -> Self {
        PreciseUnit {
            multiplier,
            base,
            commodity,
        }
    }

    pub fn parse(input: &str) -> Result<Self, UnitError> {
        match crate::parse_unit(input) {
            unit if unit.is_error() => {
                Err(UnitError::ParseError(input.to_string()))
            }
            unit => Ok(unit),
        }
    }

    pub const fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub const fn base(&self) -> Dimension {
        self.base
    }

    pub const fn commodity(&self) -> u32 {
        self.commodity
    }

    /// The same unit with a different commodity code.
    pub const fn with_commodity(self, commodity: u32) -> Self {
        PreciseUnit { commodity, ..self }
    }

    /// The same multiplier and commodity on a different base.
    pub const fn with_base(self, base: Dimension) -> Self {
        PreciseUnit { base, ..self }
    }

    /// The same base and commodity with a different multiplier.
    pub const fn with_multiplier(self, multiplier: f64) -> Self {
        PreciseUnit { multiplier, ..self }
    }

    pub const fn is_error(&self) -> bool {
        self.base.is_error()
    }

    /// Not the error sentinel and carrying a finite multiplier.
    pub fn is_valid(&self) -> bool {
        !self.is_error() && self.multiplier.is_finite()
    }

    pub fn is_equation(&self) -> bool {
        self.base.equation()
    }

    /// Kelvin based, with the e flag marking an offset scale.
    pub fn is_temperature(&self) -> bool {
        self.base.e_flag()
            && !self.base.equation()
            && self.base.has_same_base(Dimension::new([
                0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
            ]))
    }

    pub fn has_same_base(&self, other: &Self) -> bool {
        self.base.has_same_base(other.base)
    }

    /// Dimensions match apart from counting units and the commodities
    /// are the same.
    pub fn is_convertible(&self, other: &Self) -> bool {
        self.commodity == other.commodity
            && self.base.equivalent_non_counting(other.base)
    }

    /// Equality with a tolerance of a few ulps on the multiplier.
    pub fn equivalent(&self, other: &Self) -> bool {
        self.base == other.base
            && self.commodity == other.commodity
            && round_equals(self.multiplier, other.multiplier)
    }

    pub fn exponent(&self, dim: BaseDimension) -> i32 {
        self.base.exponent(dim)
    }

    /// Overflowed and undefined multipliers collapse to the error unit.
    fn checked(self) -> Self {
        match self.multiplier.is_finite() {
            true => self,
            false => Self::ERROR,
        }
    }

    pub fn invert(self) -> Self {
        if self.is_error() || self.multiplier == 0.0 {
            return Self::ERROR;
        }
        match self.base.checked_inv() {
            Some(base) => PreciseUnit {
                multiplier: 1.0 / self.multiplier,
                base,
                commodity: invert_code(self.commodity),
            }
            .checked(),
            None => Self::ERROR,
        }
    }

    pub fn pow(self, power: i32) -> Self {
        if self.is_error() {
            return Self::ERROR;
        }
        match self.base.checked_pow(power) {
            Some(base) => PreciseUnit {
                multiplier: self.multiplier.powi(power),
                base,
                commodity: pow_code(self.commodity, power),
            }
            .checked(),
            None => Self::ERROR,
        }
    }

    /// Integer root; the dimensions must divide evenly.
    pub fn root(self, power: i32) -> Self {
        if self.is_error() || power == 0 {
            return Self::ERROR;
        }
        if power < 0 {
            return self.root(-power).invert();
        }
        let multiplier = match power {
            1 => self.multiplier,
            2 => self.multiplier.sqrt(),
            3 => self.multiplier.cbrt(),
            n => self.multiplier.powf(1.0 / n as f64),
        };
        match (self.base.checked_root(power), self.commodity) {
            (Some(base), 0) => PreciseUnit {
                multiplier,
                base,
                commodity: 0,
            }
            .checked(),
            _ => Self::ERROR,
        }
    }

    /// Multiply the multiplier by a plain factor.
    pub fn scale(self, factor: f64) -> Self {
        if self.is_error() {
            return Self::ERROR;
        }
        PreciseUnit {
            multiplier: self.multiplier * factor,
            ..self
        }
        .checked()
    }

    fn combine(
        self,
        rhs: Self,
        multiplier: f64,
        base: Option<Dimension>,
    ) -> Self {
        if self.is_error() || rhs.is_error() {
            return Self::ERROR;
        }
        match (base, multiply_codes(self.commodity, rhs.commodity)) {
            (Some(base), Some(commodity)) => PreciseUnit {
                multiplier,
                base,
                commodity,
            }
            .checked(),
            _ => Self::ERROR,
        }
    }
}

impl Mul for PreciseUnit {
    type Output = PreciseUnit;
    fn mul(self, rhs: PreciseUnit) -> PreciseUnit {
        self.combine(
            rhs,
            self.multiplier * rhs.multiplier,
            self.base.checked_mul(rhs.base),
        )
    }
}

impl Div for PreciseUnit {
    type Output = PreciseUnit;
    fn div(self, rhs: PreciseUnit) -> PreciseUnit {
        let base = rhs
            .base
            .checked_inv()
            .and_then(|inv| self.base.checked_mul(inv));
        if rhs.multiplier == 0.0 {
            return PreciseUnit::ERROR;
        }
        let rhs_inv = rhs.with_commodity(invert_code(rhs.commodity));
        self.combine(rhs_inv, self.multiplier / rhs.multiplier, base)
    }
}

fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl PartialEq for PreciseUnit {
    fn eq(&self, other: &Self) -> bool {
        canonical_bits(self.multiplier) == canonical_bits(other.multiplier)
            && self.base == other.base
            && self.commodity == other.commodity
    }
}

impl Eq for PreciseUnit {}

impl Hash for PreciseUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.multiplier).hash(state);
        self.base.hash(state);
        self.commodity.hash(state);
    }
}

const HALF_PRECISION: f64 = 5e-13;

/// Round away the last twelve bits of the mantissa.
fn round_precise(value: f64) -> f64 {
    f64::from_bits(
        value.to_bits().wrapping_add(0x800) & 0xFFFF_FFFF_FFFF_F000,
    )
}

pub(crate) fn round_equals(a: f64, b: f64) -> bool {
    if a == b || (a.is_nan() && b.is_nan()) {
        return true;
    }
    let diff = a - b;
    if diff == 0.0 || diff.is_subnormal() {
        return true;
    }
    let (ra, rb) = (round_precise(a), round_precise(b));
    ra == rb
        || round_precise(b * (1.0 + HALF_PRECISION)) == ra
        || round_precise(b * (1.0 - HALF_PRECISION)) == ra
        || round_precise(a * (1.0 + HALF_PRECISION)) == rb
        || round_precise(a * (1.0 - HALF_PRECISION)) == rb
}

impl Default for PreciseUnit {
    fn default() -> Self {
        Self::ONE
    }
}

impl Display for PreciseUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", crate::render_unit(self))
    }
}

impl FromStr for PreciseUnit {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<PreciseUnit> for String {
    fn from(val: PreciseUnit) -> Self {
        format!("{}", val)
    }
}

impl TryFrom<String> for PreciseUnit {
    type Error = UnitError;
    fn try_from(val: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&val)
    }
}

#[cfg(all(feature = "schemars", feature = "serialize_as_string"))]
impl schemars::JsonSchema for PreciseUnit {
    fn schema_name() -> String {
        String::from("PreciseUnit")
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        String::json_schema(gen)
    }
}

#[cfg(test)]
mod tests {
    use super::{round_equals, PreciseUnit};
    use crate::unit_defs::{KG, M, S};
    use crate::Dimension;

    #[test]
    fn error_propagates() {
        assert!((PreciseUnit::ERROR * M).is_error());
        assert!((M / PreciseUnit::ERROR).is_error());
        assert!(PreciseUnit::ERROR.pow(2).is_error());
        assert!(M.scale(0.0).invert().is_error());
        assert_eq!(PreciseUnit::ERROR, PreciseUnit::ERROR);
    }

    #[test]
    fn overflow_is_error() {
        assert!(M.pow(7).is_valid());
        assert!(M.pow(8).is_error());
        assert!((KG.pow(3) * KG).is_error());
    }

    #[test]
    fn algebra() {
        let n = KG * M / S.pow(2);
        assert_eq!(n.invert().invert(), n);
        assert_eq!(n.pow(0), PreciseUnit::ONE);
        assert_eq!(M.pow(2).root(2), M);
        assert!(M.root(2).is_error());
        assert_eq!(n / n, PreciseUnit::ONE);
    }

    #[test]
    fn nan_results_are_error() {
        let zero = M.scale(0.0);
        assert!((zero / zero).is_error());
        assert!(PreciseUnit::new(f64::NAN, Dimension::NONE)
            .scale(2.0)
            .is_error());
    }

    #[test]
    fn non_finite_results_are_error() {
        assert!((M / M.scale(0.0)).is_error());
        assert!((M.scale(0.0) / S).is_valid());
        assert!(M.scale(1e300).scale(1e300).is_error());
        assert!(M.scale(f64::INFINITY).is_error());
        assert!(M.scale(1e200).pow(2).is_error());
        assert!(M.scale(1e-200).invert().is_valid());
        assert!(M.scale(1e-320).invert().is_error());
        assert!(!PreciseUnit::new(f64::INFINITY, Dimension::NONE).is_valid());
    }

    #[test]
    fn rounding_compare() {
        assert!(round_equals(0.1 + 0.2, 0.3));
        assert!(round_equals(1e-9, 1e-9 * (1.0 + 1e-14)));
        assert!(!round_equals(1.0, 1.0001));
        assert!(M.scale(0.3).equivalent(&M.scale(0.1 + 0.2)));
    }
}
