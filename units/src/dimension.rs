/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The ten base dimensions tracked by a [`Dimension`], in rendering order.
#[derive(
    Serialize, Deserialize, PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Copy, Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum BaseDimension {
    Meter,
    Kilogram,
    Second,
    Ampere,
    Kelvin,
    Mole,
    Candela,
    Count,
    Currency,
    Radian,
}

/// Packed exponent vector plus four flag bits.
///
/// Each exponent is stored as a small two's complement field; the
/// field widths bound the representable range (e.g. meter in -8..=7,
/// candela in -2..=1). Arithmetic outside of the range is reported by
/// the `checked_*` operations.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct Dimension(u32);

#[derive(Clone, Copy)]
struct Field {
    shift: u32,
    width: u32,
}

impl Field {
    const fn mask(&self) -> u32 {
        ((1 << self.width) - 1) << self.shift
    }

    const fn min(&self) -> i32 {
        -(1 << (self.width - 1))
    }

    const fn max(&self) -> i32 {
        (1 << (self.width - 1)) - 1
    }

    const fn get(&self, bits: u32) -> i32 {
        let raw = ((bits >> self.shift) & ((1 << self.width) - 1)) as i32;
        if raw >= 1 << (self.width - 1) {
            raw - (1 << self.width)
        } else {
            raw
        }
    }

    const fn set(&self, bits: u32, value: i32) -> u32 {
        (bits & !self.mask()) | (((value as u32) << self.shift) & self.mask())
    }
}

const FIELDS: [Field; 10] = [
    Field { shift: 0, width: 4 },  // meter
    Field { shift: 8, width: 3 },  // kilogram
    Field { shift: 4, width: 4 },  // second
    Field { shift: 11, width: 3 }, // ampere
    Field { shift: 16, width: 3 }, // kelvin
    Field { shift: 19, width: 2 }, // mole
    Field { shift: 14, width: 2 }, // candela
    Field { shift: 26, width: 2 }, // count
    Field { shift: 24, width: 2 }, // currency
    Field { shift: 21, width: 3 }, // radian
];

const PER_UNIT: u32 = 1 << 28;
const I_FLAG: u32 = 1 << 29;
const E_FLAG: u32 = 1 << 30;
const EQUATION: u32 = 1 << 31;
const EXPONENTS: u32 = PER_UNIT - 1;

impl BaseDimension {
    pub const ALL: [BaseDimension; 10] = [
        BaseDimension::Meter,
        BaseDimension::Kilogram,
        BaseDimension::Second,
        BaseDimension::Ampere,
        BaseDimension::Kelvin,
        BaseDimension::Mole,
        BaseDimension::Candela,
        BaseDimension::Count,
        BaseDimension::Currency,
        BaseDimension::Radian,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Meter => "m",
            BaseDimension::Kilogram => "kg",
            BaseDimension::Second => "s",
            BaseDimension::Ampere => "A",
            BaseDimension::Kelvin => "K",
            BaseDimension::Mole => "mol",
            BaseDimension::Candela => "cd",
            BaseDimension::Count => "count",
            BaseDimension::Currency => "$",
            BaseDimension::Radian => "rad",
        }
    }

    const fn field(self) -> Field {
        FIELDS[self as usize]
    }

    /// Smallest exponent the packed field can hold.
    pub const fn min_exponent(self) -> i32 {
        self.field().min()
    }

    /// Largest exponent the packed field can hold.
    pub const fn max_exponent(self) -> i32 {
        self.field().max()
    }
}

impl Display for BaseDimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

impl Dimension {
    /// Dimensionless, no flags.
    pub const NONE: Self = Dimension(0);

    /// Error pattern: every exponent at its minimum and every flag set.
    pub const ERROR: Self = {
        let mut bits = PER_UNIT | I_FLAG | E_FLAG | EQUATION;
        let mut i = 0;
        while i < FIELDS.len() {
            bits = FIELDS[i].set(bits, FIELDS[i].min());
            i += 1;
        }
        Dimension(bits)
    };

    /// Build from exponents in [`BaseDimension::ALL`] order. Values
    /// are truncated to the field width; use [`Dimension::from_exponents`]
    /// for a checked variant.
    pub const fn new(exponents: [i32; 10]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < FIELDS.len() {
            bits = FIELDS[i].set(bits, exponents[i]);
            i += 1;
        }
        Dimension(bits)
    }

    pub fn from_exponents(exponents: [i32; 10]) -> Option<Self> {
        BaseDimension::ALL
            .iter()
            .zip(exponents)
            .all(|(d, e)| (d.min_exponent()..=d.max_exponent()).contains(&e))
            .then(|| Self::new(exponents))
    }

    pub const fn from_bits(bits: u32) -> Self {
        Dimension(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn exponent(self, dim: BaseDimension) -> i32 {
        dim.field().get(self.0)
    }

    pub fn exponents(self) -> [i32; 10] {
        BaseDimension::ALL.map(|d| self.exponent(d))
    }

    pub const fn per_unit(self) -> bool {
        self.0 & PER_UNIT != 0
    }

    pub const fn i_flag(self) -> bool {
        self.0 & I_FLAG != 0
    }

    pub const fn e_flag(self) -> bool {
        self.0 & E_FLAG != 0
    }

    pub const fn equation(self) -> bool {
        self.0 & EQUATION != 0
    }

    const fn with_bit(self, bit: u32, on: bool) -> Self {
        match on {
            true => Dimension(self.0 | bit),
            false => Dimension(self.0 & !bit),
        }
    }

    pub const fn with_per_unit(self, on: bool) -> Self {
        self.with_bit(PER_UNIT, on)
    }

    pub const fn with_i_flag(self, on: bool) -> Self {
        self.with_bit(I_FLAG, on)
    }

    pub const fn with_e_flag(self, on: bool) -> Self {
        self.with_bit(E_FLAG, on)
    }

    pub const fn with_equation(self, on: bool) -> Self {
        self.with_bit(EQUATION, on)
    }

    pub const fn with_exponent(self, dim: BaseDimension, value: i32) -> Self {
        Dimension(dim.field().set(self.0, value))
    }

    /// The same exponents without any flags.
    pub const fn without_flags(self) -> Self {
        Dimension(self.0 & EXPONENTS)
    }

    /// Dimensionless and without flags.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_error(self) -> bool {
        self.0 == Self::ERROR.0
    }

    /// Same exponents, flags ignored.
    pub const fn has_same_base(self, other: Self) -> bool {
        self.0 & EXPONENTS == other.0 & EXPONENTS
    }

    /// Same exponents apart from mole, count and radian.
    pub fn equivalent_non_counting(self, other: Self) -> bool {
        BaseDimension::ALL
            .iter()
            .filter(|d| {
                !matches!(
                    d,
                    BaseDimension::Mole | BaseDimension::Count | BaseDimension::Radian
                )
            })
            .all(|d| self.exponent(*d) == other.exponent(*d))
    }

    /// Number of base dimensions with a non-zero exponent.
    pub fn unit_type_count(self) -> usize {
        BaseDimension::ALL
            .iter()
            .filter(|d| self.exponent(**d) != 0)
            .count()
    }

    fn combine(
        exponents: impl Iterator<Item = (BaseDimension, Option<i32>)>,
        flags: u32,
    ) -> Option<Self> {
        let mut bits = flags;
        for (dim, value) in exponents {
            let value = value?;
            if !(dim.min_exponent()..=dim.max_exponent()).contains(&value) {
                return None;
            }
            bits = dim.field().set(bits, value);
        }
        Some(Dimension(bits))
    }

    /// Product: exponents add, per-unit and equation flags combine with
    /// OR, the i and e flags with XOR.
    pub fn checked_mul(self, other: Self) -> Option<Self> {
        let flags = ((self.0 | other.0) & (PER_UNIT | EQUATION))
            | ((self.0 ^ other.0) & (I_FLAG | E_FLAG));
        Self::combine(
            BaseDimension::ALL
                .iter()
                .map(|d| (*d, self.exponent(*d).checked_add(other.exponent(*d)))),
            flags,
        )
    }

    /// Inverse: exponents negated, flags kept.
    pub fn checked_inv(self) -> Option<Self> {
        Self::combine(
            BaseDimension::ALL
                .iter()
                .map(|d| (*d, self.exponent(*d).checked_neg())),
            self.0 & !EXPONENTS,
        )
    }

    pub fn checked_div(self, other: Self) -> Option<Self> {
        self.checked_mul(other.checked_inv()?)
    }

    /// Integer power. The i and e flags survive only odd powers.
    pub fn checked_pow(self, power: i32) -> Option<Self> {
        let mut flags = self.0 & (PER_UNIT | EQUATION);
        if power % 2 != 0 {
            flags |= self.0 & (I_FLAG | E_FLAG);
        }
        Self::combine(
            BaseDimension::ALL
                .iter()
                .map(|d| (*d, self.exponent(*d).checked_mul(power))),
            flags,
        )
    }

    /// Integer root; every exponent must be divisible by `power`.
    pub fn checked_root(self, power: i32) -> Option<Self> {
        if power == 0 {
            return None;
        }
        Self::combine(
            BaseDimension::ALL.iter().map(|d| {
                let e = self.exponent(*d);
                (*d, (e % power == 0).then(|| e / power))
            }),
            self.0 & !EXPONENTS,
        )
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::NONE
    }
}

/// Renders the dimensions as a parseable unit string, e.g. `kg*m/s^2`.
/// Dimensionless without flags renders as `one`.
impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let mut parts: Vec<String> = Vec::new();
        if self.per_unit() {
            parts.push("pu".to_string());
        }
        if self.e_flag() {
            parts.push("eflag".to_string());
        }
        if self.i_flag() {
            parts.push("iflag".to_string());
        }

        let exponents = BaseDimension::ALL.map(|d| (d, self.exponent(d)));
        let positive = exponents.iter().filter(|(_, e)| *e > 0);
        let negative: Vec<_> = exponents.iter().filter(|(_, e)| *e < 0).collect();

        parts.extend(positive.map(|(d, e)| power_term(*d, *e)));

        if negative.len() == 1 && !parts.is_empty() {
            let (d, e) = negative[0];
            let numerator = parts.join("*");
            return write!(f, "{}/{}", numerator, power_term(*d, -e));
        }

        parts.extend(negative.iter().map(|(d, e)| power_term(*d, *e)));
        match parts.is_empty() {
            true => write!(f, "one"),
            false => write!(f, "{}", parts.join("*")),
        }
    }
}

fn power_term(dim: BaseDimension, exponent: i32) -> String {
    match exponent {
        1 => dim.symbol().to_string(),
        n => format!("{}^{}", dim.symbol(), n),
    }
}

#[cfg(test)]
mod tests {
    use super::{BaseDimension, Dimension};

    const NEWTON: Dimension = Dimension::new([1, 1, -2, 0, 0, 0, 0, 0, 0, 0]);

    #[test]
    fn exponents_round_trip() {
        let d = Dimension::new([-8, 3, 7, -4, 2, -2, 1, 1, -2, -4]);
        assert_eq!(d.exponents(), [-8, 3, 7, -4, 2, -2, 1, 1, -2, -4]);
    }

    #[test]
    fn out_of_range() {
        assert!(Dimension::from_exponents([8, 0, 0, 0, 0, 0, 0, 0, 0, 0]).is_none());
        assert!(NEWTON.checked_pow(4).is_none());
        assert_eq!(
            NEWTON.checked_pow(2).map(|d| d.exponent(BaseDimension::Second)),
            Some(-4)
        );
    }

    #[test]
    fn error_pattern() {
        assert!(Dimension::ERROR.is_error());
        assert!(Dimension::ERROR.per_unit() && Dimension::ERROR.equation());
        assert_eq!(Dimension::ERROR.exponent(BaseDimension::Meter), -8);
        assert_eq!(Dimension::ERROR.exponent(BaseDimension::Candela), -2);
    }

    #[test]
    fn flags() {
        let e = Dimension::NONE.with_e_flag(true);
        assert!(!e.checked_mul(e).unwrap().e_flag());
        assert!(e.checked_pow(3).unwrap().e_flag());
        assert!(!e.checked_pow(2).unwrap().e_flag());
        let pu = Dimension::NONE.with_per_unit(true);
        assert!(pu.checked_mul(pu).unwrap().per_unit());
        assert!(pu.has_same_base(Dimension::NONE));
    }

    #[test]
    fn root() {
        let area = Dimension::new([2, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            area.checked_root(2),
            Some(Dimension::new([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]))
        );
        assert!(NEWTON.checked_root(2).is_none());
    }

    #[test]
    fn display() {
        assert_eq!(NEWTON.to_string(), "m*kg/s^2");
        assert_eq!(Dimension::NONE.to_string(), "one");
        assert_eq!(
            Dimension::new([0, 0, -1, 0, 0, 0, 0, 0, 0, 0]).to_string(),
            "s^-1"
        );
        assert_eq!(
            Dimension::new([1, 0, -1, -1, 0, 0, 0, 0, 0, 0]).to_string(),
            "m*s^-1*A^-1"
        );
    }
}
