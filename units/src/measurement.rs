/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::context::UnitContext;
use crate::convert::try_convert;
use crate::equation::{linear_dimension, Equation};
use crate::numeric::{leading_number, number_words};
use crate::{ParseOptions, PreciseUnit, UnitError};

/// A value with a unit.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Measurement(pub f64, pub PreciseUnit);

impl Measurement {
    pub fn new(value: f64, unit: PreciseUnit) -> Self {
        Measurement(value, unit)
    }

    pub fn from_unit(unit: PreciseUnit) -> Self {
        Measurement(1.0, unit)
    }

    pub fn from_value(value: f64) -> Self {
        Measurement(value, PreciseUnit::ONE)
    }

    /// Parse a measurement with the global context and default options.
    pub fn parse(input: &str) -> Result<Self, UnitError> {
        let m = Self::parse_with(
            UnitContext::global(),
            input,
            &ParseOptions::default(),
        );
        match m.is_valid() {
            true => Ok(m),
            false => Err(UnitError::ParseError(input.to_string())),
        }
    }

    /// Parse `"<number> <unit>"`. The number may be a numerical
    /// expression or spelled out, and may also follow the unit
    /// (`"gas mark 3"`). Without a number the value is 1.
    pub fn parse_with(
        ctx: &UnitContext,
        input: &str,
        options: &ParseOptions,
    ) -> Self {
        let input = input.trim();
        let unit = |s: &str| match s.trim() {
            "" => PreciseUnit::ONE,
            s => ctx.parse_unit(s, options),
        };

        let (value, used) = leading_number(input);
        if used > 0 {
            return Measurement(value, unit(&input[used..]));
        }
        if let Some((value, used)) = number_words(input) {
            return Measurement(value, unit(&input[used..]));
        }
        if let Some((head, last)) = input.rsplit_once(char::is_whitespace) {
            let (value, used) = leading_number(last);
            if used == last.len() && used > 0 {
                return Measurement(value, unit(head));
            }
        }
        Measurement(1.0, unit(input))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn unit(&self) -> PreciseUnit {
        self.1
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.1.is_valid()
    }

    pub fn convert_to(self, unit: &PreciseUnit) -> Result<Self, UnitError> {
        Ok(Measurement(try_convert(self.0, &self.1, unit)?, *unit))
    }

    /// The value in the linear unit underlying an equation unit.
    fn linearize(self) -> Measurement {
        match Equation::of(self.1.base()) {
            Some(eq) => Measurement(
                eq.to_linear(self.0, self.1.base()),
                self.1.with_base(linear_dimension(self.1.base())),
            ),
            None => self,
        }
    }

    /* Note: we cannot implement the trait, because it does not allow
    for error conditions. */
    pub fn partial_cmp(
        &self,
        rhs: &Self,
    ) -> Result<Option<Ordering>, UnitError> {
        Ok(self.0.partial_cmp(&rhs.convert_to(&self.1)?.0))
    }
}

impl Display for Measurement {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", UnitContext::global().render_measurement(self))
    }
}

impl FromStr for Measurement {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add<Measurement> for Measurement {
    type Output = Result<Measurement, UnitError>;
    fn add(self, rhs: Measurement) -> Result<Measurement, UnitError> {
        let linear = self.linearize();
        let sum = linear.0 + rhs.convert_to(&linear.1)?.0;
        Measurement(sum, linear.1).convert_to(&self.1)
    }
}

impl Sub<Measurement> for Measurement {
    type Output = Result<Measurement, UnitError>;
    fn sub(self, rhs: Measurement) -> Result<Measurement, UnitError> {
        let linear = self.linearize();
        let difference = linear.0 - rhs.convert_to(&linear.1)?.0;
        Measurement(difference, linear.1).convert_to(&self.1)
    }
}

impl Mul<Measurement> for Measurement {
    type Output = Result<Measurement, UnitError>;
    fn mul(self, rhs: Measurement) -> Result<Measurement, UnitError> {
        let (l, r) = (self.linearize(), rhs.linearize());
        match l.1 * r.1 {
            unit if unit.is_valid() => Ok(Measurement(l.0 * r.0, unit)),
            _ => Err(UnitError::Conversion(l.1.to_string(), r.1.to_string())),
        }
    }
}

impl Div<Measurement> for Measurement {
    type Output = Result<Measurement, UnitError>;
    fn div(self, rhs: Measurement) -> Result<Measurement, UnitError> {
        let (l, r) = (self.linearize(), rhs.linearize());
        match l.1 / r.1 {
            unit if unit.is_valid() => Ok(Measurement(l.0 / r.0, unit)),
            _ => Err(UnitError::Conversion(l.1.to_string(), r.1.to_string())),
        }
    }
}

impl Mul<f64> for Measurement {
    type Output = Measurement;
    fn mul(self, rhs: f64) -> Measurement {
        Measurement(self.0 * rhs, self.1)
    }
}

impl Div<f64> for Measurement {
    type Output = Measurement;
    fn div(self, rhs: f64) -> Measurement {
        Measurement(self.0 / rhs, self.1)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use approx::assert_relative_eq;

    use super::Measurement;
    use crate::unit_defs::{DEG_F, FT, GAS_MARK, IN, KG, M, S};
    use crate::{ParseOptions, UnitContext};

    fn parse(s: &str) -> Measurement {
        Measurement::parse_with(UnitContext::global(), s, &ParseOptions::default())
    }

    #[test]
    fn parse_values() {
        assert_eq!(parse("3 kg"), Measurement(3.0, KG));
        assert_eq!(parse("2.5m"), Measurement(2.5, M));
        assert_eq!(parse("twelve in"), Measurement(12.0, IN));
        assert_eq!(parse("m"), Measurement(1.0, M));
        assert_eq!(parse("42"), Measurement(42.0, crate::PreciseUnit::ONE));
        let mark = parse("gas mark 3");
        assert_eq!(mark, Measurement(3.0, GAS_MARK));
        assert_relative_eq!(
            mark.convert_to(&DEG_F).unwrap().0,
            325.0,
            epsilon = 1.0
        );
        assert!(Measurement::parse("3 ((m").is_err());
    }

    #[test]
    fn arithmetic() {
        let a = Measurement(1.0, FT);
        let b = Measurement(12.0, IN);
        let sum = (a + b).unwrap();
        assert_eq!(sum.1, FT);
        assert_relative_eq!(sum.0, 2.0, epsilon = 1e-12);
        assert!((a + Measurement(1.0, S)).is_err());
        let speed = (Measurement(10.0, M) / Measurement(2.0, S)).unwrap();
        assert_eq!(speed, Measurement(5.0, M / S));
        assert_eq!(a * 3.0, Measurement(3.0, FT));
    }

    #[test]
    fn comparison() {
        let a = Measurement(1.0, FT);
        assert_eq!(
            a.partial_cmp(&Measurement(13.0, IN)).unwrap(),
            Some(Ordering::Less)
        );
        assert!(a.partial_cmp(&Measurement(1.0, KG)).is_err());
    }
}
