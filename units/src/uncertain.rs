/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Measurements carrying an uncertainty.
//!
//! Products and quotients combine relative uncertainties as a
//! root-sum-square, sums and differences combine absolute ones the
//! same way. The `simple_*` variants add them linearly instead.

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::context::UnitContext;
use crate::convert::try_convert;
use crate::precise_unit::round_equals;
use crate::render::format_number;
use crate::{Measurement, ParseOptions, PreciseUnit, UnitError};

/// Spellings of the plus-minus sign, longest first.
const PLUS_MINUS: &[&str] = &[
    "<u>+</u>", "&plusmn;", "&#xB1;", "&pm;", "\\pm", "+/-", "+-", "\u{b1}",
];

#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct UncertainMeasurement {
    pub value: f64,
    pub uncertainty: f64,
    pub unit: PreciseUnit,
}

impl UncertainMeasurement {
    pub fn new(value: f64, uncertainty: f64, unit: PreciseUnit) -> Self {
        UncertainMeasurement {
            value,
            uncertainty: uncertainty.abs(),
            unit,
        }
    }

    /// An exact measurement.
    pub fn exact(measurement: Measurement) -> Self {
        Self::new(measurement.0, 0.0, measurement.1)
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

    /// Parse `"<value> +/- <uncertainty> <unit>"` or the concise
    /// `"1.234(5) m"`. The unit may be given on either side of the
    /// sign; a unit on both sides converts the uncertainty into the
    /// unit of the value. Without a sign the uncertainty is zero.
    pub fn parse_with(
        ctx: &UnitContext,
        input: &str,
        options: &ParseOptions,
    ) -> Self {
        let input = input.trim();
        let sign = PLUS_MINUS
            .iter()
            .filter_map(|sign| input.find(sign).map(|pos| (pos, sign.len())))
            .min_by_key(|(pos, _)| *pos);

        let (pos, len) = match sign {
            Some(sign) => sign,
            None => {
                return match concise(input) {
                    Some((value, uncertainty, rest)) => Self::new(
                        value,
                        uncertainty,
                        match rest.trim() {
                            "" => PreciseUnit::ONE,
                            s => ctx.parse_unit(s, options),
                        },
                    ),
                    None => Self::exact(ctx.parse_measurement(input, options)),
                };
            }
        };

        let value = ctx.parse_measurement(&input[..pos], options);
        let uncertainty = ctx.parse_measurement(&input[pos + len..], options);
        if value.1 == PreciseUnit::ONE {
            Self::new(value.0, uncertainty.0, uncertainty.1)
        } else if uncertainty.1 == PreciseUnit::ONE {
            Self::new(value.0, uncertainty.0, value.1)
        } else {
            let scale = interval_scale(&uncertainty.1, &value.1).unwrap_or(f64::NAN);
            Self::new(value.0, uncertainty.0 * scale, value.1)
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn uncertainty(&self) -> f64 {
        self.uncertainty
    }

    pub fn unit(&self) -> PreciseUnit {
        self.unit
    }

    pub fn measurement(&self) -> Measurement {
        Measurement(self.value, self.unit)
    }

    pub fn uncertainty_measurement(&self) -> Measurement {
        Measurement(self.uncertainty, self.unit)
    }

    /// Uncertainty relative to the magnitude of the value.
    pub fn fractional_uncertainty(&self) -> f64 {
        self.uncertainty / self.value.abs()
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_finite() && self.uncertainty.is_finite() && self.unit.is_valid()
    }

    pub fn convert_to(self, unit: &PreciseUnit) -> Result<Self, UnitError> {
        Ok(UncertainMeasurement {
            value: try_convert(self.value, &self.unit, unit)?,
            uncertainty: self.uncertainty * interval_scale(&self.unit, unit)?,
            unit: *unit,
        })
    }

    pub fn pow(self, power: i32) -> Self {
        let value = self.value.powi(power);
        UncertainMeasurement {
            value,
            uncertainty: (power as f64 * value * self.uncertainty / self.value).abs(),
            unit: self.unit.pow(power),
        }
    }

    /// Whether `other` lies within the uncertainty interval. Exact
    /// measurements compare up to rounding.
    pub fn contains(&self, other: &Measurement) -> Result<bool, UnitError> {
        let other = other.convert_to(&self.unit)?.0;
        Ok(match self.uncertainty == 0.0 {
            true => round_equals(self.value, other),
            false => (other - self.value).abs() <= self.uncertainty,
        })
    }

    pub fn simple_add(self, rhs: Self) -> Result<Self, UnitError> {
        self.sum(rhs, false, |a, b| a + b)
    }

    pub fn simple_subtract(self, rhs: Self) -> Result<Self, UnitError> {
        self.sum(rhs, true, |a, b| a + b)
    }

    pub fn simple_product(self, rhs: Self) -> Result<Self, UnitError> {
        Ok(UncertainMeasurement {
            value: self.value * rhs.value,
            uncertainty: self.uncertainty * rhs.value.abs()
                + rhs.uncertainty * self.value.abs(),
            unit: combined_unit(self.unit * rhs.unit, &self.unit, &rhs.unit)?,
        })
    }

    pub fn simple_divide(self, rhs: Self) -> Result<Self, UnitError> {
        Ok(UncertainMeasurement {
            value: self.value / rhs.value,
            uncertainty: self.uncertainty / rhs.value.abs()
                + rhs.uncertainty * self.value.abs() / (rhs.value * rhs.value),
            unit: combined_unit(self.unit / rhs.unit, &self.unit, &rhs.unit)?,
        })
    }

    /// Add or subtract `rhs`, combining the uncertainties with
    /// `combine` after converting the right one into this unit.
    fn sum(
        self,
        rhs: Self,
        subtract: bool,
        combine: fn(f64, f64) -> f64,
    ) -> Result<Self, UnitError> {
        let scale = interval_scale(&rhs.unit, &self.unit)?;
        let value = match subtract {
            false => (self.measurement() + rhs.measurement())?.0,
            true => (self.measurement() - rhs.measurement())?.0,
        };
        Ok(UncertainMeasurement {
            value,
            uncertainty: combine(self.uncertainty, rhs.uncertainty * scale),
            unit: self.unit,
        })
    }
}

/// The factor by which an interval in `from` grows when expressed in
/// `to`. Offsets between the units cancel out.
fn interval_scale(from: &PreciseUnit, to: &PreciseUnit) -> Result<f64, UnitError> {
    Ok((try_convert(1.0, from, to)? - try_convert(0.0, from, to)?).abs())
}

fn combined_unit(
    unit: PreciseUnit,
    lhs: &PreciseUnit,
    rhs: &PreciseUnit,
) -> Result<PreciseUnit, UnitError> {
    match unit.is_valid() {
        true => Ok(unit),
        false => Err(UnitError::Conversion(lhs.to_string(), rhs.to_string())),
    }
}

/// Split `"1.234(5) rest"` into the value, the uncertainty in units
/// of the last digit and the rest.
fn concise(input: &str) -> Option<(f64, f64, &str)> {
    let (number, tail) = input.split_once('(')?;
    let (digits, rest) = tail.split_once(')')?;
    if number.is_empty()
        || !number.bytes().all(|b| b.is_ascii_digit() || b == b'.' || b == b'-')
        || digits.is_empty()
        || digits.len() > 4
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let value = number.parse::<f64>().ok()?;
    let decimals = number.split_once('.').map_or(0, |(_, d)| d.len());
    let uncertainty = digits.parse::<f64>().ok()? / 10f64.powi(decimals as i32);
    Some((value, uncertainty, rest))
}

impl Display for UncertainMeasurement {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "{}+/-{} {}",
            format_number(self.value),
            format_number(self.uncertainty),
            UnitContext::global().render_unit(&self.unit)
        )
    }
}

impl FromStr for UncertainMeasurement {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Measurement> for UncertainMeasurement {
    fn from(measurement: Measurement) -> Self {
        Self::exact(measurement)
    }
}

impl From<UncertainMeasurement> for Measurement {
    fn from(measurement: UncertainMeasurement) -> Self {
        measurement.measurement()
    }
}

impl Add<UncertainMeasurement> for UncertainMeasurement {
    type Output = Result<UncertainMeasurement, UnitError>;
    fn add(self, rhs: UncertainMeasurement) -> Self::Output {
        self.sum(rhs, false, f64::hypot)
    }
}

impl Sub<UncertainMeasurement> for UncertainMeasurement {
    type Output = Result<UncertainMeasurement, UnitError>;
    fn sub(self, rhs: UncertainMeasurement) -> Self::Output {
        self.sum(rhs, true, f64::hypot)
    }
}

impl Mul<UncertainMeasurement> for UncertainMeasurement {
    type Output = Result<UncertainMeasurement, UnitError>;
    fn mul(self, rhs: UncertainMeasurement) -> Self::Output {
        Ok(UncertainMeasurement {
            value: self.value * rhs.value,
            uncertainty: f64::hypot(
                self.uncertainty * rhs.value,
                rhs.uncertainty * self.value,
            ),
            unit: combined_unit(self.unit * rhs.unit, &self.unit, &rhs.unit)?,
        })
    }
}

impl Div<UncertainMeasurement> for UncertainMeasurement {
    type Output = Result<UncertainMeasurement, UnitError>;
    fn div(self, rhs: UncertainMeasurement) -> Self::Output {
        Ok(UncertainMeasurement {
            value: self.value / rhs.value,
            uncertainty: f64::hypot(
                self.uncertainty / rhs.value,
                rhs.uncertainty * self.value / (rhs.value * rhs.value),
            ),
            unit: combined_unit(self.unit / rhs.unit, &self.unit, &rhs.unit)?,
        })
    }
}

/* Exact operands leave the uncertainty untouched. */

impl Add<Measurement> for UncertainMeasurement {
    type Output = Result<UncertainMeasurement, UnitError>;
    fn add(self, rhs: Measurement) -> Self::Output {
        self.sum(Self::exact(rhs), false, f64::hypot)
    }
}

impl Sub<Measurement> for UncertainMeasurement {
    type Output = Result<UncertainMeasurement, UnitError>;
    fn sub(self, rhs: Measurement) -> Self::Output {
        self.sum(Self::exact(rhs), true, f64::hypot)
    }
}

impl Mul<f64> for UncertainMeasurement {
    type Output = UncertainMeasurement;
    fn mul(self, rhs: f64) -> UncertainMeasurement {
        Self::new(self.value * rhs, self.uncertainty * rhs, self.unit)
    }
}

impl Div<f64> for UncertainMeasurement {
    type Output = UncertainMeasurement;
    fn div(self, rhs: f64) -> UncertainMeasurement {
        Self::new(self.value / rhs, self.uncertainty / rhs, self.unit)
    }
}
