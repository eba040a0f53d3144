/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Non-linear ("equation") units: logarithmic scales, wind scales and
//! similar. The equation number is stored in the count and radian
//! exponents plus the three flag bits of an equation dimension.

use serde::{Deserialize, Serialize};

use crate::{BaseDimension, Dimension};

#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Equation {
    Log10,
    Neper,
    Bel,
    Decibel,
    NegLog10,
    NegLog100,
    NegLog1000,
    NegLog50000,
    Log2,
    Ln,
    BelPower,
    DecibelPower,
    BelAmplitude,
    DecibelAmplitude,
    Log3,
    NeperPower,
    SaffirSimpson,
    Beaufort,
    Fujita,
    GasMark,
    PrismDiopter,
    MomentMagnitude,
    EnergyMagnitude,
}

const WATT: Dimension = Dimension::new([2, 1, -3, 0, 0, 0, 0, 0, 0, 0]);

impl Equation {
    pub const ALL: [Equation; 23] = [
        Equation::Log10,
        Equation::Neper,
        Equation::Bel,
        Equation::Decibel,
        Equation::NegLog10,
        Equation::NegLog100,
        Equation::NegLog1000,
        Equation::NegLog50000,
        Equation::Log2,
        Equation::Ln,
        Equation::BelPower,
        Equation::DecibelPower,
        Equation::BelAmplitude,
        Equation::DecibelAmplitude,
        Equation::Log3,
        Equation::NeperPower,
        Equation::SaffirSimpson,
        Equation::Beaufort,
        Equation::Fujita,
        Equation::GasMark,
        Equation::PrismDiopter,
        Equation::MomentMagnitude,
        Equation::EnergyMagnitude,
    ];

    pub const fn code(self) -> u8 {
        match self {
            Equation::Log10 => 0,
            Equation::Neper => 1,
            Equation::Bel => 2,
            Equation::Decibel => 3,
            Equation::NegLog10 => 4,
            Equation::NegLog100 => 5,
            Equation::NegLog1000 => 6,
            Equation::NegLog50000 => 7,
            Equation::Log2 => 8,
            Equation::Ln => 9,
            Equation::BelPower => 10,
            Equation::DecibelPower => 11,
            Equation::BelAmplitude => 12,
            Equation::DecibelAmplitude => 13,
            Equation::Log3 => 14,
            Equation::NeperPower => 15,
            Equation::SaffirSimpson => 22,
            Equation::Beaufort => 23,
            Equation::Fujita => 24,
            Equation::GasMark => 25,
            Equation::PrismDiopter => 27,
            Equation::MomentMagnitude => 29,
            Equation::EnergyMagnitude => 30,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|eq| eq.code() == code)
    }

    /// The equation marker dimension for this equation.
    pub const fn dimension(self) -> Dimension {
        equation_dimension(self.code())
    }

    /// Equation encoded in a dimension, if it is an equation unit.
    pub fn of(dim: Dimension) -> Option<Self> {
        equation_code(dim).and_then(Self::from_code)
    }

    /// Map a value on the equation's scale to a linear value in the
    /// underlying unit.
    pub fn to_linear(self, value: f64, dim: Dimension) -> f64 {
        let (neper, bel, decibel) = scale_factors(dim);
        match self {
            Equation::Log10 | Equation::BelPower => 10f64.powf(value),
            Equation::Neper => (value / neper).exp(),
            Equation::Bel => 10f64.powf(value / bel),
            Equation::Decibel => 10f64.powf(value / decibel),
            Equation::NegLog10 => 10f64.powf(-value),
            Equation::NegLog100 => 100f64.powf(-value),
            Equation::NegLog1000 => 1000f64.powf(-value),
            Equation::NegLog50000 => 50000f64.powf(-value),
            Equation::Log2 => value.exp2(),
            Equation::Ln => value.exp(),
            Equation::DecibelPower => 10f64.powf(value / 10.0),
            Equation::BelAmplitude => 10f64.powf(value / 2.0),
            Equation::DecibelAmplitude => 10f64.powf(value / 20.0),
            Equation::Log3 => 3f64.powf(value),
            Equation::NeperPower => (value / 0.5).exp(),
            Equation::SaffirSimpson => horner(
                value,
                &[
                    -0.17613636364,
                    2.88510101010,
                    -14.95265151515,
                    47.85191197691,
                    38.90151515152,
                ],
            ),
            Equation::Beaufort => horner(
                value,
                &[
                    0.00177396133,
                    -0.05860071301,
                    0.93621452077,
                    0.24246097040,
                    -0.12475759535,
                ],
            ),
            Equation::Fujita => 14.1 * (value + 2.0).powf(1.5),
            Equation::GasMark => {
                fahrenheit_to_kelvin(gas_mark_to_fahrenheit(value))
            }
            Equation::PrismDiopter => (value / 100.0).atan(),
            Equation::MomentMagnitude => 10f64.powf((value + 10.7) * 1.5),
            Equation::EnergyMagnitude => 10f64.powf((value + 3.2) * 1.5),
        }
    }

    /// Inverse of [`Equation::to_linear`]. Logarithmic scales return NaN
    /// for non-positive inputs.
    pub fn from_linear(self, value: f64, dim: Dimension) -> f64 {
        if self.code() < 16 && value <= 0.0 {
            return f64::NAN;
        }
        let (neper, bel, decibel) = scale_factors(dim);
        match self {
            Equation::Log10 | Equation::BelPower => value.log10(),
            Equation::Neper => neper * value.ln(),
            Equation::Bel => bel * value.log10(),
            Equation::Decibel => decibel * value.log10(),
            Equation::NegLog10 => -value.log10(),
            Equation::NegLog100 => -value.log10() / 2.0,
            Equation::NegLog1000 => -value.log10() / 3.0,
            Equation::NegLog50000 => -value.log10() / 50000f64.log10(),
            Equation::Log2 => value.log2(),
            Equation::Ln => value.ln(),
            Equation::DecibelPower => 10.0 * value.log10(),
            Equation::BelAmplitude => 2.0 * value.log10(),
            Equation::DecibelAmplitude => 20.0 * value.log10(),
            Equation::Log3 => value.log10() / 3f64.log10(),
            Equation::NeperPower => 0.5 * value.ln(),
            Equation::SaffirSimpson => horner(
                value,
                &[
                    1.75748569529e-10,
                    -9.09204303833e-08,
                    1.52274455780e-05,
                    -7.73787973277e-04,
                    2.81978682167e-02,
                    -6.67563481438e-01,
                ],
            ),
            Equation::Beaufort => horner(
                value,
                &[
                    2.18882896425e-08,
                    -4.78236313769e-06,
                    3.91121840061e-04,
                    -1.52427367162e-02,
                    4.24089585061e-01,
                    4.99241689370e-01,
                ],
            ),
            Equation::Fujita => (value / 14.1).powf(2.0 / 3.0) - 2.0,
            Equation::GasMark => {
                fahrenheit_to_gas_mark(kelvin_to_fahrenheit(value))
            }
            Equation::PrismDiopter => 100.0 * value.tan(),
            Equation::MomentMagnitude => 2.0 / 3.0 * value.log10() - 10.7,
            Equation::EnergyMagnitude => 2.0 / 3.0 * value.log10() - 3.2,
        }
    }
}

/// Power quantities (watts, or a squared count) use the power
/// variants of the bel and neper scales.
fn is_power(dim: Dimension) -> bool {
    dim.has_same_base(WATT) || dim.exponent(BaseDimension::Count) == -2
}

/// Neper, bel and decibel factors for power or amplitude quantities.
fn scale_factors(dim: Dimension) -> (f64, f64, f64) {
    match is_power(dim) {
        true => (0.5, 1.0, 10.0),
        false => (1.0, 2.0, 20.0),
    }
}

fn horner(x: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().fold(0.0, |acc, c| acc.mul_add(x, *c))
}

fn gas_mark_to_fahrenheit(mark: f64) -> f64 {
    if mark >= 1.0 {
        250.0 + 25.0 * mark
    } else if mark >= 0.5 {
        250.0 + 50.0 * (mark - 0.5)
    } else {
        225.0 + 100.0 * (mark - 0.25)
    }
}

fn fahrenheit_to_gas_mark(degf: f64) -> f64 {
    if degf >= 275.0 {
        (degf - 250.0) / 25.0
    } else if degf >= 250.0 {
        0.5 + (degf - 250.0) / 50.0
    } else {
        0.25 + (degf - 225.0) / 100.0
    }
}

fn fahrenheit_to_kelvin(degf: f64) -> f64 {
    (degf + 459.67) * 5.0 / 9.0
}

fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    kelvin * 9.0 / 5.0 - 459.67
}

/// Marker dimension for equation number `code` (0..=31).
pub const fn equation_dimension(code: u8) -> Dimension {
    Dimension::new([
        0,
        0,
        0,
        0,
        0,
        0,
        0,
        ((code >> 3) & 1) as i32,
        0,
        ((code >> 4) & 1) as i32,
    ])
    .with_per_unit(code & 4 != 0)
    .with_i_flag(code & 2 != 0)
    .with_e_flag(code & 1 != 0)
    .with_equation(true)
}

/// Equation number carried by an equation dimension.
pub fn equation_code(dim: Dimension) -> Option<u8> {
    if !dim.equation() || dim.is_error() {
        return None;
    }
    let mut code = 0;
    if dim.exponent(BaseDimension::Radian) != 0 {
        code += 16;
    }
    if dim.exponent(BaseDimension::Count) != 0 {
        code += 8;
    }
    if dim.per_unit() {
        code += 4;
    }
    if dim.i_flag() {
        code += 2;
    }
    if dim.e_flag() {
        code += 1;
    }
    Some(code)
}

/// The dimension of the underlying linear unit, with the equation
/// marker removed.
pub fn linear_dimension(dim: Dimension) -> Dimension {
    match equation_code(dim) {
        Some(code) => {
            let marker = equation_dimension(code);
            let strip = |d: BaseDimension| {
                dim.exponent(d) - marker.exponent(d)
            };
            let count = strip(BaseDimension::Count);
            let radian = strip(BaseDimension::Radian);
            dim.with_exponent(BaseDimension::Count, count)
                .with_exponent(BaseDimension::Radian, radian)
                .with_per_unit(false)
                .with_i_flag(false)
                .with_e_flag(false)
                .with_equation(false)
        }
        None => dim,
    }
}
