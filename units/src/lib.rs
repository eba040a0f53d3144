/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Units of measurement: parsing free-form unit strings, converting
//! values between units and rendering units back to strings.
//!
//! ```
//! use units::{convert, parse_unit, render_unit};
//!
//! let newton = parse_unit("kg*m/s^2");
//! assert!(newton.has_same_base(&parse_unit("N")));
//! assert_eq!(render_unit(&parse_unit("km/hr")), "km/hr");
//! let inches = convert(1.0, &parse_unit("ft"), &parse_unit("in"));
//! assert!((inches - 12.0).abs() < 1e-12);
//! ```

pub mod commodity;
pub mod context;
pub mod convert;
pub mod dimension;
pub mod equation;
pub mod error;
pub mod measurement;
pub mod numeric;
pub mod parser;
pub mod precise_unit;
pub mod prefix;
mod render;
pub mod tables;
pub mod uncertain;
pub mod unit_defs;
pub mod user_defined;

pub use commodity::{CommodityRegistry, CommodityStore};
pub use context::UnitContext;
pub use convert::{convert, convert_with_reference, try_convert};
pub use dimension::{BaseDimension, Dimension};
pub use equation::Equation;
pub use error::UnitError;
pub use measurement::Measurement;
pub use numeric::{leading_number, number_words};
pub use parser::{clean_unit_string, ParseOptions};
pub use precise_unit::PreciseUnit;
pub use prefix::{BinPrefix, Prefix, SiPrefix};
pub use render::format_number;
pub use tables::default_unit;
pub use uncertain::UncertainMeasurement;
pub use user_defined::UserDefinedUnits;

/// Parse a unit string with the global context and default options.
/// Unparseable input yields [`PreciseUnit::ERROR`].
pub fn parse_unit(text: &str) -> PreciseUnit {
    UnitContext::global().parse_unit(text, &ParseOptions::default())
}

pub fn parse_unit_with(text: &str, options: &ParseOptions) -> PreciseUnit {
    UnitContext::global().parse_unit(text, options)
}

/// Parse raw bytes; invalid UTF-8 sequences are replaced before
/// parsing.
pub fn parse_unit_bytes(bytes: &[u8], options: &ParseOptions) -> PreciseUnit {
    parse_unit_with(&String::from_utf8_lossy(bytes), options)
}

pub fn parse_measurement(text: &str, options: &ParseOptions) -> Measurement {
    UnitContext::global().parse_measurement(text, options)
}

pub fn parse_uncertain_measurement(
    text: &str,
    options: &ParseOptions,
) -> UncertainMeasurement {
    UnitContext::global().parse_uncertain_measurement(text, options)
}

/// Render a unit so that parsing the result gives the same unit.
pub fn render_unit(unit: &PreciseUnit) -> String {
    UnitContext::global().render_unit(unit)
}

pub fn render_measurement(measurement: &Measurement) -> String {
    UnitContext::global().render_measurement(measurement)
}

pub fn is_error(unit: &PreciseUnit) -> bool {
    unit.is_error()
}

pub fn is_valid(unit: &PreciseUnit) -> bool {
    unit.is_valid()
}
