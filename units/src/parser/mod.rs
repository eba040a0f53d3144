/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Unit string parser.
//!
//! Input is cleaned into a canonical operator form first (see
//! [`clean`]), then split into products, quotients and powers, and
//! finally matched atom by atom against the user-defined and static
//! unit tables. All recursion is bounded by [`MAX_PARSE_DEPTH`] and
//! [`MAX_PARSE_STEPS`]; exceeding either yields the error unit.

mod atom;
mod clean;
mod expr;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::context::UnitContext;
use crate::{PreciseUnit, UnitError};

pub use clean::clean_unit_string;

/// Inputs longer than this are rejected outright.
pub const MAX_INPUT_LENGTH: usize = 1024;
/// Maximum nesting of brackets and recursive decompositions.
pub const MAX_PARSE_DEPTH: usize = 32;
/// Maximum number of parse steps for one input.
pub const MAX_PARSE_STEPS: usize = 4096;
/// Atoms longer than this are not partitioned into sub-units.
pub const MAX_PARTITION_LENGTH: usize = 32;

/// Parser options.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct ParseOptions {
    /// Fall back to case-insensitive table matches.
    pub case_insensitive: bool,
    /// Everything after the first `/` is one denominator.
    pub single_slash: bool,
    /// Disable the heuristic fallbacks (case conversion, partitioning
    /// and commodity recovery of unparseable groups).
    pub strict: bool,
    /// Do not split unknown atoms into known sub-units.
    pub skip_partitioning: bool,
}

impl ParseOptions {
    pub fn case_insensitive() -> Self {
        ParseOptions {
            case_insensitive: true,
            ..Default::default()
        }
    }

    pub fn strict() -> Self {
        ParseOptions {
            strict: true,
            ..Default::default()
        }
    }

    /// Options from a JSON object; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, UnitError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Parse `input` using the registries in `ctx`.
pub(crate) fn parse(
    ctx: &UnitContext,
    input: &str,
    options: &ParseOptions,
) -> PreciseUnit {
    log::trace!("parsing unit {:?}", input);
    if input.len() > MAX_INPUT_LENGTH {
        log::debug!("unit string too long ({} bytes)", input.len());
        return PreciseUnit::ERROR;
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return PreciseUnit::ERROR;
    }
    if let Some(unit) = ctx.lookup(trimmed) {
        return unit;
    }

    let cleaned = match clean::clean(trimmed) {
        Some(cleaned) => cleaned,
        None => {
            log::debug!("rejecting malformed unit string {:?}", input);
            return PreciseUnit::ERROR;
        }
    };
    log::trace!("cleaned {:?} to {:?}", input, cleaned);

    let mut parser = Parser::new(ctx, options);
    let unit = parser.expression(&cleaned);
    if parser.exhausted {
        log::debug!("parse limits exceeded for {:?}", input);
        return PreciseUnit::ERROR;
    }
    match unit.is_valid() {
        true => unit,
        false => PreciseUnit::ERROR,
    }
}

/// Recursive descent state: the registries, the options and the
/// remaining budget.
pub(crate) struct Parser<'a> {
    ctx: &'a UnitContext,
    options: &'a ParseOptions,
    depth: usize,
    steps: usize,
    exhausted: bool,
    /// Set while parsing the stem of a plural.
    depluralized: bool,
    /// Atoms already decomposed in this input.
    atoms: HashMap<String, PreciseUnit>,
}

impl<'a> Parser<'a> {
    fn new(ctx: &'a UnitContext, options: &'a ParseOptions) -> Self {
        Parser {
            ctx,
            options,
            depth: 0,
            steps: 0,
            exhausted: false,
            depluralized: false,
            atoms: HashMap::new(),
        }
    }

    /// Count one step. Returns false once the budget is spent.
    fn tick(&mut self) -> bool {
        self.steps += 1;
        if self.steps > MAX_PARSE_STEPS || self.depth > MAX_PARSE_DEPTH {
            self.exhausted = true;
        }
        !self.exhausted
    }

    /// Run `f` one level deeper.
    fn nested<F>(&mut self, f: F) -> PreciseUnit
    where
        F: FnOnce(&mut Self) -> PreciseUnit,
    {
        self.depth += 1;
        let unit = match self.tick() {
            true => f(self),
            false => PreciseUnit::ERROR,
        };
        self.depth -= 1;
        unit
    }
}

#[cfg(test)]
mod tests {
    use super::ParseOptions;

    #[test]
    fn options_from_json() {
        let options: ParseOptions =
            serde_json::from_str(r#"{"single_slash": true}"#).unwrap();
        assert!(options.single_slash);
        assert!(!options.case_insensitive);
        assert_eq!(ParseOptions::from_json("{}"), Ok(ParseOptions::default()));
        assert!(matches!(
            ParseOptions::from_json("{\"strict\": 1}"),
            Err(crate::UnitError::Json(_))
        ));
    }
}
