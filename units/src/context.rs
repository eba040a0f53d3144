/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;

use crate::commodity::{CommodityRegistry, CommodityStore};
use crate::user_defined::UserDefinedUnits;
use crate::{parser, render, tables};
use crate::{Measurement, ParseOptions, PreciseUnit, UncertainMeasurement, UnitError};

lazy_static! {
    static ref GLOBAL: UnitContext = UnitContext::new();
}

/// The mutable registries consulted while parsing and rendering:
/// commodity names and user-defined units.
///
/// The free functions of this crate use [`UnitContext::global`].
/// Independent contexts can be created for isolation, e.g. in tests.
pub struct UnitContext {
    commodities: Box<dyn CommodityStore>,
    user_units: UserDefinedUnits,
}

impl UnitContext {
    pub fn new() -> Self {
        Self::with_commodity_store(CommodityRegistry::new())
    }

    /// A context backed by a custom commodity store.
    pub fn with_commodity_store<S>(store: S) -> Self
    where
        S: CommodityStore + 'static,
    {
        UnitContext {
            commodities: Box::new(store),
            user_units: UserDefinedUnits::new(),
        }
    }

    /// The process-wide default context.
    pub fn global() -> &'static UnitContext {
        &GLOBAL
    }

    pub fn commodities(&self) -> &dyn CommodityStore {
        self.commodities.as_ref()
    }

    pub fn user_units(&self) -> &UserDefinedUnits {
        &self.user_units
    }

    /// Exact match: user-defined units first, then the static tables.
    pub(crate) fn lookup(&self, name: &str) -> Option<PreciseUnit> {
        self.user_units
            .lookup(name)
            .or_else(|| tables::lookup(name))
    }

    pub fn parse_unit(&self, text: &str, options: &ParseOptions) -> PreciseUnit {
        parser::parse(self, text, options)
    }

    pub fn parse_measurement(
        &self,
        text: &str,
        options: &ParseOptions,
    ) -> Measurement {
        Measurement::parse_with(self, text, options)
    }

    pub fn parse_uncertain_measurement(
        &self,
        text: &str,
        options: &ParseOptions,
    ) -> UncertainMeasurement {
        UncertainMeasurement::parse_with(self, text, options)
    }

    pub fn render_unit(&self, unit: &PreciseUnit) -> String {
        render::render(self, unit)
    }

    pub fn render_measurement(&self, measurement: &Measurement) -> String {
        format!(
            "{} {}",
            render::format_number(measurement.0),
            self.render_unit(&measurement.1)
        )
    }

    /// Define `name` as the unit described by `definition`, for both
    /// parsing and rendering.
    pub fn define_unit(
        &self,
        name: &str,
        definition: &str,
    ) -> Result<PreciseUnit, UnitError> {
        let unit = self.parse_definition(definition)?;
        self.user_units.add(name, unit);
        Ok(unit)
    }

    /// Define `name` for parsing only.
    pub fn define_input_unit(
        &self,
        name: &str,
        definition: &str,
    ) -> Result<PreciseUnit, UnitError> {
        let unit = self.parse_definition(definition)?;
        self.user_units.add_input_only(name, unit);
        Ok(unit)
    }

    fn parse_definition(&self, definition: &str) -> Result<PreciseUnit, UnitError> {
        match self.parse_unit(definition, &ParseOptions::default()) {
            unit if unit.is_valid() => Ok(unit),
            _ => Err(UnitError::ParseError(definition.to_string())),
        }
    }

    /// Load unit definitions, one per line:
    ///
    /// ```text
    /// # comment
    /// clog = 3 kg
    /// "big foot" = 14 in
    /// smoot => 67 in
    /// ```
    ///
    /// `=>` defines an input-only unit. Returns the number of
    /// definitions.
    pub fn load_definitions(&self, text: &str) -> Result<usize, UnitError> {
        let mut count = 0;
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let invalid = |reason: String| {
                log::warn!("rejecting unit definition on line {}: {}", index + 1, reason);
                UnitError::InvalidDefinition {
                    line: index + 1,
                    reason,
                }
            };
            let (name, definition, input_only) = match line.split_once("=>") {
                Some((name, definition)) => (name, definition, true),
                None => match line.split_once('=') {
                    Some((name, definition)) => (name, definition, false),
                    None => return Err(invalid("missing '='".to_string())),
                },
            };
            let name = unquote(name.trim());
            let definition = unquote(definition.trim());
            if name.is_empty() || definition.is_empty() {
                return Err(invalid("empty name or definition".to_string()));
            }
            let unit = self
                .parse_definition(definition)
                .map_err(|_| invalid(format!("cannot parse {:?}", definition)))?;
            match input_only {
                true => self.user_units.add_input_only(name, unit),
                false => self.user_units.add(name, unit),
            }
            count += 1;
        }
        log::debug!("loaded {} unit definitions", count);
        Ok(count)
    }

    pub fn load_definitions_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<usize, UnitError> {
        let text = fs::read_to_string(path)?;
        self.load_definitions(&text)
    }
}

impl Default for UnitContext {
    fn default() -> Self {
        Self::new()
    }
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) =
            s.strip_prefix(quote).and_then(|s| s.strip_suffix(quote))
        {
            return inner;
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::{unquote, UnitContext};
    use crate::unit_defs::{IN, KG};
    use crate::{ParseOptions, UnitError};

    #[test]
    fn definitions() {
        let ctx = UnitContext::new();
        let text = "# test units\n\nclog = 3 kg\n\"big foot\" = 14 in\nsmoot => 67 in\n";
        assert_eq!(ctx.load_definitions(text), Ok(3));
        let options = ParseOptions::default();
        assert_eq!(ctx.parse_unit("clog", &options), KG.scale(3.0));
        assert_eq!(ctx.parse_unit("big foot", &options), IN.scale(14.0));
        assert_eq!(ctx.render_unit(&KG.scale(3.0)), "clog");
        assert_eq!(ctx.user_units().name_of(&IN.scale(67.0)), None);
    }

    #[test]
    fn invalid_definitions() {
        let ctx = UnitContext::new();
        assert!(matches!(
            ctx.load_definitions("ok = m\nbroken"),
            Err(UnitError::InvalidDefinition { line: 2, .. })
        ));
        assert!(matches!(
            ctx.load_definitions("x = ((m"),
            Err(UnitError::InvalidDefinition { line: 1, .. })
        ));
    }

    #[test]
    fn quotes() {
        assert_eq!(unquote("\"a b\""), "a b");
        assert_eq!(unquote("'x'"), "x");
        assert_eq!(unquote("\"x"), "\"x");
    }
}
