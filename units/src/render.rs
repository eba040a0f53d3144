/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Unit to string conversion.
//!
//! Every candidate representation is parsed back before it is
//! accepted, so that `parse(render(u)) == u`. Names are tried first,
//! then prefixes, inverses, powers and compounds with a conventional
//! factor. The final fallback is the numeric multiplier times the
//! base dimensions, which always parses back exactly.

use lazy_static::lazy_static;

use crate::commodity::INVERSE_BIT;
use crate::context::UnitContext;
use crate::equation::{equation_code, linear_dimension};
use crate::prefix::{BinPrefix, Prefix, SiPrefix};
use crate::unit_defs::{custom_count_unit, custom_count_unit_number};
use crate::unit_defs::{custom_unit, custom_unit_number};
use crate::unit_defs::{A, BYTE, COUNT, CURRENCY, DAY, FT, G, HR, KG, L, LB};
use crate::unit_defs::{M, MIN, S, V, W, WH};
use crate::{tables, ParseOptions, PreciseUnit};

pub(crate) fn render(ctx: &UnitContext, unit: &PreciseUnit) -> String {
    if !unit.is_valid() {
        return "ERROR".to_string();
    }
    match unit.commodity() {
        0 => Renderer { ctx }.plain(unit),
        code => {
            let base = Renderer { ctx }.plain(&unit.with_commodity(0));
            let name = escape(&ctx.commodities().name_of(code));
            match (code & INVERSE_BIT != 0, base.as_str()) {
                (false, "one") => format!("{{{}}}", name),
                (false, _) => format!("{}*{{{}}}", base, name),
                (true, "one") => format!("1/{{{}}}", name),
                (true, _) => format!("{}/{{{}}}", base, name),
            }
        }
    }
}

/// Format a multiplier or value so that it parses back exactly.
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value.fract() == 0.0 && magnitude < 1e15 {
        format!("{}", value)
    } else if (1e-4..1e15).contains(&magnitude) {
        format!("{}", value)
    } else {
        format!("{:e}", value)
    }
}

fn escape(name: &str) -> String {
    name.replace('{', "\\{").replace('}', "\\}")
}

lazy_static! {
    /// Units tried as the second factor of a compound, most
    /// conventional first.
    static ref COMPOUND_FACTORS: Vec<(PreciseUnit, &'static str)> = vec![
        (M, "m"),
        (S, "s"),
        (S.scale(1e-3), "ms"),
        (MIN, "min"),
        (HR, "hr"),
        (DAY, "day"),
        (LB, "lb"),
        (FT, "ft"),
        (FT.pow(2), "ft^2"),
        (FT.pow(3), "ft^3"),
        (M.pow(2), "m^2"),
        (M.pow(3), "m^3"),
        (L, "L"),
        (KG, "kg"),
        (M.scale(1e3), "km"),
        (CURRENCY, "$"),
        (V, "V"),
        (W, "W"),
        (W.scale(1e3), "kW"),
        (W.scale(1e-3), "mW"),
        (W.scale(1e6), "MW"),
        (S.pow(2), "s^2"),
        (COUNT, "count"),
    ];
    /// Prefixed names common enough to be used in the first pass.
    static ref COMMON_PREFIXED: Vec<(PreciseUnit, &'static str)> = vec![
        (M.scale(1e3), "km"),
        (M.scale(1e-2), "cm"),
        (M.scale(1e-3), "mm"),
        (M.scale(1e-9), "nm"),
        (S.scale(1e-3), "ms"),
        (S.scale(1e-9), "ns"),
        (L.scale(1e-3), "mL"),
        (L.scale(1e-6), "uL"),
        (W.scale(1e3), "kW"),
        (W.scale(1e6), "MW"),
        (W.scale(1e-3), "mW"),
        (V.scale(1e3), "kV"),
        (A.scale(1e-3), "mA"),
        (WH.scale(1e3), "kWh"),
        (WH.scale(1e6), "MWh"),
        (G.scale(1e-3), "mg"),
        (BYTE.scale(1e3), "kB"),
        (BYTE.scale(1e6), "MB"),
        (BYTE.scale(1e9), "GB"),
        (BYTE.scale(1024.0), "KiB"),
        (BYTE.scale(1_048_576.0), "MiB"),
        (BYTE.scale(1_073_741_824.0), "GiB"),
    ];
}

struct Renderer<'a> {
    ctx: &'a UnitContext,
}

impl<'a> Renderer<'a> {
    fn plain(&self, unit: &PreciseUnit) -> String {
        if let Some(name) = self.name(unit) {
            return name;
        }
        let base = unit.base();
        if base.is_empty() {
            return match unit.multiplier() == 1.0 {
                true => base.to_string(),
                false => format_number(unit.multiplier()),
            };
        }
        if unit.multiplier() == 1.0 {
            if let Some(custom) = self.custom(unit) {
                return custom;
            }
        }
        let found = self
            .prefixed(unit)
            .or_else(|| self.inverse(unit))
            .or_else(|| self.power(unit))
            .or_else(|| self.compound(unit, Self::common_name))
            .or_else(|| self.compound(unit, Self::name_or_prefixed));
        if let Some(found) = found {
            return found;
        }
        match unit.multiplier() == 1.0 {
            true => base.to_string(),
            false => self.scaled(unit),
        }
    }

    /// A number in front of the unscaled unit: `0.125m`, `10*pu`,
    /// `8/m`, and `n*(...)` when nothing shorter parses back.
    fn scaled(&self, unit: &PreciseUnit) -> String {
        let number = format_number(unit.multiplier());
        let rest = self.plain(&unit.with_multiplier(1.0));
        let mut candidates = Vec::new();
        if unit.multiplier().fract() != 0.0
            && rest.bytes().all(|c| c.is_ascii_alphabetic())
        {
            candidates.push(format!("{}{}", number, rest));
        }
        if !rest.contains('/') {
            candidates.push(format!("{}*{}", number, rest));
        }
        if let Some(denominator) = rest.strip_prefix("1/") {
            candidates.push(format!("{}/{}", number, denominator));
        }
        let grouped = format!("{}*({})", number, rest);
        candidates
            .into_iter()
            .find_map(|candidate| self.verified(unit, candidate))
            .unwrap_or(grouped)
    }

    /// Custom and equation units without a multiplier.
    fn custom(&self, unit: &PreciseUnit) -> Option<String> {
        let base = unit.base();
        if let Some(n) = custom_unit_number(base) {
            if custom_unit(n).base() == base {
                return Some(format!("CXUN[{}]", n));
            }
        }
        if let Some(n) = custom_count_unit_number(base) {
            if custom_count_unit(n).base() == base {
                return Some(format!("CXCUN[{}]", n));
            }
        }
        let code = equation_code(base)?;
        let linear = unit.with_base(linear_dimension(base));
        Some(match linear.base().is_empty() && linear.multiplier() == 1.0 {
            true => format!("EQXUN[{}]", code),
            false => format!("{}*EQXUN[{}]", self.plain(&linear), code),
        })
    }

    /// Preferred name, user-defined names first.
    fn name(&self, unit: &PreciseUnit) -> Option<String> {
        self.ctx
            .user_units()
            .name_of(unit)
            .or_else(|| tables::name_of(unit).map(str::to_string))
    }

    /// Name of a unit equal to `unit` up to rounding. Callers verify
    /// the complete string.
    fn close_name(&self, unit: &PreciseUnit) -> Option<String> {
        self.name(unit).or_else(|| {
            tables::preferred()
                .find(|(named, _)| named.equivalent(unit))
                .map(|(_, name)| name.to_string())
        })
    }

    fn common_name(&self, unit: &PreciseUnit) -> Option<String> {
        self.close_name(unit).or_else(|| {
            COMMON_PREFIXED
                .iter()
                .find(|(named, _)| named.equivalent(unit))
                .map(|(_, name)| name.to_string())
        })
    }

    fn verified(&self, unit: &PreciseUnit, candidate: String) -> Option<String> {
        let parsed = self.ctx.parse_unit(&candidate, &ParseOptions::default());
        (parsed == *unit).then_some(candidate)
    }

    /// Close name or prefixed name of a factor; the caller verifies
    /// the string it ends up in.
    fn name_or_prefixed(&self, unit: &PreciseUnit) -> Option<String> {
        self.close_name(unit)
            .or_else(|| self.prefixed_with(unit, Some))
    }

    /// A prefix on a named unit (`km`, `MiB`, `uF`).
    fn prefixed(&self, unit: &PreciseUnit) -> Option<String> {
        self.prefixed_with(unit, |candidate| self.verified(unit, candidate))
    }

    fn prefixed_with<F>(&self, unit: &PreciseUnit, accept: F) -> Option<String>
    where
        F: Fn(String) -> Option<String>,
    {
        let prefixes = SiPrefix::SCALE
            .iter()
            .map(|p| (p.prefix(), p.multiplier()))
            .chain(BinPrefix::SCALE.iter().map(|p| (p.prefix(), p.multiplier())));
        let prefixes: Vec<_> = prefixes.collect();
        for (named, name) in tables::prefixable() {
            if named.base() != unit.base() || named.commodity() != unit.commodity()
            {
                continue;
            }
            for (prefix, multiplier) in &prefixes {
                if named.scale(*multiplier).equivalent(unit) {
                    if let Some(found) = accept(format!("{}{}", prefix, name)) {
                        return Some(found);
                    }
                }
            }
        }
        None
    }

    /// `1/in`, `1/nF`, `1/mm^2`.
    fn inverse(&self, unit: &PreciseUnit) -> Option<String> {
        let inverse = unit.invert();
        let name = self
            .name_or_prefixed(&inverse)
            .or_else(|| self.power(&inverse))?;
        self.verified(unit, format!("1/{}", name))
    }

    /// Squares and cubes of a name (`km^2`, `ft^3`, `N^2`).
    fn power(&self, unit: &PreciseUnit) -> Option<String> {
        for power in [2, 3] {
            let root = unit.root(power);
            if !root.is_valid() {
                continue;
            }
            if let Some(name) = self.name_or_prefixed(&root) {
                let candidate = format!("{}^{}", name, power);
                if let Some(found) = self.verified(unit, candidate) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// A named unit times or divided by one of the conventional
    /// factors (`N*s`, `ft*lb`, `$/MWh`, `1/(uL*s)`).
    fn compound<F>(&self, unit: &PreciseUnit, namer: F) -> Option<String>
    where
        F: Fn(&Self, &PreciseUnit) -> Option<String>,
    {
        for (factor, factor_name) in COMPOUND_FACTORS.iter() {
            let options: [(PreciseUnit, fn(&str, &str) -> String); 4] = [
                (*unit * *factor, |name, f| format!("{}/{}", name, f)),
                (*unit / *factor, |name, f| format!("{}*{}", name, f)),
                (*factor / *unit, |name, f| format!("{}/{}", f, name)),
                (unit.invert() / *factor, |name, f| format!("1/({}*{})", name, f)),
            ];
            for (other, write) in options {
                if !other.is_valid()
                    || other.base().is_empty()
                    || other.is_equation()
                {
                    continue;
                }
                let name = match namer(self, &other) {
                    Some(name) if name != *factor_name => name,
                    _ => continue,
                };
                if let Some(found) = self.verified(unit, write(&name, factor_name)) {
                    return Some(found);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::format_number;
    use crate::unit_defs::{F, FT, HR, HZ, IN, KG, LB, M, N, PU, S, W};
    use crate::{parse_unit, render_unit, PreciseUnit};

    fn rendered(text: &str) -> String {
        render_unit(&parse_unit(text))
    }

    #[test]
    fn numbers() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-0.25), "-0.25");
        assert_eq!(format_number(1e-30), "1e-30");
        assert_eq!(format_number(1.5e300), "1.5e300");
    }

    #[test]
    fn named_and_prefixed() {
        assert_eq!(render_unit(&M), "m");
        assert_eq!(render_unit(&M.scale(1000.0)), "km");
        assert_eq!(render_unit(&M.pow(2)), "m^2");
        assert_eq!(render_unit(&PreciseUnit::ONE), "one");
        assert_eq!(render_unit(&PreciseUnit::ERROR), "ERROR");
        assert_eq!(render_unit(&F.scale(1e-9)), "nF");
        assert_eq!(rendered("GPa"), "GPa");
        assert_eq!(rendered("MiB"), "MiB");
        assert_eq!(rendered("um"), "um");
    }

    #[test]
    fn inverses_and_powers() {
        assert_eq!(render_unit(&S.invert()), "Hz");
        assert_eq!(render_unit(&HZ), "Hz");
        assert_eq!(render_unit(&N.invert()), "1/N");
        assert_eq!(render_unit(&IN.invert()), "1/in");
        assert_eq!(render_unit(&M.invert()), "1/m");
        assert_eq!(render_unit(&F.scale(1e-9).invert()), "1/nF");
        assert_eq!(render_unit(&(N * N)), "N^2");
        assert_eq!(render_unit(&FT.pow(2)), "ft^2");
        assert_eq!(rendered("1/mm^2"), "1/mm^2");
        assert_eq!(rendered("um^2"), "um^2");
    }

    #[test]
    fn compounds() {
        assert_eq!(render_unit(&(W / M.pow(2))), "W/m^2");
        assert_eq!(render_unit(&(M.scale(1000.0) / HR)), "km/hr");
        for unit in [KG * M / S, M.scale(3.5) / S, S.invert().scale(7.0)] {
            assert_eq!(parse_unit(&render_unit(&unit)), unit);
        }
    }

    #[test]
    fn conventional_compounds() {
        assert_eq!(render_unit(&(KG * M / S)), "N*s");
        assert_eq!(render_unit(&(FT * LB)), "ft*lb");
        assert_eq!(rendered("kg/m^3"), "kg/m^3");
        assert_eq!(rendered("$/MWh"), "$/MWh");
        assert_eq!(rendered("$/mi"), "$/mi");
        assert_eq!(rendered("V/km"), "V/km");
        assert_eq!(rendered("kW/gal"), "kW/gal");
        assert_eq!(rendered("GPa/km"), "MPa/m");
        assert_eq!(rendered("1/(uL*s)"), "1/(uL*s)");
        assert_eq!(render_unit(&(M.pow(2) / S.pow(2))), "J/kg");
    }

    #[test]
    fn scaled_units() {
        assert_eq!(render_unit(&PreciseUnit::ONE.scale(100.0)), "100");
        assert_eq!(render_unit(&M.scale(0.125)), "0.125m");
        assert_eq!(render_unit(&M.scale(0.125).invert()), "8/m");
        assert_eq!(render_unit(&PU.scale(10.0)), "10*pu");
    }

    #[test]
    fn scaled_quotients_parse_back() {
        let unit = parse_unit("us/L^2").scale(4187212394.8269777);
        let text = render_unit(&unit);
        assert_eq!(parse_unit(&text), unit, "{}", text);
        let unit = (M / S.pow(2)).scale(1.0 / 3.0);
        let text = render_unit(&unit);
        assert_eq!(parse_unit(&text), unit, "{}", text);
    }
}
