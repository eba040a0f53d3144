/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::equation::equation_dimension;
use crate::numeric::number_words;
use crate::prefix::{leading_word, symbol_multiplier};
use crate::tables;
use crate::unit_defs::{custom_count_unit, custom_unit, COUNT};
use crate::PreciseUnit;

use super::expr::group_start;
use super::{Parser, MAX_PARTITION_LENGTH};

/// Upper-case spellings (as found in legacy data) and their proper case.
const CASE_CONVERSIONS: &[(&str, &str)] = &[
    ("S", "s"),
    ("G", "g"),
    ("M", "m"),
    ("MM", "mm"),
    ("NM", "nm"),
    ("ML", "mL"),
    ("GS", "Gs"),
    ("GL", "Gal"),
    ("MG", "mg"),
    ("PG", "pg"),
    ("NG", "ng"),
    ("UG", "ug"),
    ("US", "us"),
    ("PS", "ps"),
    ("RAD", "rad"),
    ("WB", "Wb"),
    ("CP", "cP"),
];

/// Power words and their abbreviations.
const POWER_MODIFIERS: &[(&str, &str, i32)] =
    &[("square", "sq", 2), ("cubic", "cu", 3)];
const POWER_SUFFIXES: &[(&str, i32)] = &[("squared", 2), ("cubed", 3)];
const INVERSE_MODIFIERS: &[&str] = &["reciprocal", "inverse"];

impl<'a> Parser<'a> {
    /// A single unit name, possibly prefixed, pluralized, bracketed or
    /// annotated. Tries the exact tables first, then progressively
    /// looser decompositions.
    pub(super) fn atom(&mut self, s: &str) -> PreciseUnit {
        if !self.tick() || s.is_empty() {
            return PreciseUnit::ERROR;
        }
        if let Some(unit) = self.ctx.lookup(s) {
            return unit;
        }
        let cacheable = !self.depluralized;
        if let Some(unit) = self.atoms.get(s).filter(|_| cacheable) {
            return *unit;
        }
        let unit = self.decompose(s);
        if cacheable && !self.exhausted {
            self.atoms.insert(s.to_string(), unit);
        }
        unit
    }

    fn decompose(&mut self, s: &str) -> PreciseUnit {
        log::trace!("decomposing unit atom {:?}", s);

        if let Some(unit) = self.bracketed(s) {
            return unit;
        }
        if let Some(unit) = custom_atom(s) {
            return unit;
        }
        if let Some(unit) = self.prefixed(s) {
            return unit;
        }
        if let Some(unit) = self.singular(s) {
            return unit;
        }

        let decompositions: [fn(&mut Self, &str) -> Option<PreciseUnit>; 9] = [
            Self::trailing_group,
            Self::modified,
            Self::prefix_word,
            Self::plural,
            Self::number_word,
            Self::trailing_power,
            Self::separated,
            Self::case_converted,
            Self::partitioned,
        ];
        for decompose in decompositions {
            if let Some(unit) = decompose(self, s) {
                return unit;
            }
            if self.exhausted {
                return PreciseUnit::ERROR;
            }
        }
        PreciseUnit::ERROR
    }

    /// Recurse into `s`, keeping only a valid result.
    fn sub_atom(&mut self, s: &str) -> Option<PreciseUnit> {
        let unit = self.nested(|p| p.atom(s));
        unit.is_valid().then_some(unit)
    }

    /// `(...)`, `[...]` and `{...}` spanning the whole atom.
    fn bracketed(&mut self, s: &str) -> Option<PreciseUnit> {
        if group_start(s) != Some(0) {
            return None;
        }
        let inner = &s[1..s.len() - 1];
        Some(match s.as_bytes()[0] {
            b'{' => self.commodity(inner),
            b'[' if inner.ends_with('U') && inner.len() > 1 => {
                custom_unit(name_hash(&inner[..inner.len() - 1]))
            }
            _ if inner.is_empty() => PreciseUnit::ONE,
            _ => self.nested(|p| p.expression(inner)),
        })
    }

    /// The unit for a `{...}` annotation.
    fn commodity(&mut self, name: &str) -> PreciseUnit {
        if name == "#" {
            return COUNT;
        }
        if let Some(custom) =
            name.strip_suffix("'u").or_else(|| name.strip_suffix("'U"))
        {
            return custom_unit(name_hash(custom));
        }
        let code = self.ctx.commodities().lookup(name);
        log::trace!("commodity {:?} has code {:#x}", name, code);
        PreciseUnit::ONE.with_commodity(code)
    }

    /// Direct matches of the singular form (`meters`, `inches`). At
    /// most one plural suffix is removed per atom.
    fn singular(&mut self, s: &str) -> Option<PreciseUnit> {
        if self.depluralized {
            return None;
        }
        let stem = s.strip_suffix('s').filter(|stem| stem.len() >= 2)?;
        self.ctx
            .lookup(stem)
            .or_else(|| stem.strip_suffix('e').and_then(|e| self.ctx.lookup(e)))
    }

    /// Prefix symbol followed by a table entry (`km`, `MiB`, `dam`).
    fn prefixed(&mut self, s: &str) -> Option<PreciseUnit> {
        for len in [2, 1] {
            if s.len() <= len || !s.is_char_boundary(len) {
                continue;
            }
            let (prefix, rest) = s.split_at(len);
            if let (Some(multiplier), Some(unit)) =
                (symbol_multiplier(prefix), self.ctx.lookup(rest))
            {
                if unit.is_valid() && !unit.is_equation() {
                    return Some(unit.scale(multiplier));
                }
            }
        }
        None
    }

    /// A unit followed by a parenthesized or bracketed group: the group
    /// multiplies when it parses as a unit and names a commodity
    /// otherwise.
    fn trailing_group(&mut self, s: &str) -> Option<PreciseUnit> {
        if !s.ends_with([')', ']']) {
            return None;
        }
        let open = group_start(s).filter(|open| *open > 0)?;
        let unit = self.sub_atom(&s[..open])?;
        let inner = &s[open + 1..s.len() - 1];
        let group = match inner.is_empty() {
            true => PreciseUnit::ONE,
            false => self.nested(|p| p.expression(inner)),
        };
        if group.is_valid() {
            return Some(unit * group);
        }
        if self.options.strict || self.exhausted {
            return None;
        }
        log::debug!("treating {:?} as a commodity of {:?}", inner, &s[..open]);
        Some(unit * self.commodity(inner))
    }

    /// `square meter`, `cubic feet`, `meter squared`, `inverse second`.
    fn modified(&mut self, s: &str) -> Option<PreciseUnit> {
        for (word, abbreviation, power) in POWER_MODIFIERS {
            let rest = match starts_with_ci(s, word) {
                true => strip_prefix_ci(s, word),
                false => strip_prefix_ci(s, abbreviation),
            };
            if let Some(unit) = rest.and_then(|rest| self.sub_atom(rest)) {
                return Some(unit.pow(*power));
            }
        }
        for (modifier, power) in POWER_SUFFIXES {
            if let Some(rest) = strip_suffix_ci(s, modifier) {
                if let Some(unit) = self.sub_atom(rest) {
                    return Some(unit.pow(*power));
                }
            }
        }
        for modifier in INVERSE_MODIFIERS {
            if let Some(rest) = strip_prefix_ci(s, modifier) {
                if let Some(unit) = self.sub_atom(rest) {
                    return Some(unit.invert());
                }
            }
        }
        None
    }

    /// Spelled out prefix (`millihertz`, `kilometers`).
    fn prefix_word(&mut self, s: &str) -> Option<PreciseUnit> {
        let (multiplier, len) = leading_word(s)?;
        let unit = self.sub_atom(&s[len..])?;
        (!unit.is_equation()).then(|| unit.scale(multiplier))
    }

    /// Plural of a decomposable unit (`kilometers`). The stem may not
    /// drop another plural suffix.
    fn plural(&mut self, s: &str) -> Option<PreciseUnit> {
        if self.depluralized {
            return None;
        }
        let stem = s.strip_suffix('s').filter(|stem| stem.len() > 1)?;
        self.depluralized = true;
        let unit = self.sub_atom(stem);
        self.depluralized = false;
        unit
    }

    /// Number words as a multiplier (`twenty`, `hundredm`).
    fn number_word(&mut self, s: &str) -> Option<PreciseUnit> {
        let (value, used) = number_words(s)?;
        match &s[used..] {
            "" => Some(PreciseUnit::ONE.scale(value)),
            rest => self.sub_atom(rest).map(|unit| unit.scale(value)),
        }
    }

    /// Bare trailing digits are a power (`m2`, `s-1`).
    fn trailing_power(&mut self, s: &str) -> Option<PreciseUnit> {
        let digits = s.bytes().rev().take_while(u8::is_ascii_digit).count();
        if digits == 0 || digits > 2 || digits == s.len() {
            return None;
        }
        let mut base = &s[..s.len() - digits];
        let mut power: i32 = s[s.len() - digits..].parse().ok()?;
        if let Some(stripped) = base.strip_suffix('-') {
            base = stripped;
            power = -power;
        }
        if base.is_empty() || base.ends_with(['^', '-', '+', '.']) {
            return None;
        }
        self.sub_atom(base).map(|unit| unit.pow(power))
    }

    /// Hyphen or underscore separated words: joined when that names a
    /// unit (`fl_oz`), multiplied otherwise (`newton-meter`).
    fn separated(&mut self, s: &str) -> Option<PreciseUnit> {
        let separator = |c: char| c == '-' || c == '_';
        if !s.chars().skip(1).any(separator) {
            return None;
        }
        let joined: String = s.chars().filter(|c| !separator(*c)).collect();
        if let Some(unit) = self.sub_atom(&joined) {
            return Some(unit);
        }
        let mut product = PreciseUnit::ONE;
        for part in s.split(separator).filter(|p| !p.is_empty()) {
            product = product * self.sub_atom(part)?;
        }
        product.is_valid().then_some(product)
    }

    /// Case-insensitive table matches, capitalized words (`Meter`,
    /// `Seconds`) and conversion of upper-case legacy spellings.
    fn case_converted(&mut self, s: &str) -> Option<PreciseUnit> {
        if self.options.case_insensitive {
            if let Some(unit) = tables::lookup_lowercase(s) {
                return Some(unit);
            }
        }
        if self.options.strict || !s.bytes().any(|c| c.is_ascii_uppercase()) {
            return None;
        }
        if s.bytes().any(|c| c.is_ascii_lowercase()) {
            return self.lowercased(s);
        }
        let converted = case_conversion(s);
        if converted != s {
            if let Some(unit) = self.sub_atom(&converted) {
                return Some(unit);
            }
        }
        tables::lookup_lowercase(s)
    }

    /// Mixed-case words only match the tables directly once lowered,
    /// so `kNm` is not read as `knm`.
    fn lowercased(&mut self, s: &str) -> Option<PreciseUnit> {
        if s.len() < 3 {
            return None;
        }
        let lower = s.to_ascii_lowercase();
        self.ctx.lookup(&lower).or_else(|| self.singular(&lower))
    }

    /// A unit the tables name without further decomposition.
    fn direct(&mut self, s: &str) -> Option<PreciseUnit> {
        self.ctx
            .lookup(s)
            .or_else(|| self.prefixed(s))
            .or_else(|| self.singular(s))
            .filter(|unit| unit.is_valid() && !unit.is_equation())
    }

    /// Split an unknown atom into a known leading unit and a known
    /// remainder (`Nm`, `kWhm`), longest leading unit first. Runs of
    /// one repeated letter (`ss`) are never split.
    fn partitioned(&mut self, s: &str) -> Option<PreciseUnit> {
        if self.options.strict
            || self.options.skip_partitioning
            || s.len() > MAX_PARTITION_LENGTH
            || s.bytes().all(|c| Some(c) == s.bytes().next())
        {
            return None;
        }
        for split in (1..s.len()).rev() {
            if !s.is_char_boundary(split) {
                continue;
            }
            if !self.tick() {
                return None;
            }
            let (left, right) = s.split_at(split);
            let head = match self.ctx.lookup(left) {
                Some(unit) => unit,
                None => match self.prefixed(left) {
                    Some(unit) => unit,
                    None => continue,
                },
            };
            if !head.is_valid() || head.is_equation() {
                continue;
            }
            if let Some(tail) = self.direct(right) {
                log::debug!("partitioned {:?} at {}", s, split);
                return Some(head * tail);
            }
        }
        None
    }
}

/// `CXUN[n]`, `CXCUN[n]` and `EQXUN[n]`.
fn custom_atom(s: &str) -> Option<PreciseUnit> {
    let digits = |prefix: &str| -> Option<u16> {
        strip_prefix_ci(s, prefix)?.strip_suffix(']')?.parse().ok()
    };
    if let Some(n) = digits("CXUN[").filter(|n| *n < 1024) {
        return Some(custom_unit(n));
    }
    if let Some(n) = digits("CXCUN[").filter(|n| *n < 16) {
        return Some(custom_count_unit(n));
    }
    if let Some(n) = digits("EQXUN[").filter(|n| *n < 32) {
        return Some(PreciseUnit::new(1.0, equation_dimension(n as u8)));
    }
    None
}

/// Custom unit number for an annotated unit name.
fn name_hash(name: &str) -> u16 {
    let hash = name
        .bytes()
        .fold(5381u32, |h, c| h.wrapping_mul(33) ^ c as u32);
    (hash % 1024) as u16
}

fn case_conversion(s: &str) -> String {
    if let Some((_, converted)) =
        CASE_CONVERSIONS.iter().find(|(upper, _)| *upper == s)
    {
        return converted.to_string();
    }
    let mut chars: Vec<char> = s.chars().collect();
    if let Some(first) = chars.first_mut() {
        if matches!(first, 'P' | 'M') {
            *first = first.to_ascii_lowercase();
        }
    }
    let n = chars.len();
    if n >= 2 && chars[n - 1] == 'M' && "KMGTPEYZUNF".contains(chars[n - 2]) {
        chars[n - 1] = 'm';
    }
    chars.into_iter().collect()
}

fn strip_prefix_ci<'s>(s: &'s str, prefix: &str) -> Option<&'s str> {
    let head = s.get(..prefix.len())?;
    match head.eq_ignore_ascii_case(prefix) && s.len() > prefix.len() {
        true => Some(&s[prefix.len()..]),
        false => None,
    }
}

fn starts_with_ci(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn strip_suffix_ci<'s>(s: &'s str, suffix: &str) -> Option<&'s str> {
    let split = s.len().checked_sub(suffix.len())?;
    let tail = s.get(split..)?;
    match tail.eq_ignore_ascii_case(suffix) && split > 0 {
        true => Some(&s[..split]),
        false => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{case_conversion, custom_atom, starts_with_ci, strip_prefix_ci};
    use crate::unit_defs::{custom_count_unit, custom_unit};

    #[test]
    fn case_conversions() {
        assert_eq!(case_conversion("MG"), "mg");
        assert_eq!(case_conversion("KM"), "Km");
        assert_eq!(case_conversion("PA"), "pA");
        assert_eq!(case_conversion("N"), "N");
    }

    #[test]
    fn custom_atoms() {
        assert_eq!(custom_atom("CXUN[12]"), Some(custom_unit(12)));
        assert_eq!(custom_atom("cxcun[3]"), Some(custom_count_unit(3)));
        assert_eq!(custom_atom("CXUN[1024]"), None);
        assert_eq!(custom_atom("CXUN[x]"), None);
        assert!(custom_atom("EQXUN[3]").is_some_and(|u| u.is_equation()));
    }

    #[test]
    fn prefixes() {
        assert_eq!(strip_prefix_ci("SquareMeter", "square"), Some("Meter"));
        assert_eq!(strip_prefix_ci("square", "square"), None);
        assert_eq!(strip_prefix_ci("s\u{e9}", "sq"), None);
        assert!(starts_with_ci("Square", "square"));
        assert!(!starts_with_ci("sqm", "square"));
    }
}
