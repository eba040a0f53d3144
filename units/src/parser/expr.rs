/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::numeric::leading_number;
use crate::PreciseUnit;

use super::Parser;

/// Largest integer exponent accepted after `^`.
const MAX_POWER: f64 = 64.0;

impl<'a> Parser<'a> {
    /// Products and quotients, evaluated left to right. In single
    /// slash mode everything after the first `/` is the denominator.
    pub(super) fn expression(&mut self, s: &str) -> PreciseUnit {
        if !self.tick() {
            return PreciseUnit::ERROR;
        }
        if let Some(unit) = self.ctx.lookup(s) {
            return unit;
        }
        if !self.options.single_slash {
            return self.product(s, b"*/");
        }
        let pos = match first_top_level(s, b"/") {
            Some((pos, _)) => pos,
            None => return self.product(s, b"*"),
        };
        let (numerator, denominator) = (&s[..pos], &s[pos + 1..]);
        if denominator.is_empty() {
            return PreciseUnit::ERROR;
        }
        let lhs = match numerator.is_empty() {
            true => PreciseUnit::ONE,
            false => self.product(numerator, b"*"),
        };
        if lhs.is_error() {
            return PreciseUnit::ERROR;
        }
        lhs / self.nested(|p| p.product(denominator, b"*/"))
    }

    /// Fold the top-level terms of `s` separated by `ops`. Only the
    /// first term may be empty (`/s`). Each term is one level deep, so
    /// long flat products do not use up the depth budget.
    fn product(&mut self, s: &str, ops: &[u8]) -> PreciseUnit {
        let terms = split_top_level(s, ops);
        if terms.len() == 1 {
            return self.segment(s);
        }
        let mut unit = PreciseUnit::ONE;
        for (i, (op, term)) in terms.into_iter().enumerate() {
            let factor = match term.is_empty() {
                true if i == 0 => continue,
                true => return PreciseUnit::ERROR,
                false => self.nested(|p| p.segment(term)),
            };
            unit = match op {
                b'/' => unit / factor,
                _ => unit * factor,
            };
            if unit.is_error() || self.exhausted {
                return PreciseUnit::ERROR;
            }
        }
        unit
    }

    /// A single factor: a leading number, a commodity annotation, a
    /// power or an atom.
    pub(super) fn segment(&mut self, s: &str) -> PreciseUnit {
        if !self.tick() {
            return PreciseUnit::ERROR;
        }
        if let Some(unit) = self.ctx.lookup(s) {
            return unit;
        }

        let (value, used) = leading_number(s);
        if used > 0 && !value.is_nan() {
            return match s[used..].trim_start_matches('*') {
                "" => PreciseUnit::ONE.scale(value),
                rest if rest.starts_with('^') => PreciseUnit::ERROR,
                rest => self.nested(|p| p.segment(rest)).scale(value),
            };
        }

        if s.ends_with('}') {
            if let Some(open) = group_start(s) {
                if open > 0 {
                    let unit = match &s[..open] {
                        "" => PreciseUnit::ONE,
                        rest => self.nested(|p| p.segment(rest)),
                    };
                    let annotation = self.nested(|p| p.atom(&s[open..]));
                    return unit * annotation;
                }
            }
        }

        if let Some(pos) = last_top_level(s, b"^").map(|(pos, _)| pos) {
            let (base, exponent) = (&s[..pos], &s[pos + 1..]);
            if base.is_empty() {
                return PreciseUnit::ERROR;
            }
            let unit = self.nested(|p| p.segment(base));
            return power(unit, exponent);
        }

        self.atom(s)
    }
}

/// Raise `unit` to the exponent string after `^`: an integer, or the
/// reciprocal of an integer for roots (`m^(1/2)`, `m^0.5`).
pub(super) fn power(unit: PreciseUnit, exponent: &str) -> PreciseUnit {
    let (value, used) = leading_number(exponent);
    if used == 0 || used != exponent.len() || !value.is_finite() {
        return PreciseUnit::ERROR;
    }
    if value.fract() == 0.0 && value.abs() <= MAX_POWER {
        return unit.pow(value as i32);
    }
    if value == 0.0 {
        return PreciseUnit::ERROR;
    }
    let root = 1.0 / value;
    if root.round() != 0.0
        && (root - root.round()).abs() < 1e-9
        && root.abs() <= MAX_POWER
    {
        return unit.root(root.round() as i32);
    }
    PreciseUnit::ERROR
}

/// Walk the top level of `s` (outside any bracket), calling `f` for
/// each byte position. Escaped characters are skipped.
fn for_each_top_level<F>(s: &str, mut f: F)
where
    F: FnMut(usize, u8) -> bool,
{
    let bytes = s.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            c if depth == 0 => {
                if !f(i, c) {
                    return;
                }
            }
            _ => {}
        }
        i += 1;
    }
}

pub(super) fn last_top_level(s: &str, ops: &[u8]) -> Option<(usize, u8)> {
    let mut found = None;
    for_each_top_level(s, |i, c| {
        if ops.contains(&c) {
            found = Some((i, c));
        }
        true
    });
    found
}

/// Split `s` at every top-level operator in `ops`. Each term is paired
/// with the operator before it; the first term gets `*`.
pub(super) fn split_top_level<'s>(s: &'s str, ops: &[u8]) -> Vec<(u8, &'s str)> {
    let mut terms = Vec::new();
    let (mut start, mut op) = (0, b'*');
    for_each_top_level(s, |i, c| {
        if ops.contains(&c) {
            terms.push((op, &s[start..i]));
            start = i + 1;
            op = c;
        }
        true
    });
    terms.push((op, &s[start..]));
    terms
}

pub(super) fn first_top_level(s: &str, ops: &[u8]) -> Option<(usize, u8)> {
    let mut found = None;
    for_each_top_level(s, |i, c| {
        if ops.contains(&c) {
            found = Some((i, c));
            return false;
        }
        true
    });
    found
}

/// Start of the bracket group that closes at the last byte of `s`.
pub(super) fn group_start(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut stack = Vec::new();
    let mut i = 0;
    let mut last = None;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'(' | b'[' | b'{' => stack.push(i),
            b')' | b']' | b'}' => {
                last = stack.pop().map(|start| (start, i));
            }
            _ => {}
        }
        i += 1;
    }
    match (stack.is_empty(), last) {
        (true, Some((start, end))) if end + 1 == bytes.len() => Some(start),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{group_start, last_top_level, power, split_top_level};
    use crate::unit_defs::M;

    #[test]
    fn top_level_operators() {
        assert_eq!(last_top_level("m*kg/s^2", b"*/"), Some((4, b'/')));
        assert_eq!(last_top_level("(m/s)*kg", b"*/"), Some((5, b'*')));
        assert_eq!(last_top_level("(m/s)", b"*/"), None);
        assert_eq!(last_top_level("m{a/b}", b"*/"), None);
    }

    #[test]
    fn flat_terms() {
        assert_eq!(split_top_level("m", b"*/"), vec![(b'*', "m")]);
        assert_eq!(
            split_top_level("m*kg/s^2", b"*/"),
            vec![(b'*', "m"), (b'*', "kg"), (b'/', "s^2")]
        );
        assert_eq!(
            split_top_level("/(m/s)*kg", b"*/"),
            vec![(b'*', ""), (b'/', "(m/s)"), (b'*', "kg")]
        );
        assert_eq!(split_top_level("m/s", b"*"), vec![(b'*', "m/s")]);
    }

    #[test]
    fn groups() {
        assert_eq!(group_start("m{gold}"), Some(1));
        assert_eq!(group_start("m{a{b}}"), Some(1));
        assert_eq!(group_start("m{a\\}}"), Some(1));
        assert_eq!(group_start("(m)s"), None);
    }

    #[test]
    fn powers() {
        assert_eq!(power(M, "2"), M.pow(2));
        assert_eq!(power(M, "-1"), M.invert());
        assert_eq!(power(M.pow(2), "(1/2)"), M);
        assert_eq!(power(M.pow(2), "0.5"), M);
        assert!(power(M, "0.3").is_error());
        assert!(power(M, "1e9").is_error());
        assert!(power(M, "x").is_error());
    }
}
