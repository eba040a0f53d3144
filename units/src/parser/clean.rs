/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use nom::bytes::complete::{tag_no_case, take_until};
use nom::sequence::delimited;
use nom::IResult;

use crate::numeric::number_words;
use crate::tables;

const MODIFIERS: &[&str] =
    &["square", "sq", "cubic", "cu", "reciprocal", "inverse"];
const POWER_SUFFIXES: &[&str] = &["squared", "cubed"];

/// Normalize a unit string into the operator form understood by the
/// expression parser, or `None` when the string is malformed.
///
/// ```
/// assert_eq!(units::clean_unit_string("N·m²").as_deref(), Some("N*m^2"));
/// assert_eq!(units::clean_unit_string("((m)"), None);
/// ```
pub fn clean_unit_string(input: &str) -> Option<String> {
    clean(input.trim())
}

pub(super) fn clean(input: &str) -> Option<String> {
    let unicode = replace_unicode(input);
    let tagged = replace_sup_tags(&unicode)?;
    let mut s = tagged.replace("**", "^");
    if let Some(rest) = s.strip_prefix("10*") {
        if rest.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
            s = format!("10^{}", rest);
        }
    }
    let s = replace_of_phrases(&s);
    let s = join_multi_word(&s);
    let s = replace_spaces(&s);
    let s = replace_dots(&s);
    is_well_formed(&s).then_some(s)
}

fn replace_unicode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_superscript = false;
    for c in input.chars() {
        if let Some(sup) = superscript(c) {
            if !in_superscript {
                out.push('^');
                in_superscript = true;
            }
            out.push(sup);
            continue;
        }
        in_superscript = false;
        match c {
            '\u{b7}' | '\u{22c5}' | '\u{d7}' | '\u{2219}' | '\u{2022}' => {
                out.push('*')
            }
            '\u{f7}' => out.push('/'),
            '\u{2212}' | '\u{2013}' | '\u{2010}' => out.push('-'),
            '\u{b5}' | '\u{3bc}' => out.push('u'),
            '\u{2103}' => out.push_str("degC"),
            '\u{2109}' => out.push_str("degF"),
            '\u{b0}' | '\u{ba}' => out.push_str("deg"),
            '\u{3a9}' | '\u{2126}' => out.push_str("Ohm"),
            '\u{c5}' | '\u{212b}' => out.push_str("angstrom"),
            c if c.is_whitespace() => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

fn superscript(c: char) -> Option<char> {
    Some(match c {
        '\u{2070}' => '0',
        '\u{b9}' => '1',
        '\u{b2}' => '2',
        '\u{b3}' => '3',
        '\u{2074}' => '4',
        '\u{2075}' => '5',
        '\u{2076}' => '6',
        '\u{2077}' => '7',
        '\u{2078}' => '8',
        '\u{2079}' => '9',
        '\u{207b}' => '-',
        '\u{207a}' => '+',
        _ => return None,
    })
}

fn sup_tag(input: &str) -> IResult<&str, &str> {
    delimited(tag_no_case("<sup>"), take_until("</"), tag_no_case("</sup>"))(
        input,
    )
}

/// `m<sup>2</sup>` becomes `m^2`. An unterminated tag is malformed.
fn replace_sup_tags(input: &str) -> Option<String> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        match sup_tag(&rest[pos..]) {
            Ok((remaining, exponent)) => {
                out.push('^');
                out.push_str(exponent.trim());
                rest = remaining;
            }
            Err(_)
                if rest[pos..]
                    .get(..5)
                    .is_some_and(|t| t.eq_ignore_ascii_case("<sup>")) =>
            {
                return None
            }
            Err(_) => {
                out.push('<');
                rest = &rest[pos + 1..];
            }
        }
    }
    out.push_str(rest);
    Some(out)
}

/// `X of Y` names commodity `Y` of unit `X`; `mm of mercury` and
/// `in of water` map onto the manometric units.
fn replace_of_phrases(input: &str) -> String {
    let mut s = input.to_string();
    while let Some(pos) = find_outside_braces(&s, " of ") {
        let left = s[..pos].trim_end();
        let right_full = s[pos + 4..].trim_start();
        let end = right_full.find(['*', '/']).unwrap_or(right_full.len());
        let (right, tail) = right_full.split_at(end);
        let right = right.trim();
        let manometric = match right {
            "mercury" | "Hg" => Some("Hg"),
            "water" | "H2O" => Some("H2O"),
            _ => None,
        };
        let joined = manometric
            .map(|suffix| format!("{}{}", left.replace(' ', ""), suffix))
            .filter(|candidate| tables::lookup(candidate).is_some());
        s = match joined {
            Some(unit) => format!("{}{}", unit, tail),
            None if right.is_empty() => format!("{}{}", left, tail),
            None => format!("{}{{{}}}{}", left, right, tail),
        };
    }
    s
}

fn find_outside_braces(s: &str, pattern: &str) -> Option<usize> {
    s.match_indices(pattern).map(|(pos, _)| pos).find(|pos| {
        let opened = s[..*pos].matches('{').count();
        let closed = s[..*pos].matches('}').count();
        opened <= closed
    })
}

fn join_multi_word(input: &str) -> String {
    let mut s = input.to_string();
    if !s.contains(' ') {
        return s;
    }
    for name in tables::multi_word_names() {
        if s.contains(name) {
            s = s.replace(name, &name.replace(' ', ""));
        }
    }
    s
}

fn is_number_word(token: &str) -> bool {
    matches!(number_words(token), Some((_, used)) if used == token.len())
}

/// Spaces become multiplication, except around operators, after
/// modifiers (`square meter`) and between number words.
fn replace_spaces(input: &str) -> String {
    let mut tokens = input.split(' ').filter(|t| !t.is_empty());
    let mut out = match tokens.next() {
        Some(first) => first.to_string(),
        None => return String::new(),
    };
    let mut prev = out.clone();
    for token in tokens {
        if token == "per" {
            out.push('/');
            prev = "/".to_string();
            continue;
        }
        let glue = prev.ends_with(['*', '/', '^', '('])
            || token.starts_with(['*', '/', '^', ')'])
            || MODIFIERS.iter().any(|m| prev.eq_ignore_ascii_case(m))
            || POWER_SUFFIXES.iter().any(|m| token.eq_ignore_ascii_case(m))
            || (is_number_word(&prev) && is_number_word(token));
        if !glue {
            out.push('*');
        }
        out.push_str(token);
        prev = token.to_string();
    }
    match out.strip_prefix("per") {
        Some(rest) if rest.starts_with('*') => format!("/{}", &rest[1..]),
        _ => out,
    }
}

/// `N.m` is a product; dots between digits stay decimal points.
fn replace_dots(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let product = *c == '.'
                && i > 0
                && (chars[i - 1].is_alphabetic() || chars[i - 1] == ')')
                && chars
                    .get(i + 1)
                    .is_some_and(|n| n.is_alphabetic() || *n == '(');
            match product {
                true => '*',
                false => *c,
            }
        })
        .collect()
}

fn is_well_formed(s: &str) -> bool {
    if s.is_empty() || s.starts_with(['^', '*']) || s.ends_with(['^', '*', '/'])
    {
        return false;
    }
    let bytes = s.as_bytes();
    let operator = |c: u8| matches!(c, b'*' | b'/' | b'^');
    if bytes.windows(2).any(|w| {
        (operator(w[0]) && operator(w[1]))
            || w == b"-+"
            || w == b"+-"
    }) {
        return false;
    }
    brackets_balanced(s)
}

/// Brackets of all three kinds nest properly; escaped characters are
/// skipped.
pub(super) fn brackets_balanced(s: &str) -> bool {
    let mut stack = Vec::new();
    let mut bytes = s.bytes();
    while let Some(c) = bytes.next() {
        match c {
            b'\\' => {
                bytes.next();
            }
            b'(' | b'[' | b'{' => stack.push(c),
            b')' | b']' | b'}' => {
                let open = match c {
                    b')' => b'(',
                    b']' => b'[',
                    _ => b'{',
                };
                if stack.pop() != Some(open) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

#[cfg(test)]
mod tests {
    use super::clean;

    fn cleaned(s: &str) -> String {
        clean(s).unwrap_or_else(|| panic!("{:?} rejected", s))
    }

    #[test]
    fn unicode() {
        assert_eq!(cleaned("kg\u{b7}m\u{b2}"), "kg*m^2");
        assert_eq!(cleaned("m\u{207b}\u{b9}"), "m^-1");
        assert_eq!(cleaned("\u{b5}m"), "um");
        assert_eq!(cleaned("\u{b0}C"), "degC");
        assert_eq!(cleaned("k\u{3a9}"), "kOhm");
    }

    #[test]
    fn notation() {
        assert_eq!(cleaned("m<sup>2</sup>"), "m^2");
        assert_eq!(cleaned("m**3"), "m^3");
        assert_eq!(cleaned("N.m"), "N*m");
        assert_eq!(cleaned("1.5"), "1.5");
        assert_eq!(cleaned("10*3/uL"), "10^3/uL");
    }

    #[test]
    fn words() {
        assert_eq!(cleaned("meter per second"), "meter/second");
        assert_eq!(cleaned("per second"), "/second");
        assert_eq!(cleaned("square meter"), "squaremeter");
        assert_eq!(cleaned("twenty five"), "twentyfive");
        assert_eq!(cleaned("N m"), "N*m");
        assert_eq!(cleaned("fluid ounce"), "fluidounce");
        assert_eq!(cleaned("meter of cloth"), "meter{cloth}");
        assert_eq!(cleaned("mm of mercury"), "mmHg");
    }

    #[test]
    fn malformed() {
        for s in ["((())", "m)", "^m", "m^", "m*/s", "m^^2", "3-+4", "{m", "m<sup>2"]
        {
            assert_eq!(clean(s), None, "{:?}", s);
        }
        assert_eq!(cleaned("\\{m"), "\\{m");
    }
}
