/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Leading numerical expressions ("3.5", "2*10^3", "(1/2)") and spelled
//! out numbers ("twenty-five", "four hundred million").

use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit0, digit1, one_of};
use nom::combinator::{opt, recognize};
use nom::sequence::{pair, tuple};
use nom::IResult;

/// Maximum nesting of parentheses and exponents.
pub const MAX_NUMERIC_DEPTH: usize = 16;
/// Maximum number of evaluation steps for one expression.
pub const MAX_NUMERIC_STEPS: usize = 512;

/// Parse the numerical expression at the start of `input`.
///
/// Returns the value and the number of bytes consumed, or `(NaN, 0)`
/// when the input does not start with a number. Products, quotients
/// (`*`, `/`, `x`), powers (`^`, right-associative) and parenthesized
/// blocks are evaluated left to right.
pub fn leading_number(input: &str) -> (f64, usize) {
    let mut evaluator = Evaluator::default();
    match evaluator.expression(input, 0) {
        Some((value, used)) if !evaluator.exhausted => (value, used),
        _ => (f64::NAN, 0),
    }
}

#[derive(Default)]
struct Evaluator {
    steps: usize,
    exhausted: bool,
}

impl Evaluator {
    fn tick(&mut self, depth: usize) -> bool {
        self.steps += 1;
        if self.steps > MAX_NUMERIC_STEPS || depth > MAX_NUMERIC_DEPTH {
            self.exhausted = true;
        }
        !self.exhausted
    }

    fn expression(&mut self, input: &str, depth: usize) -> Option<(f64, usize)> {
        let (mut value, mut pos) = self.block(input, depth)?;
        let bytes = input.as_bytes();
        while pos < bytes.len() {
            if !self.tick(depth) {
                return None;
            }
            let op = bytes[pos];
            let (operand, skip) = match op {
                b'*' | b'/' => (&input[pos + 1..], 1),
                b'x' if starts_with_digit(&input[pos + 1..]) => {
                    (&input[pos + 1..], 1)
                }
                b'(' => (&input[pos..], 0),
                b'.' | b'-' | b'+' => return None,
                _ => break,
            };
            match self.block(operand, depth) {
                Some((rhs, used)) => {
                    value = match op {
                        b'/' => value / rhs,
                        _ => value * rhs,
                    };
                    pos += skip + used;
                }
                None if self.exhausted => return None,
                None => break,
            }
        }
        Some((value, pos))
    }

    /// A signed literal or parenthesized expression, optionally raised
    /// to a power.
    fn block(&mut self, input: &str, depth: usize) -> Option<(f64, usize)> {
        if !self.tick(depth) {
            return None;
        }
        let (mut value, mut pos) = match input.as_bytes().first()? {
            b'(' => self.parenthesized(input, depth)?,
            b'-' | b'+' if input[1..].starts_with('(') => {
                let (v, used) = self.parenthesized(&input[1..], depth)?;
                let sign = if input.starts_with('-') { -1.0 } else { 1.0 };
                (sign * v, used + 1)
            }
            _ => {
                let (rest, text) = literal(input).ok()?;
                (literal_value(text)?, input.len() - rest.len())
            }
        };
        if input[pos..].starts_with('^') {
            let (power, used) = self.block(&input[pos + 1..], depth + 1)?;
            value = value.powf(power);
            pos += 1 + used;
        }
        Some((value, pos))
    }

    fn parenthesized(
        &mut self,
        input: &str,
        depth: usize,
    ) -> Option<(f64, usize)> {
        let close = matching_paren(input)?;
        let inner = &input[1..close];
        if inner.is_empty() {
            return Some((1.0, close + 1));
        }
        if !inner
            .bytes()
            .all(|c| c.is_ascii_digit() || b"-+.eE*/^()x".contains(&c))
        {
            return None;
        }
        let (value, used) = self.expression(inner, depth + 1)?;
        (used == inner.len()).then_some((value, close + 1))
    }
}

fn starts_with_digit(input: &str) -> bool {
    input.bytes().next().is_some_and(|c| c.is_ascii_digit())
}

/// Index of the parenthesis closing the one at the start of `input`.
fn matching_paren(input: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in input.bytes().enumerate() {
        match c {
            b'(' => depth += 1,
            b')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn sign(input: &str) -> IResult<&str, char> {
    one_of("+-")(input)
}

fn decimal(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ))(input)
}

fn exponent(input: &str) -> IResult<&str, &str> {
    recognize(tuple((one_of("eE"), opt(sign), digit1)))(input)
}

fn literal(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(tuple((opt(sign), decimal, opt(exponent)))),
        recognize(pair(
            opt(sign),
            alt((tag_no_case("infinity"), tag_no_case("inf"))),
        )),
    ))(input)
}

fn literal_value(text: &str) -> Option<f64> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let value = match digits.as_bytes().first() {
        Some(b'i' | b'I') => f64::INFINITY,
        _ => digits.parse::<f64>().ok()?,
    };
    Some(if negative { -value } else { value })
}

enum Word {
    Digit(f64),
    Tens(f64),
    Hundred,
    Scale(f64),
    Fraction(f64),
}

const WORDS: &[(&str, Word)] = &[
    ("zero", Word::Digit(0.0)),
    ("one", Word::Digit(1.0)),
    ("two", Word::Digit(2.0)),
    ("three", Word::Digit(3.0)),
    ("four", Word::Digit(4.0)),
    ("five", Word::Digit(5.0)),
    ("six", Word::Digit(6.0)),
    ("seven", Word::Digit(7.0)),
    ("eight", Word::Digit(8.0)),
    ("nine", Word::Digit(9.0)),
    ("ten", Word::Digit(10.0)),
    ("eleven", Word::Digit(11.0)),
    ("twelve", Word::Digit(12.0)),
    ("thirteen", Word::Digit(13.0)),
    ("fourteen", Word::Digit(14.0)),
    ("fifteen", Word::Digit(15.0)),
    ("sixteen", Word::Digit(16.0)),
    ("seventeen", Word::Digit(17.0)),
    ("eighteen", Word::Digit(18.0)),
    ("nineteen", Word::Digit(19.0)),
    ("twenty", Word::Tens(20.0)),
    ("thirty", Word::Tens(30.0)),
    ("forty", Word::Tens(40.0)),
    ("fifty", Word::Tens(50.0)),
    ("sixty", Word::Tens(60.0)),
    ("seventy", Word::Tens(70.0)),
    ("eighty", Word::Tens(80.0)),
    ("ninety", Word::Tens(90.0)),
    ("hundred", Word::Hundred),
    ("thousand", Word::Scale(1e3)),
    ("million", Word::Scale(1e6)),
    ("billion", Word::Scale(1e9)),
    ("trillion", Word::Scale(1e12)),
    ("half", Word::Fraction(0.5)),
    ("quarter", Word::Fraction(0.25)),
    ("tenth", Word::Fraction(0.1)),
    ("hundredth", Word::Fraction(0.01)),
    ("thousandth", Word::Fraction(1e-3)),
    ("millionth", Word::Fraction(1e-6)),
];

fn next_word(input: &str) -> Option<(&'static Word, usize)> {
    WORDS
        .iter()
        .filter(|(word, _)| {
            input.len() >= word.len()
                && input.is_char_boundary(word.len())
                && input[..word.len()].eq_ignore_ascii_case(word)
        })
        .max_by_key(|(word, _)| word.len())
        .map(|(word, value)| (value, word.len()))
}

/// Parse spelled out numbers at the start of `input`.
///
/// Returns the value and the number of bytes consumed. Words may be
/// joined directly or with `-`, `_`, spaces or "and".
pub fn number_words(input: &str) -> Option<(f64, usize)> {
    let mut total = 0.0;
    let mut current = 0.0;
    let mut fraction = None;
    let mut pos = 0;
    let mut end = 0;
    let mut previous_digit = false;

    loop {
        let (word, used) = match next_word(&input[pos..]) {
            Some(found) => found,
            None => break,
        };
        match word {
            Word::Digit(_) if previous_digit => break,
            Word::Digit(v) => {
                current += v;
                previous_digit = true;
            }
            Word::Tens(v) => {
                if current % 100.0 != 0.0 {
                    break;
                }
                current += v;
                previous_digit = false;
            }
            Word::Hundred => {
                current = current.max(1.0) * 100.0;
                previous_digit = false;
            }
            Word::Scale(scale) => {
                total += current.max(1.0) * scale;
                current = 0.0;
                previous_digit = false;
            }
            Word::Fraction(f) => {
                fraction = Some(*f);
                pos += used;
                end = pos;
                break;
            }
        }
        pos += used;
        end = pos;
        pos += separator(&input[pos..]);
    }

    if end == 0 {
        return None;
    }
    let value = total + current;
    Some(match fraction {
        Some(f) if value == 0.0 => (f, end),
        Some(f) => (value * f, end),
        None => (value, end),
    })
}

/// Length of the separator between two number words.
fn separator(input: &str) -> usize {
    let skip = input
        .bytes()
        .take_while(|c| matches!(c, b'-' | b'_' | b' '))
        .count();
    let rest = &input[skip..];
    let and = rest.get(..3).is_some_and(|w| w.eq_ignore_ascii_case("and"));
    if and && rest.len() > 3 {
        let after = skip + 3;
        after
            + input[after..]
                .bytes()
                .take_while(|c| matches!(c, b'-' | b'_' | b' '))
                .count()
    } else {
        skip
    }
}

#[cfg(test)]
mod tests {
    use super::{leading_number, number_words};

    fn value(input: &str) -> f64 {
        leading_number(input).0
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(leading_number("4meters"), (4.0, 1));
        assert_eq!(leading_number("1e3m"), (1000.0, 3));
        assert_eq!(leading_number("2em"), (2.0, 1));
        assert_eq!(leading_number("-7.5 kg"), (-7.5, 4));
        assert_eq!(leading_number(".5"), (0.5, 2));
        assert_eq!(leading_number("inf"), (f64::INFINITY, 3));
        assert!(leading_number("meter").0.is_nan());
    }

    #[test]
    fn operators() {
        assert_eq!(value("2.45*-7.3"), 2.45 * -7.3);
        assert_eq!(value("10.0/-4"), -2.5);
        assert_eq!(leading_number("1.2*"), (1.2, 3));
        assert_eq!(value("3x4"), 12.0);
        assert_eq!(leading_number("3xm"), (3.0, 1));
    }

    #[test]
    fn powers() {
        assert_eq!(value("2^2^2"), 16.0);
        assert_eq!(value("3^(2^2)^2"), 3f64.powi(16));
        assert_eq!(value("2^(2)^-2"), 2f64.powf(0.25));
        assert!(leading_number("2.3^(12m)").0.is_nan());
    }

    #[test]
    fn parentheses() {
        assert_eq!(leading_number("()"), (1.0, 2));
        assert_eq!(leading_number("(2)(2)"), (4.0, 6));
        assert_eq!(leading_number("(2)(m)"), (2.0, 3));
        assert_eq!(value("((2))"), 2.0);
        assert_eq!(leading_number("5*(45+)"), (5.0, 1));
        assert_eq!(leading_number("92*(452.252.34)"), (92.0, 2));
        assert_eq!(leading_number("56*(45.6*34.2"), (56.0, 2));
        assert!(leading_number("(45*7*m)").0.is_nan());
    }

    #[test]
    fn invalid_continuations() {
        assert!(leading_number("3.4.5").0.is_nan());
        assert!(leading_number("10-3").0.is_nan());
    }

    #[test]
    fn limits() {
        let deep = format!("{}1{}", "(".repeat(40), ")".repeat(40));
        assert!(leading_number(&deep).0.is_nan());
        let long = "2*".repeat(600) + "2";
        assert!(leading_number(&long).0.is_nan());
    }

    #[test]
    fn words() {
        assert_eq!(number_words("twenty"), Some((20.0, 6)));
        assert_eq!(number_words("twenty-five"), Some((25.0, 11)));
        assert_eq!(number_words("hundredm"), Some((100.0, 7)));
        assert_eq!(number_words("millionmiles"), Some((1e6, 7)));
        assert_eq!(number_words("fourhundredmillion"), Some((4e8, 18)));
        assert_eq!(number_words("two-million"), Some((2e6, 11)));
        assert_eq!(
            number_words("one hundred and five"),
            Some((105.0, 20))
        );
        assert_eq!(number_words("half"), Some((0.5, 4)));
        assert_eq!(number_words("three quarter"), Some((0.75, 13)));
        assert_eq!(number_words("meter"), None);
    }
}
