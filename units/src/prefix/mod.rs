/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod prefix_trait;

pub mod bin_prefix;
pub mod si_prefix;

pub use prefix_trait::Prefix;

pub use bin_prefix::BinPrefix;
pub use si_prefix::SiPrefix;

/// Multiplier for a prefix symbol: binary prefixes first, then the SI
/// symbols and their alternate spellings.
pub fn symbol_multiplier(symbol: &str) -> Option<f64> {
    BinPrefix::from_prefix(symbol)
        .map(|p| p.multiplier())
        .or_else(|| SiPrefix::from_symbol(symbol).map(|p| p.multiplier()))
}

/// Multiplier for a spelled out prefix such as `kilo` or `mebi`.
pub fn word_multiplier(word: &str) -> Option<f64> {
    BinPrefix::from_word(word)
        .map(|p| p.multiplier())
        .or_else(|| SiPrefix::from_word(word).map(|p| p.multiplier()))
}

/// Longest spelled out prefix at the start of `input`, with its length.
pub fn leading_word(input: &str) -> Option<(f64, usize)> {
    SiPrefix::SCALE
        .iter()
        .map(|p| (p.word(), p.multiplier()))
        .chain(BinPrefix::SCALE.iter().map(|p| (p.word(), p.multiplier())))
        .filter(|(word, _)| {
            input.len() > word.len()
                && input.is_char_boundary(word.len())
                && input[..word.len()].eq_ignore_ascii_case(word)
        })
        .max_by_key(|(word, _)| word.len())
        .map(|(word, multiplier)| (multiplier, word.len()))
}
