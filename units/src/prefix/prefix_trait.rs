/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub trait Prefix: Sized + Copy + PartialEq + 'static {
    const BASE: u64;
    const SCALE: &'static [Self];

    fn power(&self) -> i64;
    fn prefix(&self) -> &'static str;
    fn word(&self) -> &'static str;

    /// Exact multiplier, as the nearest double to the decimal value.
    fn multiplier(&self) -> f64;

    fn from_prefix(symbol: &str) -> Option<Self> {
        Self::SCALE.iter().copied().find(|p| p.prefix() == symbol)
    }

    fn from_word(word: &str) -> Option<Self> {
        Self::SCALE
            .iter()
            .copied()
            .find(|p| p.word().eq_ignore_ascii_case(word))
    }

    fn from_multiplier(multiplier: f64) -> Option<Self> {
        Self::SCALE
            .iter()
            .copied()
            .find(|p| p.multiplier() == multiplier)
    }
}
