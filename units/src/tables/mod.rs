/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Static unit tables: input strings, preferred output names and
//! measurement types.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::PreciseUnit;

mod customary;
pub mod measurement_types;
mod names;
mod other;
mod si;

pub use measurement_types::default_unit;

lazy_static! {
    static ref UNIT_STRINGS: HashMap<String, PreciseUnit> = {
        let mut map = HashMap::new();
        for (name, unit) in all_units() {
            map.entry(name.to_string()).or_insert(*unit);
            if name.contains(' ') {
                map.entry(name.replace(' ', "")).or_insert(*unit);
            }
        }
        map
    };
    static ref LOWERCASE_STRINGS: HashMap<String, PreciseUnit> = {
        let mut map = HashMap::new();
        for (name, unit) in UNIT_STRINGS.iter() {
            map.entry(name.to_lowercase()).or_insert(*unit);
        }
        // Exact-case entries that fold onto the same key win.
        for (name, unit) in all_units() {
            if name.chars().all(|c| !c.is_uppercase()) {
                map.insert(name.replace(' ', ""), *unit);
            }
        }
        map
    };
    static ref UNIT_NAMES: HashMap<PreciseUnit, (&'static str, bool)> = {
        let mut map = HashMap::new();
        for (unit, name, prefixable) in names::NAMES {
            map.entry(*unit).or_insert((*name, *prefixable));
        }
        map
    };
    static ref MULTI_WORD: Vec<&'static str> = {
        let mut words: Vec<&'static str> = all_units()
            .map(|(name, _)| *name)
            .filter(|name| name.contains(' '))
            .collect();
        words.sort_by_key(|w| std::cmp::Reverse(w.len()));
        words
    };
}

fn all_units() -> impl Iterator<Item = &'static (&'static str, PreciseUnit)> {
    si::UNITS
        .iter()
        .chain(customary::UNITS.iter())
        .chain(other::UNITS.iter())
}

/// Exact match in the static unit table.
pub fn lookup(name: &str) -> Option<PreciseUnit> {
    UNIT_STRINGS.get(name).copied()
}

/// Case-insensitive match in the static unit table.
pub fn lookup_lowercase(name: &str) -> Option<PreciseUnit> {
    LOWERCASE_STRINGS.get(&name.to_lowercase()).copied()
}

/// Preferred output name for a unit.
pub fn name_of(unit: &PreciseUnit) -> Option<&'static str> {
    UNIT_NAMES.get(unit).map(|(name, _)| *name)
}

/// Named units that accept a prefix when rendering.
pub fn prefixable() -> impl Iterator<Item = (PreciseUnit, &'static str)> {
    names::NAMES
        .iter()
        .filter(|(_, _, prefixable)| *prefixable)
        .map(|(unit, name, _)| (*unit, *name))
}

/// All preferred output names, in priority order.
pub fn preferred() -> impl Iterator<Item = (PreciseUnit, &'static str)> {
    names::NAMES.iter().map(|(unit, name, _)| (*unit, *name))
}

/// Table entries made of several words ("fluid ounce"), longest first.
pub fn multi_word_names() -> &'static [&'static str] {
    &MULTI_WORD
}
