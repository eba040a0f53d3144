/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::HashMap;
use std::sync::Mutex;

use units::commodity::invert_code;
use units::unit_defs::{KG, M};
use units::{parse_unit, render_unit, CommodityStore, ParseOptions, UnitContext};

#[test]
fn number_words_with_commodity() {
    let words = parse_unit("twenty{unicorns}");
    let digits = parse_unit("20{unicorns}");
    assert_eq!(words.multiplier(), 20.0);
    assert_ne!(words.commodity(), 0);
    assert_eq!(words.commodity(), digits.commodity());
}

#[test]
fn annotations() {
    let gold = parse_unit("{gold}").commodity();
    assert_ne!(gold, 0);
    assert_eq!(parse_unit("kg{gold}"), KG.with_commodity(gold));
    assert_eq!(parse_unit("kg of gold"), parse_unit("kg{gold}"));
    assert_eq!(parse_unit("1/{gold}").commodity(), invert_code(gold));
    assert_eq!(parse_unit("{gold}/{gold}"), parse_unit("one"));
    assert!(parse_unit("{gold}*{silver}").is_error());
}

#[test]
fn rendering() {
    assert_eq!(render_unit(&parse_unit("{unicorns}")), "{unicorns}");
    assert_eq!(render_unit(&parse_unit("m{unicorns}")), "m*{unicorns}");
    let unit = parse_unit("kg of gold");
    assert_eq!(parse_unit(&render_unit(&unit)), unit);
}

/// Fixed codes, no hashing.
#[derive(Default)]
struct FixedStore {
    names: Mutex<HashMap<String, u32>>,
}

impl CommodityStore for FixedStore {
    fn lookup(&self, name: &str) -> u32 {
        let mut names = self.names.lock().unwrap();
        let next = names.len() as u32 + 1;
        *names.entry(name.to_lowercase()).or_insert(next)
    }

    fn name_of(&self, code: u32) -> String {
        let names = self.names.lock().unwrap();
        names
            .iter()
            .find(|(_, c)| **c == code)
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| format!("#{}", code))
    }

    fn add(&self, name: &str, code: u32) {
        self.names.lock().unwrap().insert(name.to_lowercase(), code);
    }

    fn clear(&self) {
        self.names.lock().unwrap().clear();
    }

    fn enable(&self) {}

    fn disable(&self) {}

    fn is_enabled(&self) -> bool {
        true
    }
}

#[test]
fn custom_store() {
    let ctx = UnitContext::with_commodity_store(FixedStore::default());
    let options = ParseOptions::default();
    assert_eq!(ctx.parse_unit("m{apples}", &options), M.with_commodity(1));
    assert_eq!(ctx.parse_unit("{pears}", &options).commodity(), 2);
    assert_eq!(ctx.render_unit(&M.with_commodity(1)), "m*{apples}");
}
