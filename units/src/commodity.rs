/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Commodity codes: what is being measured, independent of the unit.
//!
//! Known commodities have small fixed codes. Names of up to five
//! characters are packed into the code directly; longer names are
//! hashed and remembered in the registry so they can be rendered.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use lazy_static::lazy_static;

/// Marks the inverse of a commodity (e.g. "per barrel of oil").
pub const INVERSE_BIT: u32 = 0x8000_0000;

const SHORT_CODE: u32 = 0x4000_0000;
const HASH_CODE: u32 = 0x6000_0000;
const CODE_KIND: u32 = 0x6000_0000;

/// Combine the commodities of a product. `None` when both sides carry
/// unrelated commodities.
pub fn multiply_codes(a: u32, b: u32) -> Option<u32> {
    match (a, b) {
        (0, b) => Some(b),
        (a, 0) => Some(a),
        (a, b) if a == b => Some(a),
        (a, b) if a == b ^ INVERSE_BIT => Some(0),
        _ => None,
    }
}

pub fn invert_code(code: u32) -> u32 {
    match code {
        0 => 0,
        code => code ^ INVERSE_BIT,
    }
}

pub fn pow_code(code: u32, power: i32) -> u32 {
    match power {
        0 => 0,
        p if p < 0 => invert_code(code),
        _ => code,
    }
}

lazy_static! {
    static ref KNOWN_CODES: HashMap<&'static str, u32> = KNOWN
        .iter()
        .chain(ALIASES.iter())
        .copied()
        .collect();
    static ref KNOWN_NAMES: HashMap<u32, &'static str> =
        KNOWN.iter().map(|(name, code)| (*code, *name)).collect();
}

const KNOWN: &[(&str, u32)] = &[
    ("water", 1),
    ("gold", 2),
    ("copper", 4),
    ("silver", 6),
    ("platinum", 7),
    ("palladium", 8),
    ("zinc", 9),
    ("tin", 10),
    ("lead", 11),
    ("aluminum", 12),
    ("alluminum_alloy", 13),
    ("nickel", 14),
    ("cobolt", 15),
    ("molybdenum", 16),
    ("oil", 101),
    ("heat_oil", 102),
    ("nat_gas", 103),
    ("brent_crude", 104),
    ("ethanol", 105),
    ("propane", 107),
    ("wheat", 404),
    ("corn", 405),
    ("soybeans", 406),
    ("soybean_meal", 407),
    ("soybean_oil", 408),
    ("oats", 409),
    ("rice", 410),
    ("red_wheat", 411),
    ("spring_wheat", 412),
    ("canola", 413),
    ("rough_rice", 414),
    ("rapeseed", 415),
    ("adzuci", 418),
    ("barley", 420),
    ("live_cattle", 601),
    ("feeder_cattle", 602),
    ("lean_hogs", 603),
    ("milk", 604),
    ("cotton", 945),
    ("wool", 946),
    ("orange_juice", 947),
    ("sugar", 948),
    ("sugar_11", 949),
    ("sugar_14", 950),
    ("coffee", 952),
    ("cocoa", 961),
    ("palm_oil", 971),
    ("rubber", 999),
    ("lumber", 5007),
    ("cars", 43567),
    ("people", 115125),
    ("particles", 117463),
    ("hahnemann", 2352622),
    ("tissue", 4622626),
    ("cell", 45236884),
    ("embryo", 52632253),
    ("korsakov", 262626562),
    ("protein", 63215),
    ("creatinine", 63216),
    ("pixel", 63217),
    ("voxel", 63218),
];

const ALIASES: &[(&str, u32)] = &[
    ("_", 0),
    ("__", 0),
    ("___", 0),
    ("____", 0),
    ("_____", 0),
    ("cells", 45236884),
    ("prot", 63215),
    ("creat", 63216),
    ("pix", 63217),
    ("dot", 63217),
    ("vox", 63218),
];

/// Remove `\` before brackets and backslashes, then lowercase.
fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('\\', Some('\\' | '{' | '}' | '(' | ')' | '[' | ']')) => {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            _ => out.push(c),
        }
    }
    out.to_lowercase()
}

fn short_code(name: &str) -> Option<u32> {
    if name.len() >= 6 || !name.chars().all(|c| c == ' ' || ('_'..='}').contains(&c))
    {
        return None;
    }
    Some(name.bytes().enumerate().fold(SHORT_CODE, |code, (i, c)| {
        let c = if c == b' ' { b'_' } else { c };
        code + (((c - b'_') as u32) << (5 * i))
    }))
}

fn short_name(code: u32) -> String {
    let name: String = (0..5)
        .map(|i| char::from(((code >> (5 * i)) & 0x1F) as u8 + b'_'))
        .collect();
    name.trim_end_matches('_').to_string()
}

fn hash_code(name: &str) -> u32 {
    let hash = name.bytes().fold(37u32, |h, c| {
        h.wrapping_mul(54059) ^ (c as u32).wrapping_mul(76963)
    });
    (hash & 0x1FFF_FFFF) | HASH_CODE
}

/// Storage for commodity names that are not built in.
pub trait CommodityStore: Send + Sync {
    /// Code for a commodity name, registering hashed names when enabled.
    fn lookup(&self, name: &str) -> u32;
    /// Name for a code (without the inverse bit).
    fn name_of(&self, code: u32) -> String;
    /// Register a name for a code. Ignored while disabled.
    fn add(&self, name: &str, code: u32);
    fn clear(&self);
    fn enable(&self);
    fn disable(&self);
    fn is_enabled(&self) -> bool;
}

/// Process-wide commodity registry.
pub struct CommodityRegistry {
    codes: RwLock<HashMap<String, u32>>,
    names: RwLock<HashMap<u32, String>>,
    enabled: AtomicBool,
}

impl CommodityRegistry {
    pub fn new() -> Self {
        CommodityRegistry {
            codes: RwLock::new(HashMap::new()),
            names: RwLock::new(HashMap::new()),
            enabled: AtomicBool::new(true),
        }
    }
}

impl Default for CommodityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommodityStore for CommodityRegistry {
    fn lookup(&self, name: &str) -> u32 {
        let name = normalize_name(name);
        if let Some(code) = KNOWN_CODES.get(name.as_str()) {
            return *code;
        }
        if let Some(code) = self
            .codes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&name)
        {
            return *code;
        }
        if let Some(n) = name.strip_prefix("cxcomm[") {
            let digits: String =
                n.chars().take_while(|c| c.is_ascii_digit()).collect();
            if let Ok(code) = digits.parse::<u32>() {
                return code;
            }
        }
        if let Some(code) = short_code(&name) {
            return code;
        }
        let code = hash_code(&name);
        self.add(&name, code);
        code
    }

    fn name_of(&self, code: u32) -> String {
        let code = code & !INVERSE_BIT;
        if let Some(name) = KNOWN_NAMES.get(&code) {
            return name.to_string();
        }
        if let Some(name) = self
            .names
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&code)
        {
            return name.clone();
        }
        match code & CODE_KIND {
            SHORT_CODE => short_name(code),
            _ => format!("CXCOMM[{}]", code),
        }
    }

    fn add(&self, name: &str, code: u32) {
        if !self.is_enabled() {
            log::warn!("custom commodities disabled; not adding {}", name);
            return;
        }
        let name = normalize_name(name);
        log::trace!("registering commodity {} as {:#x}", name, code);
        self.names
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(code, name.clone());
        self.codes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, code);
    }

    fn clear(&self) {
        self.names
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.codes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn enable(&self) {
        self.enabled.store(true, Ordering::SeqCst);
    }

    fn disable(&self) {
        self.enabled.store(false, Ordering::SeqCst);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_algebra() {
        assert_eq!(multiply_codes(0, 5), Some(5));
        assert_eq!(multiply_codes(5, 5), Some(5));
        assert_eq!(multiply_codes(5, invert_code(5)), Some(0));
        assert_eq!(multiply_codes(5, 6), None);
        assert_eq!(invert_code(invert_code(101)), 101);
        assert_eq!(invert_code(0), 0);
        assert_eq!(pow_code(101, 0), 0);
        assert_eq!(pow_code(101, -2), invert_code(101));
    }

    #[test]
    fn short_names() {
        let registry = CommodityRegistry::new();
        registry.disable();
        for name in ["a", "bb", "ccc", "qqqq", "ddddd"] {
            assert_eq!(registry.name_of(registry.lookup(name)), name);
        }
        assert_eq!(registry.name_of(registry.lookup("QQQQ")), "qqqq");
        assert_ne!(registry.name_of(registry.lookup("eeeeee")), "eeeeee");
    }

    #[test]
    fn hashed_names() {
        let registry = CommodityRegistry::new();
        let code = registry.lookup("unicorns");
        assert_eq!(code & CODE_KIND, HASH_CODE);
        assert_eq!(registry.lookup("Unicorns"), code);
        assert_eq!(registry.name_of(code), "unicorns");
        assert_eq!(registry.name_of(invert_code(code)), "unicorns");
        registry.clear();
        assert_eq!(registry.name_of(code), format!("CXCOMM[{}]", code));
    }

    #[test]
    fn cx_numbers() {
        let registry = CommodityRegistry::new();
        assert_eq!(registry.name_of(56474732), "CXCOMM[56474732]");
        assert_eq!(registry.lookup("CXCOMM[56474732]"), 56474732);
    }

    #[test]
    fn escapes() {
        assert_eq!(normalize_name("\\{BOX\\}"), "{box}");
        assert_eq!(normalize_name("a\\b"), "a\\b");
    }
}
