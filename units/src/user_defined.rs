/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::PreciseUnit;

/// Units defined at runtime. Definitions are consulted before the
/// static tables, both when parsing and when rendering.
pub struct UserDefinedUnits {
    inputs: RwLock<HashMap<String, PreciseUnit>>,
    outputs: RwLock<HashMap<PreciseUnit, String>>,
    enabled: AtomicBool,
}

impl UserDefinedUnits {
    pub fn new() -> Self {
        UserDefinedUnits {
            inputs: RwLock::new(HashMap::new()),
            outputs: RwLock::new(HashMap::new()),
            enabled: AtomicBool::new(true),
        }
    }

    /// Define `name` for both parsing and rendering.
    pub fn add(&self, name: &str, unit: PreciseUnit) {
        if !self.insert_input(name, unit) {
            return;
        }
        self.outputs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(unit, name.to_string());
    }

    /// Define `name` for parsing only.
    pub fn add_input_only(&self, name: &str, unit: PreciseUnit) {
        self.insert_input(name, unit);
    }

    fn insert_input(&self, name: &str, unit: PreciseUnit) -> bool {
        if !self.is_enabled() {
            log::warn!(
                "user defined units are disabled; ignoring definition of {}",
                name
            );
            return false;
        }
        if name.is_empty() || unit.is_error() {
            log::debug!("not defining invalid unit {:?}", name);
            return false;
        }
        log::debug!("defining unit {} as {:?}", name, unit);
        self.inputs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), unit);
        true
    }

    pub fn remove(&self, name: &str) {
        let removed = self
            .inputs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
        if let Some(unit) = removed {
            let mut outputs =
                self.outputs.write().unwrap_or_else(PoisonError::into_inner);
            if outputs.get(&unit).map(String::as_str) == Some(name) {
                outputs.remove(&unit);
            }
        }
    }

    pub fn clear(&self) {
        self.inputs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.outputs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::SeqCst);
    }

    /// Disable lookups and further definitions. Existing definitions
    /// are kept.
    pub fn disable(&self) {
        self.enabled.store(false, Ordering::SeqCst);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn is_empty(&self) -> bool {
        self.inputs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    pub fn lookup(&self, name: &str) -> Option<PreciseUnit> {
        if !self.is_enabled() {
            return None;
        }
        self.inputs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .copied()
    }

    pub fn name_of(&self, unit: &PreciseUnit) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }
        self.outputs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(unit)
            .cloned()
    }
}

impl Default for UserDefinedUnits {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::UserDefinedUnits;
    use crate::unit_defs::{KG, M};

    #[test]
    fn define_and_remove() {
        let units = UserDefinedUnits::new();
        let clog = KG.scale(3.0);
        units.add("clog", clog);
        assert_eq!(units.lookup("clog"), Some(clog));
        assert_eq!(units.name_of(&clog).as_deref(), Some("clog"));
        units.remove("clog");
        assert_eq!(units.lookup("clog"), None);
        assert_eq!(units.name_of(&clog), None);
    }

    #[test]
    fn input_only() {
        let units = UserDefinedUnits::new();
        units.add_input_only("hand", M.scale(0.1016));
        assert!(units.lookup("hand").is_some());
        assert_eq!(units.name_of(&M.scale(0.1016)), None);
    }

    #[test]
    fn disabled() {
        let units = UserDefinedUnits::new();
        units.add("clog", KG);
        units.disable();
        assert_eq!(units.lookup("clog"), None);
        units.add("bog", M);
        units.enable();
        assert_eq!(units.lookup("clog"), Some(KG));
        assert_eq!(units.lookup("bog"), None);
    }
}
