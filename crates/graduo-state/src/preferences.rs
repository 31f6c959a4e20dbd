//! The one persisted preference: suppressing the help popup at startup

use std::cell::RefCell;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Local-storage key written when the user opts out of the help popup
pub const HIDE_HELP_KEY: &str = "hideChronixHelpOnStartup";

/// Key/value string storage
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage`; every failure degrades to "not stored"
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            warn!(key, "localStorage unavailable, preference not saved");
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            warn!(key, ?err, "Failed to save preference");
        }
    }
}

/// In-memory storage for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

/// Read/write access to the help-popup flag
#[derive(Debug)]
pub struct HelpPreference<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> HelpPreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the popup opens on mount
    pub fn show_on_startup(&self) -> bool {
        let hidden = self.store.get(HIDE_HELP_KEY).as_deref() == Some("true");
        debug!(hidden, "Read help popup preference");
        !hidden
    }

    /// Remember that the popup should stay closed
    pub fn suppress(&self) {
        debug!("Help popup suppressed on startup");
        self.store.set(HIDE_HELP_KEY, "true");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_shown_until_suppressed() {
        let preference = HelpPreference::new(MemoryStore::default());
        assert!(preference.show_on_startup());
        preference.suppress();
        assert!(!preference.show_on_startup());
    }

    #[test]
    fn test_only_literal_true_suppresses() {
        let store = MemoryStore::default();
        store.set(HIDE_HELP_KEY, "yes");
        let preference = HelpPreference::new(store);
        assert!(preference.show_on_startup());
    }
}
