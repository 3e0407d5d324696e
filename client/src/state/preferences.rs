//! Settings-panel preferences persisted in the browser.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use serde::{Deserialize, Serialize};

use crate::util::persistence::{load_json, save_json};

const STORAGE_KEY: &str = "recovery_journal_preferences";

/// User-adjustable settings toggles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Receive update notifications. On unless the user opts out.
    pub notifications: bool,
    /// Explicit theme choice; `None` follows the system preference.
    pub dark_mode: Option<bool>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { notifications: true, dark_mode: None }
    }
}

impl Preferences {
    /// Load stored preferences, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        load_json(STORAGE_KEY).unwrap_or_default()
    }

    pub fn save(&self) {
        save_json(STORAGE_KEY, self);
    }

    /// Effective dark-mode flag given the system preference.
    #[must_use]
    pub fn dark_mode_or(&self, system_prefers_dark: bool) -> bool {
        self.dark_mode.unwrap_or(system_prefers_dark)
    }
}
