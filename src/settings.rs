//! Game settings
//!
//! Settings are a small set of boolean switches that travel with the game
//! snapshot. Callers address them by key, and unknown keys are reported as
//! an [`Error`] by the parser so the game can ignore them quietly.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configurable switches for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Whether players with a negative score may play the final round
    pub mercy_rule: bool,
}

impl Default for Settings {
    /// Mercy rule enabled, every player plays the final round
    fn default() -> Self {
        Self { mercy_rule: true }
    }
}

/// The addressable keys of [`Settings`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// [`Settings::mercy_rule`]
    MercyRule,
}

/// Errors that can occur when addressing a setting by name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No setting exists under this name
    #[error("unknown setting `{0}`")]
    Unknown(String),
}

impl FromStr for SettingKey {
    type Err = Error;

    /// Parses a setting key from its persisted (camelCase) name
    ///
    /// # Errors
    ///
    /// Returns `Error::Unknown` if no setting has that name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mercyRule" => Ok(Self::MercyRule),
            _ => Err(Error::Unknown(s.to_owned())),
        }
    }
}

impl Settings {
    /// Reads a setting by key
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::MercyRule => self.mercy_rule,
        }
    }

    /// Writes a setting by key
    pub fn set(&mut self, key: SettingKey, value: bool) {
        match key {
            SettingKey::MercyRule => self.mercy_rule = value,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_mercy_rule() {
        assert!(Settings::default().mercy_rule);
    }

    #[test]
    fn test_setting_key_from_str() {
        assert_eq!(SettingKey::from_str("mercyRule"), Ok(SettingKey::MercyRule));
        assert_eq!(
            SettingKey::from_str("suddenDeath"),
            Err(Error::Unknown("suddenDeath".to_string()))
        );
    }

    #[test]
    fn test_settings_get_set() {
        let mut settings = Settings::default();
        settings.set(SettingKey::MercyRule, false);

        assert!(!settings.get(SettingKey::MercyRule));
        assert!(!settings.mercy_rule);
    }

    #[test]
    fn test_settings_serialization() {
        let settings = Settings { mercy_rule: false };
        let serialized = serde_json::to_string(&settings).unwrap();
        assert_eq!(serialized, r#"{"mercyRule":false}"#);

        let missing: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(missing, Settings::default());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::Unknown("x".to_string()).to_string(),
            "unknown setting `x`"
        );
    }
}
