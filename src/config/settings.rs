//! User settings
//!
//! Preferences that shape how a session starts and how figures are reported.
//! Every field has a serde default so older or hand-edited files still load.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::storage::file_io::{read_text, write_text_atomic};
use crate::models::{Money, RemainingBasis};

/// Budget limit used when none has been stored yet
pub const DEFAULT_BUDGET_LIMIT: Money = Money::from_units(4000);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Limit to start from while no limit is persisted
    #[serde(default = "default_budget_limit")]
    pub default_budget_limit: Money,

    /// How "remaining" is computed
    #[serde(default)]
    pub remaining_basis: RemainingBasis,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_budget_limit() -> Money {
    DEFAULT_BUDGET_LIMIT
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_budget_limit: default_budget_limit(),
            remaining_basis: RemainingBasis::default(),
            currency_symbol: default_currency(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    ///
    /// Nothing is written; `save` persists the file.
    pub fn load_or_default(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        match read_text(paths.settings_file())? {
            Some(contents) => serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            }),
            None => Ok(Settings::default()),
        }
    }

    /// Write the settings file atomically
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        write_text_atomic(paths.settings_file(), &contents)
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_budget_limit, Money::from_units(4000));
        assert_eq!(settings.remaining_basis, RemainingBasis::Expenses);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            default_budget_limit: Money::from_units(4500),
            remaining_basis: RemainingBasis::NetTotal,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        assert!(paths.settings_file().exists());
        assert!(!paths.settings_file().with_extension("json.tmp").exists());

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.default_budget_limit, Money::from_units(4500));
        assert_eq!(loaded.remaining_basis, RemainingBasis::NetTotal);
    }

    #[test]
    fn test_missing_file_loads_defaults_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().join("fresh"));

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.default_budget_limit, DEFAULT_BUDGET_LIMIT);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "€"}"#).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.default_budget_limit, DEFAULT_BUDGET_LIMIT);
        assert!(loaded.audit_enabled);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }

    #[test]
    fn test_format_money() {
        let settings = Settings {
            currency_symbol: "£".into(),
            ..Settings::default()
        };
        assert_eq!(settings.format_money(Money::from_cents(-250)), "-£2.50");
    }
}
