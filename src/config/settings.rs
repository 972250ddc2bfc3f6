//! User settings for allot-cli
//!
//! Manages the default total budget, the category set, the currency label
//! shown next to amounts, and slider behaviour.

use serde::{Deserialize, Serialize};

use super::paths::AllotPaths;
use crate::error::AllotError;
use crate::models::{Amount, Category, CategorySet, DefaultCategory};

/// User settings for allot-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Total budget at startup and after a reset
    #[serde(default = "default_total_budget")]
    pub default_total_budget: Amount,

    /// Label shown after amounts (e.g., "USD")
    #[serde(default = "default_currency_label")]
    pub currency_label: String,

    /// Categories in display order
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,

    /// Whether session operations are written to the activity log
    #[serde(default = "default_true")]
    pub activity_log_enabled: bool,

    /// Units a slider moves per key press (Shift moves ten times as far)
    #[serde(default = "default_slider_step")]
    pub slider_step: Amount,
}

fn default_schema_version() -> u32 {
    1
}

fn default_total_budget() -> Amount {
    Amount::new(100)
}

fn default_currency_label() -> String {
    "USD".to_string()
}

fn default_categories() -> Vec<Category> {
    DefaultCategory::all()
        .iter()
        .map(DefaultCategory::to_category)
        .collect()
}

fn default_true() -> bool {
    true
}

fn default_slider_step() -> Amount {
    Amount::new(1)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_total_budget: default_total_budget(),
            currency_label: default_currency_label(),
            categories: default_categories(),
            activity_log_enabled: default_true(),
            slider_step: default_slider_step(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &AllotPaths) -> Result<Self, AllotError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| AllotError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AllotError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AllotPaths) -> Result<(), AllotError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AllotError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| AllotError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Validated category set
    pub fn category_set(&self) -> Result<CategorySet, AllotError> {
        CategorySet::new(self.categories.clone())
            .map_err(|e| AllotError::Config(format!("Invalid categories: {}", e)))
    }

    /// Slider step, never below one unit
    pub fn effective_slider_step(&self) -> Amount {
        self.slider_step.max(Amount::new(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_total_budget, Amount::new(100));
        assert_eq!(settings.currency_label, "USD");
        assert_eq!(settings.categories.len(), 4);
        assert!(settings.activity_log_enabled);
        assert_eq!(
            settings.category_set().unwrap().keys(),
            vec!["cpu", "gpu", "memory", "other"]
        );
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AllotPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_total_budget = Amount::new(500);
        settings.currency_label = "EUR".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_total_budget, Amount::new(500));
        assert_eq!(loaded.currency_label, "EUR");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_label": "GBP"}"#).unwrap();
        assert_eq!(settings.currency_label, "GBP");
        assert_eq!(settings.default_total_budget, Amount::new(100));
        assert_eq!(settings.categories.len(), 4);
        assert_eq!(settings.slider_step, Amount::new(1));
    }

    #[test]
    fn test_invalid_categories_rejected() {
        let mut settings = Settings::default();
        settings.categories.push(Category::new("cpu", "Second CPU"));

        let err = settings.category_set().unwrap_err();
        assert!(err.to_string().contains("Duplicate category key 'cpu'"));
    }

    #[test]
    fn test_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AllotPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, AllotError::Config(_)));
    }

    #[test]
    fn test_zero_slider_step_is_raised() {
        let mut settings = Settings::default();
        settings.slider_step = Amount::zero();
        assert_eq!(settings.effective_slider_step(), Amount::new(1));
    }
}
