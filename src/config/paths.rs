//! Path management for allot-cli
//!
//! Provides XDG-compliant path resolution for configuration and the activity log.
//!
//! ## Path Resolution Order
//!
//! 1. `ALLOT_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/allot-cli` or `~/.config/allot-cli`
//! 3. Windows: `%APPDATA%\allot-cli`

use std::path::PathBuf;

use crate::error::AllotError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "ALLOT_CLI_DATA_DIR";

/// Manages all paths used by allot-cli
#[derive(Debug, Clone)]
pub struct AllotPaths {
    /// Base directory for all allot-cli files
    base_dir: PathBuf,
}

impl AllotPaths {
    /// Create a new AllotPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory can be
    /// determined.
    pub fn new() -> Result<Self, AllotError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create AllotPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/allot-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the activity log
    pub fn activity_log(&self) -> PathBuf {
        self.base_dir.join("activity.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), AllotError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AllotError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if settings have been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, AllotError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                AllotError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("allot-cli"))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, AllotError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| AllotError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("allot-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AllotPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.activity_log(), temp_dir.path().join("activity.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = AllotPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AllotPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
