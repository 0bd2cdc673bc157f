//! # App Configuration
//!
//! Optional window and display settings read from a YAML file.
//!
//! ## Location
//!
//! 1. The path in `EMPLOYEE_ROSTER_CONFIG`, if set
//! 2. `<config_dir>/employee-roster/config.yaml`
//!
//! ## YAML Format
//!
//! ```yaml
//! window_title: "Employee Management"
//! window_width: 900.0
//! window_height: 700.0
//! currency_symbol: "$"
//! ```
//!
//! Every key is optional. A missing file yields the defaults; a file that
//! cannot be read or parsed is logged and also yields the defaults.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "EMPLOYEE_ROSTER_CONFIG";

const CONFIG_DIR_NAME: &str = "employee-roster";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Window and display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    /// Prefix shown before every salary
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Employee Management".to_string(),
            window_width: 900.0,
            window_height: 700.0,
            currency_symbol: "$".to_string(),
        }
    }
}

impl AppConfig {
    /// Resolve the config file path from the environment or the platform config dir
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the config from its default location, falling back to defaults
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                debug!("No config directory available, using default config");
                Self::default()
            }
        }
    }

    /// Load the config at `path`, falling back to defaults on any problem
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => {
                info!("⚙️ Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("⚠️ Ignoring config file {:?}: {:#}", path, e);
                Self::default()
            }
        }
    }

    /// Read and parse a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: AppConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Invalid config file {:?}", path))?;
        Ok(config)
    }

    /// Salary with the configured currency symbol, e.g. `$50000.00`
    pub fn format_salary(&self, amount: f64) -> String {
        format!("{}{}", self.currency_symbol, shared::format_salary(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load_or_default(&temp_dir.path().join("config.yaml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "currency_symbol: \"€\"\nwindow_width: 1024.0\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.window_width, 1024.0);
        assert_eq!(config.window_title, "Employee Management");
        assert_eq!(config.window_height, 700.0);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "window_width: [not, a, number]\n").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
    }

    #[test]
    fn test_format_salary_uses_currency_symbol() {
        let config = AppConfig::default();
        assert_eq!(config.format_salary(50000.0), "$50000.00");
        assert_eq!(config.format_salary(1234.5), "$1234.50");
    }
}
