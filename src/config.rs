//! Configuration management for the RAX login shell
//!
//! Built-in defaults reproduce the stock behaviour. An optional `config.toml`
//! in the working directory is layered on top. A broken config file never
//! stops the process; only the data file decides startup.

use config::{Config, File};
use log::warn;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "data.json";
pub const DEFAULT_WINDOW_TITLE: &str = "Login System with External JSON Database";

/// Configuration read once at startup
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path of the user data file
    pub data_file: String,

    /// Banner shown when the shell opens
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from ./config.toml (if present)
    pub fn load() -> Self {
        Self::load_or_default("config")
    }

    /// Like `load_from`, but logs a warning and uses the defaults on any error
    pub fn load_or_default(config_path: &str) -> Self {
        match Self::load_from(config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring configuration from {}: {}", config_path, e);
                Self::default()
            }
        }
    }

    /// Load configuration from the given file name; the file itself is optional
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("data_file", DEFAULT_DATA_FILE)?
            .set_default("window_title", DEFAULT_WINDOW_TITLE)?
            .add_source(File::with_name(config_path).required(false))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.data_file.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "data_file cannot be empty".into(),
            ));
        }

        if self.window_title.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "window_title cannot be empty".into(),
            ));
        }

        Ok(())
    }

    /// Get data file as PathBuf
    pub fn data_file_path(&self) -> PathBuf {
        Path::new(&self.data_file).to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");

        let config = AppConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.data_file_path(), PathBuf::from("data.json"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("login.toml");
        fs::write(&path, "data_file = \"users/people.json\"\n").unwrap();

        let config = AppConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.data_file, "users/people.json");
        assert_eq!(config.window_title, DEFAULT_WINDOW_TITLE);
    }

    #[test]
    fn test_empty_data_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("login.toml");
        fs::write(&path, "data_file = \"  \"\n").unwrap();

        assert!(AppConfig::load_from(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("login.toml");
        fs::write(&path, "window_title = \"\"\n").unwrap();

        assert_eq!(
            AppConfig::load_or_default(path.to_str().unwrap()),
            AppConfig::default()
        );
    }

    #[test]
    fn test_unparsable_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("login.toml");
        fs::write(&path, "data_file = [unterminated\n").unwrap();

        assert_eq!(
            AppConfig::load_or_default(path.to_str().unwrap()),
            AppConfig::default()
        );
    }
}
