//! Configuration management module.
//!
//! Handles loading and saving application configuration from JSON file.

use crate::core::contact::NewContact;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "agenda_config.json";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_title")]
    pub window_title: String,
    #[serde(default = "default_true")]
    pub start_maximized: bool,
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    #[serde(default = "default_max_toasts")]
    pub max_toasts: usize,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Contacts loaded into the store at startup.
    #[serde(default)]
    pub seed_contacts: Vec<NewContact>,
}

fn default_true() -> bool {
    true
}

fn default_title() -> String {
    "Agenda MVC Swing - Vallegrande".to_string()
}

fn default_toast_duration_ms() -> u64 {
    2000
}

fn default_max_toasts() -> usize {
    3
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: default_title(),
            start_maximized: true,
            toast_duration_ms: default_toast_duration_ms(),
            max_toasts: default_max_toasts(),
            log_filter: default_log_filter(),
            seed_contacts: Vec::new(),
        }
    }
}

impl Config {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

/// Configuration manager for loading/saving config.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_path(Self::get_exe_directory().join(CONFIG_FILE_NAME))
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Get the directory containing the executable.
    fn get_exe_directory() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get the config file path.
    pub fn get_config_file_path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration from file, falling back to defaults.
    pub fn load(&self) -> Config {
        let mut config = match self.try_load() {
            Ok(Some(config)) => config,
            Ok(None) => Config::default(),
            Err(e) => {
                // Logging is not initialised yet when this runs from main.
                eprintln!(
                    "Ignoring unreadable config {}: {e:#}",
                    self.config_path.display()
                );
                Config::default()
            }
        };

        // Set defaults if empty
        if config.window_title.trim().is_empty() {
            config.window_title = default_title();
        }
        if config.log_filter.trim().is_empty() {
            config.log_filter = default_log_filter();
        }
        if config.toast_duration_ms == 0 {
            config.toast_duration_ms = default_toast_duration_ms();
        }
        if config.max_toasts == 0 {
            config.max_toasts = default_max_toasts();
        }

        config
    }

    fn try_load(&self) -> anyhow::Result<Option<Config>> {
        if !self.config_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.config_path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(Some(config))
    }

    /// Save configuration to file.
    pub fn save(&self, config: &Config) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_path, json)?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.window_title, "Agenda MVC Swing - Vallegrande");
        assert!(config.start_maximized);
        assert_eq!(config.toast_duration(), Duration::from_secs(2));
        assert_eq!(config.max_toasts, 3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed: Config = serde_json::from_str(r#"{"max_toasts": 5}"#).unwrap();
        assert_eq!(parsed.max_toasts, 5);
        assert_eq!(parsed.toast_duration_ms, 2000);
        assert!(parsed.seed_contacts.is_empty());
    }

    #[test]
    fn test_missing_file_loads_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let manager = ConfigManager::with_path(dir.path().join(CONFIG_FILE_NAME));
        let config = manager.load();
        assert_eq!(config.log_filter, "info");
        assert!(!manager.get_config_file_path().exists());
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let manager = ConfigManager::with_path(dir.path().join(CONFIG_FILE_NAME));
        let mut config = Config::default();
        config.window_title = "Agenda".to_string();
        config.seed_contacts.push(NewContact::new("Ana", "ana@x.com", "111"));
        manager.save(&config)?;

        let loaded = manager.load();
        assert_eq!(loaded.window_title, "Agenda");
        assert_eq!(loaded.seed_contacts, config.seed_contacts);
        Ok(())
    }

    #[test]
    fn test_invalid_values_are_reset() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"window_title": " ", "toast_duration_ms": 0, "max_toasts": 0}"#)?;

        let config = ConfigManager::with_path(path).load();
        assert_eq!(config.window_title, "Agenda MVC Swing - Vallegrande");
        assert_eq!(config.toast_duration_ms, 2000);
        assert_eq!(config.max_toasts, 3);
        Ok(())
    }

    #[test]
    fn test_corrupt_file_loads_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{not json")?;

        let config = ConfigManager::with_path(path).load();
        assert!(config.start_maximized);
        Ok(())
    }
}
