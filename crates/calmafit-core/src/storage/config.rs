//! TOML-based application configuration.
//!
//! Stores:
//! - Chat endpoint settings (endpoint URL, model, sampling parameters)
//! - Daily reminder settings (enabled flag, local fire time)
//!
//! Configuration is stored at `~/.config/calmafit/config.toml`. The chat
//! API key is deliberately not part of the file; it comes from the
//! `CALMAFIT_API_KEY` environment variable.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Chat-completion endpoint configuration.
///
/// Model, temperature, and token limit are fixed configuration, never
/// caller-controlled per message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

/// Daily reminder configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_reminder_hour")]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/calmafit/config.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub reminder: ReminderConfig,
}

// Default functions
fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".into()
}
fn default_model() -> String {
    "gpt-4o".into()
}
fn default_temperature() -> f64 {
    0.8
}
fn default_max_tokens() -> u32 {
    300
}
fn default_true() -> bool {
    true
}
fn default_reminder_hour() -> u32 {
    20
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hour: default_reminder_hour(),
            minute: 0,
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        data_dir()
            .map(|dir| dir.join("config.toml"))
            .map_err(|e| ConfigError::LoadFailed {
                path: PathBuf::from("~/.config/calmafit"),
                message: e.to_string(),
            })
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error. Never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn default_values_match_contract() {
        let cfg = Config::default();
        assert_eq!(cfg.chat.model, "gpt-4o");
        assert_eq!(cfg.chat.temperature, 0.8);
        assert_eq!(cfg.chat.max_tokens, 300);
        assert!(cfg.reminder.enabled);
        assert_eq!((cfg.reminder.hour, cfg.reminder.minute), (20, 0));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let parsed: Config = toml::from_str("[reminder]\nhour = 21\n").unwrap();
        assert_eq!(parsed.reminder.hour, 21);
        assert_eq!(parsed.reminder.minute, 0);
        assert_eq!(parsed.chat.model, "gpt-4o");
    }
}
