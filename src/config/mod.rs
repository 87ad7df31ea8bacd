//! Configuration management for kickpulse.
//!
//! Configuration is loaded from `~/.kickpulse/config.json` (or an explicit
//! `--config` path) and validated once at startup. After validation it is
//! never mutated; every channel monitor reads it concurrently without
//! synchronization.

mod types;
pub mod validate;

pub use types::*;

use std::path::{Path, PathBuf};

use crate::error::{PulseError, Result};

impl Config {
    /// Returns the kickpulse configuration directory path (~/.kickpulse).
    pub fn dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".kickpulse")
    }

    /// Returns the default config file path (~/.kickpulse/config.json).
    pub fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check the invariants every running instance relies on.
    ///
    /// Returns the first violation as a [`PulseError::Config`]. Invalid
    /// values are rejected, never coerced.
    pub fn validate(&self) -> Result<()> {
        if self.channels.is_empty() {
            return Err(PulseError::Config(
                "channels must not be empty".to_string(),
            ));
        }
        if self.messages.is_empty() {
            return Err(PulseError::Config(
                "messages must not be empty".to_string(),
            ));
        }
        if !self.authorization.starts_with("Bearer ") {
            return Err(PulseError::Config(
                "authorization must start with 'Bearer '".to_string(),
            ));
        }
        let active = &self.wait_times.livestream_active;
        if active.min == 0 || active.max == 0 {
            return Err(PulseError::Config(
                "wait_times.livestream_active min and max must be > 0".to_string(),
            ));
        }
        if active.min >= active.max {
            return Err(PulseError::Config(format!(
                "wait_times.livestream_active: min ({}) must be less than max ({})",
                active.min, active.max
            )));
        }
        if self.wait_times.livestream_inactive == 0 {
            return Err(PulseError::Config(
                "wait_times.livestream_inactive must be > 0".to_string(),
            ));
        }
        if self.wait_times.error_wait == 0 {
            return Err(PulseError::Config(
                "wait_times.error_wait must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            channels: vec!["somechannel".into()],
            authorization: "Bearer token".into(),
            messages: vec!["[emote:1730772:emojiFire]".into()],
            wait_times: WaitTimes {
                livestream_active: ActiveWait { min: 60, max: 120 },
                livestream_inactive: 300,
                error_wait: 30,
            },
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_empty_channels_rejected() {
        let mut config = valid_config();
        config.channels.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("channels"));
    }

    #[test]
    fn test_empty_messages_rejected() {
        let mut config = valid_config();
        config.messages.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("messages"));
    }

    #[test]
    fn test_bad_credential_scheme_rejected() {
        let mut config = valid_config();
        config.authorization = "token-without-scheme".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Bearer"));

        config.authorization = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_min_not_below_max_rejected() {
        let mut config = valid_config();
        config.wait_times.livestream_active = ActiveWait { min: 120, max: 120 };
        assert!(config.validate().is_err());

        config.wait_times.livestream_active = ActiveWait { min: 200, max: 120 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_waits_rejected() {
        let mut config = valid_config();
        config.wait_times.livestream_active.min = 0;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.wait_times.livestream_inactive = 0;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.wait_times.error_wait = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("error_wait"));
    }

    #[test]
    fn test_duplicate_channels_permitted() {
        let mut config = valid_config();
        config.channels = vec!["same".into(), "same".into()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = valid_config();
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.channels, config.channels);
        assert_eq!(loaded.authorization, config.authorization);
        assert_eq!(loaded.wait_times.error_wait, 30);
        assert!(loaded.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let path = PathBuf::from("/nonexistent/kickpulse/config.json");
        assert!(matches!(
            Config::load_from_path(&path),
            Err(PulseError::Io(_))
        ));
    }

    #[test]
    fn test_load_malformed_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            Config::load_from_path(&path),
            Err(PulseError::Json(_))
        ));
    }

    #[test]
    fn test_config_dir_and_path() {
        assert!(Config::path().ends_with(".kickpulse/config.json"));
        assert!(Config::path().starts_with(Config::dir()));
    }
}
