//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/symphony/config.toml`
//! 3. Environment variables: `SYMPHONY_*` prefix
//!
//! CLI flags override all of these at the call site.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Runtime settings for search strategies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Frontier bound for beam search
    pub beam_width: usize,
    /// Node expansion limit for every strategy
    pub max_expansions: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            beam_width: 10,
            max_expansions: 1_000_000,
        }
    }
}

impl Settings {
    /// Load settings from the global config file and environment.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with an explicit config file (used by tests).
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, SettingsError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("beam_width", defaults.beam_width as u64)?
            .set_default("max_expansions", defaults.max_expansions as u64)?;

        if let Some(path) = config_file {
            if path.exists() {
                builder = builder.add_source(File::from(path.to_path_buf()));
            }
        }

        builder = builder.add_source(Environment::with_prefix("SYMPHONY").try_parsing(true));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.beam_width == 0 {
            return Err(SettingsError::Invalid(
                "beam_width must be at least 1".into(),
            ));
        }
        if self.max_expansions == 0 {
            return Err(SettingsError::Invalid(
                "max_expansions must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Path of the global config file, if a home directory exists.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "symphony").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let settings = Settings::load_from(None).unwrap();
        assert_eq!(settings.beam_width, 10);
        assert_eq!(settings.max_expansions, 1_000_000);
    }

    #[test]
    fn zero_beam_width_is_rejected() {
        let settings = Settings {
            beam_width: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
