//! Configuration management for recipedeck.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "recipedeck";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `RECIPEDECK_`)
/// 2. TOML config file at `~/.config/recipedeck/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed configuration.
    pub seed: SeedConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

/// Seed-related configuration.
///
/// Controls what the store holds when a session starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Load the two builtin recipes at startup.
    pub builtin: bool,
    /// Extra recipes appended after the builtins, in file order.
    /// Ids are assigned by the store, not by the config.
    pub extra: Vec<SeedRecipe>,
}

/// A recipe defined in the configuration file.
///
/// Carries only the user-supplied fields; the id is store-assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedRecipe {
    /// Recipe title. Must not be blank.
    pub title: String,
    /// Free-form ingredient text.
    pub ingredients: String,
    /// Free-form preparation steps.
    pub steps: String,
}

/// Output-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default maximum number of recipes shown by list output.
    /// Set to 0 for unlimited.
    pub default_limit: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            extra: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { default_limit: 0 }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `RECIPEDECK_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("RECIPEDECK_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any extra seed recipe has a blank title.
    pub fn validate(&self) -> Result<()> {
        for (index, seed) in self.seed.extra.iter().enumerate() {
            if seed.title.trim().is_empty() {
                return Err(Error::ConfigValidation {
                    message: format!("seed.extra[{index}] has a blank title"),
                });
            }
        }
        Ok(())
    }

    /// The effective list limit, `None` meaning unlimited.
    #[must_use]
    pub fn list_limit(&self) -> Option<usize> {
        if self.output.default_limit == 0 {
            None
        } else {
            Some(self.output.default_limit)
        }
    }
}
