//! Configuration management for rnlayout.
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

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "rnlayout";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `RNLAYOUT_`, sections separated
///    by a double underscore, e.g. `RNLAYOUT_LINT__STRICT=true`)
/// 2. TOML config file at `~/.config/rnlayout/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scaffold configuration.
    pub scaffold: ScaffoldConfig,
    /// Lint configuration.
    pub lint: LintConfig,
}

/// Scaffold-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Scaffold into non-empty directories, keeping existing entries.
    pub merge: bool,
    /// Create placeholder files (`index.js`, `.gitkeep`) alongside the
    /// directory skeleton.
    pub placeholder_files: bool,
}

/// Lint-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Directory names skipped entirely during the tree walk.
    pub excluded_dirs: Vec<String>,
    /// Treat advisory violations as errors for the exit code.
    pub strict: bool,
    /// Follow symbolic links while walking.
    pub follow_symlinks: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            merge: false,
            placeholder_files: true,
        }
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: default_excluded_dirs(),
            strict: false,
            follow_symlinks: false,
        }
    }
}

/// Default directories skipped during linting.
///
/// `ios/` and `android/` follow platform conventions of their own, and
/// dependency or VCS trees are not the project's code.
fn default_excluded_dirs() -> Vec<String> {
    vec![
        ".git".to_string(),
        "node_modules".to_string(),
        "ios".to_string(),
        "android".to_string(),
        ".expo".to_string(),
    ]
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `RNLAYOUT_`)
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
            .merge(Env::prefixed("RNLAYOUT_").split("__"));

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
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        for dir in &self.lint.excluded_dirs {
            if dir.is_empty() {
                return Err(Error::ConfigValidation {
                    message: "excluded_dirs entries must not be empty".to_string(),
                });
            }
            if dir.contains('/') || dir.contains('\\') {
                return Err(Error::ConfigValidation {
                    message: format!(
                        "excluded_dirs entry '{dir}' must be a directory name, not a path"
                    ),
                });
            }
        }

        Ok(())
    }
}
