//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/patsyn/patsyn.toml`
//! 3. Local config: `<project_dir>/.patsyn.toml`
//! 4. Environment variables: `PATSYN_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::WildcardPolicy;

/// Unified configuration for patsyn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Escape pattern-special characters of accepted words (default: true)
    pub escape: bool,
    /// When to append the suffix wildcard (default: interior)
    pub wildcard: WildcardPolicy,
    /// Default input file (default: input.txt)
    pub input: PathBuf,
    /// Default output file (default: output.txt)
    pub output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            escape: true,
            wildcard: WildcardPolicy::default(),
            input: PathBuf::from("input.txt"),
            output: PathBuf::from("output.txt"),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub escape: Option<bool>,
    pub wildcard: Option<WildcardPolicy>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Get the XDG config directory for patsyn.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "patsyn").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("patsyn.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".patsyn.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            escape: overlay.escape.unwrap_or(self.escape),
            wildcard: overlay.wildcard.unwrap_or(self.wildcard),
            input: overlay.input.clone().unwrap_or_else(|| self.input.clone()),
            output: overlay.output.clone().unwrap_or_else(|| self.output.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional directory holding a local `.patsyn.toml`
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = project_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("local config: {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply PATSYN_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("PATSYN")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("escape") {
            settings.escape = val;
        }
        if let Ok(val) = config.get_string("wildcard") {
            settings.wildcard = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_string("input") {
            settings.input = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("output") {
            settings.output = PathBuf::from(val);
        }

        Ok(settings)
    }

    /// Settings rendered as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}
