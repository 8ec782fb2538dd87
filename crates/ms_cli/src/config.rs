use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use ms_session::MAX_HISTORY;
use ms_solver_core::Verbosity;

pub const CONFIG_FILE: &str = "ms_config.toml";
/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "MS_CONFIG";
const HISTORY_FILE: &str = ".ms_history.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error parsing config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Error writing config file: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Language code for labels: en, hi, es, fr, ar
    pub language: String,
    /// Show every derivation step
    pub detailed: bool,
    /// History file; `~/.ms_history.json` when unset
    pub history_path: Option<PathBuf>,
    /// Entries kept in history (1..=8)
    pub history_limit: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            detailed: true,
            history_path: None,
            history_limit: MAX_HISTORY,
        }
    }
}

impl SolverConfig {
    /// `$MS_CONFIG` if set, otherwise `ms_config.toml` in the working directory.
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Load `path`, falling back to defaults (with a warning) if it is
    /// missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Using default config");
                Self::default()
            }
        }
    }

    pub fn try_load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(Some(config))
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Overwrite `path` with the defaults and return them.
    pub fn restore_at(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from(self.detailed)
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit.clamp(1, MAX_HISTORY)
    }

    pub fn resolved_history_path(&self) -> PathBuf {
        if let Some(path) = &self.history_path {
            return path.clone();
        }
        dirs::home_dir()
            .map(|p| p.join(HISTORY_FILE))
            .unwrap_or_else(|| PathBuf::from(HISTORY_FILE))
    }
}
