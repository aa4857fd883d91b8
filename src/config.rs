//! Game configuration
//!
//! Layered: built-in defaults, then `config.toml`, then command-line flags.

use crate::error::ConfigError;
use crate::game::{MAX_ROWS, ROW_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "wordle_game";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dictionary file (`.json` or one word per line); the bundled
    /// dictionary when unset
    pub dictionary: Option<PathBuf>,

    /// Directory for saved sessions, statistics and the log file
    pub state_dir: Option<PathBuf>,

    /// Guesses allowed per game
    pub max_attempts: usize,

    /// Fixed seed for target selection
    pub seed: Option<u64>,

    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: None,
            state_dir: None,
            max_attempts: MAX_ROWS,
            seed: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file
    ///
    /// With no explicit path the platform config directory is used. A missing
    /// file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed,
    /// or if it sets `max_attempts` out of range.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_config_path(),
        };

        let config = match config_path {
            Some(config_path) if config_path.exists() => {
                let contents = std::fs::read_to_string(&config_path)?;
                Self::parse(&contents)?
            }
            _ => Self::default(),
        };
        Ok(config)
    }

    /// Parse TOML contents
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for invalid TOML or an out-of-range `max_attempts`.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `max_attempts` is outside
    /// `1..=ROW_LIMIT`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=ROW_LIMIT).contains(&self.max_attempts) {
            return Err(ConfigError::Invalid(format!(
                "max_attempts must be between 1 and {ROW_LIMIT}, got {}",
                self.max_attempts
            )));
        }
        Ok(())
    }

    /// `<config_dir>/wordle_game/config.toml`
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Configured state directory, else `<data_dir>/wordle_game`, else
    /// `.wordle_game` in the working directory
    #[must_use]
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR)))
            .unwrap_or_else(|| PathBuf::from(".wordle_game"))
    }
}
