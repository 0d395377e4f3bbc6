//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the
//! logging bootstrap and the seed generator. Store operations never read the
//! environment.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `TRENDVAULT_LOG_LEVEL` | `trace\|debug\|info\|warn\|error` | build-mode default |
//! | `TRENDVAULT_LOG_DIR` | absolute directory for rolling logs | file logging off |
//! | `TRENDVAULT_SEED_ITEMS` | number of generated items | `24` |
//! | `TRENDVAULT_SEED` | fixed RNG seed for generated tags | random |

use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use crate::seed::{SeedConfig, DEFAULT_SEED_ITEM_COUNT};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_LOG_LEVEL: &str = "TRENDVAULT_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TRENDVAULT_LOG_DIR";
pub const ENV_SEED_ITEMS: &str = "TRENDVAULT_SEED_ITEMS";
pub const ENV_SEED: &str = "TRENDVAULT_SEED";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Log level is not a supported value.
    InvalidLogLevel(String),
    /// Log directory is not usable.
    InvalidLogDir(String),
    /// Variable must be a non-negative integer.
    InvalidNumber { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "{ENV_LOG_LEVEL}: {message}"),
            Self::InvalidLogDir(message) => write!(f, "{ENV_LOG_DIR}: {message}"),
            Self::InvalidNumber { key, value } => {
                write!(f, "{key}: expected a non-negative integer, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Core configuration resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    log_level: &'static str,
    log_dir: Option<PathBuf>,
    seed: SeedConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            seed: SeedConfig::default(),
        }
    }
}

impl CoreConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let log_level = match read(ENV_LOG_LEVEL) {
            Some(value) => normalize_level(&value).map_err(ConfigError::InvalidLogLevel)?,
            None => default_log_level(),
        };
        let log_dir = read(ENV_LOG_DIR)
            .map(|value| normalize_log_dir(&value).map_err(ConfigError::InvalidLogDir))
            .transpose()?;
        let item_count = match read(ENV_SEED_ITEMS) {
            Some(value) => parse_number(ENV_SEED_ITEMS, &value)?,
            None => DEFAULT_SEED_ITEM_COUNT,
        };
        let rng_seed = read(ENV_SEED)
            .map(|value| parse_number(ENV_SEED, &value))
            .transpose()?;

        Ok(Self {
            log_level,
            log_dir,
            seed: SeedConfig {
                item_count,
                rng_seed,
            },
        })
    }

    pub fn log_level(&self) -> &'static str {
        self.log_level
    }

    /// Directory for file logs; `None` disables file logging.
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }

    pub fn seed(&self) -> &SeedConfig {
        &self.seed
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        })
}
