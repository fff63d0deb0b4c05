use std::fmt;
use std::str::FromStr;

use crate::presentation::output::Format;

pub const OUTPUT_VAR: &str = "TICTACTOE_OUTPUT";
pub const HELP_VAR: &str = "TICTACTOE_HELP";

/// Presentation settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: Format,
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: Format::default(),
            show_help: true,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value {:?} for {}", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(OUTPUT_VAR) {
            config.format = Format::from_str(value.trim())
                .map_err(|_| ConfigError::InvalidValue { key: OUTPUT_VAR, value })?;
        }

        if let Some(value) = lookup(HELP_VAR) {
            config.show_help = bool::from_str(&value.trim().to_ascii_lowercase())
                .map_err(|_| ConfigError::InvalidValue { key: HELP_VAR, value })?;
        }

        log::debug!("loaded {:?}", config);
        Ok(config)
    }
}
