//! CLI configuration.
//!
//! Loaded from environment variables with fallback to defaults. Command-line
//! flags override whatever is loaded here.
//!
//! | Variable                    | Default | Meaning                          |
//! |-----------------------------|---------|----------------------------------|
//! | `CHECKOUT_CURRENCY_SYMBOL`  | (empty) | Prefix for every printed amount  |
//! | `CHECKOUT_ON_UNKNOWN`       | `abort` | Report mode: `skip` or `abort`   |
//! | `CHECKOUT_FORMAT`           | `text`  | Report mode: `text` or `json`    |

use std::env;
use std::str::FromStr;

use checkout_core::ScanPolicy;
use clap::ValueEnum;

/// How a summary is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{}'", other)),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Printed before every amount (e.g. "$").
    pub currency_symbol: String,

    /// What report mode does with unknown SKUs.
    pub on_unknown: ScanPolicy,

    /// Report output format.
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            currency_symbol: String::new(),
            on_unknown: ScanPolicy::Abort,
            format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, CliConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn load_from<F>(lookup: F) -> Result<Self, CliConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let on_unknown = match lookup("CHECKOUT_ON_UNKNOWN") {
            Some(raw) => raw
                .parse()
                .map_err(|_| CliConfigError::InvalidValue("CHECKOUT_ON_UNKNOWN".to_string()))?,
            None => defaults.on_unknown,
        };

        let format = match lookup("CHECKOUT_FORMAT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| CliConfigError::InvalidValue("CHECKOUT_FORMAT".to_string()))?,
            None => defaults.format,
        };

        Ok(CliConfig {
            currency_symbol: lookup("CHECKOUT_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            on_unknown,
            format,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum CliConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
