//! Service configuration.
//!
//! The library never reads process environment; callers build a
//! [`ServiceConfig`] (or load one from TOML) and pass it in explicitly.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::{DEFAULT_DOMAIN, Domain};
use crate::env::{DEFAULT_SYMBOL, Environment};
use crate::optimize::SearchConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid symbol '{0}': must be a non-empty alphabetic name")]
    InvalidSymbol(String),

    #[error("invalid default domain [{low}, {high}]: bounds must be finite with low < high")]
    InvalidDomain { low: f64, high: f64 },

    #[error("invalid search settings: {0}")]
    InvalidSearch(String),

    #[error("invalid log level '{0}': must be one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Name of the free variable.
    pub symbol: String,
    /// Domain used when an optimization request does not carry one.
    pub default_domain: Domain,
    pub search: SearchConfig,
    /// Default tracing filter for the binary; `RUST_LOG` takes precedence.
    pub log_level: LogLevel,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            default_domain: DEFAULT_DOMAIN,
            search: SearchConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl ServiceConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ServiceConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbol.is_empty() || !self.symbol.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidSymbol(self.symbol.clone()));
        }
        let Domain { low, high } = self.default_domain;
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(ConfigError::InvalidDomain { low, high });
        }
        let problems = self.search.problems();
        if !problems.is_empty() {
            return Err(ConfigError::InvalidSearch(problems.join("; ")));
        }
        Ok(())
    }

    pub fn environment(&self) -> Environment {
        Environment::with_symbol(self.symbol.clone())
    }
}
