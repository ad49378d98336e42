//! # Config Error Types
//!
//! Error types for loading configuration and rate files.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Config Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │     Loading     │  │   Validation    │  │       Pricing           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  LoadFailed     │  │  InvalidConfig  │  │  Pricing(PricingError)  │ │
//! │  │  ParseFailed    │  │  InvalidPricing │  │                         │ │
//! │  │  Unsupported    │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use museum_core::PricingError;
use thiserror::Error;

/// Result type alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading configuration or rate data.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Failed to load config: {0}")]
    LoadFailed(String),

    /// File was read but its contents did not parse.
    #[error("Failed to parse {0}")]
    ParseFailed(String),

    /// Rate file extension is neither `.json` nor `.toml`.
    #[error("Unsupported rate file format: {0}")]
    UnsupportedFormat(String),

    /// Rate table parsed but breaks a table invariant.
    #[error("Invalid rate table: {0}")]
    InvalidPricing(String),

    /// Configuration values are unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A purchase referenced something the rate table lacks.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(format!("TOML: {}", err))
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseFailed(format!("JSON: {}", err))
    }
}
