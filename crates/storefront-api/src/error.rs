//! # API Configuration Errors
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Configuration Error Categories                         │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   Loading       │  │     Values      │  │       URLs              │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  ConfigLoad     │  │  InvalidConfig  │  │  InvalidUrl             │ │
//! │  │  (io, toml)     │  │  UnknownMode    │  │  (parse, scheme, join)  │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for API configuration.
pub type ApiConfigResult<T> = Result<T, ApiConfigError>;

/// Errors raised while building the HTTP client configuration.
#[derive(Debug, Error)]
pub enum ApiConfigError {
    /// A setting has an unusable value.
    #[error("Invalid API configuration: {0}")]
    InvalidConfig(String),

    /// Mode string not recognized.
    #[error("Unknown API mode: '{0}'. Valid options: development, production")]
    UnknownMode(String),

    /// Base URL or endpoint could not be parsed or joined.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Config file could not be read or parsed.
    #[error("Failed to load API config: {0}")]
    ConfigLoadFailed(String),
}

impl From<url::ParseError> for ApiConfigError {
    fn from(err: url::ParseError) -> Self {
        ApiConfigError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for ApiConfigError {
    fn from(err: std::io::Error) -> Self {
        ApiConfigError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ApiConfigError {
    fn from(err: toml::de::Error) -> Self {
        ApiConfigError::ConfigLoadFailed(err.to_string())
    }
}
