//! # API Client Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_API_MODE=production                                     │
//! │     STOREFRONT_API_BASE_URL=https://staging.example.com/api            │
//! │     STOREFRONT_API_WITH_CREDENTIALS=false                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/api.toml (Linux)                              │
//! │     ~/Library/Application Support/com.storefront.storefront/api.toml   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     debug build → development, release build → production             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # api.toml
//! mode = "production"
//! # base_url = "https://staging.example.com/api"
//! with_credentials = true
//! timeout_secs = 30
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ApiConfigError, ApiConfigResult};

/// Backend used by `ApiMode::Development`.
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:5000/api";

/// Backend used by `ApiMode::Production`.
pub const PRODUCTION_BASE_URL: &str = "https://backend-ecommerce-node.vercel.app/api";

// =============================================================================
// API Mode
// =============================================================================

/// Which backend environment the client targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiMode {
    /// Local backend on port 5000.
    Development,
    /// Hosted backend.
    Production,
}

impl ApiMode {
    /// Mode matching how this binary was built.
    pub const fn from_build() -> Self {
        if cfg!(debug_assertions) {
            ApiMode::Development
        } else {
            ApiMode::Production
        }
    }

    /// Built-in base URL for this mode.
    pub const fn default_base_url(self) -> &'static str {
        match self {
            ApiMode::Development => DEVELOPMENT_BASE_URL,
            ApiMode::Production => PRODUCTION_BASE_URL,
        }
    }
}

impl Default for ApiMode {
    fn default() -> Self {
        ApiMode::from_build()
    }
}

impl std::fmt::Display for ApiMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiMode::Development => write!(f, "development"),
            ApiMode::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for ApiMode {
    type Err = ApiConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(ApiMode::Development),
            "production" | "prod" => Ok(ApiMode::Production),
            other => Err(ApiConfigError::UnknownMode(other.to_string())),
        }
    }
}

// =============================================================================
// API Config
// =============================================================================

/// Settings for the storefront HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    /// Backend environment.
    #[serde(default)]
    pub mode: ApiMode,

    /// Explicit base URL; when unset the mode's built-in URL is used.
    #[serde(default, alias = "base_url")]
    pub base_url: Option<String>,

    /// Send cookies with every request (session auth).
    #[serde(default = "default_true", alias = "with_credentials")]
    pub with_credentials: bool,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout", alias = "timeout_secs")]
    pub timeout_secs: u64,
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::for_mode(ApiMode::default())
    }
}

impl ApiConfig {
    /// Defaults for a given mode.
    pub fn for_mode(mode: ApiMode) -> Self {
        ApiConfig {
            mode,
            base_url: None,
            with_credentials: default_true(),
            timeout_secs: default_timeout(),
        }
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (api.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ApiConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading API config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "API config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load API config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document.
    pub fn from_toml_str(contents: &str) -> ApiConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Checks that the base URL is absolute http(s) and the timeout non-zero.
    pub fn validate(&self) -> ApiConfigResult<()> {
        let base = self.base_url()?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ApiConfigError::InvalidUrl(format!(
                "base URL must use http:// or https://, got: {}",
                base
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ApiConfigError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies overrides from a key lookup (the process environment in
    /// production, a map in tests).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup("STOREFRONT_API_MODE") {
            match mode.parse() {
                Ok(parsed) => {
                    debug!(mode = %mode, "Overriding API mode from environment");
                    self.mode = parsed;
                }
                Err(e) => warn!(error = %e, "Ignoring API mode from environment"),
            }
        }

        if let Some(url) = lookup("STOREFRONT_API_BASE_URL") {
            debug!(url = %url, "Overriding API base URL from environment");
            self.base_url = Some(url);
        }

        if let Some(flag) = lookup("STOREFRONT_API_WITH_CREDENTIALS") {
            match flag.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => self.with_credentials = true,
                "0" | "false" | "no" => self.with_credentials = false,
                _ => warn!(value = %flag, "Unknown credentials flag in environment"),
            }
        }
    }

    /// Effective base URL, always ending in `/` so joins keep its path.
    pub fn base_url(&self) -> ApiConfigResult<Url> {
        let raw = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.mode.default_base_url());

        let mut url = Url::parse(raw.trim())?;
        if url.cannot_be_a_base() {
            return Err(ApiConfigError::InvalidUrl(format!(
                "{} cannot be used as a base URL",
                raw
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// Full URL of a backend endpoint, relative to the base URL.
    ///
    /// A leading `/` on `path` is ignored so `"/products"` and
    /// `"products"` both land under the base path.
    pub fn endpoint(&self, path: &str) -> ApiConfigResult<Url> {
        let base = self.base_url()?;
        Ok(base.join(path.trim_start_matches('/'))?)
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join("api.toml"))
    }
}
