//! # Config Commands
//!
//! Tauri commands for retrieving application configuration.

use serde::Serialize;
use storefront_api::ApiMode;
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::ConfigState;

/// Configuration as the frontend needs it.
///
/// The HTTP client section is resolved here so the WebView gets a
/// ready-to-use base URL instead of re-deriving it from the mode.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub store_name: String,
    pub currency_code: String,
    pub currency_symbol: String,
    pub currency_decimals: u8,
    pub api: ApiClientResponse,
}

/// Resolved HTTP client settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiClientResponse {
    pub mode: ApiMode,
    pub base_url: String,
    pub with_credentials: bool,
    pub timeout_secs: u64,
}

impl TryFrom<&ConfigState> for ConfigResponse {
    type Error = ApiError;

    fn try_from(config: &ConfigState) -> Result<Self, Self::Error> {
        Ok(ConfigResponse {
            store_name: config.store_name.clone(),
            currency_code: config.currency_code.clone(),
            currency_symbol: config.currency_symbol.clone(),
            currency_decimals: config.currency_decimals,
            api: ApiClientResponse {
                mode: config.api.mode,
                base_url: config.api.base_url()?.to_string(),
                with_credentials: config.api.with_credentials,
                timeout_secs: config.api.timeout_secs,
            },
        })
    }
}

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (HTTP client setup, currency formatting)
///
/// ## Returns
/// Store settings plus the resolved HTTP client settings
#[tauri::command]
pub fn get_config(config: State<'_, ConfigState>) -> Result<ConfigResponse, ApiError> {
    debug!("get_config command");
    ConfigResponse::try_from(&*config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_api::ApiConfig;

    #[test]
    fn test_resolves_base_url_for_mode() {
        let config = ConfigState {
            api: ApiConfig::for_mode(ApiMode::Production),
            ..ConfigState::default()
        };
        let response = ConfigResponse::try_from(&config).unwrap();

        assert_eq!(
            response.api.base_url,
            "https://backend-ecommerce-node.vercel.app/api/"
        );
        assert!(response.api.with_credentials);
    }

    #[test]
    fn test_bad_base_url_is_config_error() {
        let mut config = ConfigState::default();
        config.api.base_url = Some("not a url".to_string());

        let err = ConfigResponse::try_from(&config).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ConfigError);
    }
}
