//! # storefront-api: HTTP Client Configuration
//!
//! Describes the HTTP client the storefront frontend talks to its backend
//! with. The client itself lives in the frontend; this crate decides
//! where it points.
//!
//! ```text
//! ┌──────────────────────┐     ┌───────────────────────────────────────────┐
//! │  ApiMode             │     │  base URL                                 │
//! │  ──────────────────  │ ──► │  development: http://localhost:5000/api   │
//! │  Development         │     │  production:  https://backend-ecommerce-  │
//! │  Production          │     │               node.vercel.app/api         │
//! └──────────────────────┘     └───────────────────────────────────────────┘
//!          + with_credentials (send cookies), timeout, base URL override
//! ```
//!
//! ## Example
//! ```rust
//! use storefront_api::{ApiConfig, ApiMode};
//!
//! let config = ApiConfig::for_mode(ApiMode::Development);
//! let url = config.endpoint("products/featured").unwrap();
//! assert_eq!(url.as_str(), "http://localhost:5000/api/products/featured");
//! assert!(config.with_credentials);
//! ```

pub mod config;
pub mod error;

pub use config::{ApiConfig, ApiMode};
pub use error::{ApiConfigError, ApiConfigResult};
