//! # storefront-core: Featured Products Carousel Logic
//!
//! Pure state behind the storefront's "Featured" carousel. No I/O, no
//! rendering: hosts feed item lists, viewport widths and clicks in and
//! read back what to draw.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (WebView)                           │   │
//! │  │      Featured carousel ──► Cart badge ──► Router links          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │   viewport_resized, next_page, add_featured_to_cart, navigate   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ carousel  │  │   types   │  │   money   │  │ validation│  │   │
//! │  │   │ paginate  │  │  Product  │  │   Money   │  │ item list │  │   │
//! │  │   │ index     │  │           │  │           │  │ cleanup   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • DETERMINISTIC                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`carousel`] - Breakpoints, paginator, index controller, render projection
//! - [`action`] - Item action sink (where "Add to Cart" clicks go)
//! - [`navigation`] - Empty-state links
//! - [`types`] - Product record and the `CarouselItem` trait
//! - [`money`] - Integer-cent prices
//! - [`validation`] - Item source cleanup
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use serde_json::json;
//! use storefront_core::carousel::FeaturedCarousel;
//! use storefront_core::validation::featured_products_from_value;
//!
//! let products = featured_products_from_value(&json!([
//!     { "_id": "1", "name": "Tee",   "price": 19.99 },
//!     { "_id": "2", "name": "Cap",   "price": 12.5 },
//!     { "_id": "3", "name": "Socks" },
//! ]));
//!
//! // Phone-sized viewport: one card per page.
//! let mut carousel = FeaturedCarousel::with_width(products, 390);
//! assert_eq!(carousel.page_count(), 3);
//!
//! carousel.next();
//! assert_eq!(carousel.visible()[0].name, "Cap");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod action;
pub mod carousel;
pub mod error;
pub mod money;
pub mod navigation;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use action::ItemActionSink;
pub use carousel::{FeaturedCarousel, PageSize};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use navigation::{EmptyState, NavLink, NavTarget};
pub use types::*;
