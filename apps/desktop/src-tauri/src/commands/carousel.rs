//! # Carousel Commands
//!
//! Tauri commands driving the Featured carousel.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Featured Carousel Events                             │
//! │                                                                         │
//! │  WebView event             Tauri Command              Core call         │
//! │  ─────────────             ─────────────              ─────────         │
//! │                                                                         │
//! │  products fetched ───────► load_featured_products ──► set_items()       │
//! │  window resize ──────────► viewport_resized ────────► resize(width)     │
//! │  ► clicked ──────────────► next_page ───────────────► next()            │
//! │  ◄ clicked ──────────────► previous_page ───────────► previous()        │
//! │  dot clicked ────────────► jump_to_page ────────────► jump_to(i)        │
//! │  (re)render ─────────────► get_carousel ────────────► view()            │
//! │                                                                         │
//! │  Every command answers with the full CarouselResponse, so the          │
//! │  frontend never computes pages itself.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use storefront_core::carousel::CarouselSnapshot;
use storefront_core::validation::featured_products_from_value;
use storefront_core::{FeaturedCarousel, Product};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CarouselState, ConfigState};

/// A product card as drawn on the track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub image: String,

    /// Price in cents; a missing price is shown as zero.
    pub price_cents: i64,

    /// Price formatted with the store currency.
    pub price_label: String,
}

impl ProductCard {
    pub fn from_product(product: Product, config: &ConfigState) -> Self {
        let price_cents = product.display_price().cents();
        ProductCard {
            id: product.id,
            name: product.name,
            image: product.image,
            price_cents,
            price_label: config.format_currency(price_cents),
        }
    }
}

/// Render state returned by every carousel command.
pub type CarouselResponse = CarouselSnapshot<ProductCard>;

/// Builds the response for the current carousel state.
pub fn carousel_response(
    carousel: &FeaturedCarousel<Product>,
    config: &ConfigState,
    container_width: Option<f64>,
) -> CarouselResponse {
    carousel
        .view()
        .to_snapshot(container_width)
        .map_items(|product| ProductCard::from_product(product, config))
}

/// Replaces the featured product list.
///
/// ## Arguments
/// * `products` - Whatever the parent fetched. Omitted, `null`, or
///   anything that is not a list renders the empty state; bad entries
///   are dropped.
#[tauri::command]
pub fn load_featured_products(
    carousel: State<'_, CarouselState>,
    config: State<'_, ConfigState>,
    products: Option<Value>,
) -> CarouselResponse {
    carousel.with_carousel_mut(|c| replace_products(c, &config, products))
}

/// Cleans the incoming source and swaps it into the carousel.
pub fn replace_products(
    carousel: &mut FeaturedCarousel<Product>,
    config: &ConfigState,
    source: Option<Value>,
) -> CarouselResponse {
    let products = featured_products_from_value(&source.unwrap_or(Value::Null));
    debug!(count = products.len(), "load_featured_products command");

    carousel.set_items(products);
    carousel_response(carousel, config, None)
}

/// Reports a new viewport width; recomputes pages when a breakpoint is crossed.
#[tauri::command]
pub fn viewport_resized(
    carousel: State<'_, CarouselState>,
    config: State<'_, ConfigState>,
    width: u32,
) -> CarouselResponse {
    carousel.with_carousel_mut(|c| {
        let changed = c.resize(width);
        debug!(width, changed, "viewport_resized command");
        carousel_response(c, &config, None)
    })
}

/// Moves one page forward. No-op on the last page.
#[tauri::command]
pub fn next_page(
    carousel: State<'_, CarouselState>,
    config: State<'_, ConfigState>,
) -> CarouselResponse {
    carousel.with_carousel_mut(|c| {
        let moved = c.next();
        debug!(moved, index = c.index(), "next_page command");
        carousel_response(c, &config, None)
    })
}

/// Moves one page back. No-op on the first page.
#[tauri::command]
pub fn previous_page(
    carousel: State<'_, CarouselState>,
    config: State<'_, ConfigState>,
) -> CarouselResponse {
    carousel.with_carousel_mut(|c| {
        let moved = c.previous();
        debug!(moved, index = c.index(), "previous_page command");
        carousel_response(c, &config, None)
    })
}

/// Jumps straight to a page (indicator click).
///
/// ## Errors
/// `VALIDATION_ERROR` when `index` is past the last page; the current
/// page is left unchanged.
#[tauri::command]
pub fn jump_to_page(
    carousel: State<'_, CarouselState>,
    config: State<'_, ConfigState>,
    index: usize,
) -> Result<CarouselResponse, ApiError> {
    debug!(index, "jump_to_page command");
    carousel.with_carousel_mut(|c| -> Result<CarouselResponse, ApiError> {
        c.jump_to(index)?;
        Ok(carousel_response(c, &config, None))
    })
}

/// Current render state.
///
/// ## Arguments
/// * `container_width` - Track container width in pixels; when given the
///   response carries `offsetPx` as well as `offsetPercent`.
#[tauri::command]
pub fn get_carousel(
    carousel: State<'_, CarouselState>,
    config: State<'_, ConfigState>,
    container_width: Option<f64>,
) -> CarouselResponse {
    debug!(?container_width, "get_carousel command");
    carousel.with_carousel(|c| carousel_response(c, &config, container_width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn carousel(width: u32) -> FeaturedCarousel<Product> {
        let products = featured_products_from_value(&json!([
            { "_id": "1", "name": "Tee", "price": 19.99, "image": "/tee.png" },
            { "_id": "2", "name": "Cap" },
            { "_id": "3", "name": "Mug", "price": "7.5" },
        ]));
        FeaturedCarousel::with_width(products, width)
    }

    #[test]
    fn test_cards_carry_formatted_price() {
        let config = ConfigState::default();
        let response = carousel_response(&carousel(1400), &config, None);

        assert_eq!(response.items.len(), 3);
        assert_eq!(response.items[0].price_label, "$19.99");
        assert_eq!(response.items[1].price_cents, 0);
        assert_eq!(response.items[1].price_label, "$0.00");
        assert_eq!(response.items[2].price_cents, 750);
        assert!(!response.show_controls);
    }

    #[test]
    fn test_response_follows_navigation() {
        let config = ConfigState::default();
        let mut c = carousel(700);
        assert_eq!(c.page_count(), 2);

        c.next();
        let response = carousel_response(&c, &config, Some(600.0));
        assert_eq!(response.index, 1);
        assert_eq!(response.items[0].id, "3");
        assert_eq!(response.offset_px, Some(600.0));
        assert_eq!(response.indicators.len(), 2);
        assert!(response.indicators[1].active);
    }

    #[test]
    fn test_missing_source_clears_to_empty_state() {
        let config = ConfigState::default();
        let mut c = carousel(700);

        let response = replace_products(&mut c, &config, None);
        assert_eq!(response.page_count, 0);
        assert!(response.items.is_empty());
        assert!(response.empty_state.is_some());

        let response = replace_products(&mut c, &config, Some(json!({ "error": "down" })));
        assert!(response.empty_state.is_some());

        let response = replace_products(
            &mut c,
            &config,
            Some(json!([{ "_id": "9", "name": "Scarf", "price": 12 }])),
        );
        assert_eq!(response.items[0].price_label, "$12.00");
    }

    #[test]
    fn test_empty_list_returns_empty_state() {
        let config = ConfigState::default();
        let c = FeaturedCarousel::<Product>::default();
        let json = serde_json::to_value(carousel_response(&c, &config, None)).unwrap();

        assert_eq!(json["pageCount"], 0);
        assert!(json["emptyState"]["message"].is_string());
    }
}
