//! # Domain Types
//!
//! The item records the carousel pages through.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌──────────────────────────────┐       │
//! │  │      Product        │        │     trait CarouselItem       │       │
//! │  │  ─────────────────  │ impl   │  ──────────────────────────  │       │
//! │  │  id     ("_id")     │ ─────► │  item_id() -> &str           │       │
//! │  │  name               │        │                              │       │
//! │  │  price  (optional)  │        │  Anything with a stable id   │       │
//! │  │  image              │        │  can ride the carousel.      │       │
//! │  └─────────────────────┘        └──────────────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are owned by the product API. The carousel only reads them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{self, Money};

// =============================================================================
// Carousel Item
// =============================================================================

/// Anything the carousel can display.
///
/// The identifier must be unique within one item list. It keys rendered
/// cards and routes item actions back to the exact record.
pub trait CarouselItem {
    /// Stable identifier of this item.
    fn item_id(&self) -> &str;
}

// =============================================================================
// Product
// =============================================================================

/// A product as delivered by the storefront API.
///
/// ## Wire Format
/// ```json
/// { "_id": "65f0c1", "name": "Denim Jacket", "price": 89.99, "image": "https://..." }
/// ```
/// `price` may be missing or `null`; cards then show `$0.00`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (database id).
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Display name shown on the card.
    pub name: String,

    /// Price, if the API provided one.
    #[serde(default, with = "money::dollars")]
    #[ts(type = "number | null")]
    pub price: Option<Money>,

    /// Image URL for the card.
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Price to display, zero when absent.
    #[inline]
    pub fn display_price(&self) -> Money {
        self.price.unwrap_or_default()
    }
}

impl CarouselItem for Product {
    fn item_id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_api_json() {
        let json = r#"{"_id":"a1","name":"Denim Jacket","price":89.99,"image":"/img/a1.png"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.item_id(), "a1");
        assert_eq!(product.display_price().cents(), 8999);
        assert_eq!(product.image, "/img/a1.png");
    }

    #[test]
    fn test_missing_price_displays_zero() {
        let json = r#"{"_id":"a2","name":"Free Sticker"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.price, None);
        assert_eq!(product.display_price().to_string(), "$0.00");
        assert_eq!(product.image, "");
    }

    #[test]
    fn test_null_and_string_prices() {
        let null_price: Product =
            serde_json::from_str(r#"{"_id":"a3","name":"X","price":null}"#).unwrap();
        assert_eq!(null_price.price, None);

        let string_price: Product =
            serde_json::from_str(r#"{"_id":"a4","name":"Y","price":"12.50"}"#).unwrap();
        assert_eq!(string_price.display_price().cents(), 1250);
    }

    #[test]
    fn test_plain_id_alias() {
        let product: Product = serde_json::from_str(r#"{"id":"a5","name":"Z"}"#).unwrap();
        assert_eq!(product.id, "a5");
    }

    #[test]
    fn test_bad_price_is_rejected() {
        let result = serde_json::from_str::<Product>(r#"{"_id":"a6","name":"Q","price":true}"#);
        assert!(result.is_err());
    }
}
