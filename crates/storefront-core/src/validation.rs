//! # Validation Module
//!
//! Turns whatever the parent context hands over into a clean item list.
//!
//! ## Input Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Item Source Handling                               │
//! │                                                                         │
//! │  Source value            Result                                         │
//! │  ────────────            ──────                                         │
//! │  [ {...}, {...} ]   ──►  list of items (order kept)                     │
//! │  null / {} / "x"    ──►  EMPTY list (not an error)                      │
//! │                                                                         │
//! │  Per entry:                                                             │
//! │  • fails to parse       ──►  skipped, logged                            │
//! │  • blank id or name     ──►  skipped, logged                            │
//! │  • price < 0 or > cap   ──►  skipped, logged                            │
//! │  • id seen before       ──►  skipped, logged (first one wins)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in here fails the whole list: the carousel must always render.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{CarouselItem, Product};

/// Highest price a featured product may carry ($1,000,000).
pub const MAX_PRODUCT_PRICE: Money = Money::from_cents(100_000_000);

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a single product record.
///
/// ## Rules
/// - `_id` must not be blank
/// - `name` must not be blank
/// - `price`, when present, must be within `0..=MAX_PRODUCT_PRICE`
///
/// ```rust
/// use storefront_core::validation::validate_product;
/// use storefront_core::Product;
///
/// let ok = Product { id: "a".into(), name: "Tee".into(), price: None, image: String::new() };
/// assert!(validate_product(&ok).is_ok());
///
/// let blank = Product { name: " ".into(), ..ok };
/// assert!(validate_product(&blank).is_err());
/// ```
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "_id".to_string(),
        });
    }

    if product.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if let Some(price) = product.price {
        if price < Money::zero() || price > MAX_PRODUCT_PRICE {
            return Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: MAX_PRODUCT_PRICE.dollars(),
            });
        }
    }

    Ok(())
}

/// Reads an item list from an arbitrary JSON value.
///
/// A value that is not an array is treated as an empty list. Entries are
/// parsed one by one, run through `check`, and de-duplicated by id.
pub fn items_from_value<T, F>(source: &Value, check: F) -> Vec<T>
where
    T: DeserializeOwned + CarouselItem,
    F: Fn(&T) -> ValidationResult<()>,
{
    let Some(entries) = source.as_array() else {
        if !source.is_null() {
            warn!(kind = value_kind(source), "item source is not a list, treating as empty");
        }
        return Vec::new();
    };

    let mut seen = HashSet::with_capacity(entries.len());
    let mut items = Vec::with_capacity(entries.len());

    for (position, entry) in entries.iter().enumerate() {
        let item: T = match T::deserialize(entry) {
            Ok(item) => item,
            Err(e) => {
                warn!(position, error = %e, "skipping unreadable item");
                continue;
            }
        };

        if let Err(e) = check(&item) {
            warn!(position, error = %e, "skipping invalid item");
            continue;
        }

        if !seen.insert(item.item_id().to_string()) {
            let e = ValidationError::Duplicate {
                field: "_id".to_string(),
                value: item.item_id().to_string(),
            };
            warn!(position, error = %e, "skipping duplicate item");
            continue;
        }

        items.push(item);
    }

    items
}

/// Reads the featured product list handed to the carousel.
///
/// ```rust
/// use serde_json::json;
/// use storefront_core::validation::featured_products_from_value;
///
/// let products = featured_products_from_value(&json!([
///     { "_id": "a", "name": "Tee", "price": 19.99, "image": "/a.png" },
/// ]));
/// assert_eq!(products.len(), 1);
///
/// assert!(featured_products_from_value(&json!({ "error": "oops" })).is_empty());
/// ```
pub fn featured_products_from_value(source: &Value) -> Vec<Product> {
    items_from_value(source, validate_product)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_list_sources_are_empty() {
        for source in [json!(null), json!({}), json!("products"), json!(42), json!(true)] {
            assert!(featured_products_from_value(&source).is_empty());
        }
    }

    #[test]
    fn test_keeps_order() {
        let products = featured_products_from_value(&json!([
            { "_id": "b", "name": "Second" },
            { "_id": "a", "name": "First" },
            { "_id": "c", "name": "Third" },
        ]));
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_skips_bad_entries() {
        let products = featured_products_from_value(&json!([
            { "_id": "a", "name": "Good" },
            "not an object",
            { "name": "No id" },
            { "_id": "  ", "name": "Blank id" },
            { "_id": "b", "name": "" },
            { "_id": "c", "name": "Bad price", "price": [1] },
            { "_id": "d", "name": "Also good", "price": 5 },
        ]));
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
    }

    #[test]
    fn test_rejects_negative_and_oversized_prices() {
        let products = featured_products_from_value(&json!([
            { "_id": "neg", "name": "Refund", "price": -5 },
            { "_id": "huge", "name": "Yacht", "price": "90000000000000000" },
            { "_id": "free", "name": "Sticker", "price": 0 },
            { "_id": "cap", "name": "Top shelf", "price": 1000000 },
        ]));
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["free", "cap"]);

        let negative = Product {
            id: "n".to_string(),
            name: "N".to_string(),
            price: Some(Money::from_cents(-1)),
            image: String::new(),
        };
        assert_eq!(
            validate_product(&negative),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: 1_000_000
            })
        );
    }

    #[test]
    fn test_first_duplicate_wins() {
        let products = featured_products_from_value(&json!([
            { "_id": "a", "name": "Original" },
            { "_id": "a", "name": "Copy" },
        ]));
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Original");
    }

    #[test]
    fn test_validate_product_fields() {
        let product = Product {
            id: "x".to_string(),
            name: "Cap".to_string(),
            price: None,
            image: String::new(),
        };
        assert!(validate_product(&product).is_ok());

        let no_id = Product {
            id: String::new(),
            ..product.clone()
        };
        assert_eq!(
            validate_product(&no_id),
            Err(ValidationError::Required {
                field: "_id".to_string()
            })
        );
    }
}
