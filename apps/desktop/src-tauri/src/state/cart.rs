//! # Cart State
//!
//! The shopping cart that "Add to Cart" clicks on featured cards land in.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. Tauri commands can run concurrently
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Frontend Action          Tauri Command             Cart State Change   │
//! │  ───────────────          ─────────────             ─────────────────   │
//! │                                                                         │
//! │  Click "Add to Cart" ───► add_featured_to_cart() ─► items.push(item)   │
//! │                           (via carousel sink)                           │
//! │                                                                         │
//! │  Change Quantity ───────► update_cart_item() ─────► items[i].qty = n   │
//! │                                                                         │
//! │  Click Remove ──────────► remove_from_cart() ─────► items.remove(i)    │
//! │                                                                         │
//! │  Click Clear ───────────► clear_cart() ───────────► items.clear()      │
//! │                                                                         │
//! │  View Cart ─────────────► get_cart() ─────────────► (read only)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::{ItemActionSink, Money, Product};
use tracing::debug;

/// Maximum distinct products in one cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single product.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// An item in the shopping cart.
///
/// Name, image and price are frozen copies taken when the product was
/// added, so the cart keeps showing what the shopper clicked on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub image: String,

    /// Price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    pub quantity: i64,

    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart item from a product and quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            unit_price_cents: product.display_price().cents(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding same product increases quantity)
/// - Quantity is always 1..=MAX_ITEM_QUANTITY
/// - At most MAX_CART_ITEMS distinct products
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,

    /// When the cart was created/last cleared
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart or increases quantity if already present.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), String> {
        if quantity <= 0 {
            return Err("Quantity must be positive".to_string());
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(format!("Quantity cannot exceed {}", MAX_ITEM_QUANTITY));
        }

        let unit_price = product.display_price();

        if let Some(pos) = self.items.iter().position(|i| i.product_id == product.id) {
            let new_qty = self.items[pos]
                .quantity
                .checked_add(quantity)
                .filter(|q| *q <= MAX_ITEM_QUANTITY)
                .ok_or_else(|| {
                    format!("Quantity would exceed maximum of {}", MAX_ITEM_QUANTITY)
                })?;
            let line_total =
                Money::from_cents(self.items[pos].unit_price_cents).checked_multiply_quantity(new_qty);
            self.check_subtotal(&product.id, line_total)?;
            self.items[pos].quantity = new_qty;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(format!(
                "Cart cannot have more than {} items",
                MAX_CART_ITEMS
            ));
        }

        self.check_subtotal(&product.id, unit_price.checked_multiply_quantity(quantity))?;
        self.items.push(CartItem::from_product(product, quantity));
        Ok(())
    }

    /// Updates the quantity of an item in the cart. Zero removes it.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> Result<(), String> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        if !(1..=MAX_ITEM_QUANTITY).contains(&quantity) {
            return Err(format!(
                "Quantity must be between 1 and {}",
                MAX_ITEM_QUANTITY
            ));
        }

        let pos = self
            .items
            .iter()
            .position(|i| i.product_id == product_id)
            .ok_or_else(|| format!("Product {} not in cart", product_id))?;

        let line_total =
            Money::from_cents(self.items[pos].unit_price_cents).checked_multiply_quantity(quantity);
        self.check_subtotal(product_id, line_total)?;
        self.items[pos].quantity = quantity;
        Ok(())
    }

    /// Verifies the subtotal stays representable once `product_id`'s line
    /// becomes `line_total`.
    fn check_subtotal(&self, product_id: &str, line_total: Option<Money>) -> Result<(), String> {
        self.items
            .iter()
            .filter(|i| i.product_id != product_id)
            .try_fold(line_total.ok_or_else(total_overflow)?, |acc, i| {
                Money::from_cents(i.unit_price_cents)
                    .checked_multiply_quantity(i.quantity)
                    .and_then(|line| acc.checked_add(line))
                    .ok_or_else(total_overflow)
            })
            .map(|_| ())
    }

    /// Removes an item from the cart by product ID.
    pub fn remove_item(&mut self, product_id: &str) -> Result<(), String> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(format!("Product {} not in cart", product_id))
        } else {
            Ok(())
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of unique items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn total_overflow() -> String {
    "Cart total is too large".to_string()
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal().cents(),
        }
    }
}

// =============================================================================
// Item Action Sink
// =============================================================================

/// Sink that adds the clicked product to a cart.
///
/// The carousel ignores the sink's outcome, so the result of the add is
/// kept here for the command to report.
pub struct AddToCart<'a> {
    cart: &'a mut Cart,
    quantity: i64,
    outcome: Option<Result<(), String>>,
}

impl<'a> AddToCart<'a> {
    pub fn new(cart: &'a mut Cart, quantity: i64) -> Self {
        AddToCart {
            cart,
            quantity,
            outcome: None,
        }
    }

    /// Result of the add, `None` if the sink was never invoked.
    pub fn into_outcome(self) -> Option<Result<(), String>> {
        self.outcome
    }
}

impl ItemActionSink<Product> for AddToCart<'_> {
    fn on_item_action(&mut self, item: &Product) {
        debug!(product_id = %item.id, quantity = self.quantity, "adding featured product to cart");
        self.outcome = Some(self.cart.add_item(item, self.quantity));
    }
}

// =============================================================================
// Tauri-managed State
// =============================================================================

/// Tauri-managed cart state.
///
/// ## Why Not RwLock?
/// Cart operations are typically quick, and most operations modify state.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// A poisoned lock is recovered: every cart mutation leaves the cart
    /// consistent before it can panic.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Some(Money::from_cents(price_cents)),
            image: format!("/img/{}.png", id),
        }
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let product = test_product("1", 999);

        cart.add_item(&product, 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal().cents(), 1998);
    }

    #[test]
    fn test_cart_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        let product = test_product("1", 999);

        cart.add_item(&product, 2).unwrap();
        cart.add_item(&product, 3).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_priceless_product_costs_zero() {
        let mut cart = Cart::new();
        let product = Product {
            price: None,
            ..test_product("free", 0)
        };

        cart.add_item(&product, 1).unwrap();
        assert_eq!(cart.subtotal(), Money::zero());
    }

    #[test]
    fn test_cart_limits() {
        let mut cart = Cart::new();
        let product = test_product("1", 100);

        assert!(cart.add_item(&product, 0).is_err());
        assert!(cart.add_item(&product, MAX_ITEM_QUANTITY + 1).is_err());
        cart.add_item(&product, MAX_ITEM_QUANTITY).unwrap();
        assert!(cart.add_item(&product, 1).is_err());
        assert!(cart.update_quantity("1", -3).is_err());
    }

    #[test]
    fn test_oversized_quantity_is_rejected_for_existing_item() {
        let mut cart = Cart::new();
        let product = test_product("1", 100);
        cart.add_item(&product, 1).unwrap();

        assert!(cart.add_item(&product, i64::MAX).is_err());
        assert!(cart.add_item(&product, MAX_ITEM_QUANTITY).is_err());
        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn test_totals_that_overflow_are_rejected() {
        let mut cart = Cart::new();
        let pricey = test_product("big", i64::MAX / 2);

        cart.add_item(&pricey, 1).unwrap();
        assert!(cart.add_item(&pricey, 2).is_err());
        assert!(cart.update_quantity("big", 3).is_err());
        assert_eq!(cart.total_quantity(), 1);

        let other = test_product("other", i64::MAX / 2 + 10);
        assert!(cart.add_item(&other, 1).is_err());
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.subtotal().cents(), i64::MAX / 2);
    }

    #[test]
    fn test_update_to_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 100), 1).unwrap();

        cart.update_quantity("1", 0).unwrap();
        assert!(cart.is_empty());
        assert!(cart.remove_item("1").is_err());
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 999), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_to_cart_sink_records_outcome() {
        let mut cart = Cart::new();
        let product = test_product("7", 250);

        let mut sink = AddToCart::new(&mut cart, 2);
        sink.on_item_action(&product);
        assert_eq!(sink.into_outcome(), Some(Ok(())));

        assert_eq!(cart.items[0].product_id, "7");
        assert_eq!(cart.subtotal().cents(), 500);
    }
}
