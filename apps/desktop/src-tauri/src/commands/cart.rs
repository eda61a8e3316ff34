//! # Cart Commands
//!
//! Tauri commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  Add to Cart on a  ┌──────────┐                          │
//! │  │  Empty   │──featured card────►│ In Cart  │◄──┐                      │
//! │  │  Cart    │                    │          │   │ update_cart_item     │
//! │  └──────────┘                    └────┬─────┘───┘ remove_from_cart     │
//! │       ▲                               │                                 │
//! │       └────────── clear_cart ─────────┘                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{AddToCart, CarouselState, Cart, CartItem, CartState, CartTotals};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
#[tauri::command]
pub fn get_cart(cart: State<'_, CartState>) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a featured product to the cart from its card.
///
/// ## Flow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  invoke('add_featured_to_cart', { productId: 'xxx' })                  │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Lock carousel, then cart                                   │    │
/// │  │  2. Find productId on the VISIBLE page only                    │    │
/// │  │  3. Hand that exact product to the AddToCart sink              │    │
/// │  │     - already in cart: quantity increases                      │    │
/// │  │     - otherwise: appended with its price frozen                │    │
/// │  │  4. Return updated cart                                        │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Arguments
/// * `product_id` - `_id` of a card on the current page
/// * `quantity` - Quantity to add (default: 1)
///
/// ## Errors
/// - `NOT_FOUND` if the product is not on the visible page
/// - `CART_ERROR` if a cart limit would be exceeded
#[tauri::command]
pub fn add_featured_to_cart(
    carousel: State<'_, CarouselState>,
    cart: State<'_, CartState>,
    product_id: String,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity, "add_featured_to_cart command");

    carousel.with_carousel(|featured| {
        cart.with_cart_mut(|current| -> Result<CartResponse, ApiError> {
            let mut sink = AddToCart::new(current, quantity);
            featured.dispatch_action(&product_id, &mut sink)?;

            match sink.into_outcome() {
                Some(Ok(())) => Ok(CartResponse::from(&*current)),
                Some(Err(message)) => Err(ApiError::cart(message)),
                None => Err(ApiError::internal("cart was not updated")),
            }
        })
    })
}

/// Updates the quantity of an item in the cart.
///
/// ## Behavior
/// - Quantity 0: removes the item
/// - Quantity > max: returns error
#[tauri::command]
pub fn update_cart_item(
    cart: State<'_, CartState>,
    product_id: String,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    let result = cart.with_cart_mut(|c| {
        c.update_quantity(&product_id, quantity)?;
        Ok::<CartResponse, String>(CartResponse::from(&*c))
    });

    result.map_err(ApiError::cart)
}

/// Removes an item from the cart.
#[tauri::command]
pub fn remove_from_cart(
    cart: State<'_, CartState>,
    product_id: String,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "remove_from_cart command");

    let result = cart.with_cart_mut(|c| {
        c.remove_item(&product_id)?;
        Ok::<CartResponse, String>(CartResponse::from(&*c))
    });

    result.map_err(ApiError::cart)
}

/// Clears all items from the cart.
#[tauri::command]
pub fn clear_cart(cart: State<'_, CartState>) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}
