//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! Each concern gets its own managed state type so commands declare
//! exactly what they touch:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tauri Managed State                                │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐         │
//! │  │ CarouselState   │  │   CartState     │  │  ConfigState    │         │
//! │  │                 │  │                 │  │                 │         │
//! │  │ Mutex<Featured  │  │ Arc<Mutex<Cart>>│  │ store + ApiConfig│        │
//! │  │   Carousel>     │  │                 │  │ (read-only)     │         │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands that need two states lock the carousel first, then the cart.

mod carousel;
mod cart;
mod config;

pub use carousel::CarouselState;
pub use cart::{AddToCart, Cart, CartItem, CartState, CartTotals, MAX_CART_ITEMS, MAX_ITEM_QUANTITY};
pub use config::ConfigState;
