//! # Tauri Commands Module
//!
//! All commands exposed to the WebView frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── carousel.rs    ◄─── Featured list, resize, prev/next/jump
//! ├── cart.rs        ◄─── Add to Cart from a card, cart manipulation
//! ├── navigation.rs  ◄─── Empty-state links
//! └── config.rs      ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the carousel
//! fn next_page(carousel: State<'_, CarouselState>, ...)
//!
//! // Only needs cart
//! fn get_cart(cart: State<'_, CartState>)
//!
//! // Needs both (carousel locked first)
//! fn add_featured_to_cart(carousel: State<'_, CarouselState>, cart: State<'_, CartState>, ...)
//! ```

pub mod carousel;
pub mod cart;
pub mod config;
pub mod navigation;
