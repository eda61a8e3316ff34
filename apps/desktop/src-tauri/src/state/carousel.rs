//! # Carousel State
//!
//! The one Featured carousel shown by the WebView.
//!
//! Every command that touches it runs a closure under the lock, so a
//! resize and a click can never interleave half-way through an update.

use std::sync::{Mutex, PoisonError};

use storefront_core::{FeaturedCarousel, Product};

/// Tauri-managed carousel state.
#[derive(Debug, Default)]
pub struct CarouselState {
    carousel: Mutex<FeaturedCarousel<Product>>,
}

impl CarouselState {
    /// Empty carousel at the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the carousel.
    pub fn with_carousel<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&FeaturedCarousel<Product>) -> R,
    {
        let carousel = self.carousel.lock().unwrap_or_else(PoisonError::into_inner);
        f(&carousel)
    }

    /// Executes a function with write access to the carousel.
    pub fn with_carousel_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut FeaturedCarousel<Product>) -> R,
    {
        let mut carousel = self.carousel.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut carousel)
    }
}
