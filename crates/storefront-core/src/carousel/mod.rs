//! # Featured Carousel
//!
//! Paginated carousel state: items in, pages and a clamped index out.
//!
//! ## Reactive Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Derived State Pipeline                               │
//! │                                                                         │
//! │   item list ──┐                                                         │
//! │               ├──► paginate ──► page_count ──► reconcile(index) ──► view│
//! │   width ──────┘        ▲                                                │
//! │   (page size)          │                                                │
//! │                        └─ rebuilt on EVERY change of either input       │
//! │                                                                         │
//! │   next / previous / jump_to only move the index inside [0, N-1]         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutating method reconciles the index before returning, so a
//! caller can never read an index that points past the last page.
//!
//! ## Example
//! ```rust
//! use storefront_core::carousel::{FeaturedCarousel, PageSize};
//! use storefront_core::Product;
//!
//! let products: Vec<Product> = (1..=5)
//!     .map(|i| Product {
//!         id: format!("p{i}"),
//!         name: format!("Product {i}"),
//!         price: None,
//!         image: String::new(),
//!     })
//!     .collect();
//!
//! let mut carousel = FeaturedCarousel::new(products);
//! carousel.set_page_size(PageSize::One);
//! carousel.jump_to(4).unwrap();
//!
//! // Window grows: 5 pages become 2 and the index follows.
//! carousel.resize(1600);
//! assert_eq!(carousel.index(), 1);
//! ```

mod index;
mod paginate;
mod projection;
mod viewport;

pub use index::IndexController;
pub use paginate::{page_count, page_slice, paginate};
pub use projection::{CarouselSnapshot, CarouselView, PageIndicator};
pub use viewport::{PageSize, ViewportObserver, BREAKPOINT_LG, BREAKPOINT_SM, BREAKPOINT_XL};

use tracing::debug;

use crate::action::ItemActionSink;
use crate::error::{CoreError, CoreResult};
use crate::types::CarouselItem;

/// Carousel over a list of items, paged by viewport width.
#[derive(Debug, Clone)]
pub struct FeaturedCarousel<T> {
    items: Vec<T>,
    viewport: ViewportObserver,
    controller: IndexController,
}

impl<T: CarouselItem> FeaturedCarousel<T> {
    /// Carousel with the default (widest) page size until a width arrives.
    pub fn new(items: Vec<T>) -> Self {
        Self::build(items, ViewportObserver::new())
    }

    /// Carousel initialized from the viewport width at mount time.
    pub fn with_width(items: Vec<T>, width: u32) -> Self {
        Self::build(items, ViewportObserver::with_width(width))
    }

    fn build(items: Vec<T>, viewport: ViewportObserver) -> Self {
        let pages = page_count(items.len(), viewport.page_size());
        FeaturedCarousel {
            items,
            viewport,
            controller: IndexController::new(pages),
        }
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// Replaces the item list (e.g. the API response arrived).
    pub fn set_items(&mut self, items: Vec<T>) {
        debug!(count = items.len(), "featured items replaced");
        self.items = items;
        self.rebuild();
    }

    /// Feeds a resize notification. Returns true when the page size changed.
    pub fn resize(&mut self, width: u32) -> bool {
        match self.viewport.observe(width) {
            Some(size) => {
                debug!(width, page_size = size.get(), "carousel breakpoint crossed");
                self.rebuild();
                true
            }
            None => false,
        }
    }

    /// Forces a page size, bypassing the width breakpoints.
    ///
    /// The next resize whose band maps to a different size overrides it.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.viewport = ViewportObserver::forced(page_size, self.viewport.width());
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let pages = page_count(self.items.len(), self.viewport.page_size());
        self.controller.reconcile(pages);
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Next page. No-op on the last page or with no pages.
    pub fn next(&mut self) -> bool {
        self.controller.next()
    }

    /// Previous page. No-op on the first page.
    pub fn previous(&mut self) -> bool {
        self.controller.previous()
    }

    /// Jumps to a page (indicator click). Out-of-range targets are rejected.
    pub fn jump_to(&mut self, index: usize) -> CoreResult<()> {
        self.controller.jump_to(index)
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn page_size(&self) -> PageSize {
        self.viewport.page_size()
    }

    pub fn index(&self) -> usize {
        self.controller.index()
    }

    pub fn page_count(&self) -> usize {
        self.controller.page_count()
    }

    /// All pages, each borrowing from the item list.
    pub fn pages(&self) -> Vec<&[T]> {
        paginate(&self.items, self.page_size())
    }

    /// Items on the current page.
    pub fn visible(&self) -> &[T] {
        page_slice(&self.items, self.page_size(), self.index())
    }

    /// Render projection of the current state.
    pub fn view(&self) -> CarouselView<'_, T> {
        CarouselView {
            visible: self.visible(),
            index: self.index(),
            page_count: self.page_count(),
            page_size: self.page_size().get(),
            can_go_previous: self.controller.can_go_previous(),
            can_go_next: self.controller.can_go_next(),
        }
    }

    // -------------------------------------------------------------------------
    // Item actions
    // -------------------------------------------------------------------------

    /// Forwards the visible item `item_id` to `sink`.
    ///
    /// Only items on the current page can be acted on; anything else is
    /// rejected with [`CoreError::ItemNotVisible`] and the sink is not called.
    pub fn dispatch_action<S>(&self, item_id: &str, sink: &mut S) -> CoreResult<&T>
    where
        S: ItemActionSink<T> + ?Sized,
    {
        let item = self
            .visible()
            .iter()
            .find(|item| item.item_id() == item_id)
            .ok_or_else(|| CoreError::ItemNotVisible(item_id.to_string()))?;

        sink.on_item_action(item);
        Ok(item)
    }
}

impl<T: CarouselItem> Default for FeaturedCarousel<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests;
