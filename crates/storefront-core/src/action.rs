//! # Item Action Sink
//!
//! Where a click on a card ("Add to Cart") ends up.
//!
//! ```text
//! Card button ──► FeaturedCarousel::dispatch_action(id) ──► sink.on_item_action(&item)
//!                  (looks id up on the visible page)         (cart, analytics, test spy)
//! ```
//!
//! The carousel never inspects what the sink does and ignores any outcome.

/// Receives exactly one item per user action.
pub trait ItemActionSink<T> {
    /// Called with the item the user acted on, unmodified.
    fn on_item_action(&mut self, item: &T);
}

/// Closures work as sinks, handy for hosts and tests.
impl<T, F> ItemActionSink<T> for F
where
    F: FnMut(&T),
{
    fn on_item_action(&mut self, item: &T) {
        self(item)
    }
}
