//! # Paginator
//!
//! Splits an item list into fixed-size pages.
//!
//! ```text
//! items  [ a b c d e f g h i j ]      page_size = 4
//!          └──┬──┘ └──┬──┘ └┬┘
//! pages    [a b c d] [e f g h] [i j]  (last page may be short)
//! ```
//!
//! Pages borrow from the item list; nothing is copied.

use super::viewport::PageSize;

/// Splits `items` into consecutive chunks of `page_size`, order preserved.
///
/// ```rust
/// use storefront_core::carousel::{paginate, PageSize};
///
/// let items: Vec<u32> = (1..=10).collect();
/// let pages = paginate(&items, PageSize::Four);
///
/// assert_eq!(pages.len(), 3);
/// assert_eq!(pages[2], &[9, 10]);
/// assert!(paginate::<u32>(&[], PageSize::Two).is_empty());
/// ```
pub fn paginate<T>(items: &[T], page_size: PageSize) -> Vec<&[T]> {
    items.chunks(page_size.get()).collect()
}

/// Number of pages `len` items occupy: `ceil(len / page_size)`.
#[inline]
pub fn page_count(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get())
}

/// The slice shown on page `index`, empty when the page does not exist.
pub fn page_slice<T>(items: &[T], page_size: PageSize, index: usize) -> &[T] {
    let size = page_size.get();
    let start = index.saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}
