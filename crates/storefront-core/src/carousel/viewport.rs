//! # Viewport Breakpoints
//!
//! Maps a display width to how many cards fit side by side.
//!
//! ```text
//! width (px)   0 ────── 640 ────── 1024 ────── 1280 ──────►
//! cards/page       1          2            3           4
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Widths below this show one card.
pub const BREAKPOINT_SM: u32 = 640;
/// Widths below this show two cards.
pub const BREAKPOINT_LG: u32 = 1024;
/// Widths below this show three cards; at or above, four.
pub const BREAKPOINT_XL: u32 = 1280;

// =============================================================================
// Page Size Class
// =============================================================================

/// Number of items shown at once, derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl PageSize {
    /// Largest class, used before the first width is known.
    pub const MAX: PageSize = PageSize::Four;

    /// Resolves a width in pixels to its page size class.
    ///
    /// ```rust
    /// use storefront_core::carousel::PageSize;
    ///
    /// assert_eq!(PageSize::from_width(375), PageSize::One);
    /// assert_eq!(PageSize::from_width(800), PageSize::Two);
    /// assert_eq!(PageSize::from_width(1100), PageSize::Three);
    /// assert_eq!(PageSize::from_width(1920), PageSize::Four);
    /// ```
    pub const fn from_width(width: u32) -> Self {
        if width < BREAKPOINT_SM {
            PageSize::One
        } else if width < BREAKPOINT_LG {
            PageSize::Two
        } else if width < BREAKPOINT_XL {
            PageSize::Three
        } else {
            PageSize::Four
        }
    }

    /// Items per page as a plain count. Never zero.
    #[inline]
    pub const fn get(self) -> usize {
        self as usize
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::MAX
    }
}

impl TryFrom<usize> for PageSize {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PageSize::One),
            2 => Ok(PageSize::Two),
            3 => Ok(PageSize::Three),
            4 => Ok(PageSize::Four),
            _ => Err(ValidationError::OutOfRange {
                field: "page_size".to_string(),
                min: 1,
                max: 4,
            }),
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> usize {
        size.get()
    }
}

// =============================================================================
// Viewport Observer
// =============================================================================

/// Tracks resize notifications and reports breakpoint crossings.
///
/// Resizes inside one band (e.g. 700px → 900px) are absorbed; only a
/// change of class is reported, so the carousel is not rebuilt for
/// every pixel of a window drag.
#[derive(Debug, Clone)]
pub struct ViewportObserver {
    width: Option<u32>,
    page_size: PageSize,
}

impl ViewportObserver {
    /// Observer that has not seen a width yet.
    pub fn new() -> Self {
        ViewportObserver {
            width: None,
            page_size: PageSize::default(),
        }
    }

    /// Observer initialized from the width at mount time.
    pub fn with_width(width: u32) -> Self {
        ViewportObserver {
            width: Some(width),
            page_size: PageSize::from_width(width),
        }
    }

    /// Observer pinned to `page_size`, keeping the last known width.
    pub(crate) fn forced(page_size: PageSize, width: Option<u32>) -> Self {
        ViewportObserver { width, page_size }
    }

    /// Feeds a new width. Returns the new class when a breakpoint was crossed.
    pub fn observe(&mut self, width: u32) -> Option<PageSize> {
        let next = PageSize::from_width(width);
        let first = self.width.is_none();
        self.width = Some(width);

        if first || next != self.page_size {
            self.page_size = next;
            Some(next)
        } else {
            None
        }
    }

    /// Last width seen, if any.
    pub fn width(&self) -> Option<u32> {
        self.width
    }

    /// Current class.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }
}

impl Default for ViewportObserver {
    fn default() -> Self {
        Self::new()
    }
}
