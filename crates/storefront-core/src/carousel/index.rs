//! # Index Controller
//!
//! Keeps the current page index inside a track whose length changes.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  States: 0 ..= N-1   (N = page count, itself variable)                  │
//! │                                                                         │
//! │    previous()           next()                                          │
//! │   ◄──────────  [ i ]  ──────────►                                       │
//! │   clamps at 0          clamps at N-1                                    │
//! │                                                                         │
//! │   jump_to(k)   accepted only for 0 <= k < N                             │
//! │                                                                         │
//! │   reconcile(M) when pages are rebuilt:                                  │
//! │       i >= M  ──►  i = max(0, M-1)                                      │
//! │       i <  M  ──►  unchanged                                            │
//! │                                                                         │
//! │  N = 0: index is 0 and every move is a no-op.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::{CoreError, CoreResult};

/// Current page position over a variable number of pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexController {
    index: usize,
    page_count: usize,
}

impl IndexController {
    /// Controller positioned on the first of `page_count` pages.
    pub fn new(page_count: usize) -> Self {
        IndexController {
            index: 0,
            page_count,
        }
    }

    /// Current index. Always `< page_count()`, or 0 when there are no pages.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Moves one page forward. Returns whether the index changed.
    pub fn next(&mut self) -> bool {
        if self.can_go_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Moves one page back. Returns whether the index changed.
    pub fn previous(&mut self) -> bool {
        if self.can_go_previous() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps straight to page `target`.
    ///
    /// Out-of-range targets are rejected and the index stays where it is.
    pub fn jump_to(&mut self, target: usize) -> CoreResult<()> {
        if target >= self.page_count {
            return Err(CoreError::PageOutOfRange {
                requested: target,
                page_count: self.page_count,
            });
        }
        self.index = target;
        Ok(())
    }

    /// Adopts a new page count, pulling the index back if its page is gone.
    ///
    /// Must run after every rebuild of the pages, before the index is read.
    pub fn reconcile(&mut self, page_count: usize) {
        self.page_count = page_count;
        if self.index >= page_count {
            let clamped = page_count.saturating_sub(1);
            debug!(from = self.index, to = clamped, page_count, "clamping carousel index");
            self.index = clamped;
        }
    }

    #[inline]
    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    #[inline]
    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.page_count
    }
}
