//! # Render Projection
//!
//! Everything a renderer needs for one frame of the carousel, derived
//! from the items, the page size and the current index.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Featured                                     │
//! │                                                                         │
//! │   ◄   ┌────────┐ ┌────────┐ ┌────────┐ ┌────────┐   ►                  │
//! │  prev │ card   │ │ card   │ │ card   │ │ card   │  next                 │
//! │       └────────┘ └────────┘ └────────┘ └────────┘                       │
//! │                        ●  ○  ○                                          │
//! │                     indicators                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Controls and indicators only exist with more than one page. With no
//! items the whole track is replaced by the [`EmptyState`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::navigation::EmptyState;

/// One dot under the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PageIndicator {
    pub index: usize,
    pub active: bool,
}

/// Borrowed view of the carousel for a single render.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView<'a, T> {
    /// Items on the current page. A short last page is not padded.
    pub visible: &'a [T],
    pub index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl<'a, T> CarouselView<'a, T> {
    /// Prev/next buttons and indicators are shown only with several pages.
    #[inline]
    pub fn show_controls(&self) -> bool {
        self.page_count > 1
    }

    /// True when there is nothing to show at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }

    /// Empty-state block, present only when there are no items.
    pub fn empty_state(&self) -> Option<EmptyState> {
        self.is_empty().then(EmptyState::default)
    }

    /// Indicator dots, empty unless controls are shown.
    pub fn indicators(&self) -> Vec<PageIndicator> {
        if !self.show_controls() {
            return Vec::new();
        }
        (0..self.page_count)
            .map(|index| PageIndicator {
                index,
                active: index == self.index,
            })
            .collect()
    }

    /// Track translation in pixels for a container `container_width` wide.
    ///
    /// The track is shifted left by one container width per page, so
    /// this is linear in the index. Negative or NaN widths yield 0.
    pub fn offset_px(&self, container_width: f64) -> f64 {
        if container_width.is_nan() || container_width <= 0.0 {
            return 0.0;
        }
        self.index as f64 * container_width
    }

    /// Same translation as a percentage of the container width.
    #[inline]
    pub fn offset_percent(&self) -> f64 {
        self.index as f64 * 100.0
    }

    /// Owned, serializable copy of this view for IPC hosts.
    pub fn to_snapshot(&self, container_width: Option<f64>) -> CarouselSnapshot<T>
    where
        T: Clone,
    {
        CarouselSnapshot {
            items: self.visible.to_vec(),
            index: self.index,
            page_count: self.page_count,
            page_size: self.page_size,
            can_go_previous: self.can_go_previous,
            can_go_next: self.can_go_next,
            show_controls: self.show_controls(),
            indicators: self.indicators(),
            offset_percent: self.offset_percent(),
            offset_px: container_width.map(|w| self.offset_px(w)),
            empty_state: self.empty_state(),
        }
    }
}

/// Serializable render state handed to a frontend.
///
/// ```json
/// {
///   "items": [ ... ], "index": 1, "pageCount": 3, "pageSize": 4,
///   "canGoPrevious": true, "canGoNext": true, "showControls": true,
///   "indicators": [ { "index": 0, "active": false }, ... ],
///   "offsetPercent": 100.0, "offsetPx": 1200.0, "emptyState": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSnapshot<T> {
    pub items: Vec<T>,
    pub index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub show_controls: bool,
    pub indicators: Vec<PageIndicator>,
    pub offset_percent: f64,
    pub offset_px: Option<f64>,
    pub empty_state: Option<EmptyState>,
}

impl<T> CarouselSnapshot<T> {
    /// Converts the visible items, keeping every other field.
    pub fn map_items<U, F>(self, f: F) -> CarouselSnapshot<U>
    where
        F: FnMut(T) -> U,
    {
        CarouselSnapshot {
            items: self.items.into_iter().map(f).collect(),
            index: self.index,
            page_count: self.page_count,
            page_size: self.page_size,
            can_go_previous: self.can_go_previous,
            can_go_next: self.can_go_next,
            show_controls: self.show_controls,
            indicators: self.indicators,
            offset_percent: self.offset_percent,
            offset_px: self.offset_px,
            empty_state: self.empty_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(items: &[u32], index: usize, page_count: usize) -> CarouselView<'_, u32> {
        CarouselView {
            visible: items,
            index,
            page_count,
            page_size: 4,
            can_go_previous: index > 0,
            can_go_next: index + 1 < page_count,
        }
    }

    #[test]
    fn test_single_page_hides_controls() {
        let items = [1, 2, 3];
        let v = view(&items, 0, 1);
        assert!(!v.show_controls());
        assert!(v.indicators().is_empty());
        assert!(v.empty_state().is_none());
    }

    #[test]
    fn test_indicators_flag_active_page() {
        let items = [5, 6, 7, 8];
        let v = view(&items, 1, 3);
        let active: Vec<bool> = v.indicators().iter().map(|d| d.active).collect();
        assert_eq!(active, vec![false, true, false]);
    }

    #[test]
    fn test_offset_is_linear_in_index() {
        let items = [9, 10];
        let v = view(&items, 2, 3);
        assert_eq!(v.offset_px(1200.0), 2400.0);
        assert_eq!(v.offset_percent(), 200.0);
        assert_eq!(v.offset_px(-5.0), 0.0);
        assert_eq!(v.offset_px(f64::NAN), 0.0);
    }

    #[test]
    fn test_empty_view_snapshot() {
        let v = view(&[], 0, 0);
        let snap = v.to_snapshot(Some(800.0));
        assert!(snap.items.is_empty());
        assert!(!snap.show_controls);
        assert!(snap.indicators.is_empty());
        assert!(snap.empty_state.is_some());
        assert_eq!(snap.offset_px, Some(0.0));
    }

    #[test]
    fn test_snapshot_uses_camel_case() {
        let items = [1];
        let json = serde_json::to_value(view(&items, 0, 2).to_snapshot(None)).unwrap();
        assert_eq!(json["pageCount"], 2);
        assert_eq!(json["canGoNext"], true);
        assert!(json["offsetPx"].is_null());
    }

    #[test]
    fn test_map_items_keeps_layout() {
        let items = [3, 4];
        let snap = view(&items, 1, 2).to_snapshot(Some(100.0));
        let mapped = snap.clone().map_items(|n| n.to_string());
        assert_eq!(mapped.items, vec!["3".to_string(), "4".to_string()]);
        assert_eq!(mapped.index, snap.index);
        assert_eq!(mapped.indicators, snap.indicators);
    }
}
