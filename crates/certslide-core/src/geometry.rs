#![forbid(unsafe_code)]

//! Fixed slide geometry shared with the page stylesheet.
//!
//! The offset of the track is computed from these numbers, not measured from
//! the DOM, so they must match the CSS item width and gap.

use serde::{Deserialize, Serialize};

/// Default rendered width of one slide item, in CSS px.
pub const DEFAULT_ITEM_WIDTH: u32 = 320;
/// Default horizontal gap between slide items, in CSS px.
pub const DEFAULT_ITEM_GAP: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlideGeometry {
    pub item_width: u32,
    pub gap: u32,
}

impl Default for SlideGeometry {
    fn default() -> Self {
        Self {
            item_width: DEFAULT_ITEM_WIDTH,
            gap: DEFAULT_ITEM_GAP,
        }
    }
}

impl SlideGeometry {
    /// Horizontal advance of a single item (width plus trailing gap).
    #[must_use]
    pub const fn stride(&self) -> u32 {
        self.item_width.saturating_add(self.gap)
    }

    /// Track translation for showing `slide` with `items_per_view` items each.
    ///
    /// Always `<= 0`: the track moves left as the slide index grows.
    #[must_use]
    pub fn offset_px(&self, slide: usize, items_per_view: usize) -> i64 {
        let advance = (slide as i64)
            .saturating_mul(i64::from(self.stride()))
            .saturating_mul(items_per_view as i64);
        advance.saturating_neg()
    }
}
