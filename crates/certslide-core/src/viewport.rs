#![forbid(unsafe_code)]

//! Responsive classification of the viewport into items-per-slide.

use serde::{Deserialize, Serialize};

/// Default width (px) at which two items fit side by side.
pub const DEFAULT_TABLET_BREAKPOINT: u32 = 768;
/// Default width (px) at which three items fit side by side.
pub const DEFAULT_DESKTOP_BREAKPOINT: u32 = 1024;

/// How many slide items are visible at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemsPerView {
    One,
    Two,
    Three,
}

impl ItemsPerView {
    /// All variants, narrowest first.
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Width thresholds separating the mobile, tablet and desktop layouts.
///
/// A width strictly below `tablet` shows one item, a width in
/// `tablet..desktop` shows two, anything wider shows three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Breakpoints {
    pub tablet: u32,
    pub desktop: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet: DEFAULT_TABLET_BREAKPOINT,
            desktop: DEFAULT_DESKTOP_BREAKPOINT,
        }
    }
}

impl Breakpoints {
    /// Classify a viewport width.
    #[must_use]
    pub const fn classify(&self, width: u32) -> ItemsPerView {
        if width < self.tablet {
            ItemsPerView::One
        } else if width < self.desktop {
            ItemsPerView::Two
        } else {
            ItemsPerView::Three
        }
    }

    /// Breakpoints are usable only when strictly increasing and non-zero.
    #[must_use]
    pub const fn is_ordered(&self) -> bool {
        self.tablet > 0 && self.tablet < self.desktop
    }
}

/// Convert a host-reported width (CSS px, possibly fractional) to whole pixels.
///
/// Negative and NaN widths collapse to `0`; oversized widths saturate.
#[must_use]
pub fn width_from_css_px(width: f64) -> u32 {
    // `as` saturates and maps NaN to 0.
    width as u32
}
