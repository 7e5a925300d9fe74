#![forbid(unsafe_code)]

//! Render snapshot: everything the view needs to draw one frame of the slider.
//!
//! The four parts (track offset, button enablement, active indicator, progress)
//! are independent. A view may apply them in any order.

use crate::geometry::SlideGeometry;
use crate::state::SliderState;

#[derive(Debug, Clone, PartialEq)]
pub struct SliderSnapshot {
    /// Horizontal translation of the slide track, in CSS px.
    pub offset_px: i64,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    /// Number of indicator dots that should exist.
    pub indicator_count: usize,
    /// Dot to highlight, `None` when there are no slides.
    pub active_indicator: Option<usize>,
    /// Progress bar fill in `0.0..=100.0`.
    pub progress_percent: f64,
}

impl SliderSnapshot {
    #[must_use]
    pub fn from_state(state: &SliderState, geometry: &SlideGeometry) -> Self {
        let max_slides = state.max_slides();
        Self {
            offset_px: geometry.offset_px(state.current_slide(), state.items_per_view().count()),
            prev_disabled: state.is_first(),
            next_disabled: state.is_last(),
            indicator_count: max_slides,
            active_indicator: (max_slides > 0).then_some(state.current_slide()),
            progress_percent: state.progress() * 100.0,
        }
    }

    /// CSS `transform` value for the track, e.g. `translateX(-1032px)`.
    #[must_use]
    pub fn transform_css(&self) -> String {
        format!("translateX({}px)", self.offset_px)
    }

    /// CSS `width` value for the progress bar, e.g. `66.66666666666666%`.
    #[must_use]
    pub fn progress_css(&self) -> String {
        format!("{}%", self.progress_percent)
    }

    /// Whether the dot at `index` is the highlighted one.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active_indicator == Some(index)
    }
}
