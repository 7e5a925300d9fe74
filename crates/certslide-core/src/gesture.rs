#![forbid(unsafe_code)]

//! Horizontal swipe recognition.
//!
//! Only the x coordinate of the first touch at start and the first changed
//! touch at end matter. Movement in between is ignored.

use crate::state::Step;

/// Minimum horizontal travel (CSS px) for a touch to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Tracks one touch sequence at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Record the touch-start position. A second start replaces the first.
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Drop any in-flight touch (e.g. on `touchcancel`).
    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Finish the touch sequence at `end_x`.
    ///
    /// Returns the step to take, or `None` for a tap (travel at or below the
    /// threshold) or a touch-end with no recorded start.
    pub fn end(&mut self, end_x: f64) -> Option<Step> {
        let start_x = self.start_x.take()?;
        classify_swipe(start_x, end_x, self.threshold)
    }
}

/// Swiping left (finger moves toward smaller x) advances; swiping right retreats.
#[must_use]
pub fn classify_swipe(start_x: f64, end_x: f64, threshold: f64) -> Option<Step> {
    let diff = start_x - end_x;
    if diff.abs() <= threshold {
        return None;
    }
    if diff > 0.0 {
        Some(Step::Next)
    } else {
        Some(Step::Previous)
    }
}
