#![forbid(unsafe_code)]

//! Pagination state.
//!
//! [`SliderState`] is the only mutable record of the widget. Every transition
//! reports whether it changed anything so callers can skip redundant renders.

use crate::viewport::ItemsPerView;

/// One step of relative navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Previous,
    Next,
}

/// Result of feeding a new items-per-view value into the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeOutcome {
    /// Layout class did not change; nothing to redraw.
    Unchanged,
    /// Slide count was recomputed. Indicators must be rebuilt.
    Reflowed {
        max_slides: usize,
        /// The current slide was pulled back to stay in range.
        clamped: bool,
    },
}

/// Current slide position over a fixed number of items.
///
/// Invariant: when `total_items > 0`, `current_slide < max_slides`.
/// With no items, `max_slides == 0` and `current_slide == 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderState {
    current_slide: usize,
    items_per_view: ItemsPerView,
    total_items: usize,
    max_slides: usize,
}

/// `ceil(total_items / items_per_view)`.
#[must_use]
pub const fn slide_count(total_items: usize, items_per_view: ItemsPerView) -> usize {
    total_items.div_ceil(items_per_view.count())
}

impl SliderState {
    #[must_use]
    pub const fn new(total_items: usize, items_per_view: ItemsPerView) -> Self {
        Self {
            current_slide: 0,
            items_per_view,
            total_items,
            max_slides: slide_count(total_items, items_per_view),
        }
    }

    #[must_use]
    pub const fn current_slide(&self) -> usize {
        self.current_slide
    }

    #[must_use]
    pub const fn items_per_view(&self) -> ItemsPerView {
        self.items_per_view
    }

    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    #[must_use]
    pub const fn max_slides(&self) -> usize {
        self.max_slides
    }

    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.current_slide == 0
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.current_slide + 1 >= self.max_slides
    }

    /// Move back one slide. Returns `false` at the first slide.
    pub fn previous(&mut self) -> bool {
        if self.current_slide > 0 {
            self.current_slide -= 1;
            true
        } else {
            false
        }
    }

    /// Move forward one slide. Returns `false` at the last slide.
    pub fn next(&mut self) -> bool {
        if self.current_slide + 1 < self.max_slides {
            self.current_slide += 1;
            true
        } else {
            false
        }
    }

    pub fn step(&mut self, step: Step) -> bool {
        match step {
            Step::Previous => self.previous(),
            Step::Next => self.next(),
        }
    }

    /// Jump to `index`.
    ///
    /// Out-of-range (including negative) indices are ignored. Jumping to the
    /// current slide is reported as unchanged.
    pub fn go_to(&mut self, index: i64) -> bool {
        let Ok(index) = usize::try_from(index) else {
            return false;
        };
        if index >= self.max_slides || index == self.current_slide {
            return false;
        }
        self.current_slide = index;
        true
    }

    /// Apply a new layout class.
    pub fn resize(&mut self, items_per_view: ItemsPerView) -> ResizeOutcome {
        if items_per_view == self.items_per_view {
            return ResizeOutcome::Unchanged;
        }
        self.items_per_view = items_per_view;
        self.max_slides = slide_count(self.total_items, items_per_view);

        let clamped = self.max_slides > 0 && self.current_slide >= self.max_slides;
        if clamped {
            self.current_slide = self.max_slides - 1;
        }
        ResizeOutcome::Reflowed {
            max_slides: self.max_slides,
            clamped,
        }
    }

    /// Completion of the slideshow as a fraction in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.max_slides == 0 {
            return 0.0;
        }
        (self.current_slide + 1) as f64 / self.max_slides as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_count_rounds_up() {
        assert_eq!(slide_count(7, ItemsPerView::Three), 3);
        assert_eq!(slide_count(6, ItemsPerView::Three), 2);
        assert_eq!(slide_count(7, ItemsPerView::Two), 4);
        assert_eq!(slide_count(7, ItemsPerView::One), 7);
        assert_eq!(slide_count(1, ItemsPerView::Three), 1);
        assert_eq!(slide_count(0, ItemsPerView::Two), 0);
    }

    #[test]
    fn seven_items_desktop_walkthrough() {
        let mut state = SliderState::new(7, ItemsPerView::Three);
        assert_eq!(state.max_slides(), 3);
        assert_eq!(state.current_slide(), 0);

        assert!(state.next());
        assert!(state.next());
        assert_eq!(state.current_slide(), 2);
        assert!(!state.next());
        assert_eq!(state.current_slide(), 2);
        assert!(state.previous());
        assert_eq!(state.current_slide(), 1);
    }

    #[test]
    fn previous_at_start_is_noop() {
        let mut state = SliderState::new(4, ItemsPerView::One);
        assert!(!state.previous());
        assert_eq!(state.current_slide(), 0);
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut state = SliderState::new(7, ItemsPerView::Three);
        assert!(!state.go_to(-1));
        assert!(!state.go_to(3));
        assert!(!state.go_to(i64::MAX));
        assert_eq!(state.current_slide(), 0);
        assert!(state.go_to(2));
        assert_eq!(state.current_slide(), 2);
    }

    #[test]
    fn go_to_current_reports_unchanged() {
        let mut state = SliderState::new(7, ItemsPerView::Three);
        assert!(state.go_to(1));
        let before = state.clone();
        assert!(!state.go_to(1));
        assert_eq!(state, before);
    }

    #[test]
    fn resize_same_class_is_unchanged() {
        let mut state = SliderState::new(7, ItemsPerView::Three);
        assert_eq!(state.resize(ItemsPerView::Three), ResizeOutcome::Unchanged);
    }

    #[test]
    fn resize_to_narrow_keeps_valid_slide() {
        let mut state = SliderState::new(7, ItemsPerView::Three);
        state.go_to(2);
        let outcome = state.resize(ItemsPerView::One);
        assert_eq!(
            outcome,
            ResizeOutcome::Reflowed {
                max_slides: 7,
                clamped: false
            }
        );
        assert_eq!(state.current_slide(), 2);
    }

    #[test]
    fn resize_to_wide_clamps_slide() {
        let mut state = SliderState::new(7, ItemsPerView::One);
        state.go_to(6);
        let outcome = state.resize(ItemsPerView::Three);
        assert_eq!(
            outcome,
            ResizeOutcome::Reflowed {
                max_slides: 3,
                clamped: true
            }
        );
        assert_eq!(state.current_slide(), 2);
    }

    #[test]
    fn empty_state_never_moves() {
        let mut state = SliderState::new(0, ItemsPerView::Two);
        assert_eq!(state.max_slides(), 0);
        assert!(!state.next());
        assert!(!state.previous());
        assert!(!state.go_to(0));
        assert!(state.is_first());
        assert!(state.is_last());
        assert_eq!(state.progress(), 0.0);
        assert_eq!(
            state.resize(ItemsPerView::One),
            ResizeOutcome::Reflowed {
                max_slides: 0,
                clamped: false
            }
        );
        assert_eq!(state.current_slide(), 0);
    }

    #[test]
    fn progress_fraction() {
        let mut state = SliderState::new(7, ItemsPerView::Three);
        state.go_to(1);
        assert!((state.progress() - 2.0 / 3.0).abs() < f64::EPSILON);
        state.go_to(2);
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn step_dispatches() {
        let mut state = SliderState::new(3, ItemsPerView::One);
        assert!(state.step(Step::Next));
        assert!(state.step(Step::Previous));
        assert!(!state.step(Step::Previous));
    }
}
