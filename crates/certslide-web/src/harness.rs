#![forbid(unsafe_code)]

//! In-memory view and modal used to drive the controller without a browser.
//!
//! [`RecordingView`] keeps both an operation log and a simulated DOM (dot
//! classes, track transform, button state, progress width), so tests can
//! assert either on what was called or on what the page would look like.
//!
//! # Usage
//!
//! ```
//! use certslide_core::SliderOptions;
//! use certslide_web::controller::SliderController;
//! use certslide_web::harness::RecordingView;
//!
//! let mut slider =
//!     SliderController::mount(7, 1200.0, SliderOptions::default(), RecordingView::default())
//!         .expect("valid options");
//! slider.next_slide();
//! assert_eq!(slider.view().transform.as_deref(), Some("translateX(-1032px)"));
//! ```

use certslide_core::SliderSnapshot;

use crate::modal::ModalHost;
use crate::view::SliderView;

/// One call made on a [`SliderView`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewOp {
    RebuildIndicators(usize),
    Render(SliderSnapshot),
}

/// Recording [`SliderView`] with a simulated page.
///
/// The `has_*` switches emulate optional elements being absent from the page;
/// the corresponding simulated fields are then never written.
#[derive(Debug, Clone)]
pub struct RecordingView {
    pub ops: Vec<ViewOp>,
    /// Active flag per indicator dot, in document order.
    pub dots: Vec<bool>,
    pub transform: Option<String>,
    pub prev_disabled: Option<bool>,
    pub next_disabled: Option<bool>,
    pub progress_width: Option<String>,
    pub has_buttons: bool,
    pub has_indicators: bool,
    pub has_progress: bool,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            dots: Vec::new(),
            transform: None,
            prev_disabled: None,
            next_disabled: None,
            progress_width: None,
            has_buttons: true,
            has_indicators: true,
            has_progress: true,
        }
    }
}

impl RecordingView {
    /// A page with only the slide container present.
    #[must_use]
    pub fn container_only() -> Self {
        Self {
            has_buttons: false,
            has_indicators: false,
            has_progress: false,
            ..Self::default()
        }
    }

    /// Index of the dot currently carrying the active class.
    #[must_use]
    pub fn active_dot(&self) -> Option<usize> {
        self.dots.iter().position(|active| *active)
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, ViewOp::Render(_)))
            .count()
    }

    #[must_use]
    pub fn rebuild_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, ViewOp::RebuildIndicators(_)))
            .count()
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl SliderView for RecordingView {
    fn rebuild_indicators(&mut self, count: usize) {
        self.ops.push(ViewOp::RebuildIndicators(count));
        if self.has_indicators {
            self.dots = vec![false; count];
        }
    }

    fn render(&mut self, snapshot: &SliderSnapshot) {
        self.ops.push(ViewOp::Render(snapshot.clone()));
        self.transform = Some(snapshot.transform_css());
        if self.has_buttons {
            self.prev_disabled = Some(snapshot.prev_disabled);
            self.next_disabled = Some(snapshot.next_disabled);
        }
        if self.has_indicators {
            for (index, active) in self.dots.iter_mut().enumerate() {
                *active = snapshot.is_active(index);
            }
        }
        if self.has_progress {
            self.progress_width = Some(snapshot.progress_css());
        }
    }
}

/// Recording [`ModalHost`].
#[derive(Debug, Clone, Default)]
pub struct RecordingModal {
    pub image_source: Option<String>,
    pub title: Option<String>,
    pub show_count: usize,
    pub has_image_slot: bool,
    pub has_title_slot: bool,
    /// Modal root present and dialog facility loaded.
    pub has_facility: bool,
}

impl RecordingModal {
    /// A modal with both slots and a working dialog facility.
    #[must_use]
    pub fn complete() -> Self {
        Self {
            has_image_slot: true,
            has_title_slot: true,
            has_facility: true,
            ..Self::default()
        }
    }
}

impl ModalHost for RecordingModal {
    fn set_image_source(&mut self, src: &str) -> bool {
        if self.has_image_slot {
            self.image_source = Some(src.to_owned());
        }
        self.has_image_slot
    }

    fn set_title(&mut self, title: &str) -> bool {
        if self.has_title_slot {
            self.title = Some(title.to_owned());
        }
        self.has_title_slot
    }

    fn show(&mut self) -> bool {
        if self.has_facility {
            self.show_count += 1;
        }
        self.has_facility
    }
}
