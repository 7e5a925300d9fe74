#![forbid(unsafe_code)]

//! Host-agnostic slider controller.
//!
//! [`SliderController`] owns the pagination state and a [`SliderView`]. Each
//! entry point mutates the state and, only if something changed, pushes the
//! new [`SliderSnapshot`] to the view. The returned [`Redraw`] flags say which
//! view calls were made.

use bitflags::bitflags;
use certslide_core::viewport::width_from_css_px;
use certslide_core::{
    OptionsError, ResizeOutcome, SliderOptions, SliderSnapshot, SliderState, Step, SwipeTracker,
    debug, debug_span, trace,
};

use crate::input::{SliderInput, nav_step_for_key};
use crate::view::SliderView;

bitflags! {
    /// View updates performed by a controller call.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Redraw: u8 {
        /// Indicator dots were rebuilt from scratch.
        const INDICATORS = 0b01;
        /// The snapshot was re-rendered.
        const RENDER     = 0b10;
    }
}

#[derive(Debug)]
pub struct SliderController<V> {
    state: SliderState,
    options: SliderOptions,
    swipe: SwipeTracker,
    view: V,
}

impl<V: SliderView> SliderController<V> {
    /// Validate `options`, classify the viewport, build indicators and render.
    pub fn mount(
        total_items: usize,
        viewport_width: f64,
        options: SliderOptions,
        mut view: V,
    ) -> Result<Self, OptionsError> {
        options.validate()?;
        let _span = debug_span!("slider_mount", total_items, viewport_width).entered();

        let items_per_view = options
            .breakpoints
            .classify(width_from_css_px(viewport_width));
        let state = SliderState::new(total_items, items_per_view);
        debug!(
            ?items_per_view,
            max_slides = state.max_slides(),
            "slider mounted"
        );

        present_layout(&mut view, &SliderSnapshot::from_state(&state, &options.geometry));

        Ok(Self {
            swipe: options.swipe_tracker(),
            state,
            options,
            view,
        })
    }

    #[must_use]
    pub const fn state(&self) -> &SliderState {
        &self.state
    }

    #[must_use]
    pub const fn options(&self) -> &SliderOptions {
        &self.options
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot::from_state(&self.state, &self.options.geometry)
    }

    pub fn previous_slide(&mut self) -> Redraw {
        self.step(Step::Previous)
    }

    pub fn next_slide(&mut self) -> Redraw {
        self.step(Step::Next)
    }

    pub fn step(&mut self, step: Step) -> Redraw {
        let changed = self.state.step(step);
        trace!(?step, changed, current = self.state.current_slide());
        self.render_if(changed)
    }

    /// Jump to a slide. Invalid indices and the current index do nothing.
    pub fn go_to_slide(&mut self, index: i64) -> Redraw {
        let changed = self.state.go_to(index);
        trace!(index, changed, current = self.state.current_slide());
        self.render_if(changed)
    }

    /// Re-classify the viewport. Redraws only when the layout class changes.
    pub fn resize(&mut self, viewport_width: f64) -> Redraw {
        let items_per_view = self
            .options
            .breakpoints
            .classify(width_from_css_px(viewport_width));
        match self.state.resize(items_per_view) {
            ResizeOutcome::Unchanged => Redraw::empty(),
            ResizeOutcome::Reflowed { .. } => {
                let _span = debug_span!("slider_reflow", viewport_width).entered();
                let snapshot = self.snapshot();
                debug!(
                    ?items_per_view,
                    max_slides = snapshot.indicator_count,
                    current = self.state.current_slide(),
                    "slider reflowed"
                );
                present_layout(&mut self.view, &snapshot);
                Redraw::INDICATORS | Redraw::RENDER
            }
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.swipe.begin(x);
    }

    /// Finish a touch; a swipe past the threshold navigates one slide.
    pub fn touch_end(&mut self, x: f64) -> Redraw {
        match self.swipe.end(x) {
            Some(step) => self.step(step),
            None => Redraw::empty(),
        }
    }

    pub fn touch_cancel(&mut self) {
        self.swipe.cancel();
    }

    /// Handle a key press given its DOM `key` and `code`.
    pub fn key(&mut self, dom_key: &str, dom_code: &str) -> Redraw {
        match nav_step_for_key(dom_key, dom_code) {
            Some(step) => self.step(step),
            None => Redraw::empty(),
        }
    }

    pub fn dispatch(&mut self, input: &SliderInput) -> Redraw {
        match *input {
            SliderInput::Key { ref key, ref code } => self.key(key, code),
            SliderInput::TouchStart { x } => {
                self.touch_start(x);
                Redraw::empty()
            }
            SliderInput::TouchEnd { x } => self.touch_end(x),
            SliderInput::TouchCancel => {
                self.touch_cancel();
                Redraw::empty()
            }
            SliderInput::Resize { width } => self.resize(width),
            SliderInput::Previous => self.previous_slide(),
            SliderInput::Next => self.next_slide(),
            SliderInput::GoTo { index } => self.go_to_slide(index),
        }
    }

    /// Dispatch a sequence of inputs, returning the union of their redraws.
    pub fn replay<'a>(&mut self, inputs: impl IntoIterator<Item = &'a SliderInput>) -> Redraw {
        inputs
            .into_iter()
            .fold(Redraw::empty(), |acc, input| acc | self.dispatch(input))
    }

    fn render_if(&mut self, changed: bool) -> Redraw {
        if !changed {
            return Redraw::empty();
        }
        let snapshot = self.snapshot();
        self.view.render(&snapshot);
        Redraw::RENDER
    }
}

/// Rebuild the dots for `snapshot`, then render it.
fn present_layout<V: SliderView>(view: &mut V, snapshot: &SliderSnapshot) {
    view.rebuild_indicators(snapshot.indicator_count);
    view.render(snapshot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{RecordingView, ViewOp};
    use certslide_core::ItemsPerView;
    use pretty_assertions::assert_eq;

    fn mount(total: usize, width: f64) -> SliderController<RecordingView> {
        SliderController::mount(total, width, SliderOptions::default(), RecordingView::default())
            .expect("default options are valid")
    }

    #[test]
    fn mount_builds_indicators_then_renders() {
        let slider = mount(7, 1200.0);
        assert_eq!(slider.state().items_per_view(), ItemsPerView::Three);
        assert_eq!(slider.state().max_slides(), 3);
        let view = slider.view();
        assert_eq!(view.ops.len(), 2);
        assert_eq!(view.ops[0], ViewOp::RebuildIndicators(3));
        assert!(matches!(view.ops[1], ViewOp::Render(_)));
        assert_eq!(view.dots, vec![true, false, false]);
        assert_eq!(view.prev_disabled, Some(true));
        assert_eq!(view.next_disabled, Some(false));
        assert_eq!(view.transform.as_deref(), Some("translateX(0px)"));
    }

    #[test]
    fn mount_rejects_invalid_options() {
        let mut options = SliderOptions::default();
        options.geometry.item_width = 0;
        let err = SliderController::mount(3, 800.0, options, RecordingView::default()).unwrap_err();
        assert_eq!(err, OptionsError::ZeroItemWidth);
    }

    #[test]
    fn navigation_walkthrough() {
        let mut slider = mount(7, 1200.0);
        assert_eq!(slider.next_slide(), Redraw::RENDER);
        assert_eq!(slider.next_slide(), Redraw::RENDER);
        assert_eq!(slider.state().current_slide(), 2);
        assert_eq!(slider.next_slide(), Redraw::empty());
        assert_eq!(slider.state().current_slide(), 2);
        assert_eq!(slider.view().next_disabled, Some(true));
        assert_eq!(slider.previous_slide(), Redraw::RENDER);
        assert_eq!(slider.state().current_slide(), 1);
        assert_eq!(slider.view().active_dot(), Some(1));
        assert_eq!(
            slider.view().progress_width.as_deref(),
            Some("66.66666666666666%")
        );
    }

    #[test]
    fn noops_do_not_render() {
        let mut slider = mount(7, 1200.0);
        slider.view_mut().clear_ops();
        assert_eq!(slider.previous_slide(), Redraw::empty());
        assert_eq!(slider.go_to_slide(0), Redraw::empty());
        assert_eq!(slider.go_to_slide(-1), Redraw::empty());
        assert_eq!(slider.go_to_slide(3), Redraw::empty());
        assert!(slider.view().ops.is_empty());
    }

    #[test]
    fn go_to_slide_renders_once() {
        let mut slider = mount(7, 1200.0);
        slider.view_mut().clear_ops();
        assert_eq!(slider.go_to_slide(2), Redraw::RENDER);
        assert_eq!(slider.view().render_count(), 1);
        assert_eq!(slider.view().transform.as_deref(), Some("translateX(-2064px)"));
    }

    #[test]
    fn resize_within_class_is_silent() {
        let mut slider = mount(7, 1200.0);
        slider.view_mut().clear_ops();
        assert_eq!(slider.resize(1100.0), Redraw::empty());
        assert!(slider.view().ops.is_empty());
    }

    #[test]
    fn resize_desktop_to_mobile_keeps_slide() {
        let mut slider = mount(7, 1200.0);
        slider.go_to_slide(2);
        let redraw = slider.resize(500.0);
        assert_eq!(redraw, Redraw::INDICATORS | Redraw::RENDER);
        assert_eq!(slider.state().current_slide(), 2);
        assert_eq!(slider.state().max_slides(), 7);
        assert_eq!(slider.view().dots.len(), 7);
        assert_eq!(slider.view().active_dot(), Some(2));
    }

    #[test]
    fn resize_mobile_to_desktop_clamps() {
        let mut slider = mount(7, 500.0);
        slider.go_to_slide(6);
        slider.resize(1200.0);
        assert_eq!(slider.state().current_slide(), 2);
        assert_eq!(slider.view().dots, vec![false, false, true]);
        assert_eq!(slider.view().next_disabled, Some(true));
    }

    #[test]
    fn reflow_rebuilds_dots_from_rendered_snapshot() {
        let mut slider = mount(7, 500.0);
        slider.go_to_slide(6);
        slider.view_mut().clear_ops();
        slider.resize(800.0);
        let ops = &slider.view().ops;
        assert_eq!(ops.len(), 2);
        let ViewOp::Render(snapshot) = &ops[1] else {
            panic!("expected a render after the rebuild, got {ops:?}");
        };
        assert_eq!(ops[0], ViewOp::RebuildIndicators(snapshot.indicator_count));
        assert_eq!(snapshot.indicator_count, 4);
        assert_eq!(snapshot.active_indicator, Some(3));
    }

    #[test]
    fn swipe_navigates() {
        let mut slider = mount(7, 500.0);
        slider.touch_start(300.0);
        assert_eq!(slider.touch_end(200.0), Redraw::RENDER);
        assert_eq!(slider.state().current_slide(), 1);

        slider.touch_start(200.0);
        assert_eq!(slider.touch_end(180.0), Redraw::empty());
        assert_eq!(slider.state().current_slide(), 1);

        slider.touch_start(100.0);
        assert_eq!(slider.touch_end(260.0), Redraw::RENDER);
        assert_eq!(slider.state().current_slide(), 0);
    }

    #[test]
    fn cancelled_touch_does_not_swipe() {
        let mut slider = mount(7, 500.0);
        slider.touch_start(300.0);
        slider.touch_cancel();
        assert_eq!(slider.touch_end(0.0), Redraw::empty());
        assert_eq!(slider.state().current_slide(), 0);
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut slider = mount(7, 800.0);
        assert_eq!(slider.key("ArrowRight", "ArrowRight"), Redraw::RENDER);
        assert_eq!(slider.key("ArrowRight", "ArrowRight"), Redraw::RENDER);
        assert_eq!(slider.key("ArrowLeft", "ArrowLeft"), Redraw::RENDER);
        assert_eq!(slider.key("Enter", "Enter"), Redraw::empty());
        assert_eq!(slider.state().current_slide(), 1);
    }

    #[test]
    fn empty_container_renders_disabled() {
        let mut slider = mount(0, 1200.0);
        assert!(slider.view().dots.is_empty());
        assert_eq!(slider.view().prev_disabled, Some(true));
        assert_eq!(slider.view().next_disabled, Some(true));
        assert_eq!(slider.view().progress_width.as_deref(), Some("0%"));
        assert_eq!(slider.next_slide(), Redraw::empty());
        assert_eq!(slider.resize(400.0), Redraw::INDICATORS | Redraw::RENDER);
        assert_eq!(slider.state().current_slide(), 0);
    }

    #[test]
    fn missing_optional_elements_are_skipped() {
        let mut slider = SliderController::mount(
            5,
            500.0,
            SliderOptions::default(),
            RecordingView::container_only(),
        )
        .expect("valid");
        assert_eq!(slider.next_slide(), Redraw::RENDER);
        let view = slider.view();
        assert_eq!(view.transform.as_deref(), Some("translateX(-344px)"));
        assert!(view.dots.is_empty());
        assert_eq!(view.prev_disabled, None);
        assert_eq!(view.progress_width, None);
    }

    #[test]
    fn custom_breakpoints_and_geometry() {
        let options = SliderOptions::from_json_str(
            r#"{"breakpoints":{"tablet":500,"desktop":900},"geometry":{"itemWidth":200,"gap":10}}"#,
        )
        .expect("valid");
        let mut slider =
            SliderController::mount(6, 600.0, options, RecordingView::default()).expect("valid");
        assert_eq!(slider.state().items_per_view(), ItemsPerView::Two);
        slider.next_slide();
        assert_eq!(slider.view().transform.as_deref(), Some("translateX(-420px)"));
    }

    #[test]
    fn replay_unions_redraws() {
        let mut slider = mount(7, 1200.0);
        let inputs = [
            SliderInput::Next,
            SliderInput::Resize { width: 500.0 },
            SliderInput::key("ArrowRight"),
        ];
        let redraw = slider.replay(&inputs);
        assert_eq!(redraw, Redraw::INDICATORS | Redraw::RENDER);
        assert_eq!(slider.state().current_slide(), 2);
    }
}
