#![forbid(unsafe_code)]

//! Presentation seam between the controller and the page.

use certslide_core::SliderSnapshot;

/// Applies slider state to a concrete presentation layer.
///
/// Implementations skip any part whose element is missing. Neither method can
/// fail.
pub trait SliderView {
    /// Replace every indicator dot with `count` fresh, inactive dots.
    fn rebuild_indicators(&mut self, count: usize);

    /// Draw track offset, button enablement, active dot and progress.
    fn render(&mut self, snapshot: &SliderSnapshot);
}

impl<V: SliderView + ?Sized> SliderView for &mut V {
    fn rebuild_indicators(&mut self, count: usize) {
        (**self).rebuild_indicators(count);
    }

    fn render(&mut self, snapshot: &SliderSnapshot) {
        (**self).render(snapshot);
    }
}
