#![forbid(unsafe_code)]

//! Single-image modal ("certificate" preview).

use certslide_core::debug;

/// A modal dialog with an image slot, a title slot and a way to show it.
pub trait ModalHost {
    /// Set the image source. Returns `false` when the image slot is missing.
    fn set_image_source(&mut self, src: &str) -> bool;

    /// Set the title text. Returns `false` when the title slot is missing.
    fn set_title(&mut self, title: &str) -> bool;

    /// Ask the dialog facility to present the modal.
    ///
    /// Returns `false` when the modal root or the facility is unavailable.
    fn show(&mut self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalOutcome {
    Shown,
    /// Contents were updated but the modal could not be presented.
    ContentOnly,
}

/// Fill the modal with `image_source` and `title`, then show it.
///
/// Missing slots and a missing dialog facility are skipped silently; the
/// remaining steps still run.
pub fn open_certificate<M: ModalHost + ?Sized>(
    host: &mut M,
    image_source: &str,
    title: &str,
) -> ModalOutcome {
    if !host.set_image_source(image_source) {
        debug!("modal image slot missing");
    }
    if !host.set_title(title) {
        debug!("modal title slot missing");
    }
    if host.show() {
        ModalOutcome::Shown
    } else {
        debug!(title, "modal content updated without presenting");
        ModalOutcome::ContentOnly
    }
}
