#![forbid(unsafe_code)]

//! WASM frontend for the certslide carousel.
//!
//! The crate is split along the host boundary:
//! - [`input`], [`controller`], [`view`], [`modal`] and [`harness`] are
//!   host-agnostic and compile (and are tested) natively;
//! - the `wasm` module binds them to the live DOM with `web-sys` and exports
//!   the JS API via `wasm-bindgen`.
//!
//! Page-level exports (`previousSlide`, `nextSlide`, `goToSlide`,
//! `openCertificate`) drive the slider auto-mounted on `DOMContentLoaded`.
//! `new CertificateSlider(options)` creates further independent instances.

pub mod controller;
pub mod harness;
pub mod input;
pub mod modal;
pub mod view;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::CertificateSlider;

pub use controller::{Redraw, SliderController};
pub use input::SliderInput;
pub use modal::{ModalHost, ModalOutcome, open_certificate};
pub use view::SliderView;
