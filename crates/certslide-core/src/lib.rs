#![forbid(unsafe_code)]

//! Host-independent core of the certslide carousel.
//!
//! Everything here is plain data and pure transitions: viewport
//! classification, pagination state, the render snapshot derived from it, and
//! touch-swipe interpretation. The DOM binding lives in `certslide-web` and only
//! ever applies a [`render::SliderSnapshot`] to the page.

pub mod geometry;
pub mod gesture;
pub mod logging;
pub mod options;
pub mod render;
pub mod state;
pub mod viewport;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn};

pub use geometry::SlideGeometry;
pub use gesture::{SwipeTracker, DEFAULT_SWIPE_THRESHOLD};
pub use options::{ElementIds, KeyScope, OptionsError, SliderOptions};
pub use render::SliderSnapshot;
pub use state::{ResizeOutcome, SliderState, Step};
pub use viewport::{Breakpoints, ItemsPerView};
