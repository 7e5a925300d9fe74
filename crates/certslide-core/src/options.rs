#![forbid(unsafe_code)]

//! Host-supplied configuration.
//!
//! Options arrive from the page as JSON (camelCase keys, every field optional)
//! and are validated once before a slider is mounted. Defaults reproduce the
//! stock page markup.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::SlideGeometry;
use crate::gesture::{DEFAULT_SWIPE_THRESHOLD, SwipeTracker};
use crate::viewport::Breakpoints;

/// Where arrow-key navigation is listened for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyScope {
    /// Any key press on the page, regardless of focus.
    #[default]
    Document,
    /// Only key presses targeting the slide container or its descendants.
    Root,
}

/// DOM ids of the elements the slider binds to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub container: String,
    pub prev_button: String,
    pub next_button: String,
    pub indicators: String,
    pub progress_bar: String,
    pub modal: String,
    pub modal_image: String,
    pub modal_title: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            container: "certificateContainer".into(),
            prev_button: "prevBtn".into(),
            next_button: "nextBtn".into(),
            indicators: "sliderIndicators".into(),
            progress_bar: "progressBar".into(),
            modal: "certificateModal".into(),
            modal_image: "modalCertificateImg".into(),
            modal_title: "certificateModalLabel".into(),
        }
    }
}

impl ElementIds {
    fn named(&self) -> [(&'static str, &str); 8] {
        [
            ("container", self.container.as_str()),
            ("prevButton", self.prev_button.as_str()),
            ("nextButton", self.next_button.as_str()),
            ("indicators", self.indicators.as_str()),
            ("progressBar", self.progress_bar.as_str()),
            ("modal", self.modal.as_str()),
            ("modalImage", self.modal_image.as_str()),
            ("modalTitle", self.modal_title.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderOptions {
    pub ids: ElementIds,
    pub breakpoints: Breakpoints,
    pub geometry: SlideGeometry,
    pub swipe_threshold: f64,
    pub key_scope: KeyScope,
    /// Class given to each indicator dot.
    pub dot_class: String,
    /// Class toggled on the highlighted dot.
    pub active_class: String,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            breakpoints: Breakpoints::default(),
            geometry: SlideGeometry::default(),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            key_scope: KeyScope::default(),
            dot_class: "slider-dot".into(),
            active_class: "active".into(),
        }
    }
}

impl SliderOptions {
    /// Parse and validate options from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, OptionsError> {
        let options: Self =
            serde_json::from_str(json).map_err(|err| OptionsError::Json(err.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json_string(&self) -> Result<String, OptionsError> {
        serde_json::to_string(self).map_err(|err| OptionsError::Json(err.to_string()))
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.breakpoints.is_ordered() {
            return Err(OptionsError::Breakpoints {
                tablet: self.breakpoints.tablet,
                desktop: self.breakpoints.desktop,
            });
        }
        if self.geometry.item_width == 0 {
            return Err(OptionsError::ZeroItemWidth);
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(OptionsError::SwipeThreshold(self.swipe_threshold));
        }
        if let Some((name, _)) = self.ids.named().into_iter().find(|(_, id)| id.is_empty()) {
            return Err(OptionsError::EmptyId(name));
        }
        if self.dot_class.trim().is_empty() || self.dot_class.contains(char::is_whitespace) {
            return Err(OptionsError::ClassName(self.dot_class.clone()));
        }
        if self.active_class.trim().is_empty() || self.active_class.contains(char::is_whitespace) {
            return Err(OptionsError::ClassName(self.active_class.clone()));
        }
        Ok(())
    }

    #[must_use]
    pub fn swipe_tracker(&self) -> SwipeTracker {
        SwipeTracker::new(self.swipe_threshold)
    }
}

/// Rejected slider configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsError {
    /// Input was not a JSON object of the expected shape.
    Json(String),
    Breakpoints { tablet: u32, desktop: u32 },
    ZeroItemWidth,
    SwipeThreshold(f64),
    /// An element id was empty; carries the option name.
    EmptyId(&'static str),
    /// A CSS class name was empty or contained whitespace.
    ClassName(String),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "invalid slider options: {msg}"),
            Self::Breakpoints { tablet, desktop } => write!(
                f,
                "breakpoints must satisfy 0 < tablet < desktop (got tablet={tablet}, desktop={desktop})"
            ),
            Self::ZeroItemWidth => write!(f, "geometry.itemWidth must be non-zero"),
            Self::SwipeThreshold(value) => {
                write!(f, "swipeThreshold must be a finite, non-negative number (got {value})")
            }
            Self::EmptyId(name) => write!(f, "ids.{name} must not be empty"),
            Self::ClassName(class) => write!(f, "invalid CSS class name {class:?}"),
        }
    }
}

impl std::error::Error for OptionsError {}
