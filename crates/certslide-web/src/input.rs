#![forbid(unsafe_code)]

//! Deterministic, JSON-friendly input schema for `certslide-web`.
//!
//! The DOM binding reduces every browser event it cares about to a
//! [`SliderInput`] before handing it to the controller. The same values can
//! be written to and replayed from JSON traces, which is how the controller
//! is exercised natively.

use certslide_core::Step;
use serde::{Deserialize, Serialize};

/// Normalized slider input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SliderInput {
    /// A key press, carrying the DOM `key` and `code` strings.
    Key {
        key: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        code: String,
    },
    /// First touch went down at client x.
    TouchStart { x: f64 },
    /// First changed touch lifted at client x.
    TouchEnd { x: f64 },
    TouchCancel,
    /// Viewport width changed (CSS px, as reported by `innerWidth`).
    Resize { width: f64 },
    /// Previous button (or page-level `previousSlide()`).
    Previous,
    /// Next button (or page-level `nextSlide()`).
    Next,
    /// Indicator dot (or page-level `goToSlide(index)`).
    GoTo { index: i64 },
}

impl SliderInput {
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            code: String::new(),
        }
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// Parse a JSON-lines trace, skipping blank lines.
pub fn parse_trace(trace: &str) -> Result<Vec<SliderInput>, serde_json::Error> {
    trace
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(SliderInput::from_json_str)
        .collect()
}

/// Map a DOM key press onto a navigation step.
///
/// Only the horizontal arrows navigate. Modifier state is ignored.
#[must_use]
pub fn nav_step_for_key(dom_key: &str, dom_code: &str) -> Option<Step> {
    match dom_key {
        "ArrowLeft" | "Left" => Some(Step::Previous),
        "ArrowRight" | "Right" => Some(Step::Next),
        // Fallback to DOM `code` when `key` is unidentified.
        "" | "Unidentified" => match dom_code {
            "ArrowLeft" => Some(Step::Previous),
            "ArrowRight" => Some(Step::Next),
            _ => None,
        },
        _ => None,
    }
}

/// Whether a `document.readyState` value means the DOM is still being parsed.
#[must_use]
pub fn document_is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn arrows_map_to_steps() {
        assert_eq!(nav_step_for_key("ArrowLeft", "ArrowLeft"), Some(Step::Previous));
        assert_eq!(nav_step_for_key("ArrowRight", "ArrowRight"), Some(Step::Next));
    }

    #[test]
    fn legacy_key_names() {
        assert_eq!(nav_step_for_key("Left", ""), Some(Step::Previous));
        assert_eq!(nav_step_for_key("Right", ""), Some(Step::Next));
    }

    #[test]
    fn unidentified_key_falls_back_to_code() {
        assert_eq!(nav_step_for_key("Unidentified", "ArrowRight"), Some(Step::Next));
        assert_eq!(nav_step_for_key("", "ArrowLeft"), Some(Step::Previous));
        assert_eq!(nav_step_for_key("Unidentified", "KeyA"), None);
    }

    #[test]
    fn other_keys_are_ignored() {
        for key in ["ArrowUp", "ArrowDown", "Enter", "a", " ", "Tab"] {
            assert_eq!(nav_step_for_key(key, key), None, "key {key:?}");
        }
        // `code` is not consulted when `key` is known.
        assert_eq!(nav_step_for_key("h", "ArrowLeft"), None);
    }

    #[test]
    fn key_json_is_stable() {
        let json = SliderInput::key("ArrowRight").to_json_string().expect("serialize");
        assert_eq!(json, r#"{"kind":"key","key":"ArrowRight"}"#);
    }

    #[test]
    fn touch_and_goto_json() {
        assert_eq!(
            SliderInput::from_json_str(r#"{"kind":"touch_start","x":300}"#).expect("parse"),
            SliderInput::TouchStart { x: 300.0 }
        );
        assert_eq!(
            SliderInput::from_json_str(r#"{"kind":"go_to","index":-1}"#).expect("parse"),
            SliderInput::GoTo { index: -1 }
        );
        assert_eq!(
            SliderInput::from_json_str(r#"{"kind":"touch_cancel"}"#).expect("parse"),
            SliderInput::TouchCancel
        );
    }

    #[test]
    fn trace_skips_blank_lines() {
        let trace = r#"
            {"kind":"resize","width":1200}

            {"kind":"next"}
        "#;
        assert_eq!(
            parse_trace(trace).expect("parse"),
            vec![SliderInput::Resize { width: 1200.0 }, SliderInput::Next]
        );
    }

    #[test]
    fn only_loading_ready_state_defers_mount() {
        assert!(document_is_loading("loading"));
        assert!(!document_is_loading("interactive"));
        assert!(!document_is_loading("complete"));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(SliderInput::from_json_str(r#"{"kind":"wheel","dy":3}"#).is_err());
    }
}
