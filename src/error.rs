//! Error types for page integration
//!
//! The selection logic itself is infallible; everything here is a page
//! precondition (missing mount points, no browser globals) surfaced to
//! JavaScript when the picker is constructed or bound.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Page integration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    /// No global `window` object (not running in a browser context)
    #[error("No global window object")]
    NoWindow,

    /// `window` exists but has no document
    #[error("No document on window")]
    NoDocument,

    /// A bound target id is missing from the page
    #[error("Missing page target: #{0}")]
    MissingTarget(String),
}

impl From<PickerError> for JsValue {
    fn from(err: PickerError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
