//! Parsing support shared by the closed garment attribute enums.

use thiserror::Error;

/// Error returned when a label does not name a known attribute value.
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use wardrobe_core::Category;
///
/// let err = Category::from_str("cape").unwrap_err();
/// assert_eq!(err.to_string(), "unknown category 'cape'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseLabelError {
    /// Attribute family being parsed, e.g. `"category"`.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseLabelError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Normalise a label for case-insensitive matching.
pub(crate) fn normalise(label: &str) -> String {
    label.trim().to_ascii_lowercase()
}
