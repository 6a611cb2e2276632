//! Garment styles.

use crate::label::{ParseLabelError, normalise};

/// Closed set of garment styles. Missing styles default to
/// [`Style::Casual`]; unrecognised labels deserialise to [`Style::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Style {
    /// Everyday wear.
    #[default]
    Casual,
    /// Ceremony and evening wear.
    Formal,
    /// Athletic wear.
    Sport,
    /// Office wear.
    Business,
    /// Going-out wear.
    Party,
    /// Second-hand or retro pieces.
    Vintage,
    /// Streetwear.
    Street,
    /// Anything else.
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

impl Style {
    /// Every style, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Casual,
        Self::Formal,
        Self::Sport,
        Self::Business,
        Self::Party,
        Self::Vintage,
        Self::Street,
        Self::Other,
    ];

    /// Return the style as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use wardrobe_core::Style;
    ///
    /// assert_eq!(Style::Business.as_str(), "business");
    /// assert_eq!(Style::Street.to_string(), "street");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Formal => "formal",
            Self::Sport => "sport",
            Self::Business => "business",
            Self::Party => "party",
            Self::Vintage => "vintage",
            Self::Street => "street",
            Self::Other => "other",
        }
    }

    /// Position of the style in [`Style::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Style {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = normalise(s);
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == label)
            .ok_or_else(|| ParseLabelError::new("style", s))
    }
}
