//! Primary garment colors.
//!
//! Unrecognised or missing colors collapse to [`Color::Unknown`], which the
//! scorer treats with a moderate default rather than an error.

use crate::label::{ParseLabelError, normalise};

/// Closed set of named colors, including an `Unknown` fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Color {
    /// Black.
    Black,
    /// White.
    White,
    /// Gray.
    Gray,
    /// Brown.
    Brown,
    /// Beige.
    Beige,
    /// Red.
    Red,
    /// Pink.
    Pink,
    /// Orange.
    Orange,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Purple.
    Purple,
    /// Navy.
    Navy,
    /// Cream.
    Cream,
    /// Color was not recorded or not recognised.
    #[default]
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl Color {
    /// Every named color, excluding [`Color::Unknown`], in table order.
    pub const PALETTE: [Self; 14] = [
        Self::Black,
        Self::White,
        Self::Gray,
        Self::Brown,
        Self::Beige,
        Self::Red,
        Self::Pink,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::Navy,
        Self::Cream,
    ];

    /// Return the color as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use wardrobe_core::Color;
    ///
    /// assert_eq!(Color::Navy.as_str(), "navy");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Gray => "gray",
            Self::Brown => "brown",
            Self::Beige => "beige",
            Self::Red => "red",
            Self::Pink => "pink",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Navy => "navy",
            Self::Cream => "cream",
            Self::Unknown => "unknown",
        }
    }

    /// Position of the color in [`Color::PALETTE`], or `None` for
    /// [`Color::Unknown`].
    #[must_use]
    pub const fn palette_index(self) -> Option<usize> {
        match self {
            Self::Black => Some(0),
            Self::White => Some(1),
            Self::Gray => Some(2),
            Self::Brown => Some(3),
            Self::Beige => Some(4),
            Self::Red => Some(5),
            Self::Pink => Some(6),
            Self::Orange => Some(7),
            Self::Yellow => Some(8),
            Self::Green => Some(9),
            Self::Blue => Some(10),
            Self::Purple => Some(11),
            Self::Navy => Some(12),
            Self::Cream => Some(13),
            Self::Unknown => None,
        }
    }

    /// Report whether the color is a recorded, named color.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Color {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = normalise(s);
        if label == Self::Unknown.as_str() {
            return Ok(Self::Unknown);
        }
        Self::PALETTE
            .into_iter()
            .find(|color| color.as_str() == label)
            .ok_or_else(|| ParseLabelError::new("color", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn palette_index_matches_position() {
        for (position, color) in Color::PALETTE.into_iter().enumerate() {
            assert_eq!(color.palette_index(), Some(position));
        }
        assert_eq!(Color::Unknown.palette_index(), None);
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(Color::default(), Color::Unknown);
    }

    #[test]
    fn parsing_rejects_unlisted_colors() {
        let err = Color::from_str("teal").unwrap_err();
        assert_eq!(err.kind, "color");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unrecognised_labels_deserialise_to_unknown() {
        let color: Color = serde_json::from_str("\"teal\"").expect("fallback variant");
        assert_eq!(color, Color::Unknown);
    }
}
