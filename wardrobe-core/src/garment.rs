//! Catalogued garments.
//!
//! A [`Garment`] is read-only input to the outfit engine. Only the category is
//! mandatory; color and style fall back to their defaults so incomplete records
//! still take part in generation.

use crate::{Category, Color, Occasion, Season, Style};

/// Opaque, comparable garment identifier.
///
/// Identifiers are compared by value, so deduplication works regardless of
/// how garments are held in memory.
///
/// # Examples
/// ```
/// use wardrobe_core::GarmentId;
///
/// let id = GarmentId::new("64f0c2");
/// assert_eq!(id.as_str(), "64f0c2");
/// assert_eq!(id, GarmentId::from("64f0c2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct GarmentId(String);

impl GarmentId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GarmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GarmentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for GarmentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A single catalogued clothing or accessory item.
///
/// # Examples
/// ```
/// use wardrobe_core::{Category, Color, Garment, Style};
///
/// let garment = Garment::new("g1", Category::Top)
///     .with_color(Color::Black)
///     .with_style(Style::Formal);
/// assert_eq!(garment.category, Category::Top);
/// assert!(garment.occasions.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Garment {
    /// Unique identifier.
    pub id: GarmentId,
    /// Role of the garment in an outfit.
    pub category: Category,
    /// Primary color.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Color,
    /// Style family.
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: Style,
    /// Recommended season.
    #[cfg_attr(feature = "serde", serde(default))]
    pub season: Season,
    /// Occasions the garment suits. Empty means any occasion.
    #[cfg_attr(feature = "serde", serde(default))]
    pub occasions: Vec<Occasion>,
    /// Free-form user tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    /// Display name.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,
    /// Brand label.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub brand: Option<String>,
    /// Location of the garment photo.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub image_url: Option<String>,
    /// Whether the user marked the garment as a favourite.
    #[cfg_attr(feature = "serde", serde(default))]
    pub favorite: bool,
}

impl Garment {
    /// Construct a garment with default color, style and season.
    #[must_use]
    pub fn new(id: impl Into<GarmentId>, category: Category) -> Self {
        Self {
            id: id.into(),
            category,
            color: Color::default(),
            style: Style::default(),
            season: Season::default(),
            occasions: Vec::new(),
            tags: Vec::new(),
            name: None,
            brand: None,
            image_url: None,
            favorite: false,
        }
    }

    /// Set the primary color, returning `self` for chaining.
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the style, returning `self` for chaining.
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the season, returning `self` for chaining.
    #[must_use]
    pub const fn with_season(mut self, season: Season) -> Self {
        self.season = season;
        self
    }

    /// Add an occasion, returning `self` for chaining.
    #[must_use]
    pub fn with_occasion(mut self, occasion: Occasion) -> Self {
        self.occasions.push(occasion);
        self
    }

    /// Report whether the garment may be worn for `occasion`.
    ///
    /// Garments without occasion tags suit every occasion.
    ///
    /// # Examples
    /// ```
    /// use wardrobe_core::{Category, Garment, Occasion};
    ///
    /// # fn main() -> Result<(), wardrobe_core::OccasionError> {
    /// let work = Occasion::new("work")?;
    /// let party = Occasion::new("party")?;
    /// let blazer = Garment::new("g1", Category::Outerwear).with_occasion(work.clone());
    /// assert!(blazer.suits_occasion(&work));
    /// assert!(!blazer.suits_occasion(&party));
    /// assert!(Garment::new("g2", Category::Top).suits_occasion(&party));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn suits_occasion(&self, occasion: &Occasion) -> bool {
        self.occasions.is_empty() || self.occasions.contains(occasion)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn missing_attributes_take_defaults() {
        let garment: Garment =
            serde_json::from_str(r#"{"id":"g1","category":"shoes"}"#).expect("valid garment");
        assert_eq!(garment.color, Color::Unknown);
        assert_eq!(garment.style, Style::Casual);
        assert_eq!(garment.season, Season::AllSeason);
        assert!(garment.occasions.is_empty());
    }

    #[rstest]
    fn missing_category_is_rejected() {
        let result = serde_json::from_str::<Garment>(r#"{"id":"g1","color":"red"}"#);
        assert!(result.is_err());
    }

    #[rstest]
    fn occasions_are_normalised_on_read() {
        let garment: Garment = serde_json::from_str(
            r#"{"id":"g1","category":"top","occasions":["Work"],"imageUrl":"/u/g1.jpg"}"#,
        )
        .expect("valid garment");
        let work = Occasion::new("work").expect("valid occasion");
        assert!(garment.suits_occasion(&work));
        assert_eq!(garment.image_url.as_deref(), Some("/u/g1.jpg"));
    }
}
