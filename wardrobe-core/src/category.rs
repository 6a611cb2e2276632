//! Garment categories describing the role an item plays in an outfit.
//!
//! # Examples
//! ```
//! use wardrobe_core::Category;
//!
//! assert_eq!(Category::Top.as_str(), "top");
//! assert!(Category::Jewelry.is_accessory());
//! ```

use crate::label::{ParseLabelError, normalise};

/// Closed classification of a garment's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Category {
    /// Shirts, blouses, knitwear.
    Top,
    /// Trousers, skirts, shorts.
    Bottom,
    /// One-piece garments that replace a top and bottom.
    Dress,
    /// Jackets and coats.
    Outerwear,
    /// Footwear.
    Shoes,
    /// Belts, scarves, hats and similar.
    Accessories,
    /// Handbags and backpacks.
    Bag,
    /// Rings, necklaces, watches.
    Jewelry,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Top,
        Self::Bottom,
        Self::Dress,
        Self::Outerwear,
        Self::Shoes,
        Self::Accessories,
        Self::Bag,
        Self::Jewelry,
    ];

    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Dress => "dress",
            Self::Outerwear => "outerwear",
            Self::Shoes => "shoes",
            Self::Accessories => "accessories",
            Self::Bag => "bag",
            Self::Jewelry => "jewelry",
        }
    }

    /// Report whether the category is accessory-like (accessories, bags or
    /// jewellery). Generators treat these as one bucket.
    #[must_use]
    pub const fn is_accessory(self) -> bool {
        matches!(self, Self::Accessories | Self::Bag | Self::Jewelry)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = normalise(s);
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == label)
            .ok_or_else(|| ParseLabelError::new("category", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("top", Category::Top)]
    #[case("  Shoes ", Category::Shoes)]
    #[case("JEWELRY", Category::Jewelry)]
    fn parses_case_insensitively(#[case] input: &str, #[case] expected: Category) {
        assert_eq!(Category::from_str(input), Ok(expected));
    }

    #[rstest]
    fn display_round_trips_every_category() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(&category.to_string()), Ok(category));
        }
    }

    #[rstest]
    #[case(Category::Accessories, true)]
    #[case(Category::Bag, true)]
    #[case(Category::Jewelry, true)]
    #[case(Category::Shoes, false)]
    #[case(Category::Dress, false)]
    fn accessory_bucket(#[case] category: Category, #[case] expected: bool) {
        assert_eq!(category.is_accessory(), expected);
    }
}
