//! Outfit candidates produced by generators.

use std::collections::BTreeSet;

use crate::{Category, Garment, GarmentId};

/// Shape of an outfit, derived from the categories it contains.
///
/// # Examples
/// ```
/// use wardrobe_core::{Category, OutfitKind};
///
/// let kind = OutfitKind::classify([Category::Top, Category::Bottom, Category::Shoes]);
/// assert_eq!(kind, OutfitKind::TopBottomShoes);
/// assert_eq!(kind.as_str(), "top-bottom-shoes");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum OutfitKind {
    /// A dress without shoes.
    Dress,
    /// A dress with shoes.
    DressShoes,
    /// A top and bottom without shoes.
    TopBottom,
    /// A top and bottom with shoes.
    TopBottomShoes,
    /// Any other mix of garments.
    Freeform,
}

impl OutfitKind {
    /// Classify an outfit from the categories of its members.
    ///
    /// A dress anchors the look only when no top or bottom is present, and a
    /// top-and-bottom look only when no dress is present. Everything else is
    /// [`OutfitKind::Freeform`].
    #[must_use]
    pub fn classify<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = Category>,
    {
        let present: BTreeSet<Category> = categories.into_iter().collect();
        let dress = present.contains(&Category::Dress);
        let top = present.contains(&Category::Top);
        let bottom = present.contains(&Category::Bottom);
        let shoes = present.contains(&Category::Shoes);

        match (dress, top, bottom, shoes) {
            (true, false, false, false) => Self::Dress,
            (true, false, false, true) => Self::DressShoes,
            (false, true, true, false) => Self::TopBottom,
            (false, true, true, true) => Self::TopBottomShoes,
            _ => Self::Freeform,
        }
    }

    /// Return the kind as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dress => "dress",
            Self::DressShoes => "dress-shoes",
            Self::TopBottom => "top-bottom",
            Self::TopBottomShoes => "top-bottom-shoes",
            Self::Freeform => "freeform",
        }
    }
}

impl std::fmt::Display for OutfitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A garment reference held by an [`Outfit`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutfitMember {
    /// Identifier of the garment.
    pub id: GarmentId,
    /// Category of the garment at generation time.
    pub category: Category,
}

impl From<&Garment> for OutfitMember {
    fn from(garment: &Garment) -> Self {
        Self {
            id: garment.id.clone(),
            category: garment.category,
        }
    }
}

/// A scored outfit candidate.
///
/// Members are kept in the order the generator assembled them (anchor first).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outfit {
    /// Garments making up the outfit.
    pub members: Vec<OutfitMember>,
    /// Compatibility score in `0..=100`.
    pub score: u8,
    /// Shape classification.
    pub kind: OutfitKind,
    /// Optional human-readable rationale.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub reason: Option<String>,
}

impl Outfit {
    /// Build an outfit from its garments and score, classifying its kind.
    ///
    /// # Examples
    /// ```
    /// use wardrobe_core::{Category, Garment, Outfit, OutfitKind};
    ///
    /// let dress = Garment::new("d1", Category::Dress);
    /// let shoes = Garment::new("s1", Category::Shoes);
    /// let outfit = Outfit::from_garments(&[&dress, &shoes], 88);
    /// assert_eq!(outfit.kind, OutfitKind::DressShoes);
    /// assert_eq!(outfit.members.len(), 2);
    /// ```
    #[must_use]
    pub fn from_garments(garments: &[&Garment], score: u8) -> Self {
        let members: Vec<OutfitMember> = garments.iter().map(|g| OutfitMember::from(*g)).collect();
        let kind = OutfitKind::classify(members.iter().map(|m| m.category));
        Self {
            members,
            score,
            kind,
            reason: None,
        }
    }

    /// Attach a rationale, returning `self` for chaining.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Iterate over member identifiers.
    pub fn ids(&self) -> impl Iterator<Item = &GarmentId> {
        self.members.iter().map(|member| &member.id)
    }

    /// The identifier set used to detect duplicate outfits.
    #[must_use]
    pub fn id_set(&self) -> BTreeSet<GarmentId> {
        self.ids().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[Category::Dress], OutfitKind::Dress)]
    #[case(&[Category::Dress, Category::Shoes, Category::Bag], OutfitKind::DressShoes)]
    #[case(&[Category::Bottom, Category::Top], OutfitKind::TopBottom)]
    #[case(&[Category::Top, Category::Bottom, Category::Shoes, Category::Outerwear], OutfitKind::TopBottomShoes)]
    #[case(&[Category::Dress, Category::Top], OutfitKind::Freeform)]
    #[case(&[Category::Top, Category::Shoes], OutfitKind::Freeform)]
    #[case(&[Category::Jewelry, Category::Bag], OutfitKind::Freeform)]
    fn classifies_by_member_categories(#[case] categories: &[Category], #[case] expected: OutfitKind) {
        assert_eq!(OutfitKind::classify(categories.iter().copied()), expected);
    }

    #[rstest]
    fn id_set_ignores_member_order() {
        let top = Garment::new("t", Category::Top);
        let bottom = Garment::new("b", Category::Bottom);
        let lhs = Outfit::from_garments(&[&top, &bottom], 70);
        let rhs = Outfit::from_garments(&[&bottom, &top], 70);
        assert_eq!(lhs.id_set(), rhs.id_set());
    }
}
