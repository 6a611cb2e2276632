//! Pre-filter narrowing the garment pool before generation.

use crate::{Garment, GenerateRequest, Occasion, Season};

/// Occasion and season constraints applied once per request.
///
/// The filter only selects; garments are never modified.
///
/// # Examples
/// ```
/// use wardrobe_core::{Category, Garment, GarmentFilter, Occasion, Season};
///
/// # fn main() -> Result<(), wardrobe_core::OccasionError> {
/// let garments = vec![
///     Garment::new("a", Category::Top).with_occasion(Occasion::new("work")?),
///     Garment::new("b", Category::Top).with_occasion(Occasion::new("party")?),
///     Garment::new("c", Category::Bottom),
///     Garment::new("d", Category::Shoes).with_season(Season::Summer),
/// ];
/// let filter = GarmentFilter {
///     occasion: Some(Occasion::new("work")?),
///     season: Some(Season::Winter),
/// };
/// let ids: Vec<_> = filter.apply(&garments).map(|g| g.id.as_str()).collect();
/// assert_eq!(ids, ["a", "c"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GarmentFilter {
    /// Required occasion, if any.
    pub occasion: Option<Occasion>,
    /// Required season, if any.
    pub season: Option<Season>,
}

impl GarmentFilter {
    /// Build the filter described by a generation request.
    #[must_use]
    pub fn from_request(request: &GenerateRequest) -> Self {
        Self {
            occasion: request.occasion.clone(),
            season: request.season,
        }
    }

    /// Report whether a garment passes every configured constraint.
    #[must_use]
    pub fn matches(&self, garment: &Garment) -> bool {
        let occasion_ok = self
            .occasion
            .as_ref()
            .is_none_or(|occasion| garment.suits_occasion(occasion));
        let season_ok = self
            .season
            .is_none_or(|season| garment.season.suits(season));
        occasion_ok && season_ok
    }

    /// Iterate over the garments that pass the filter, preserving order.
    ///
    /// Yielded references borrow from `garments` only, so the pool outlives
    /// a temporary filter.
    pub fn apply<'g>(
        &self,
        garments: &'g [Garment],
    ) -> impl Iterator<Item = &'g Garment> + use<'_, 'g> {
        garments.iter().filter(move |garment| self.matches(garment))
    }
}
