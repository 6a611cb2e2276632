//! Pairwise-average outfit scoring.

use wardrobe_core::{Category, Garment, MAX_SCORE, Scorer};

use crate::{color_compatible, color_score, style_compatible};

/// Completeness bonuses added on top of the mean pairwise color score.
///
/// Bonuses stack: an outfit with a top, bottom, shoes and a bag earns
/// `silhouette + shoes + accessory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBonuses {
    /// Awarded when a dress, or both a top and a bottom, are present.
    pub silhouette: u8,
    /// Awarded when shoes are present.
    pub shoes: u8,
    /// Awarded when outerwear is present.
    pub outerwear: u8,
    /// Awarded when any accessory-like garment is present.
    pub accessory: u8,
}

impl Default for ScoreBonuses {
    fn default() -> Self {
        Self {
            silhouette: 10,
            shoes: 5,
            outerwear: 5,
            accessory: 3,
        }
    }
}

impl ScoreBonuses {
    /// Total bonus earned by a set of categories.
    #[must_use]
    pub fn total<I>(&self, categories: I) -> u8
    where
        I: IntoIterator<Item = Category>,
    {
        let mut dress = false;
        let mut top = false;
        let mut bottom = false;
        let mut shoes = false;
        let mut outerwear = false;
        let mut accessory = false;
        for category in categories {
            match category {
                Category::Dress => dress = true,
                Category::Top => top = true,
                Category::Bottom => bottom = true,
                Category::Shoes => shoes = true,
                Category::Outerwear => outerwear = true,
                Category::Accessories | Category::Bag | Category::Jewelry => accessory = true,
            }
        }

        [
            (dress || (top && bottom), self.silhouette),
            (shoes, self.shoes),
            (outerwear, self.outerwear),
            (accessory, self.accessory),
        ]
        .into_iter()
        .filter_map(|(earned, bonus)| earned.then_some(bonus))
        .fold(0_u8, u8::saturating_add)
    }
}

/// Scores outfits by averaging the color score of every garment pair and
/// adding [`ScoreBonuses`].
///
/// Affinity is the pair color score. The compatibility gate requires both
/// the colors and the styles of a pair to mix well.
///
/// # Examples
/// ```
/// use wardrobe_core::{Category, Color, Garment, Scorer};
/// use wardrobe_scorer::PairwiseScorer;
///
/// let top = Garment::new("t", Category::Top).with_color(Color::Black);
/// let bottom = Garment::new("b", Category::Bottom).with_color(Color::White);
/// let scorer = PairwiseScorer::default();
///
/// // 100 for black/white plus the top-and-bottom bonus, clamped.
/// assert_eq!(scorer.score(&[&top, &bottom]), 100);
/// assert_eq!(scorer.score(&[&top]), 100);
/// assert_eq!(scorer.score(&[]), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairwiseScorer {
    bonuses: ScoreBonuses,
}

impl PairwiseScorer {
    /// Create a scorer with custom bonuses.
    #[must_use]
    pub const fn new(bonuses: ScoreBonuses) -> Self {
        Self { bonuses }
    }

    /// Bonuses applied by this scorer.
    #[must_use]
    pub const fn bonuses(&self) -> ScoreBonuses {
        self.bonuses
    }
}

/// Rounded mean color score over every unordered pair.
///
/// Returns `None` when fewer than two garments are supplied.
fn mean_pair_score(garments: &[&Garment]) -> Option<u64> {
    let mut total = 0_u64;
    let mut pairs = 0_u64;
    for (position, first) in garments.iter().enumerate() {
        for second in garments.iter().skip(position + 1) {
            total += u64::from(color_score(first.color, second.color));
            pairs += 1;
        }
    }
    // Half-up rounding: (2 * total + pairs) / (2 * pairs).
    (2 * total + pairs).checked_div(2 * pairs)
}

impl Scorer for PairwiseScorer {
    fn affinity(&self, a: &Garment, b: &Garment) -> u8 {
        color_score(a.color, b.color)
    }

    fn compatible(&self, a: &Garment, b: &Garment) -> bool {
        color_compatible(a.color, b.color) && style_compatible(a.style, b.style)
    }

    fn score(&self, garments: &[&Garment]) -> u8 {
        match garments {
            [] => 0,
            [_] => MAX_SCORE,
            _ => {
                let base = mean_pair_score(garments).unwrap_or(0);
                let bonus = self.bonuses.total(garments.iter().map(|g| g.category));
                let raw = i64::try_from(base).unwrap_or(i64::MAX) + i64::from(bonus);
                log::trace!(
                    "scored {} garments: base {base}, bonus {bonus}",
                    garments.len()
                );
                Self::sanitise(raw)
            }
        }
    }
}
