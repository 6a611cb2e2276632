//! Category partition of the filtered garment pool.

use wardrobe_core::{Category, Garment};

/// Garments grouped by their role in an outfit.
///
/// Accessory-like categories share one bucket. Every bucket keeps pool
/// order.
#[derive(Debug, Default)]
pub(crate) struct Partition<'g> {
    pub(crate) dresses: Vec<&'g Garment>,
    pub(crate) tops: Vec<&'g Garment>,
    pub(crate) bottoms: Vec<&'g Garment>,
    pub(crate) shoes: Vec<&'g Garment>,
    pub(crate) outerwear: Vec<&'g Garment>,
    pub(crate) accessories: Vec<&'g Garment>,
}

impl<'g> Partition<'g> {
    pub(crate) fn new(pool: &[&'g Garment]) -> Self {
        let mut partition = Self::default();
        for &garment in pool {
            let bucket = match garment.category {
                Category::Dress => &mut partition.dresses,
                Category::Top => &mut partition.tops,
                Category::Bottom => &mut partition.bottoms,
                Category::Shoes => &mut partition.shoes,
                Category::Outerwear => &mut partition.outerwear,
                Category::Accessories | Category::Bag | Category::Jewelry => {
                    &mut partition.accessories
                }
            };
            bucket.push(garment);
        }
        partition
    }

    /// Number of top and bottom combinations.
    pub(crate) const fn pair_count(&self) -> usize {
        self.tops.len().saturating_mul(self.bottoms.len())
    }
}

/// Pick the candidate with the highest affinity.
///
/// Ties go to the candidate encountered first.
pub(crate) fn best_match<'g, F>(candidates: &[&'g Garment], mut affinity: F) -> Option<&'g Garment>
where
    F: FnMut(&Garment) -> u16,
{
    let mut best: Option<(&'g Garment, u16)> = None;
    for &candidate in candidates {
        let score = affinity(candidate);
        if best.is_none_or(|(_, current)| score > current) {
            best = Some((candidate, score));
        }
    }
    best.map(|(garment, _)| garment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use wardrobe_core::test_support::garment;
    use wardrobe_core::{Color, Style};

    #[rstest]
    fn accessories_share_a_bucket() {
        let garments = [
            garment("bag", Category::Bag, Color::Black, Style::Casual),
            garment("ring", Category::Jewelry, Color::Beige, Style::Casual),
            garment("hat", Category::Accessories, Color::Red, Style::Casual),
            garment("top", Category::Top, Color::White, Style::Casual),
        ];
        let pool: Vec<&Garment> = garments.iter().collect();
        let partition = Partition::new(&pool);

        assert_eq!(partition.accessories.len(), 3);
        assert_eq!(partition.tops.len(), 1);
        assert_eq!(partition.pair_count(), 0);
    }

    #[rstest]
    fn ties_keep_the_first_candidate() {
        let first = garment("s1", Category::Shoes, Color::Black, Style::Casual);
        let second = garment("s2", Category::Shoes, Color::Black, Style::Casual);
        let third = garment("s3", Category::Shoes, Color::Red, Style::Casual);

        let chosen = best_match(&[&first, &second, &third], |g| {
            if g.color == Color::Black { 10 } else { 5 }
        });
        assert_eq!(chosen.map(|g| g.id.as_str()), Some("s1"));
        assert!(best_match(&[], |_| 0).is_none());
    }
}
