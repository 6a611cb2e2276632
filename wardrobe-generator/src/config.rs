//! Tuning knobs for [`OutfitGenerator`](crate::OutfitGenerator).

/// Configuration for [`OutfitGenerator`](crate::OutfitGenerator).
///
/// Probabilities are chances in `0.0..=1.0`; values outside that range
/// behave as "never" (at or below zero) or "always" (at or above one).
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Minimum score for dress- and top/bottom-anchored outfits.
    pub anchored_threshold: u8,
    /// Minimum score for freeform outfits.
    pub freeform_threshold: u8,
    /// Attempts allowed per randomised loop, per requested outfit.
    pub attempt_multiplier: usize,
    /// Largest `tops × bottoms` product enumerated exhaustively rather than
    /// sampled.
    pub exhaustive_pair_limit: usize,
    /// Chance of adding outerwear to a dress.
    pub dress_outerwear_probability: f64,
    /// Chance of adding an accessory to a dress.
    pub dress_accessory_probability: f64,
    /// Chance of adding the best-matching shoes to a top and bottom.
    pub pair_shoes_probability: f64,
    /// Chance of adding outerwear to a top and bottom.
    pub pair_outerwear_probability: f64,
    /// Chance of adding an accessory to a top and bottom.
    pub pair_accessory_probability: f64,
    /// Smallest freeform outfit.
    pub freeform_min_items: usize,
    /// Largest freeform outfit.
    pub freeform_max_items: usize,
    /// Attach a rationale to each accepted outfit.
    pub describe: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            anchored_threshold: 50,
            freeform_threshold: 45,
            attempt_multiplier: 50,
            exhaustive_pair_limit: 64,
            dress_outerwear_probability: 0.2,
            dress_accessory_probability: 0.3,
            pair_shoes_probability: 0.7,
            pair_outerwear_probability: 0.3,
            pair_accessory_probability: 0.4,
            freeform_min_items: 2,
            freeform_max_items: 4,
            describe: true,
        }
    }
}

impl GeneratorConfig {
    /// Attempts allowed for one randomised loop when `count` outfits are
    /// requested.
    ///
    /// # Examples
    /// ```
    /// use wardrobe_generator::GeneratorConfig;
    ///
    /// assert_eq!(GeneratorConfig::default().attempt_budget(5), 250);
    /// ```
    #[must_use]
    pub const fn attempt_budget(&self, count: usize) -> usize {
        count.saturating_mul(self.attempt_multiplier)
    }

    /// Freeform size bounds, normalised so that `2 <= min <= max`.
    #[must_use]
    pub fn freeform_sizes(&self) -> (usize, usize) {
        let min = self.freeform_min_items.max(2);
        (min, self.freeform_max_items.max(min))
    }
}
