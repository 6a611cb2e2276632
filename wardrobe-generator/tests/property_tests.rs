//! Property-based tests for the outfit generators.
//!
//! # Invariants tested
//!
//! - **Result cap:** never more outfits than requested.
//! - **No duplicates:** no two outfits share a garment set.
//! - **Threshold floor:** every outfit meets the looser freeform threshold.
//! - **Ordering:** outfits are sorted by descending score.
//! - **Termination:** work stays within the attempt budgets.
//! - **Determinism:** the same seed yields the same outfits.


use proptest::prelude::*;
use wardrobe_core::test_support::FixedScorer;
use wardrobe_core::{GenerateRequest, Generator};
use wardrobe_generator::{EXHAUSTIVE_CAP, ExhaustiveGenerator, GeneratorConfig, OutfitGenerator};
use wardrobe_scorer::PairwiseScorer;

use proptest_support::{assert_no_duplicate_sets, wardrobe_strategy};

fn request(count: usize, seed: u64) -> GenerateRequest {
    GenerateRequest {
        count,
        seed,
        ..GenerateRequest::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: results are capped, unique, ranked and above the floor.
    #[test]
    fn results_respect_cap_uniqueness_and_floor(
        garments in wardrobe_strategy(0, 16),
        count in 1_usize..=8,
        seed in any::<u64>(),
    ) {
        let generator = OutfitGenerator::new(PairwiseScorer::default());
        let response = generator
            .generate(&garments, &request(count, seed))
            .expect("valid request");

        prop_assert!(response.outfits.len() <= count);
        assert_no_duplicate_sets(&response.outfits)?;
        let floor = generator.config().freeform_threshold;
        for outfit in &response.outfits {
            prop_assert!(outfit.score >= floor, "score {} below floor", outfit.score);
            prop_assert!(outfit.members.len() >= 2);
        }
        let ordered = response
            .outfits
            .windows(2)
            .all(|pair| pair.first().map(|o| o.score) >= pair.last().map(|o| o.score));
        prop_assert!(ordered, "outfits are not sorted by score");
    }

    /// Property: a scorer that rejects everything still terminates within
    /// the attempt budgets.
    #[test]
    fn hopeless_wardrobes_terminate(
        garments in wardrobe_strategy(2, 16),
        count in 1_usize..=8,
        seed in any::<u64>(),
    ) {
        let config = GeneratorConfig::default();
        let budget = config.attempt_budget(count);
        let generator = OutfitGenerator::with_config(FixedScorer(0), config);
        let response = generator
            .generate(&garments, &request(count, seed))
            .expect("valid request");

        prop_assert!(response.outfits.is_empty());
        // Dresses, then at most every pair or one sampling budget, then the
        // freeform budget.
        let ceiling = garments.len() + 2 * budget.max(64);
        prop_assert!(
            response.diagnostics.attempts <= ceiling,
            "{} attempts exceeds {}",
            response.diagnostics.attempts,
            ceiling
        );
    }

    /// Property: a seed fully determines the outfits.
    #[test]
    fn same_seed_same_response(
        garments in wardrobe_strategy(2, 12),
        seed in any::<u64>(),
    ) {
        let generator = OutfitGenerator::new(PairwiseScorer::default());
        let first = generator.generate(&garments, &request(5, seed)).expect("valid request");
        let second = generator.generate(&garments, &request(5, seed)).expect("valid request");
        prop_assert_eq!(first.outfits, second.outfits);
    }

    /// Property: the exhaustive variant is capped and unique.
    #[test]
    fn exhaustive_is_capped_and_unique(
        garments in wardrobe_strategy(0, 14),
        count in 1_usize..=10,
    ) {
        let generator = ExhaustiveGenerator::new(PairwiseScorer::default());
        let response = generator
            .generate(&garments, &request(count, 0))
            .expect("valid request");

        prop_assert!(response.outfits.len() <= count.min(EXHAUSTIVE_CAP));
        assert_no_duplicate_sets(&response.outfits)?;
    }
}
