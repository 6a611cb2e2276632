//! Property-based tests for the compatibility tables and outfit scorer.
//!
//! # Invariants tested
//!
//! - **Bounds:** every outfit score lies in `0..=100`.
//! - **Determinism:** scoring the same set twice yields the same score.
//! - **Order independence:** permuting members does not change the score.
//! - **Identity:** every color and style is compatible with itself.
//! - **Symmetry:** color scores and style compatibility ignore argument order.

use proptest::prelude::*;
use wardrobe_core::{Category, Color, Garment, MAX_SCORE, Scorer, Style};
use wardrobe_scorer::{PairwiseScorer, color_compatible, color_score, style_compatible};

fn color_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Unknown),
        proptest::sample::select(Color::PALETTE.to_vec()),
    ]
}

fn style_strategy() -> impl Strategy<Value = Style> {
    proptest::sample::select(Style::ALL.to_vec())
}

fn category_strategy() -> impl Strategy<Value = Category> {
    proptest::sample::select(Category::ALL.to_vec())
}

fn outfit_strategy(max_len: usize) -> impl Strategy<Value = Vec<Garment>> {
    proptest::collection::vec(
        (category_strategy(), color_strategy(), style_strategy()),
        0..=max_len,
    )
    .prop_map(|attributes| {
        attributes
            .into_iter()
            .enumerate()
            .map(|(position, (category, color, style))| {
                Garment::new(format!("g{position}"), category)
                    .with_color(color)
                    .with_style(style)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: scores never leave `0..=100` and are reproducible.
    #[test]
    fn scores_are_bounded_and_deterministic(garments in outfit_strategy(6)) {
        let scorer = PairwiseScorer::default();
        let members: Vec<&Garment> = garments.iter().collect();

        let first = scorer.score(&members);
        let second = scorer.score(&members);
        prop_assert!(first <= MAX_SCORE, "score {} out of range", first);
        prop_assert_eq!(first, second);
        if members.len() == 1 {
            prop_assert_eq!(first, MAX_SCORE);
        }
    }

    /// Property: member order does not affect the score.
    #[test]
    fn scores_ignore_member_order(garments in outfit_strategy(5)) {
        let scorer = PairwiseScorer::default();
        let forward: Vec<&Garment> = garments.iter().collect();
        let reversed: Vec<&Garment> = garments.iter().rev().collect();

        prop_assert_eq!(scorer.score(&forward), scorer.score(&reversed));
    }

    /// Property: compatibility is reflexive and symmetric.
    #[test]
    fn compatibility_is_reflexive_and_symmetric(
        color_a in color_strategy(),
        color_b in color_strategy(),
        style_a in style_strategy(),
        style_b in style_strategy(),
    ) {
        prop_assert!(color_compatible(color_a, color_a));
        prop_assert!(style_compatible(style_a, style_a));
        prop_assert_eq!(color_score(color_a, color_b), color_score(color_b, color_a));
        prop_assert_eq!(
            style_compatible(style_a, style_b),
            style_compatible(style_b, style_a)
        );
    }
}
