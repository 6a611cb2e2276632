//! Color and style compatibility scoring for outfits.
//!
//! The crate holds the compile-time compatibility tables and the
//! [`PairwiseScorer`], which implements the
//! [`Scorer`](wardrobe_core::Scorer) trait so generators can rank candidate
//! outfits:
//! - **Color** pairs are graded on a symmetric `0..=100` table. Unknown
//!   colors score a moderate default.
//! - **Style** pairs are a boolean adjacency, symmetrised when the table is
//!   built.
//! - **Outfits** score the rounded mean of every pair's color score plus
//!   completeness bonuses, clamped to `0..=100`.
//!
//! [`describe_outfit`] turns a score into a short English rationale.
//!
//! # Examples
//!
//! ```
//! use wardrobe_core::{Category, Color, Garment, Scorer, Style};
//! use wardrobe_scorer::{PairwiseScorer, describe_outfit};
//!
//! let dress = Garment::new("d", Category::Dress).with_color(Color::Navy);
//! let shoes = Garment::new("s", Category::Shoes)
//!     .with_color(Color::White)
//!     .with_style(Style::Formal);
//!
//! let scorer = PairwiseScorer::default();
//! let score = scorer.score(&[&dress, &shoes]);
//! assert_eq!(score, 100);
//! assert!(describe_outfit(&[&dress, &shoes], score).starts_with("Elegant dress"));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod color;
mod pairwise;
mod reason;
mod style;

pub use color::{COMPATIBLE_COLOR_SCORE, DEFAULT_COLOR_SCORE, color_compatible, color_score};
pub use pairwise::{PairwiseScorer, ScoreBonuses};
pub use reason::{BALANCED_SCORE, EXCELLENT_SCORE, describe_outfit};
pub use style::{STYLE_EDGES, style_compatible};
