//! Score candidate outfits.
//!
//! The `Scorer` trait assigns a compatibility score in `0..=100` to a set of
//! garments and exposes the pairwise signals generators use to choose
//! companion garments.

use crate::Garment;

/// Upper bound of every outfit score.
pub const MAX_SCORE: u8 = 100;

/// Calculate compatibility for garments and outfits.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve concurrent requests. All methods are infallible and pure: the same
/// input always yields the same output.
///
/// Implementations must:
/// - Return scores within `0..=100` (use [`Scorer::sanitise`]).
/// - Score a single garment as [`MAX_SCORE`] and an empty set as `0`.
///
/// # Examples
///
/// ```rust
/// use wardrobe_core::{Category, Garment, MAX_SCORE, Scorer};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn affinity(&self, _a: &Garment, _b: &Garment) -> u8 {
///         50
///     }
///
///     fn compatible(&self, _a: &Garment, _b: &Garment) -> bool {
///         true
///     }
///
///     fn score(&self, garments: &[&Garment]) -> u8 {
///         match garments.len() {
///             0 => 0,
///             1 => MAX_SCORE,
///             _ => 75,
///         }
///     }
/// }
///
/// let top = Garment::new("t", Category::Top);
/// let bottom = Garment::new("b", Category::Bottom);
/// assert_eq!(FlatScorer.score(&[&top]), MAX_SCORE);
/// assert_eq!(FlatScorer.score(&[&top, &bottom]), 75);
/// ```
pub trait Scorer: Send + Sync {
    /// Pairwise affinity between two garments in `0..=100`.
    fn affinity(&self, a: &Garment, b: &Garment) -> u8;

    /// Hard compatibility gate between two garments.
    fn compatible(&self, a: &Garment, b: &Garment) -> bool;

    /// Score a candidate outfit.
    fn score(&self, garments: &[&Garment]) -> u8;

    /// Clamp a raw score into `0..=100`.
    fn sanitise(raw: i64) -> u8
    where
        Self: Sized,
    {
        u8::try_from(raw.clamp(0, i64::from(MAX_SCORE))).unwrap_or(MAX_SCORE)
    }
}

impl<T: Scorer + ?Sized> Scorer for &T {
    fn affinity(&self, a: &Garment, b: &Garment) -> u8 {
        (**self).affinity(a, b)
    }

    fn compatible(&self, a: &Garment, b: &Garment) -> bool {
        (**self).compatible(a, b)
    }

    fn score(&self, garments: &[&Garment]) -> u8 {
        (**self).score(garments)
    }
}
