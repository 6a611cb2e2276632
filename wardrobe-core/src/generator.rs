//! Request and response types for outfit generation.
//!
//! A [`Generator`] turns a caller's garments into a ranked list of
//! [`Outfit`]s. Generators are stateless: every call receives its garments
//! and keeps no data once it returns.

use std::time::Duration;

use thiserror::Error;

use crate::{Garment, Occasion, Outfit, Season};

/// Result cap applied when the caller does not ask for a specific count.
pub const DEFAULT_OUTFIT_COUNT: usize = 6;

/// Parameters for a generation request.
///
/// # Examples
/// ```rust
/// use wardrobe_core::{GenerateRequest, Occasion};
///
/// # fn main() -> Result<(), wardrobe_core::OccasionError> {
/// let request = GenerateRequest {
///     count: 5,
///     occasion: Some(Occasion::new("work")?),
///     season: None,
///     seed: 7,
/// };
/// assert!(request.validate().is_ok());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GenerateRequest {
    /// Maximum number of outfits to return. Must be positive.
    pub count: usize,
    /// Restrict the pool to garments suited to this occasion.
    pub occasion: Option<Occasion>,
    /// Restrict the pool to garments suited to this season.
    pub season: Option<Season>,
    /// Seed for the random source, for reproducible results.
    pub seed: u64,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            count: DEFAULT_OUTFIT_COUNT,
            occasion: None,
            season: None,
            seed: 0,
        }
    }
}

/// Detailed validation failures for [`GenerateRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateRequestValidationError {
    /// `count` was zero.
    #[error("count must be greater than zero")]
    ZeroCount,
}

impl GenerateRequest {
    /// Validate the request, reporting the specific failure.
    ///
    /// # Errors
    /// Returns [`GenerateRequestValidationError::ZeroCount`] when `count` is
    /// zero.
    pub const fn validate_detailed(&self) -> Result<(), GenerateRequestValidationError> {
        if self.count == 0 {
            return Err(GenerateRequestValidationError::ZeroCount);
        }
        Ok(())
    }

    /// Validate the request for use by a [`Generator`].
    ///
    /// # Errors
    /// Returns [`GenerateError::InvalidRequest`] when validation fails.
    pub fn validate(&self) -> Result<(), GenerateError> {
        self.validate_detailed()
            .map_err(|_| GenerateError::InvalidRequest)
    }
}

/// Counters describing the work a generator performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent generating.
    pub elapsed: Duration,
    /// Garments left after the occasion and season pre-filter.
    pub pool_size: usize,
    /// Iterations spent across all search loops.
    pub attempts: usize,
    /// Candidate outfits that were scored.
    pub candidates_scored: usize,
}

/// Ranked outfits returned by a [`Generator`].
///
/// Outfits are sorted by descending score, hold no duplicate garment sets,
/// and never exceed the requested count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerateResponse {
    /// Accepted outfits, best first.
    pub outfits: Vec<Outfit>,
    /// Work counters for observability.
    pub diagnostics: Diagnostics,
}

impl GenerateResponse {
    /// Mean score of the returned outfits, or `None` when empty.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "averaging small score lists needs a fractional result"
    )]
    pub fn average_score(&self) -> Option<f64> {
        if self.outfits.is_empty() {
            return None;
        }
        let total: u64 = self.outfits.iter().map(|o| u64::from(o.score)).sum();
        Some(total as f64 / self.outfits.len() as f64)
    }
}

/// Errors returned by [`Generator::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Request parameters were invalid, e.g. a zero count.
    #[error("invalid request")]
    InvalidRequest,
}

/// Produce ranked outfits from a set of garments.
///
/// Implementations assume at least two garments are supplied; callers are
/// responsible for rejecting smaller wardrobes. Given fewer, implementations
/// return an empty response rather than an error. Requests that fail
/// [`GenerateRequest::validate`] yield [`GenerateError::InvalidRequest`].
pub trait Generator: Send + Sync {
    /// Generate outfits for `request` from `garments`.
    fn generate(
        &self,
        garments: &[Garment],
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GenerateError>;
}
