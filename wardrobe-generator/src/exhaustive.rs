//! Deterministic top/bottom/shoes enumeration.

use std::cmp::Reverse;
use std::time::Instant;

use wardrobe_core::{
    DEFAULT_OUTFIT_COUNT, Diagnostics, Garment, GarmentFilter, GenerateError, GenerateRequest,
    GenerateResponse, Generator, Outfit, Scorer,
};
use wardrobe_scorer::{PairwiseScorer, describe_outfit};

use crate::pool::Partition;

/// Most outfits an [`ExhaustiveGenerator`] returns, whatever the request.
pub const EXHAUSTIVE_CAP: usize = DEFAULT_OUTFIT_COUNT;

/// Generator that tries every `(top, bottom, shoes)` triple.
///
/// A triple survives only when every pair passes
/// [`Scorer::compatible`]; there is no score threshold. Survivors gain the
/// first outerwear compatible with both top and bottom, are scored, and the
/// best [`EXHAUSTIVE_CAP`] (or fewer, if the request asks for fewer) are
/// returned. No randomness is involved and `seed` is ignored.
///
/// Work grows as `tops × bottoms × shoes`, so this suits small, well-covered
/// wardrobes.
///
/// # Examples
/// ```
/// use wardrobe_core::{Category, Color, Garment, GenerateRequest, Generator, Style};
/// use wardrobe_generator::ExhaustiveGenerator;
///
/// let garments = vec![
///     Garment::new("t", Category::Top).with_color(Color::Orange).with_style(Style::Sport),
///     Garment::new("b", Category::Bottom).with_color(Color::Purple).with_style(Style::Formal),
///     Garment::new("s", Category::Shoes).with_color(Color::White),
/// ];
/// let response = ExhaustiveGenerator::default()
///     .generate(&garments, &GenerateRequest::default())
///     .expect("valid request");
/// assert!(response.outfits.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustiveGenerator<S>
where
    S: Scorer,
{
    scorer: S,
    describe: bool,
}

impl<S> ExhaustiveGenerator<S>
where
    S: Scorer,
{
    /// Construct a generator that attaches rationales to its outfits.
    #[must_use]
    pub const fn new(scorer: S) -> Self {
        Self {
            scorer,
            describe: true,
        }
    }

    /// Enable or disable rationales.
    #[must_use]
    pub const fn with_reasons(mut self, describe: bool) -> Self {
        self.describe = describe;
        self
    }

    fn gated(&self, a: &Garment, b: &Garment) -> bool {
        self.scorer.compatible(a, b)
    }

    fn assemble(
        &self,
        partition: &Partition<'_>,
        top: &Garment,
        bottom: &Garment,
        shoes: &Garment,
    ) -> Option<Outfit> {
        if !(self.gated(top, shoes) && self.gated(bottom, shoes)) {
            return None;
        }
        let mut members = vec![top, bottom, shoes];
        if let Some(&outer) = partition
            .outerwear
            .iter()
            .find(|outer| self.gated(top, outer) && self.gated(bottom, outer))
        {
            members.push(outer);
        }

        let score = self.scorer.score(&members);
        let mut outfit = Outfit::from_garments(&members, score);
        if self.describe {
            outfit.reason = Some(describe_outfit(&members, score));
        }
        Some(outfit)
    }
}

impl Default for ExhaustiveGenerator<PairwiseScorer> {
    fn default() -> Self {
        Self::new(PairwiseScorer::default())
    }
}

impl<S> Generator for ExhaustiveGenerator<S>
where
    S: Scorer,
{
    fn generate(
        &self,
        garments: &[Garment],
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GenerateError> {
        request.validate()?;
        let started_at = Instant::now();

        let filter = GarmentFilter::from_request(request);
        let pool: Vec<&Garment> = filter.apply(garments).collect();
        let partition = Partition::new(&pool);

        let mut outfits = Vec::new();
        let mut examined = 0_usize;
        if pool.len() >= 2 {
            for &top in &partition.tops {
                for &bottom in &partition.bottoms {
                    examined += partition.shoes.len();
                    if !self.gated(top, bottom) {
                        continue;
                    }
                    outfits.extend(
                        partition
                            .shoes
                            .iter()
                            .filter_map(|shoes| self.assemble(&partition, top, bottom, shoes)),
                    );
                }
            }
        }

        let candidates_scored = outfits.len();
        outfits.sort_by_key(|outfit| Reverse(outfit.score));
        outfits.truncate(request.count.min(EXHAUSTIVE_CAP));
        log::debug!(
            "exhaustive search kept {candidates_scored} of {examined} triples, returning {}",
            outfits.len()
        );

        Ok(GenerateResponse {
            outfits,
            diagnostics: Diagnostics {
                elapsed: started_at.elapsed(),
                pool_size: pool.len(),
                attempts: examined,
                candidates_scored,
            },
        })
    }
}
