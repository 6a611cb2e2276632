//! `OutfitGenerator`: anchored strategies with a freeform fallback.
//!
//! One call runs three strategies in order, each stopping as soon as the
//! requested number of outfits has been accepted:
//!
//! 1. **Dress-anchored.** Every dress gets its best-matching shoes and,
//!    sometimes, outerwear and an accessory.
//! 2. **Top/bottom-anchored.** Small wardrobes enumerate every pair in
//!    shuffled order; larger ones sample pairs within the attempt budget.
//!    The best-matching shoes are added most of the time.
//! 3. **Freeform.** Random sets of two to four garments, with a looser
//!    threshold and a separate attempt budget.

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wardrobe_core::{
    Diagnostics, Garment, GarmentFilter, GenerateError, GenerateRequest, GenerateResponse,
    Generator, Scorer,
};
use wardrobe_scorer::PairwiseScorer;

use crate::accumulator::Accumulator;
use crate::config::GeneratorConfig;
use crate::pool::{Partition, best_match};

/// Randomised outfit generator, generic over its [`Scorer`].
///
/// Output is deterministic for a given garment list and
/// [`GenerateRequest::seed`].
///
/// # Examples
/// ```
/// use wardrobe_core::{Category, Color, Garment, GenerateRequest, Generator, OutfitKind};
/// use wardrobe_generator::OutfitGenerator;
///
/// let garments = vec![
///     Garment::new("t", Category::Top).with_color(Color::Black),
///     Garment::new("b", Category::Bottom).with_color(Color::White),
///     Garment::new("s", Category::Shoes).with_color(Color::Black),
/// ];
/// let response = OutfitGenerator::default()
///     .generate(&garments, &GenerateRequest::default())
///     .expect("valid request");
///
/// assert!(
///     response
///         .outfits
///         .iter()
///         .any(|outfit| outfit.kind == OutfitKind::TopBottomShoes)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct OutfitGenerator<S>
where
    S: Scorer,
{
    scorer: S,
    config: GeneratorConfig,
}

impl<S> OutfitGenerator<S>
where
    S: Scorer,
{
    /// Construct a generator using default configuration.
    #[must_use]
    pub fn new(scorer: S) -> Self {
        Self::with_config(scorer, GeneratorConfig::default())
    }

    /// Construct a generator with explicit configuration.
    #[must_use]
    pub const fn with_config(scorer: S, config: GeneratorConfig) -> Self {
        Self { scorer, config }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

impl Default for OutfitGenerator<PairwiseScorer> {
    fn default() -> Self {
        Self::new(PairwiseScorer::default())
    }
}

impl<S> Generator for OutfitGenerator<S>
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
        if pool.len() < 2 {
            log::debug!(
                "pool holds {} of {} garments; nothing to combine",
                pool.len(),
                garments.len()
            );
            return Ok(GenerateResponse {
                outfits: Vec::new(),
                diagnostics: Diagnostics {
                    elapsed: started_at.elapsed(),
                    pool_size: pool.len(),
                    ..Diagnostics::default()
                },
            });
        }

        let partition = Partition::new(&pool);
        let mut search = Search {
            scorer: &self.scorer,
            config: &self.config,
            rng: ChaCha8Rng::seed_from_u64(request.seed),
            acc: Accumulator::new(request.count, self.config.describe),
            budget: self.config.attempt_budget(request.count),
        };
        search.dress_anchored(&partition);
        search.pair_anchored(&partition);
        search.freeform(&pool);

        let Search { acc, .. } = search;
        let attempts = acc.attempts;
        let candidates_scored = acc.candidates_scored;
        let outfits = acc.into_ranked();
        log::debug!(
            "accepted {} of {} requested outfits from {} garments ({attempts} attempts, {candidates_scored} scored)",
            outfits.len(),
            request.count,
            pool.len()
        );

        Ok(GenerateResponse {
            outfits,
            diagnostics: Diagnostics {
                elapsed: started_at.elapsed(),
                pool_size: pool.len(),
                attempts,
                candidates_scored,
            },
        })
    }
}

/// Mutable state of one `generate` call.
struct Search<'s, S>
where
    S: Scorer,
{
    scorer: &'s S,
    config: &'s GeneratorConfig,
    rng: ChaCha8Rng,
    acc: Accumulator,
    budget: usize,
}

impl<S> Search<'_, S>
where
    S: Scorer,
{
    fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_range(0.0_f64..1.0_f64) < probability
    }

    fn random_from<'g>(&mut self, garments: &[&'g Garment]) -> Option<&'g Garment> {
        garments.choose(&mut self.rng).copied()
    }

    fn dress_anchored(&mut self, partition: &Partition<'_>) {
        let scorer = self.scorer;
        for &dress in &partition.dresses {
            if self.acc.is_full() {
                break;
            }
            self.acc.attempts += 1;

            let mut members = vec![dress];
            if let Some(shoe) = best_match(&partition.shoes, |s| {
                u16::from(scorer.affinity(dress, s))
            }) {
                members.push(shoe);
            }
            if !partition.outerwear.is_empty()
                && self.chance(self.config.dress_outerwear_probability)
                && let Some(outer) = best_match(&partition.outerwear, |o| {
                    u16::from(scorer.affinity(dress, o))
                })
            {
                members.push(outer);
            }
            if !partition.accessories.is_empty()
                && self.chance(self.config.dress_accessory_probability)
                && let Some(accessory) = self.random_from(&partition.accessories)
            {
                members.push(accessory);
            }

            self.acc
                .offer(scorer, &members, self.config.anchored_threshold);
        }
    }

    fn pair_anchored(&mut self, partition: &Partition<'_>) {
        if partition.tops.is_empty() || partition.bottoms.is_empty() {
            return;
        }

        if partition.pair_count() <= self.config.exhaustive_pair_limit {
            let mut pairs: Vec<(&Garment, &Garment)> = partition
                .tops
                .iter()
                .flat_map(|&top| partition.bottoms.iter().map(move |&bottom| (top, bottom)))
                .collect();
            pairs.shuffle(&mut self.rng);
            for (top, bottom) in pairs {
                if self.acc.is_full() {
                    break;
                }
                self.try_pair(partition, top, bottom);
            }
            return;
        }

        let mut spent = 0_usize;
        while !self.acc.is_full() && spent < self.budget {
            spent += 1;
            let (Some(top), Some(bottom)) = (
                self.random_from(&partition.tops),
                self.random_from(&partition.bottoms),
            ) else {
                break;
            };
            self.try_pair(partition, top, bottom);
        }
        if !self.acc.is_full() {
            log::debug!("pair sampling stopped after {spent} of {} attempts", self.budget);
        }
    }

    fn try_pair<'g>(&mut self, partition: &Partition<'g>, top: &'g Garment, bottom: &'g Garment) {
        self.acc.attempts += 1;
        if self.acc.has_pair(top, bottom) {
            return;
        }

        let scorer = self.scorer;
        let mut members = vec![top, bottom];
        if !partition.shoes.is_empty()
            && self.chance(self.config.pair_shoes_probability)
            && let Some(shoe) = best_match(&partition.shoes, |s| {
                u16::from(scorer.affinity(top, s)) + u16::from(scorer.affinity(bottom, s))
            })
        {
            members.push(shoe);
        }
        if !partition.outerwear.is_empty()
            && self.chance(self.config.pair_outerwear_probability)
            && let Some(outer) = self.random_from(&partition.outerwear)
        {
            members.push(outer);
        }
        if !partition.accessories.is_empty()
            && self.chance(self.config.pair_accessory_probability)
            && let Some(accessory) = self.random_from(&partition.accessories)
        {
            members.push(accessory);
        }

        self.acc
            .offer(scorer, &members, self.config.anchored_threshold);
    }

    fn freeform(&mut self, pool: &[&Garment]) {
        let (min_items, max_items) = self.config.freeform_sizes();
        let upper = max_items.min(pool.len());
        let lower = min_items.min(upper);
        if upper < 2 {
            return;
        }

        let mut spent = 0_usize;
        while !self.acc.is_full() && spent < self.budget {
            spent += 1;
            self.acc.attempts += 1;
            let size = self.rng.gen_range(lower..=upper);
            let members: Vec<&Garment> = pool
                .choose_multiple(&mut self.rng, size)
                .copied()
                .collect();
            self.acc
                .offer(self.scorer, &members, self.config.freeform_threshold);
        }
        if !self.acc.is_full() && spent > 0 {
            log::debug!("freeform search exhausted its budget of {} attempts", self.budget);
        }
    }
}
