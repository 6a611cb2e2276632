//! Per-call collection of accepted outfits.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashSet};

use wardrobe_core::{Category, Garment, GarmentId, Outfit, Scorer};
use wardrobe_scorer::describe_outfit;

/// Accepted outfits plus the dedup state and counters of one
/// `generate` call.
#[derive(Debug)]
pub(crate) struct Accumulator {
    target: usize,
    describe: bool,
    outfits: Vec<Outfit>,
    seen_sets: HashSet<BTreeSet<GarmentId>>,
    seen_pairs: HashSet<(GarmentId, GarmentId)>,
    pub(crate) attempts: usize,
    pub(crate) candidates_scored: usize,
}

impl Accumulator {
    pub(crate) fn new(target: usize, describe: bool) -> Self {
        Self {
            target,
            describe,
            outfits: Vec::with_capacity(target),
            seen_sets: HashSet::new(),
            seen_pairs: HashSet::new(),
            attempts: 0,
            candidates_scored: 0,
        }
    }

    pub(crate) const fn is_full(&self) -> bool {
        self.outfits.len() >= self.target
    }

    /// Report whether an accepted outfit already pairs this top and bottom.
    pub(crate) fn has_pair(&self, top: &Garment, bottom: &Garment) -> bool {
        self.seen_pairs
            .contains(&(top.id.clone(), bottom.id.clone()))
    }

    /// Score a candidate and keep it when it is new and reaches `threshold`.
    ///
    /// Candidates with fewer than two garments, a repeated garment, or a
    /// garment set that was already accepted are rejected without scoring.
    pub(crate) fn offer<S>(&mut self, scorer: &S, members: &[&Garment], threshold: u8) -> bool
    where
        S: Scorer + ?Sized,
    {
        if members.len() < 2 || self.is_full() {
            return false;
        }
        let ids: BTreeSet<GarmentId> = members.iter().map(|g| g.id.clone()).collect();
        if ids.len() != members.len() || self.seen_sets.contains(&ids) {
            return false;
        }

        self.candidates_scored += 1;
        let score = scorer.score(members);
        if score < threshold {
            return false;
        }

        self.record_pairs(members);
        self.seen_sets.insert(ids);
        let mut outfit = Outfit::from_garments(members, score);
        if self.describe {
            outfit.reason = Some(describe_outfit(members, score));
        }
        self.outfits.push(outfit);
        true
    }

    fn record_pairs(&mut self, members: &[&Garment]) {
        let of = |category: Category| members.iter().filter(move |g| g.category == category);
        for top in of(Category::Top) {
            for bottom in of(Category::Bottom) {
                self.seen_pairs.insert((top.id.clone(), bottom.id.clone()));
            }
        }
    }

    /// Sort best first, keeping acceptance order among equal scores, and
    /// cap at the target count.
    pub(crate) fn into_ranked(self) -> Vec<Outfit> {
        let mut outfits = self.outfits;
        outfits.sort_by_key(|outfit| Reverse(outfit.score));
        outfits.truncate(self.target);
        outfits
    }
}
