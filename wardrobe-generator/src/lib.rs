//! Outfit generation for the wardrobe engine.
//!
//! This crate provides two implementations of the
//! [`Generator`](wardrobe_core::Generator) trait:
//!
//! - [`OutfitGenerator`] combines dress-anchored and top/bottom-anchored
//!   strategies with a freeform fallback. Sampling is driven by a
//!   `ChaCha8Rng` seeded from the request, and every randomised loop has an
//!   attempt ceiling, so a call always terminates even when nothing in the
//!   wardrobe matches.
//! - [`ExhaustiveGenerator`] enumerates every top, bottom and shoes triple
//!   behind a hard compatibility gate. It is deterministic and unbounded,
//!   so it suits small wardrobes.
//!
//! Both apply the request's occasion and season filter first, deduplicate by
//! garment set, and rank outfits by descending score.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod accumulator;
mod config;
mod exhaustive;
mod generator;
mod pool;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use config::GeneratorConfig;
pub use exhaustive::{EXHAUSTIVE_CAP, ExhaustiveGenerator};
pub use generator::OutfitGenerator;
