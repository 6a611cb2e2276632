//! Facade crate for the wardrobe outfit engine.
//!
//! This crate re-exports the core domain types and exposes the pairwise
//! scorer and the outfit generators behind feature flags.
//!
//! # Examples
//! ```
//! # #[cfg(feature = "generator")]
//! # {
//! use wardrobe_engine::{
//!     Category, Color, Garment, GenerateRequest, Generator, OutfitGenerator, OutfitKind,
//! };
//!
//! let garments = vec![
//!     Garment::new("t", Category::Top).with_color(Color::Black),
//!     Garment::new("b", Category::Bottom).with_color(Color::White),
//!     Garment::new("s", Category::Shoes).with_color(Color::Black),
//! ];
//! let response = OutfitGenerator::default()
//!     .generate(&garments, &GenerateRequest::default())
//!     .expect("valid request");
//! assert!(
//!     response
//!         .outfits
//!         .iter()
//!         .any(|outfit| outfit.kind == OutfitKind::TopBottomShoes)
//! );
//! # }
//! ```

#![forbid(unsafe_code)]

pub use wardrobe_core::{
    Category, Color, DEFAULT_OUTFIT_COUNT, Diagnostics, Garment, GarmentFilter, GarmentId,
    GarmentStore, GenerateError, GenerateRequest, GenerateResponse, Generator, MAX_SCORE,
    MemoryWardrobe, Occasion, OccasionError, Outfit, OutfitKind, OutfitMember, ResolveError,
    Scorer, Season, Style, WardrobeError, resolve_outfit,
};

#[cfg(feature = "scorer")]
pub use wardrobe_scorer::{PairwiseScorer, ScoreBonuses, describe_outfit};

#[cfg(feature = "generator")]
pub use wardrobe_generator::{ExhaustiveGenerator, GeneratorConfig, OutfitGenerator};
