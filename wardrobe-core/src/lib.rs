//! Core domain types for the wardrobe engine.
//!
//! The crate models catalogued garments and the outfits built from them, and
//! defines the seams the rest of the workspace plugs into: the [`Scorer`] and
//! [`Generator`] traits, the [`GarmentStore`] collaborator, and the
//! occasion/season [`GarmentFilter`] applied before generation.
//!
//! # Examples
//!
//! ```
//! use wardrobe_core::{Category, Color, Garment, GarmentFilter, Style};
//!
//! let garments = vec![
//!     Garment::new("t1", Category::Top).with_color(Color::Black),
//!     Garment::new("b1", Category::Bottom).with_style(Style::Business),
//! ];
//! let pool: Vec<_> = GarmentFilter::default().apply(&garments).collect();
//! assert_eq!(pool.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod category;
pub mod color;
pub mod filter;
pub mod garment;
pub mod generator;
pub mod label;
pub mod occasion;
pub mod outfit;
pub mod scorer;
pub mod season;
pub mod store;
pub mod style;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use category::Category;
pub use color::Color;
pub use filter::GarmentFilter;
pub use garment::{Garment, GarmentId};
pub use generator::{
    DEFAULT_OUTFIT_COUNT, Diagnostics, GenerateError, GenerateRequest,
    GenerateRequestValidationError, GenerateResponse, Generator,
};
pub use label::ParseLabelError;
pub use occasion::{Occasion, OccasionError};
pub use outfit::{Outfit, OutfitKind, OutfitMember};
pub use scorer::{MAX_SCORE, Scorer};
pub use season::Season;
pub use store::{GarmentStore, MemoryWardrobe, ResolveError, WardrobeError, resolve_outfit};
pub use style::Style;
