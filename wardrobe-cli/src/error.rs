//! Error types emitted by the wardrobe CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use wardrobe_core::{
    GenerateError, GenerateRequestValidationError, OccasionError, ParseLabelError, ResolveError,
    WardrobeError,
};

/// Errors emitted by the wardrobe CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass the {field} path or set {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The occasion label was blank.
    #[error("invalid occasion: {0}")]
    InvalidOccasion(#[source] OccasionError),
    /// The season label named no known season.
    #[error("invalid season: {0}")]
    InvalidSeason(#[source] ParseLabelError),
    /// The generation parameters failed validation.
    #[error("invalid generation request: {0}")]
    InvalidRequest(#[source] GenerateRequestValidationError),
    /// Opening the wardrobe file failed.
    #[error("failed to open wardrobe at {path:?}: {source}")]
    OpenWardrobe {
        /// Wardrobe file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The wardrobe file could not be decoded.
    #[error("failed to load wardrobe at {path:?}: {source}")]
    ParseWardrobe {
        /// Wardrobe file path.
        path: Utf8PathBuf,
        /// Decoding or validation failure.
        #[source]
        source: WardrobeError,
    },
    /// The generator rejected the request.
    #[error("generator failed: {source}")]
    Generate {
        /// Generator failure.
        source: GenerateError,
    },
    /// A generated outfit referenced a garment outside the wardrobe.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// Too few garments suit the request to combine.
    #[error("need at least {required} garments to generate outfits, found {found}")]
    InsufficientGarments {
        /// Garments left after the occasion and season filter.
        found: usize,
        /// Minimum needed.
        required: usize,
    },
    /// No combination reached the score thresholds.
    #[error("no outfit could be generated from the available garments")]
    NoOutfits,
    /// Serializing the response payload failed.
    #[error("failed to serialize response payload: {0}")]
    SerializePayload(#[source] serde_json::Error),
    /// Writing the payload failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
