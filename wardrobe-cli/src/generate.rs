//! Generate command implementation for the wardrobe CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wardrobe_core::{
    DEFAULT_OUTFIT_COUNT, GarmentFilter, GenerateRequest, Generator, MemoryWardrobe, Occasion,
    Season,
};
use wardrobe_generator::{ExhaustiveGenerator, OutfitGenerator};
use wardrobe_scorer::PairwiseScorer;

use crate::fs::{file_is_file, open_utf8_file};
use crate::payload::{MIN_GARMENTS, Payload};
use crate::{
    ARG_GENERATE_COUNT, ARG_GENERATE_EXHAUSTIVE, ARG_GENERATE_OCCASION, ARG_GENERATE_SEASON,
    ARG_GENERATE_SEED, ARG_GENERATE_WARDROBE, CliError, ENV_GENERATE_WARDROBE,
};

/// CLI arguments for the `generate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Combine the garments of a wardrobe JSON file into ranked \
                 outfits. Options can come from CLI flags, configuration \
                 files, or WARDROBE_* environment variables.",
    about = "Generate outfit suggestions from a wardrobe"
)]
#[ortho_config(prefix = "WARDROBE")]
pub(crate) struct GenerateArgs {
    /// Path to a JSON file containing an array of garments.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) wardrobe_path: Option<Utf8PathBuf>,
    /// Maximum number of outfits to return (default 6).
    #[arg(long = ARG_GENERATE_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
    /// Only use garments suited to this occasion, e.g. "work".
    #[arg(long = ARG_GENERATE_OCCASION, value_name = "label")]
    #[serde(default)]
    pub(crate) occasion: Option<String>,
    /// Only use garments suited to this season.
    #[arg(long = ARG_GENERATE_SEASON, value_name = "season")]
    #[serde(default)]
    pub(crate) season: Option<String>,
    /// Seed for reproducible suggestions.
    #[arg(long = ARG_GENERATE_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Enumerate every top, bottom and shoes triple instead of sampling.
    #[arg(long = ARG_GENERATE_EXHAUSTIVE)]
    #[serde(default)]
    pub(crate) exhaustive: bool,
}

impl GenerateArgs {
    pub(crate) fn into_config(self) -> Result<GenerateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        GenerateConfig::try_from(merged)
    }
}

/// Resolved `generate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GenerateConfig {
    /// Path to the wardrobe JSON file.
    pub(crate) wardrobe_path: Utf8PathBuf,
    /// Generation parameters handed to the engine.
    pub(crate) request: GenerateRequest,
    /// Whether to use the exhaustive generator.
    pub(crate) exhaustive: bool,
}

impl GenerateConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.wardrobe_path, ARG_GENERATE_WARDROBE)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<GenerateArgs> for GenerateConfig {
    type Error = CliError;

    fn try_from(args: GenerateArgs) -> Result<Self, Self::Error> {
        let wardrobe_path = args.wardrobe_path.ok_or(CliError::MissingArgument {
            field: ARG_GENERATE_WARDROBE,
            env: ENV_GENERATE_WARDROBE,
        })?;
        let occasion = args
            .occasion
            .map(Occasion::new)
            .transpose()
            .map_err(CliError::InvalidOccasion)?;
        let season = args
            .season
            .map(|label| label.parse::<Season>())
            .transpose()
            .map_err(CliError::InvalidSeason)?;

        let request = GenerateRequest {
            count: args.count.unwrap_or(DEFAULT_OUTFIT_COUNT),
            occasion,
            season,
            seed: args.seed.unwrap_or_default(),
        };
        request
            .validate_detailed()
            .map_err(CliError::InvalidRequest)?;

        Ok(Self {
            wardrobe_path,
            request,
            exhaustive: args.exhaustive,
        })
    }
}

/// Builds a generator instance for the current invocation.
pub(super) trait GeneratorBuilder {
    fn build(&self, config: &GenerateConfig) -> Box<dyn Generator>;
}

pub(super) struct DefaultGeneratorBuilder;

impl GeneratorBuilder for DefaultGeneratorBuilder {
    fn build(&self, config: &GenerateConfig) -> Box<dyn Generator> {
        if config.exhaustive {
            Box::new(ExhaustiveGenerator::new(PairwiseScorer::default()))
        } else {
            Box::new(OutfitGenerator::new(PairwiseScorer::default()))
        }
    }
}

pub(super) fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultGeneratorBuilder;
    run_generate_with(args, &builder, &mut stdout)
}

/// Run the command and print its payload.
///
/// Failure payloads are printed before the matching error is returned, so
/// callers see both the JSON body and a non-zero exit status.
pub(super) fn run_generate_with(
    args: GenerateArgs,
    builder: &dyn GeneratorBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_generate_config(args)?;
    let wardrobe = load_wardrobe(&config.wardrobe_path)?;
    let payload = execute_generate(&config, &wardrobe, builder)?;
    write_payload(writer, &payload)?;
    payload.into_result()
}

fn resolve_generate_config(args: GenerateArgs) -> Result<GenerateConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_generate<'w>(
    config: &GenerateConfig,
    wardrobe: &'w MemoryWardrobe,
    builder: &dyn GeneratorBuilder,
) -> Result<Payload<'w>, CliError> {
    let garments = wardrobe.as_slice();
    let request = &config.request;
    let usable = GarmentFilter::from_request(request).apply(garments).count();
    if usable < MIN_GARMENTS {
        log::debug!(
            "{usable} of {} garments suit the request; skipping generation",
            garments.len()
        );
        return Ok(Payload::too_few_garments(usable));
    }

    let generator = builder.build(config);
    let response = generator
        .generate(garments, request)
        .map_err(|source| CliError::Generate { source })?;
    log::debug!(
        "generated {} outfits from a pool of {} in {:?}",
        response.outfits.len(),
        response.diagnostics.pool_size,
        response.diagnostics.elapsed
    );

    if response.outfits.is_empty() {
        return Ok(Payload::no_outfits(garments, request.occasion.as_ref()));
    }
    Payload::generated(wardrobe, garments, request.occasion.as_ref(), &response)
        .map_err(CliError::from)
}

/// Loads a JSON-encoded wardrobe from disk.
pub(super) fn load_wardrobe(path: &Utf8Path) -> Result<MemoryWardrobe, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenWardrobe {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    MemoryWardrobe::from_json_reader(reader).map_err(|source| CliError::ParseWardrobe {
        path: path.to_path_buf(),
        source,
    })
}

fn write_payload(writer: &mut dyn Write, payload: &Payload<'_>) -> Result<(), CliError> {
    let body = serde_json::to_string_pretty(payload).map_err(CliError::SerializePayload)?;
    writer
        .write_all(body.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<GenerateConfig, CliError> {
    let merged = GenerateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    GenerateConfig::try_from(merged)
}
