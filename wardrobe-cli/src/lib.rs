//! Command-line interface for the wardrobe engine.
//!
//! The `generate` subcommand loads a wardrobe JSON file, combines its
//! garments into ranked outfits and prints a JSON payload describing the
//! result.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod generate;
mod payload;

pub use error::CliError;
use generate::{GenerateArgs, run_generate};
#[cfg(test)]
use generate::{
    GenerateConfig, GeneratorBuilder, config_from_layers_for_test, load_wardrobe,
    run_generate_with,
};

pub(crate) const ARG_GENERATE_WARDROBE: &str = "wardrobe";
pub(crate) const ARG_GENERATE_COUNT: &str = "count";
pub(crate) const ARG_GENERATE_OCCASION: &str = "occasion";
pub(crate) const ARG_GENERATE_SEASON: &str = "season";
pub(crate) const ARG_GENERATE_SEED: &str = "seed";
pub(crate) const ARG_GENERATE_EXHAUSTIVE: &str = "exhaustive";
pub(crate) const ENV_GENERATE_WARDROBE: &str = "WARDROBE_CMDS_GENERATE_WARDROBE_PATH";

/// Run the wardrobe CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// wardrobe cannot be loaded, or no outfit could be produced. Failure
/// payloads are printed to stdout before the error is returned.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wardrobe",
    about = "Outfit suggestions from a catalogued wardrobe",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Combine wardrobe garments into ranked outfits.
    Generate(GenerateArgs),
}

#[cfg(test)]
mod tests;
