//! Entry point for the `wardrobe` command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use wardrobe_cli::CliError;

fn main() -> ExitCode {
    match wardrobe_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        // Help and version output go through clap so they keep its exit codes.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

#[expect(clippy::print_stderr, reason = "the binary reports failures on stderr")]
fn report(err: &CliError) {
    eprintln!("wardrobe: {err}");
}
