//! # validate-openrpc entry point
//!
//! Parses command-line arguments, initializes logging, and dispatches to
//! the validate handler.

use std::process::ExitCode;

use clap::Parser;

use orpc_cli::validate::{run_validate, ValidateArgs};

/// Structural validator for OpenRPC documents.
///
/// Checks that the required top-level fields and per-method fields are
/// present, then prints a summary and every violation found.
#[derive(Parser, Debug)]
#[command(name = "validate-openrpc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    validate: ValidateArgs,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return orpc_cli::exit_on_parse_error(&e),
    };

    orpc_cli::init_tracing(cli.verbose);

    tracing::debug!("validate-openrpc v{} starting", env!("CARGO_PKG_VERSION"));

    match run_validate(&cli.validate) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
