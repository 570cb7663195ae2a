//! # generate-openrpc entry point
//!
//! Prints the example Ethereum OpenRPC document. Pipe it into
//! `validate-openrpc` or write it with `--output`.

use std::process::ExitCode;

use clap::Parser;

use orpc_cli::generate::{run_generate, GenerateArgs};

/// Generator for the example Ethereum OpenRPC document.
#[derive(Parser, Debug)]
#[command(name = "generate-openrpc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    generate: GenerateArgs,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return orpc_cli::exit_on_parse_error(&e),
    };

    orpc_cli::init_tracing(cli.verbose);

    match run_generate(&cli.generate) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
