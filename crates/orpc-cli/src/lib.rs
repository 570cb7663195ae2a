//! # orpc-cli — OpenRPC Document Tools
//!
//! Provides two binaries:
//!
//! ```bash
//! validate-openrpc openrpc.json
//! validate-openrpc --format json openrpc.json
//! generate-openrpc --output openrpc.json
//! ```
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handlers delegate to `orpc-schema`; no validation rules live here.
//! - Handlers return the process exit code. `0` means success, `1` covers
//!   usage, I/O, parse, and validation failures.

pub mod generate;
pub mod validate;

use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

/// Initialize stderr logging for a `-v` count: warn, info, debug, trace.
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Print a clap parse failure and map it to the process exit code.
///
/// `--help` and `--version` also arrive here and exit 0; usage errors exit
/// 1 instead of clap's default 2.
pub fn exit_on_parse_error(e: &clap::Error) -> ExitCode {
    let printed = e.print();
    ExitCode::from(parse_error_exit_code(e, &printed))
}

fn parse_error_exit_code(e: &clap::Error, printed: &io::Result<()>) -> u8 {
    // Logging is not initialized yet, so a failed print has nowhere to go;
    // the non-zero status is the only signal left.
    if printed.is_err() || e.use_stderr() {
        1
    } else {
        0
    }
}
