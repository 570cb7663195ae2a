//! # Generate Command
//!
//! Writes the example Ethereum OpenRPC document built by
//! [`orpc_schema::eth::example_document`] as pretty-printed JSON, either to
//! stdout or to a file.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use orpc_schema::eth::example_document;

/// Arguments for document generation.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Write the document to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Execute generation. Returns exit code 0 on success.
pub fn run_generate(args: &GenerateArgs) -> Result<u8> {
    match &args.output {
        Some(path) => {
            let mut buf = Vec::new();
            generate_to(&mut buf)?;
            std::fs::write(path, &buf)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = buf.len(), "wrote OpenRPC document");
        }
        None => {
            let stdout = io::stdout();
            generate_to(&mut stdout.lock())?;
        }
    }
    Ok(0)
}

/// Serialize the example document into `out`, followed by a newline.
pub fn generate_to(out: &mut impl Write) -> Result<()> {
    let doc = example_document();
    tracing::debug!(methods = doc.methods.len(), "generating example document");
    serde_json::to_writer_pretty(&mut *out, &doc).context("failed to serialize document")?;
    writeln!(out).context("failed to write document")?;
    Ok(())
}
