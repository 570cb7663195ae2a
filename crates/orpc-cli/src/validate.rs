//! # Validate Command
//!
//! Loads one OpenRPC document, runs the structural checks, and renders the
//! result.
//!
//! Output contract:
//!
//! - the four summary lines always precede the verdict on stdout;
//! - fatal load failures go to stderr with no summary;
//! - the return value is the process exit code (0 valid, 1 anything else).

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use orpc_schema::{
    validate, Document, DocumentLoadError, DocumentSummary, ValidationError, ValidationReport,
};

/// Shown in place of an absent `openrpc` or `info.title`.
const NOT_SPECIFIED: &str = "Not specified";

/// Report format written to stdout.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary and bulleted errors.
    #[default]
    Text,
    /// A single pretty-printed JSON object.
    Json,
}

/// Arguments for document validation.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the OpenRPC JSON document.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Report format on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute validation against the process's stdout and stderr.
///
/// Returns exit code: 0 when the document is valid, 1 on any failure.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    validate_to(args, &mut stdout.lock(), &mut stderr.lock())
}

/// Execute validation, writing the report to `out` and fatal errors to `err`.
///
/// Only write failures are returned as `Err`; load and validation failures
/// are reported and mapped to exit code 1.
pub fn validate_to(args: &ValidateArgs, out: &mut impl Write, err: &mut impl Write) -> Result<u8> {
    tracing::debug!(path = %args.path.display(), format = ?args.format, "validating document");

    let doc = match Document::load(&args.path) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::debug!(path = %args.path.display(), error = %e, "failed to load document");
            write_load_error(err, &e).context("failed to write error message")?;
            return Ok(1);
        }
    };

    let report = validate(&doc);
    tracing::info!(
        openrpc = report.summary.openrpc.as_deref().unwrap_or(NOT_SPECIFIED),
        methods_count = report.summary.methods_count,
        error_count = report.error_count(),
        "validation complete"
    );

    let file = display_name(&args.path);
    let written = match args.format {
        OutputFormat::Text => write_text_report(out, &file, &report),
        OutputFormat::Json => write_json_report(out, &file, &report),
    };
    written.context("failed to write validation report")?;

    Ok(if report.is_valid() { 0 } else { 1 })
}

/// File name shown in the report: the basename, or the whole path when it
/// has none.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn write_load_error(err: &mut impl Write, error: &DocumentLoadError) -> io::Result<()> {
    match error {
        DocumentLoadError::MalformedJson(source) => {
            writeln!(err, "Error: Invalid JSON format")?;
            writeln!(err, "    {source}")
        }
        other => writeln!(err, "Error: {other}"),
    }
}

fn write_text_report(out: &mut impl Write, file: &str, report: &ValidationReport) -> io::Result<()> {
    let summary = &report.summary;
    writeln!(out, "Validating OpenRPC document: {file}")?;
    writeln!(
        out,
        "OpenRPC version: {}",
        summary.openrpc.as_deref().unwrap_or(NOT_SPECIFIED)
    )?;
    writeln!(
        out,
        "Title: {}",
        summary.title.as_deref().unwrap_or(NOT_SPECIFIED)
    )?;
    writeln!(out, "Methods count: {}", summary.methods_count)?;

    if report.is_valid() {
        writeln!(out, "OpenRPC document is valid!")?;
        writeln!(out, "All required fields are present and properly formatted.")?;
    } else {
        writeln!(out, "OpenRPC document has validation errors:")?;
        for error in &report.errors {
            writeln!(out, "   \u{2022} {error}")?;
        }
    }
    Ok(())
}

/// Shape of the `--format json` report.
#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    valid: bool,
    summary: &'a DocumentSummary,
    errors: &'a [ValidationError],
}

fn write_json_report(out: &mut impl Write, file: &str, report: &ValidationReport) -> io::Result<()> {
    let json = JsonReport {
        file,
        valid: report.is_valid(),
        summary: &report.summary,
        errors: &report.errors,
    };
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)
}
