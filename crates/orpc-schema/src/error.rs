//! # Error Types — Document Loading
//!
//! Fatal failures that stop a run before any structural check executes.
//! Structural violations are not errors in this sense: they are data
//! carried by [`ValidationReport`](crate::ValidationReport).

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while turning a path or string into a [`Document`](crate::Document).
#[derive(Error, Debug)]
pub enum DocumentLoadError {
    /// The path does not exist. Checked before any read is attempted.
    #[error("File '{}' not found.", .path.display())]
    NotFound {
        /// The path as given by the caller.
        path: PathBuf,
    },

    /// The path exists but could not be read (a directory, permissions).
    #[error("Could not read '{}': {source}", .path.display())]
    Unreadable {
        /// The path as given by the caller.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid JSON. Carries the parser's diagnostic.
    #[error("Invalid JSON format: {0}")]
    MalformedJson(#[source] serde_json::Error),
}

impl DocumentLoadError {
    /// Whether the failure happened in the JSON parser rather than the filesystem.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::MalformedJson(_))
    }
}
