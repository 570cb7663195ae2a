//! # Structural Validation
//!
//! Runs the fixed list of required-field checks over a parsed
//! [`Document`] and collects every violation into a [`ValidationReport`].
//!
//! ## Ordering
//!
//! Checks never short-circuit. Errors are recorded in this order:
//!
//! 1. `openrpc`
//! 2. `info`, then `info.title` and `info.version` when `info` is present
//! 3. `methods`, or its array type
//! 4. per method, in array order: `name`, `params` (presence, then array
//!    type), `result`
//!
//! Method checks run only when `methods` is an array.

use std::fmt;
use std::path::Path;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::document::{display_text, field, has_field, is_array, Document, DocumentSummary};
use crate::error::DocumentLoadError;

/// Label shown for a method whose `name` is absent.
pub const UNNAMED_METHOD: &str = "unnamed";

// ---------------------------------------------------------------------------
// Error records
// ---------------------------------------------------------------------------

/// Where in the document a violation was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A top-level field (or a field nested under `info`).
    Document,
    /// An entry of the `methods` array.
    Method {
        /// Zero-based position in `methods`.
        index: usize,
        /// Display name in parentheses. `None` for the `name` check itself,
        /// which is reported without a label.
        label: Option<String>,
    },
}

impl Location {
    /// Machine-readable path: `document` or `methods[<index>]`.
    pub fn path(&self) -> String {
        match self {
            Self::Document => "document".to_string(),
            Self::Method { index, .. } => format!("methods[{index}]"),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => f.write_str("document"),
            Self::Method { index, label: None } => write!(f, "Method {index}"),
            Self::Method {
                index,
                label: Some(label),
            } => write!(f, "Method {index} ({label})"),
        }
    }
}

/// The rule a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The field is absent or `null`.
    MissingField(&'static str),
    /// The field is present but not a JSON array.
    NotAnArray(&'static str),
}

/// A single structural violation.
///
/// Kept as data until output time; `Display` yields the operator-facing
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub location: Location,
    pub violation: Violation,
}

impl ValidationError {
    fn document(violation: Violation) -> Self {
        Self {
            location: Location::Document,
            violation,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.location, self.violation) {
            (Location::Document, Violation::MissingField(name)) => {
                write!(f, "Missing required field: {name}")
            }
            (Location::Document, Violation::NotAnArray(name)) => {
                write!(f, "Field \"{name}\" must be an array")
            }
            (location, Violation::MissingField(name)) => {
                write!(f, "{location}: Missing required field \"{name}\"")
            }
            (location, Violation::NotAnArray(name)) => {
                write!(f, "{location}: Field \"{name}\" must be an array")
            }
        }
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationError", 2)?;
        state.serialize_field("location", &self.location.path())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Informational fields, extracted whether or not the document is valid.
    pub summary: DocumentSummary,
    /// Every violation, in check order.
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// `true` when no check failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of violations found.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Run every structural check against `doc`.
pub fn validate(doc: &Document) -> ValidationReport {
    let mut errors = Vec::new();

    check_openrpc(doc, &mut errors);
    check_info(doc, &mut errors);
    check_methods(doc, &mut errors);

    ValidationReport {
        summary: doc.summary(),
        errors,
    }
}

/// Load the document at `path` and validate it.
///
/// # Errors
///
/// Returns the [`DocumentLoadError`] from [`Document::load`]; no check runs
/// in that case.
pub fn validate_path(path: &Path) -> Result<ValidationReport, DocumentLoadError> {
    let doc = Document::load(path)?;
    Ok(validate(&doc))
}

fn check_openrpc(doc: &Document, errors: &mut Vec<ValidationError>) {
    if doc.field("openrpc").is_none() {
        errors.push(ValidationError::document(Violation::MissingField("openrpc")));
    }
}

fn check_info(doc: &Document, errors: &mut Vec<ValidationError>) {
    let Some(info) = doc.field("info") else {
        errors.push(ValidationError::document(Violation::MissingField("info")));
        return;
    };

    if !has_field(info, "title") {
        errors.push(ValidationError::document(Violation::MissingField(
            "info.title",
        )));
    }
    if !has_field(info, "version") {
        errors.push(ValidationError::document(Violation::MissingField(
            "info.version",
        )));
    }
}

fn check_methods(doc: &Document, errors: &mut Vec<ValidationError>) {
    let Some(methods) = doc.field("methods") else {
        errors.push(ValidationError::document(Violation::MissingField("methods")));
        return;
    };

    let Some(methods) = methods.as_array() else {
        errors.push(ValidationError::document(Violation::NotAnArray("methods")));
        return;
    };

    for (index, method) in methods.iter().enumerate() {
        check_method(index, method, errors);
    }
}

fn check_method(index: usize, method: &Value, errors: &mut Vec<ValidationError>) {
    let name = field(method, "name");
    if name.is_none() {
        errors.push(ValidationError {
            location: Location::Method { index, label: None },
            violation: Violation::MissingField("name"),
        });
    }

    let location = Location::Method {
        index,
        label: Some(name.map_or_else(|| UNNAMED_METHOD.to_string(), display_text)),
    };

    match field(method, "params") {
        None => errors.push(ValidationError {
            location: location.clone(),
            violation: Violation::MissingField("params"),
        }),
        Some(params) if !is_array(params) => errors.push(ValidationError {
            location: location.clone(),
            violation: Violation::NotAnArray("params"),
        }),
        Some(_) => {}
    }

    if !has_field(method, "result") {
        errors.push(ValidationError {
            location,
            violation: Violation::MissingField("result"),
        });
    }
}
