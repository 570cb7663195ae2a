//! # orpc-schema — OpenRPC Structural Validation
//!
//! Shallow, presence-based validation of a single OpenRPC document.
//!
//! ## Responsibilities
//!
//! - **Loading:** read one file and parse it as JSON. Missing files,
//!   unreadable paths, and malformed JSON are fatal and surface as
//!   [`DocumentLoadError`].
//! - **Checks:** required top-level fields (`openrpc`, `info`,
//!   `info.title`, `info.version`, `methods`) and per-method fields
//!   (`name`, `params`, `result`). Every check runs; violations are
//!   collected rather than returned as the first error.
//! - **Report:** [`ValidationReport`] carries the ordered violations and a
//!   [`DocumentSummary`] for informational display.
//! - **Authoring:** [`model`] holds serde types for building documents, and
//!   [`eth`] assembles an example Ethereum API from them.
//!
//! Full OpenRPC schema conformance, `$ref` resolution, and validation of
//! params/result payloads are out of scope.

pub mod document;
pub mod error;
pub mod eth;
pub mod model;
pub mod validate;

// Re-export primary types.
pub use document::{Document, DocumentSummary};
pub use error::DocumentLoadError;
pub use model::{
    ContentDescriptor, Info, Method, OpenRpcDocument, Reference, Schema, SchemaOrReference,
    OPENRPC_VERSION,
};
pub use validate::{
    validate, validate_path, Location, ValidationError, ValidationReport, Violation,
    UNNAMED_METHOD,
};
