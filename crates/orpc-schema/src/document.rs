//! # OpenRPC Document
//!
//! Loads a single OpenRPC document from disk and exposes presence-checking
//! accessors over the untyped JSON tree.
//!
//! ## Presence rule
//!
//! A field is present when its parent is a JSON object, the key exists, and
//! the value is not `null`. Anything else (a missing key, an explicit `null`,
//! or a parent that is a string, number, or array) counts as absent. Every
//! check in [`crate::validate`] goes through [`field`] so the rule is applied
//! uniformly.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::DocumentLoadError;

/// Look up `key` on `value`, applying the presence rule.
pub fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value
        .as_object()
        .and_then(|map| map.get(key))
        .filter(|v| !v.is_null())
}

/// Whether `key` is present on `value` under the presence rule.
pub fn has_field(value: &Value, key: &str) -> bool {
    field(value, key).is_some()
}

/// Whether `value` is a JSON array.
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// Whether `value` is a JSON string.
pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// Text used when a value is shown to an operator.
///
/// Strings are shown without quotes; every other value as compact JSON.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A parsed OpenRPC document.
///
/// The shape is not enforced at parse time: any valid JSON value is
/// accepted and the structural checks report what is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Load and parse the document at `path`.
    ///
    /// # Errors
    ///
    /// - [`DocumentLoadError::NotFound`] if the path does not exist; no read
    ///   is attempted.
    /// - [`DocumentLoadError::Unreadable`] if the path exists but reading it
    ///   fails.
    /// - [`DocumentLoadError::MalformedJson`] if the bytes are not JSON.
    pub fn load(path: &Path) -> Result<Self, DocumentLoadError> {
        if !path.exists() {
            return Err(DocumentLoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(path).map_err(|source| DocumentLoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_slice(&bytes)
    }

    /// Parse a document from a string.
    pub fn parse(content: &str) -> Result<Self, DocumentLoadError> {
        Self::from_slice(content.as_bytes())
    }

    /// Parse a document from raw bytes. Invalid UTF-8 is a parse error.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DocumentLoadError> {
        serde_json::from_slice(bytes)
            .map(Self::from_value)
            .map_err(DocumentLoadError::MalformedJson)
    }

    /// Wrap an already-parsed JSON value.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// The underlying JSON value.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Top-level field lookup under the presence rule.
    pub fn field(&self, key: &str) -> Option<&Value> {
        field(&self.root, key)
    }

    /// The `methods` array, if present and array-typed.
    pub fn methods(&self) -> Option<&[Value]> {
        self.field("methods")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    /// Extract the informational fields shown before the verdict.
    ///
    /// Never fails: absent values become `None` and a missing or
    /// non-array `methods` counts as zero.
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            openrpc: self.field("openrpc").map(display_text),
            title: self
                .field("info")
                .and_then(|info| field(info, "title"))
                .map(display_text),
            methods_count: self.methods().map_or(0, <[Value]>::len),
        }
    }
}

/// Informational metadata extracted from a document regardless of validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    /// Declared `openrpc` version.
    pub openrpc: Option<String>,
    /// `info.title`.
    pub title: Option<String>,
    /// Length of `methods` when it is an array, otherwise zero.
    pub methods_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_treats_null_as_absent() {
        let value = json!({"a": null, "b": 0, "c": ""});
        assert!(!has_field(&value, "a"));
        assert!(has_field(&value, "b"));
        assert!(has_field(&value, "c"));
        assert!(!has_field(&value, "d"));
    }

    #[test]
    fn field_on_non_object_is_absent() {
        assert!(field(&json!("name"), "name").is_none());
        assert!(field(&json!([{"name": "x"}]), "name").is_none());
        assert!(field(&Value::Null, "name").is_none());
    }

    #[test]
    fn type_predicates() {
        assert!(is_array(&json!([])));
        assert!(!is_array(&json!({})));
        assert!(is_string(&json!("x")));
        assert!(!is_string(&json!(1)));
    }

    #[test]
    fn display_text_unquotes_strings_only() {
        assert_eq!(display_text(&json!("1.2.6")), "1.2.6");
        assert_eq!(display_text(&json!(1.5)), "1.5");
        assert_eq!(display_text(&json!({"k": true})), r#"{"k":true}"#);
    }

    #[test]
    fn summary_of_complete_document() {
        let doc = Document::from_value(json!({
            "openrpc": "1.2.6",
            "info": {"title": "T", "version": "1.0"},
            "methods": [{}, {}]
        }));
        let summary = doc.summary();
        assert_eq!(summary.openrpc.as_deref(), Some("1.2.6"));
        assert_eq!(summary.title.as_deref(), Some("T"));
        assert_eq!(summary.methods_count, 2);
    }

    #[test]
    fn summary_of_empty_object() {
        let summary = Document::from_value(json!({})).summary();
        assert_eq!(
            summary,
            DocumentSummary {
                openrpc: None,
                title: None,
                methods_count: 0
            }
        );
    }

    #[test]
    fn summary_counts_zero_for_non_array_methods() {
        let doc = Document::from_value(json!({"methods": "eth_blockNumber"}));
        assert_eq!(doc.summary().methods_count, 0);
        assert!(doc.methods().is_none());
    }

    #[test]
    fn summary_of_non_object_root() {
        let summary = Document::from_value(json!([1, 2, 3])).summary();
        assert_eq!(summary.openrpc, None);
        assert_eq!(summary.methods_count, 0);
    }

    #[test]
    fn parse_rejects_truncated_json() {
        let err = Document::parse(r#"{"openrpc":"#).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn from_slice_rejects_invalid_utf8() {
        let err = Document::from_slice(&[b'"', 0xff, 0xfe, b'"']).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn parse_accepts_any_json_value() {
        assert!(Document::parse("42").is_ok());
        assert!(Document::parse("null").is_ok());
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Document::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DocumentLoadError::NotFound { .. }));
    }

    #[test]
    fn load_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = Document::load(dir.path()).unwrap_err();
        assert!(matches!(err, DocumentLoadError::Unreadable { .. }));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openrpc.json");
        std::fs::write(&path, br#"{"openrpc":"1.3.2"}"#).unwrap();
        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.field("openrpc"), Some(&json!("1.3.2")));
    }
}
