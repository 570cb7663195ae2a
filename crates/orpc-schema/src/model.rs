//! # Typed OpenRPC Model
//!
//! Strongly-typed subset of the OpenRPC object model used to author
//! documents: the root object, `info`, method objects, content
//! descriptors, schema objects, and example pairings.
//!
//! The validator in [`crate::validate`] never requires these types; it
//! works on untyped JSON so that malformed documents can still be reported.
//! These types go the other way: anything built from them serializes to a
//! document that passes every structural check.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::Document;

/// OpenRPC specification version written by [`OpenRpcDocument::new`].
pub const OPENRPC_VERSION: &str = "1.3.2";

/// Root OpenRPC object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenRpcDocument {
    pub openrpc: String,
    pub info: Info,
    pub methods: Vec<Method>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
}

impl OpenRpcDocument {
    /// An empty document for `info`, declaring [`OPENRPC_VERSION`].
    pub fn new(info: Info) -> Self {
        Self {
            openrpc: OPENRPC_VERSION.to_string(),
            info,
            methods: Vec::new(),
            components: None,
        }
    }

    /// Append `method` to `methods`.
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Merge `schemas` into `components.schemas`. Later entries win on
    /// name collisions.
    pub fn with_schemas(mut self, schemas: BTreeMap<String, Schema>) -> Self {
        self.components
            .get_or_insert_with(Components::default)
            .schemas
            .extend(schemas);
        self
    }

    /// Serialize into an untyped [`Document`] for validation.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if an example value cannot be encoded.
    pub fn to_document(&self) -> Result<Document, serde_json::Error> {
        serde_json::to_value(self).map(Document::from_value)
    }
}

/// `info` object. Unknown keys are rejected on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Info {
    pub title: String,
    pub version: String,
}

/// `components` object; only the schema registry is modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: BTreeMap<String, Schema>,
}

/// A method object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub summary: String,
    pub description: String,
    pub params: Vec<ContentDescriptor>,
    pub result: ContentDescriptor,
    #[serde(default)]
    pub examples: Vec<ExamplePairing>,
}

/// Named, described value with an inline schema or a `$ref`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDescriptor {
    pub name: String,
    pub description: String,
    pub schema: SchemaOrReference,
}

impl ContentDescriptor {
    /// A descriptor pointing at `#/components/schemas/<schema_name>`.
    pub fn with_component_ref(name: &str, description: &str, schema_name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            schema: SchemaOrReference::Reference(Reference::component(schema_name)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrReference {
    Reference(Reference),
    Schema(Schema),
}

/// A JSON reference object (`{"$ref": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "$ref")]
    pub reference: String,
}

impl Reference {
    /// Reference into `components.schemas`.
    pub fn component(schema_name: &str) -> Self {
        Self {
            reference: format!("#/components/schemas/{schema_name}"),
        }
    }
}

/// Minimal schema object for string-typed scalars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Example params/result pairing for a method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamplePairing {
    pub name: String,
    pub params: Vec<Example>,
    pub result: Example,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub name: String,
    pub value: Value,
}

impl Example {
    pub fn new(name: &str, value: impl Into<Value>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}
