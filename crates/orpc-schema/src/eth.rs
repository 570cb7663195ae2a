//! # `eth_*` Example Namespace
//!
//! Builders for a small Ethereum JSON-RPC API described with the typed
//! model: reusable scalar schemas registered under `components.schemas`,
//! and the `eth_blockNumber` / `eth_getBalance` method objects that
//! reference them.

use std::collections::BTreeMap;

use crate::model::{
    ContentDescriptor, Example, ExamplePairing, Info, Method, OpenRpcDocument, Schema,
};

/// Hex-encoded quantity without leading zeros.
pub const QUANTITY_PATTERN: &str = r"^0x(0|[1-9a-fA-F][0-9a-fA-F]*)$";

/// 20-byte hex address.
pub const ADDRESS_PATTERN: &str = r"^0x[0-9a-fA-F]{40}$";

fn string_schema(title: &str, description: &str, pattern: &str) -> Schema {
    Schema {
        title: title.to_string(),
        kind: "string".to_string(),
        description: description.to_string(),
        pattern: Some(pattern.to_string()),
    }
}

/// Schemas referenced by the `eth_*` methods, keyed by component name.
pub fn schemas() -> BTreeMap<String, Schema> {
    BTreeMap::from([
        (
            "BlockNumber".to_string(),
            string_schema("BlockNumber", "Hex block number", QUANTITY_PATTERN),
        ),
        (
            "Address".to_string(),
            string_schema("Address", "20-byte address (hex)", ADDRESS_PATTERN),
        ),
        (
            "WeiBalance".to_string(),
            string_schema("WeiBalance", "Wei (hex quantity)", QUANTITY_PATTERN),
        ),
    ])
}

/// `eth_blockNumber`: no params, returns the latest block number.
pub fn block_number() -> Method {
    Method {
        name: "eth_blockNumber".to_string(),
        summary: "Current block number".to_string(),
        description: "Returns the most recent block number.".to_string(),
        params: Vec::new(),
        result: ContentDescriptor::with_component_ref(
            "blockNumber",
            "Most recent block number.",
            "BlockNumber",
        ),
        examples: vec![ExamplePairing {
            name: "ethBlockNumberExample".to_string(),
            params: Vec::new(),
            result: Example::new("exampleBlockNumber", "0x4b7"),
        }],
    }
}

/// `eth_getBalance`: balance of an address at a block.
pub fn get_balance() -> Method {
    Method {
        name: "eth_getBalance".to_string(),
        summary: "Balance of an address".to_string(),
        description: "Returns the balance of the account of given address.".to_string(),
        params: vec![
            ContentDescriptor::with_component_ref("address", "Address to check.", "Address"),
            ContentDescriptor::with_component_ref(
                "blockTag",
                "Block number or tag.",
                "BlockNumber",
            ),
        ],
        result: ContentDescriptor::with_component_ref("balance", "Balance in wei.", "WeiBalance"),
        examples: vec![ExamplePairing {
            name: "ethGetBalanceExample".to_string(),
            params: vec![
                Example::new("address", "0x407d73d8a49eeb85d32cf465507dd71d507100c1"),
                Example::new("blockTag", "latest"),
            ],
            result: Example::new("exampleBalance", "0x0234c8a3397aab58"),
        }],
    }
}

/// The complete example document: both methods plus their schemas.
pub fn example_document() -> OpenRpcDocument {
    OpenRpcDocument::new(Info {
        title: "My Practice Ethereum API".to_string(),
        version: "1.0.0".to_string(),
    })
    .with_method(block_number())
    .with_method(get_balance())
    .with_schemas(schemas())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SchemaOrReference;
    use crate::validate::validate;

    #[test]
    fn example_document_passes_validation() {
        let doc = example_document().to_document().unwrap();
        let report = validate(&doc);
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
        assert_eq!(report.summary.openrpc.as_deref(), Some("1.3.2"));
        assert_eq!(
            report.summary.title.as_deref(),
            Some("My Practice Ethereum API")
        );
        assert_eq!(report.summary.methods_count, 2);
    }

    #[test]
    fn every_reference_resolves_to_a_registered_schema() {
        let doc = example_document();
        let registry = &doc.components.as_ref().unwrap().schemas;
        for method in &doc.methods {
            for descriptor in method.params.iter().chain(std::iter::once(&method.result)) {
                if let SchemaOrReference::Reference(r) = &descriptor.schema {
                    let name = r
                        .reference
                        .strip_prefix("#/components/schemas/")
                        .expect("component reference");
                    assert!(registry.contains_key(name), "dangling $ref {}", r.reference);
                }
            }
        }
    }

    #[test]
    fn example_document_round_trips_through_json() {
        let doc = example_document();
        let text = serde_json::to_string_pretty(&doc).unwrap();
        let parsed: OpenRpcDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn block_number_example_matches_quantity_shape() {
        let method = block_number();
        let value = method.examples[0].result.value.as_str().unwrap();
        assert!(value.starts_with("0x"));
        assert!(method.params.is_empty());
    }
}
