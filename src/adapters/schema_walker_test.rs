use super::schema_walker::SchemaWalker;
use crate::domain::GeneratorOptions;
use serde_json::json;

fn walker() -> SchemaWalker {
    SchemaWalker::new(GeneratorOptions::default())
}

#[test]
fn test_walk_object_includes_required_and_optional() {
    let schema = json!({
        "type": "object",
        "required": ["quoteId"],
        "properties": {
            "quoteId": { "type": "string" },
            "note": { "type": "string" }
        }
    });

    let result = walker().walk(&schema).unwrap().unwrap();
    assert!(result.get("quoteId").is_some());
    assert!(result.get("note").is_some());
}

#[test]
fn test_walk_object_skip_non_required() {
    let opts = GeneratorOptions {
        skip_non_required: true,
        ..Default::default()
    };
    let schema = json!({
        "type": "object",
        "required": ["quoteId"],
        "properties": {
            "quoteId": { "type": "string" },
            "note": { "type": "string" }
        }
    });

    let result = SchemaWalker::new(opts).walk(&schema).unwrap().unwrap();
    assert!(result.get("quoteId").is_some());
    assert!(result.get("note").is_none());
}

#[test]
fn test_walk_array_default_cardinality() {
    // count = min(maxItems | 2, max(minItems | 0, 1)) = 1 with no bounds
    let schema = json!({
        "type": "array",
        "items": { "type": "string" }
    });

    let result = walker().walk(&schema).unwrap().unwrap();
    assert_eq!(result.as_array().unwrap().len(), 1);
}

#[test]
fn test_walk_array_honors_min_items() {
    let schema = json!({
        "type": "array",
        "minItems": 2,
        "maxItems": 5,
        "items": { "type": "integer" }
    });

    let result = walker().walk(&schema).unwrap().unwrap();
    assert_eq!(result.as_array().unwrap().len(), 2);
}

#[test]
fn test_walk_array_zero_max_items_yields_empty() {
    let schema = json!({
        "type": "array",
        "maxItems": 0,
        "items": { "type": "string" }
    });

    let result = walker().walk(&schema).unwrap().unwrap();
    assert!(result.as_array().unwrap().is_empty());
}

#[test]
fn test_bulk_list_forces_at_least_one_item() {
    let schema = json!({
        "type": "object",
        "properties": {
            "individualTransfers": {
                "type": "array",
                "maxItems": 0,
                "items": { "type": "object", "properties": { "transferId": { "type": "string" } } }
            }
        }
    });

    let result = walker().walk(&schema).unwrap().unwrap();
    let transfers = result["individualTransfers"].as_array().unwrap();
    assert_eq!(transfers.len(), 1);
}

#[test]
fn test_fees_currency_follows_amount_currency() {
    let schema = json!({
        "type": "object",
        "required": ["amount", "fees"],
        "properties": {
            "amount": {
                "type": "object",
                "required": ["currency", "amount"],
                "properties": {
                    "currency": { "type": "string" },
                    "amount": { "type": "string" }
                }
            },
            "fees": {
                "type": "object",
                "required": ["currency", "amount"],
                "properties": {
                    "currency": { "type": "string" },
                    "amount": { "type": "string" }
                }
            }
        }
    });

    for _ in 0..10 {
        let result = walker().walk(&schema).unwrap().unwrap();
        assert_eq!(result["fees"]["currency"], result["amount"]["currency"]);
    }
}

#[test]
fn test_enum_short_circuits() {
    let schema = json!({ "type": "string", "enum": ["only"] });
    let result = walker().walk(&schema).unwrap().unwrap();
    assert_eq!(result, "only");
}

#[test]
fn test_node_without_type_or_properties_yields_nothing() {
    let schema = json!({ "description": "opaque" });
    assert!(walker().walk(&schema).unwrap().is_none());
}

#[test]
fn test_untyped_object_with_properties_walks() {
    let schema = json!({
        "properties": {
            "fspId": { "type": "string" }
        }
    });
    let result = walker().walk(&schema).unwrap().unwrap();
    assert!(result.get("fspId").is_some());
}

#[test]
fn test_depth_cap_prunes_deep_subtrees() {
    let opts = GeneratorOptions {
        max_depth: 1,
        ..Default::default()
    };
    let schema = json!({
        "type": "object",
        "properties": {
            "outer": {
                "type": "object",
                "properties": {
                    "inner": { "type": "string" }
                }
            }
        }
    });

    let result = SchemaWalker::new(opts).walk(&schema).unwrap().unwrap();
    let outer = result["outer"].as_object().unwrap();
    assert!(outer.is_empty());
}

#[test]
fn test_undefined_properties_are_omitted() {
    let schema = json!({
        "type": "object",
        "properties": {
            "known": { "type": "boolean" },
            "opaque": { "description": "no type, no properties" }
        }
    });

    let result = walker().walk(&schema).unwrap().unwrap();
    assert!(result.get("known").is_some());
    assert!(result.get("opaque").is_none());
}

#[test]
fn test_malformed_properties_is_an_error() {
    let schema = json!({
        "type": "object",
        "properties": "not-an-object"
    });
    assert!(walker().walk(&schema).is_err());
}
