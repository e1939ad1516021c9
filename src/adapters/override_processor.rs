//! Path-scoped reference overrides.
//!
//! Applies a caller-supplied list of dotted-path overrides onto a cloned
//! schema tree before walking, rewriting matched nodes into forced string
//! enumerations. Afterwards every string-typed leaf is annotated with a
//! format token inferred from its field name, so the walker's generic string
//! path still benefits from semantic classification.

use crate::adapters::value_synthesizer::{PARTY_ID_TYPES, STATUS_VALUES};
use crate::domain::RefOverride;
use serde_json::{json, Value};

/// Clone `schema` and rewrite it per `overrides`. Unresolvable overrides are
/// ignored; the format-annotation pass runs regardless.
pub fn apply_overrides(schema: &Value, overrides: &[RefOverride]) -> Value {
    let mut processed = schema.clone();
    for reference in overrides {
        apply_one(&mut processed, reference);
    }
    annotate_formats(&mut processed, None);
    processed
}

fn apply_one(schema: &mut Value, reference: &RefOverride) {
    let Some(values) = forced_values(reference) else {
        return;
    };

    let segments: Vec<String> = reference.id.split('.').map(unescape_segment).collect();
    if let Some(target) = resolve_dotted_path(schema, &segments) {
        force_enum(target, &values);
    }

    // Best-effort nested search: an incomplete dotted path still hits any
    // property whose literal name equals the last segment.
    if let Some(last) = segments.last() {
        rewrite_matching_properties(schema, last, &values);
    }
}

/// JSON-Pointer-style unescaping: `~1` encodes `/`, `~0` encodes `~`.
fn unescape_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

/// The enumeration an override forces, from the fixed special-case table.
fn forced_values(reference: &RefOverride) -> Option<Vec<String>> {
    if reference.id == "Content-Length" {
        return Some(vec!["123".to_string()]);
    }
    if reference.id == "partyIdType" {
        return Some(PARTY_ID_TYPES.iter().map(|v| v.to_string()).collect());
    }
    let pattern = reference.pattern.as_deref()?;
    let alternatives: Vec<&str> = pattern.split('|').collect();
    let literal = alternatives.iter().all(|alt| {
        !alt.is_empty()
            && alt
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == ' ')
    });
    if literal {
        Some(alternatives.iter().map(|v| v.to_string()).collect())
    } else {
        Some(STATUS_VALUES.iter().map(|v| v.to_string()).collect())
    }
}

/// Resolve a dotted path under `properties`, descending through nested
/// `properties` and `items.properties`. Array-typed roots start at
/// `items.properties`.
fn resolve_dotted_path<'a>(schema: &'a mut Value, segments: &[String]) -> Option<&'a mut Value> {
    let root = if schema.get("type").and_then(Value::as_str) == Some("array") {
        schema.get_mut("items")?
    } else {
        schema
    };

    let mut current = root.get_mut("properties")?.get_mut(segments.first()?)?;
    for segment in &segments[1..] {
        current = child_property(current, segment)?;
    }
    Some(current)
}

fn child_property<'a>(node: &'a mut Value, name: &str) -> Option<&'a mut Value> {
    let container = if node.get("properties").is_some() {
        node.get_mut("properties")?
    } else {
        node.get_mut("items")?.get_mut("properties")?
    };
    container.get_mut(name)
}

fn force_enum(target: &mut Value, values: &[String]) {
    let Some(obj) = target.as_object_mut() else {
        return;
    };
    obj.insert("type".to_string(), json!("string"));
    obj.insert("enum".to_string(), json!(values));
    obj.remove("pattern");
    obj.remove("format");
}

fn rewrite_matching_properties(node: &mut Value, name: &str, values: &[String]) {
    if let Some(properties) = node.get_mut("properties").and_then(Value::as_object_mut) {
        for (key, prop) in properties.iter_mut() {
            if key == name {
                force_enum(prop, values);
            } else {
                rewrite_matching_properties(prop, name, values);
            }
        }
    }
    if let Some(items) = node.get_mut("items") {
        rewrite_matching_properties(items, name, values);
    }
}

/// Stamp an inferred `format` token on string-typed leaves, derived purely
/// from the field name. A string-typed `complexName` is rewritten into the
/// first/middle/last-name object schema.
fn annotate_formats(node: &mut Value, key: Option<&str>) {
    let Some(obj) = node.as_object_mut() else {
        return;
    };

    if let Some(properties) = obj.get_mut("properties").and_then(Value::as_object_mut) {
        let names: Vec<String> = properties.keys().cloned().collect();
        for name in names {
            if let Some(prop) = properties.get_mut(&name) {
                annotate_formats(prop, Some(&name));
            }
        }
    }
    if let Some(items) = obj.get_mut("items") {
        annotate_formats(items, key);
    }

    if obj.get("type").and_then(Value::as_str) != Some("string") {
        return;
    }
    let Some(key) = key else {
        return;
    };

    if ends_with(key, "complexName") {
        obj.insert("type".to_string(), json!("object"));
        obj.insert(
            "properties".to_string(),
            json!({
                "firstName": { "type": "string", "format": "name" },
                "middleName": { "type": "string", "format": "name" },
                "lastName": { "type": "string", "format": "name" }
            }),
        );
        return;
    }
    if let Some(format) = inferred_format(key) {
        obj.insert("format".to_string(), json!(format));
    }
}

fn ends_with(key: &str, token: &str) -> bool {
    let key = key.to_lowercase();
    let token = token.to_lowercase();
    key == token || key.ends_with(&token)
}

fn inferred_format(key: &str) -> Option<&'static str> {
    let lower = key.to_lowercase();
    // transferState and subScenario first: the bare tokens below would
    // otherwise match them as suffixes.
    if ends_with(&lower, "transferState") {
        return Some("transfer-state");
    }
    if ends_with(&lower, "subScenario") {
        return Some("sub-scenario");
    }
    if ["state", "status", "reason"].iter().any(|t| ends_with(&lower, t)) {
        return Some("transaction-state");
    }
    if ends_with(&lower, "partyIdType") || ends_with(&lower, "idType") {
        return Some("party-id-type");
    }
    if ends_with(&lower, "fspId") {
        return Some("fsp-id");
    }
    if ends_with(&lower, "currency") {
        return Some("currency");
    }
    if ["expiration", "dateTime", "timestamp"].iter().any(|t| ends_with(&lower, t)) {
        return Some("date-time");
    }
    if lower == "date" || ends_with(&lower, "dateOfBirth") {
        return Some("date");
    }
    if ends_with(&lower, "partyIdentifier") {
        return Some("party-identifier");
    }
    if ends_with(&lower, "scenario") {
        return Some("transaction-scenario");
    }
    if ends_with(&lower, "initiatorType") {
        return Some("transaction-initiator-type");
    }
    if ends_with(&lower, "initiator") {
        return Some("transaction-initiator");
    }
    if matches!(
        lower.as_str(),
        "bulkquoteid" | "bulktransferid" | "quoteid" | "transferid" | "id"
    ) {
        return Some("uuid");
    }
    None
}
