//! Recursive schema traversal.
//!
//! Walks an object/array/primitive schema tree and applies the value
//! synthesizer at leaves. Nodes are never mutated; the property-name context
//! travels as explicit parameters alongside the recursion.

use crate::adapters::value_synthesizer::{synthesize, synthesize_primitive};
use crate::domain::error::GenerationError;
use crate::domain::semantics::classify;
use crate::domain::{FieldContext, GeneratorOptions};
use rand::Rng;
use serde_json::{Map, Value};

/// Array-typed fields that must never come out empty.
const BULK_LIST_KEYS: [&str; 2] = ["individualQuotes", "individualTransfers"];

pub struct SchemaWalker {
    opts: GeneratorOptions,
}

impl SchemaWalker {
    pub fn new(opts: GeneratorOptions) -> Self {
        Self { opts }
    }

    /// Walk a schema tree from its root. `Ok(None)` means the tree produced
    /// nothing (e.g. a node with neither type nor properties).
    pub fn walk(&self, schema: &Value) -> Result<Option<Value>, GenerationError> {
        self.walk_node(schema, FieldContext::default(), 0)
    }

    fn walk_node(
        &self,
        node: &Value,
        ctx: FieldContext,
        depth: u32,
    ) -> Result<Option<Value>, GenerationError> {
        if !node.is_object() || depth > self.opts.max_depth {
            return Ok(None);
        }

        // Forced enumerations (from overrides or the source schema) win over
        // everything else.
        if let Some(options) = node.get("enum").and_then(Value::as_array) {
            if !options.is_empty() {
                let mut rng = rand::thread_rng();
                return Ok(Some(options[rng.gen_range(0..options.len())].clone()));
            }
        }

        match node.get("type").and_then(Value::as_str) {
            Some("array") => self.walk_array(node, ctx, depth),
            Some("object") => self.walk_object(node, ctx, depth),
            Some(primitive) => Ok(self.walk_primitive(primitive, node, ctx)),
            None if node.get("properties").is_some() => self.walk_object(node, ctx, depth),
            None => Ok(None),
        }
    }

    fn walk_array(
        &self,
        node: &Value,
        ctx: FieldContext,
        depth: u32,
    ) -> Result<Option<Value>, GenerationError> {
        let max_items = node
            .get("maxItems")
            .and_then(Value::as_u64)
            .unwrap_or(self.opts.max_items as u64);
        let min_items = node.get("minItems").and_then(Value::as_u64).unwrap_or(0);
        let mut count = max_items.min(min_items.max(1));

        if self.is_bulk_list(&ctx) {
            count = count.max(1);
        }

        let mut items = Vec::new();
        if let Some(item_schema) = node.get("items") {
            for _ in 0..count {
                if let Some(item) = self.walk_node(item_schema, ctx.items(), depth + 1)? {
                    items.push(item);
                }
            }
        }
        Ok(Some(Value::Array(items)))
    }

    fn is_bulk_list(&self, ctx: &FieldContext) -> bool {
        let named = |key: Option<&str>| key.is_some_and(|k| BULK_LIST_KEYS.contains(&k));
        named(ctx.key) || named(ctx.parent_key)
    }

    fn walk_object(
        &self,
        node: &Value,
        ctx: FieldContext,
        depth: u32,
    ) -> Result<Option<Value>, GenerationError> {
        let properties = match node.get("properties") {
            None => return Ok(Some(Value::Object(Map::new()))),
            Some(p) => p.as_object().ok_or_else(|| GenerationError::SchemaShape {
                path: ctx.key.unwrap_or("<root>").to_string(),
                reason: "'properties' is not an object".to_string(),
            })?,
        };
        let required: Vec<&str> = node
            .get("required")
            .and_then(Value::as_array)
            .map(|r| r.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let mut result = Map::new();
        for name in &required {
            if let Some(prop) = properties.get(*name) {
                if let Some(value) = self.walk_node(prop, ctx.child(name), depth + 1)? {
                    result.insert(name.to_string(), value);
                }
            }
        }
        if !self.opts.skip_non_required {
            for (name, prop) in properties {
                if required.contains(&name.as_str()) {
                    continue;
                }
                if let Some(value) = self.walk_node(prop, ctx.child(name), depth + 1)? {
                    result.insert(name.clone(), value);
                }
            }
        }

        apply_currency_consistency(&mut result);
        Ok(Some(Value::Object(result)))
    }

    fn walk_primitive(&self, type_name: &str, node: &Value, ctx: FieldContext) -> Option<Value> {
        if type_name == "string" {
            let pattern = node.get("pattern").and_then(Value::as_str);
            let format = node.get("format").and_then(Value::as_str);
            if let Some(category) = classify(&ctx, pattern, format) {
                return Some(synthesize(category));
            }
        }
        synthesize_primitive(type_name, &ctx, node)
    }
}

/// A sibling `fees` object always carries the same currency as `amount`.
fn apply_currency_consistency(result: &mut Map<String, Value>) {
    let amount_currency = result
        .get("amount")
        .and_then(|amount| amount.get("currency"))
        .cloned();
    if let Some(currency) = amount_currency {
        if let Some(fees) = result.get_mut("fees").and_then(Value::as_object_mut) {
            fees.insert("currency".to_string(), currency);
        }
    }
}
