//! Operation-level mock generation.
//!
//! Locates the relevant schema fragment for a route + method in the
//! externally supplied resolved spec, delegates to the override processor
//! and schema walker, and normalizes every failure into an empty object.
//! None of the five operations ever returns an error to the caller.

use crate::adapters::override_processor::apply_overrides;
use crate::adapters::schema_walker::SchemaWalker;
use crate::domain::error::GenerationError;
use crate::domain::{GeneratorOptions, RefOverride, SpecSource};
use serde_json::{json, Map, Value};
use tracing::warn;

pub struct MockPayloadGenerator {
    spec: Value,
    opts: GeneratorOptions,
}

impl MockPayloadGenerator {
    pub fn new(spec: Value) -> Self {
        Self::with_options(spec, GeneratorOptions::default())
    }

    pub fn with_options(spec: Value, opts: GeneratorOptions) -> Self {
        Self { spec, opts }
    }

    pub async fn from_source(
        source: &dyn SpecSource,
        opts: GeneratorOptions,
    ) -> anyhow::Result<Self> {
        Ok(Self::with_options(source.load().await?, opts))
    }

    /// Synthesize a request body for the operation. `{}` when the route,
    /// method or request schema is absent, or when generation fails.
    pub async fn generate_request_body(
        &self,
        route: &str,
        method: &str,
        overrides: &[RefOverride],
    ) -> Value {
        self.absorb(route, method, "request body", self.try_request_body(route, method, overrides))
    }

    /// Synthesize the first success (2xx) response. Returns
    /// `{"status": <code>, "body": <payload>}`, or `{}` when the operation
    /// declares no success response with content.
    pub async fn generate_response_body(
        &self,
        route: &str,
        method: &str,
        overrides: &[RefOverride],
    ) -> Value {
        self.absorb(route, method, "response body", self.try_response_body(route, method, overrides))
    }

    pub async fn generate_request_headers(
        &self,
        route: &str,
        method: &str,
        overrides: &[RefOverride],
    ) -> Value {
        self.absorb(route, method, "headers", self.try_parameters(route, method, "header", overrides))
    }

    pub async fn generate_request_query_params(
        &self,
        route: &str,
        method: &str,
        overrides: &[RefOverride],
    ) -> Value {
        self.absorb(route, method, "query params", self.try_parameters(route, method, "query", overrides))
    }

    pub async fn generate_request_path_params(
        &self,
        route: &str,
        method: &str,
        overrides: &[RefOverride],
    ) -> Value {
        self.absorb(route, method, "path params", self.try_parameters(route, method, "path", overrides))
    }

    /// The never-throws boundary: internal errors become `{}` plus a log line.
    fn absorb(
        &self,
        route: &str,
        method: &str,
        what: &str,
        result: Result<Value, GenerationError>,
    ) -> Value {
        match result {
            Ok(value) => value,
            Err(err) => {
                warn!("Error generating {} for {} {}: {}", what, method, route, err);
                json!({})
            }
        }
    }

    fn operation(&self, route: &str, method: &str) -> Option<&Value> {
        self.spec
            .get("paths")?
            .get(route)?
            .get(method)
            .filter(|op| op.is_object())
    }

    fn try_request_body(
        &self,
        route: &str,
        method: &str,
        overrides: &[RefOverride],
    ) -> Result<Value, GenerationError> {
        let Some(operation) = self.operation(route, method) else {
            return Ok(json!({}));
        };
        let Some(schema) = request_schema(operation) else {
            return Ok(json!({}));
        };
        self.generate(schema, overrides)
    }

    fn try_response_body(
        &self,
        route: &str,
        method: &str,
        overrides: &[RefOverride],
    ) -> Result<Value, GenerationError> {
        let Some(operation) = self.operation(route, method) else {
            return Ok(json!({}));
        };
        let Some((status, response)) = success_response(operation) else {
            return Ok(json!({}));
        };
        let Some(schema) = content_schema(response) else {
            return Ok(json!({}));
        };
        let body = self.generate(schema, overrides)?;
        Ok(json!({ "status": status, "body": body }))
    }

    fn try_parameters(
        &self,
        route: &str,
        method: &str,
        location: &str,
        overrides: &[RefOverride],
    ) -> Result<Value, GenerationError> {
        let Some(operation) = self.operation(route, method) else {
            return Ok(json!({}));
        };
        let Some(schema) = parameter_schema(operation, location) else {
            return Ok(json!({}));
        };
        self.generate(&schema, overrides)
    }

    fn generate(&self, schema: &Value, overrides: &[RefOverride]) -> Result<Value, GenerationError> {
        let processed = apply_overrides(schema, overrides);
        let walker = SchemaWalker::new(self.opts.clone());
        Ok(walker.walk(&processed)?.unwrap_or_else(|| json!({})))
    }
}

/// First declared media type schema of the operation's request body.
fn request_schema(operation: &Value) -> Option<&Value> {
    operation
        .get("requestBody")?
        .get("content")?
        .as_object()?
        .values()
        .next()?
        .get("schema")
}

/// First success response, selecting candidate status codes in ascending
/// numeric order so generation is deterministic for a given spec.
fn success_response(operation: &Value) -> Option<(&str, &Value)> {
    let responses = operation.get("responses")?.as_object()?;
    let mut codes: Vec<&String> = responses.keys().collect();
    codes.sort_by_key(|code| code.parse::<u32>().unwrap_or(u32::MAX));
    for code in codes {
        if let Ok(numeric) = code.parse::<u16>() {
            if (200..=299).contains(&numeric) {
                return Some((code.as_str(), &responses[code.as_str()]));
            }
        }
    }
    None
}

fn content_schema(response: &Value) -> Option<&Value> {
    response
        .get("content")?
        .as_object()?
        .values()
        .next()?
        .get("schema")
}

/// Build a synthetic object schema from the operation's parameters filtered
/// by location. Header parameters keep only their declared type; query and
/// path parameters carry their full schema.
fn parameter_schema(operation: &Value, location: &str) -> Option<Value> {
    let parameters = operation.get("parameters")?.as_array()?;
    let mut properties = Map::new();
    for parameter in parameters {
        if parameter.get("in").and_then(Value::as_str) != Some(location) {
            continue;
        }
        let Some(name) = parameter.get("name").and_then(Value::as_str) else {
            continue;
        };
        let schema = parameter.get("schema");
        let property = if location == "header" {
            schema
                .and_then(|s| s.get("type"))
                .map(|t| json!({ "type": t }))
                .unwrap_or_else(|| json!({}))
        } else {
            schema.cloned().unwrap_or_else(|| json!({}))
        };
        properties.insert(name.to_string(), property);
    }
    if properties.is_empty() {
        None
    } else {
        Some(json!({ "type": "object", "properties": properties }))
    }
}
