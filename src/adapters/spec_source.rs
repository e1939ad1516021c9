//! File-backed spec source.
//!
//! Reads an already-dereferenced OpenAPI document (JSON or YAML) and applies
//! the one normalization the generator expects from its loader: path-level
//! `parameters` merged into each method's own list, path-level entries first.
//! No `$ref` resolution and no schema validation happen here.

use crate::domain::SpecSource;
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileSpecSource {
    path: PathBuf,
}

impl FileSpecSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SpecSource for FileSpecSource {
    async fn load(&self) -> anyhow::Result<Value> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let extension = self.path.extension().and_then(|e| e.to_str());
        let mut spec: Value = if extension == Some("json") {
            serde_json::from_str(&raw)?
        } else {
            serde_yaml::from_str(&raw)?
        };
        merge_path_parameters(&mut spec);
        Ok(spec)
    }
}

/// Concatenate path-level parameters into every method's parameter list.
pub fn merge_path_parameters(spec: &mut Value) {
    let Some(paths) = spec.get_mut("paths").and_then(Value::as_object_mut) else {
        return;
    };
    for item in paths.values_mut() {
        let Some(path_item) = item.as_object_mut() else {
            continue;
        };
        let shared = match path_item.get("parameters").and_then(Value::as_array) {
            Some(parameters) if !parameters.is_empty() => parameters.clone(),
            _ => continue,
        };
        for (method, operation) in path_item.iter_mut() {
            if method == "parameters" || method.starts_with("x-") {
                continue;
            }
            let Some(operation) = operation.as_object_mut() else {
                continue;
            };
            let mut merged = shared.clone();
            if let Some(own) = operation.get("parameters").and_then(Value::as_array) {
                merged.extend(own.iter().cloned());
            }
            operation.insert("parameters".to_string(), Value::Array(merged));
        }
    }
}
