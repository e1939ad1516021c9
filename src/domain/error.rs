//! Generation error taxonomy
//!
//! Internal helpers return these; the facade converts every `Err` into the
//! documented empty value, so none of them crosses a public entry point.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// A node did not have the shape its position requires
    #[error("Unexpected schema shape at '{path}': {reason}")]
    SchemaShape { path: String, reason: String },

    /// Recursive traversal failed below the root
    #[error("Schema traversal failed: {0}")]
    Traversal(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
