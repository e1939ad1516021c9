use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod error;
pub mod semantics;

/// Traversal context for one schema node: the property name the node is
/// reached by, and the name of the enclosing property. Carried alongside the
/// recursion instead of being written into the schema itself, so a shared
/// schema tree is never mutated during a walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldContext<'a> {
    pub key: Option<&'a str>,
    pub parent_key: Option<&'a str>,
}

impl<'a> FieldContext<'a> {
    pub fn child(&self, key: &'a str) -> Self {
        Self {
            key: Some(key),
            parent_key: self.key,
        }
    }

    /// Context for the items of an array node: items carry no key of their
    /// own, the array's key becomes their parent.
    pub fn items(&self) -> Self {
        Self {
            key: None,
            parent_key: self.key,
        }
    }
}

/// Caller-supplied instruction forcing a specific field's generated shape.
///
/// `id` addresses a node by joining property names with `.`; segments use
/// JSON-Pointer-style escaping (`~0` for `~`, `~1` for `/`). `pattern`, when
/// present, is a literal alternation such as `"Created|Closed"`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RefOverride {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Knobs controlling schema traversal, mirrored from `[generator]` settings.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Default array cardinality ceiling when a schema declares no maxItems.
    pub max_items: u32,
    /// Recursion cap; subtrees past this depth yield nothing.
    pub max_depth: u32,
    /// When set, only `required` properties are synthesized.
    pub skip_non_required: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            max_items: 2,
            max_depth: 5,
            skip_non_required: false,
        }
    }
}

/// One raw file handed to the folder tree builder. `path` is slash-separated
/// and relative to the collection root.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FileRecord {
    pub path: String,
    pub content: Value,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    File,
    Folder,
    FileRef,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NodeInfo {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Relative path of the aliased file; only present on fileRef nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// One node of the assembled collection tree. Exactly one of `children`
/// (non-leaf) or `content` (leaf) is populated, except a fileRef leaf which
/// carries no inline content and resolves through `extra_info.path`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FolderNode {
    /// Full slash-joined path from the collection root.
    pub key: String,
    /// Leaf name (last path segment).
    pub title: String,
    #[serde(default)]
    pub is_leaf: bool,
    pub extra_info: NodeInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FolderNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

/// Per-directory manifest fixing child ordering and declaring aliases.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Manifest {
    pub order: Vec<ManifestEntry>,
}

/// A single manifest entry. `entry_type` is kept as a raw string so unknown
/// types deserialize cleanly and can be skipped rather than rejected.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ManifestEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Boundary to the external spec loader. Implementations yield a fully
/// dereferenced spec tree; the generator treats it as read-only after load.
#[async_trait]
pub trait SpecSource: Send + Sync {
    async fn load(&self) -> anyhow::Result<Value>;
}
