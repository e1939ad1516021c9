//! Test-case suite assembly.
//!
//! Depth-first flattens the collection tree's leaves into one ordered
//! test-case sequence, re-numbering ids 1-based across the whole traversal.
//! Malformed leaves contribute nothing; each failure is recorded as a
//! diagnostic and the remaining leaves are still processed.

use crate::adapters::folder_tree::{content_from_absolute_path, resolve_file_ref_path};
use crate::domain::{FolderNode, NodeType};
use serde_json::{json, Map, Value};
use tracing::warn;

/// The assembled suite plus diagnostics for every leaf that was skipped
/// because its reference or content could not be used.
#[derive(Debug, Default)]
pub struct SuiteAssembly {
    pub test_cases: Vec<Value>,
    pub diagnostics: Vec<String>,
}

/// Flatten the tree into an ordered suite. `selected`, when supplied,
/// restricts assembly to leaves whose key is an exact member of the list.
pub fn assemble(tree: &[FolderNode], selected: Option<&[String]>) -> SuiteAssembly {
    let mut assembly = SuiteAssembly::default();
    collect(tree, tree, selected, &mut assembly);
    assembly
}

/// Compatibility surface returning just the re-numbered cases.
pub fn flatten(tree: &[FolderNode], selected: Option<&[String]>) -> Vec<Value> {
    assemble(tree, selected).test_cases
}

fn collect(
    root: &[FolderNode],
    nodes: &[FolderNode],
    selected: Option<&[String]>,
    assembly: &mut SuiteAssembly,
) {
    for node in nodes {
        if !node.is_leaf {
            if let Some(children) = &node.children {
                collect(root, children, selected, assembly);
            }
            continue;
        }
        if let Some(keys) = selected {
            if !keys.iter().any(|key| key == &node.key) {
                continue;
            }
        }
        let content = match leaf_content(root, node, assembly) {
            Some(content) => content,
            None => continue,
        };
        append_cases(node, content, assembly);
    }
}

/// A fileRef leaf resolves its content indirectly; anything else carries it
/// inline. `None` records a diagnostic and skips the leaf.
fn leaf_content<'a>(
    root: &'a [FolderNode],
    node: &'a FolderNode,
    assembly: &mut SuiteAssembly,
) -> Option<&'a Value> {
    if node.extra_info.node_type != NodeType::FileRef {
        return node.content.as_ref();
    }
    let relative = node.extra_info.path.as_deref().unwrap_or_default();
    let resolved = resolve_file_ref_path(&node.key, relative)
        .and_then(|absolute| content_from_absolute_path(&absolute, root));
    if resolved.is_none() {
        skip(
            assembly,
            format!(
                "Unresolvable file reference '{}' from '{}'; leaf skipped",
                relative, node.key
            ),
        );
    }
    resolved
}

fn append_cases(node: &FolderNode, content: &Value, assembly: &mut SuiteAssembly) {
    let Some(cases) = content.get("test_cases").and_then(Value::as_array) else {
        skip(
            assembly,
            format!("Content of '{}' has no usable test_cases array; leaf skipped", node.key),
        );
        return;
    };
    for case in cases {
        let Some(fields) = case.as_object() else {
            skip(
                assembly,
                format!("Non-object test case in '{}' skipped", node.key),
            );
            continue;
        };
        let id = assembly.test_cases.len() + 1;
        assembly.test_cases.push(renumbered(fields, id));
    }
}

/// Rebuild one case with a fresh id in front; any source id is discarded.
fn renumbered(fields: &Map<String, Value>, id: usize) -> Value {
    let mut case = Map::new();
    case.insert("id".to_string(), json!(id));
    for (key, value) in fields {
        if key != "id" {
            case.insert(key.clone(), value.clone());
        }
    }
    Value::Object(case)
}

fn skip(assembly: &mut SuiteAssembly, message: String) {
    warn!("{}", message);
    assembly.diagnostics.push(message);
}

/// Renumber an already-flattened list's ids to 1..N in place.
pub fn sequence_test_cases(cases: &mut [Value]) {
    for (index, case) in cases.iter_mut().enumerate() {
        if let Some(fields) = case.as_object_mut() {
            fields.insert("id".to_string(), json!(index + 1));
        }
    }
}
