//! Collection tree assembly.
//!
//! Converts a flat list of {path, content} records into a nested
//! directory-like tree. A directory containing the reserved manifest file
//! has its child order and inclusion dictated by the manifest; other
//! directories emit children in record insertion order (not contractual).

use crate::domain::{FileRecord, FolderNode, Manifest, NodeInfo, NodeType};
use serde_json::Value;
use tracing::{debug, warn};

pub const DEFAULT_MASTER_FILE_NAME: &str = "master.json";

/// Intermediate nested map preserving record insertion order.
#[derive(Debug, Default)]
struct RawDir {
    entries: Vec<(String, RawEntry)>,
}

#[derive(Debug)]
enum RawEntry {
    File(Value),
    Dir(RawDir),
}

impl RawDir {
    fn get(&self, name: &str) -> Option<&RawEntry> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, entry)| entry)
    }

    fn child_dir(&mut self, name: &str) -> &mut RawDir {
        let position = self
            .entries
            .iter()
            .position(|(entry_name, entry)| entry_name == name && matches!(entry, RawEntry::Dir(_)));
        let index = match position {
            Some(index) => index,
            None => {
                self.entries
                    .push((name.to_string(), RawEntry::Dir(RawDir::default())));
                self.entries.len() - 1
            }
        };
        match &mut self.entries[index].1 {
            RawEntry::Dir(dir) => dir,
            RawEntry::File(_) => unreachable!("position matched a directory entry"),
        }
    }

    fn insert_file(&mut self, name: &str, content: Value) {
        if let Some((_, entry)) = self
            .entries
            .iter_mut()
            .find(|(entry_name, _)| entry_name == name)
        {
            *entry = RawEntry::File(content);
        } else {
            self.entries.push((name.to_string(), RawEntry::File(content)));
        }
    }
}

pub struct FolderTreeBuilder {
    master_file_name: String,
}

impl Default for FolderTreeBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MASTER_FILE_NAME)
    }
}

impl FolderTreeBuilder {
    pub fn new(master_file_name: &str) -> Self {
        Self {
            master_file_name: master_file_name.to_string(),
        }
    }

    /// Build the collection tree from a flat record list. Record order is
    /// not assumed sorted; the manifest, when present, is authoritative.
    pub fn build_tree(&self, records: Vec<FileRecord>) -> Vec<FolderNode> {
        let mut root = RawDir::default();
        for record in records {
            let segments: Vec<&str> = record.path.split('/').collect();
            let (leaf, dirs) = match segments.split_last() {
                Some(split) => split,
                None => continue,
            };
            let mut current = &mut root;
            for dir in dirs {
                current = current.child_dir(dir);
            }
            current.insert_file(leaf, record.content);
        }
        self.convert_dir(&root, "")
    }

    fn convert_dir(&self, dir: &RawDir, prefix: &str) -> Vec<FolderNode> {
        if let Some(manifest) = self.manifest_for(dir) {
            self.convert_ordered(dir, prefix, &manifest)
        } else {
            dir.entries
                .iter()
                .map(|(name, entry)| self.convert_entry(name, entry, prefix, None))
                .collect()
        }
    }

    fn manifest_for(&self, dir: &RawDir) -> Option<Manifest> {
        let RawEntry::File(content) = dir.get(&self.master_file_name)? else {
            return None;
        };
        match serde_json::from_value::<Manifest>(content.clone()) {
            Ok(manifest) => Some(manifest),
            Err(err) => {
                warn!("Ignoring malformed manifest file: {}", err);
                None
            }
        }
    }

    fn convert_ordered(&self, dir: &RawDir, prefix: &str, manifest: &Manifest) -> Vec<FolderNode> {
        let mut nodes = Vec::new();
        for entry in &manifest.order {
            match entry.entry_type.as_str() {
                "file" | "folder" => {
                    let declared = if entry.entry_type == "file" {
                        NodeType::File
                    } else {
                        NodeType::Folder
                    };
                    if let Some(raw) = dir.get(&entry.name) {
                        nodes.push(self.convert_entry(&entry.name, raw, prefix, Some(declared)));
                    }
                }
                "fileRef" => {
                    nodes.push(FolderNode {
                        key: joined(prefix, &entry.name),
                        title: entry.name.clone(),
                        is_leaf: true,
                        extra_info: NodeInfo {
                            node_type: NodeType::FileRef,
                            path: entry.path.clone(),
                        },
                        children: None,
                        content: None,
                    });
                }
                other => {
                    debug!("Skipping manifest entry '{}' of unknown type '{}'", entry.name, other);
                }
            }
        }
        nodes
    }

    fn convert_entry(
        &self,
        name: &str,
        entry: &RawEntry,
        prefix: &str,
        declared: Option<NodeType>,
    ) -> FolderNode {
        let key = joined(prefix, name);
        match entry {
            RawEntry::File(content) => FolderNode {
                key,
                title: name.to_string(),
                is_leaf: true,
                extra_info: NodeInfo {
                    node_type: declared.unwrap_or(NodeType::File),
                    path: None,
                },
                children: None,
                content: Some(content.clone()),
            },
            RawEntry::Dir(child) => {
                let children = self.convert_dir(child, &key);
                FolderNode {
                    key,
                    title: name.to_string(),
                    is_leaf: false,
                    extra_info: NodeInfo {
                        node_type: declared.unwrap_or(NodeType::Folder),
                        path: None,
                    },
                    children: Some(children),
                    content: None,
                }
            }
        }
    }
}

fn joined(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix, name)
    }
}

/// Resolve a fileRef's relative path against its own key's parent directory.
/// Leading `.` stays in the parent directory, each leading `..` strips one
/// more level, and a bare path is treated as sibling-relative. `None` when
/// the base path has fewer directory levels than required `..` steps.
pub fn resolve_file_ref_path(node_key: &str, relative: &str) -> Option<String> {
    let base: Vec<&str> = node_key.split('/').collect();
    let reference: Vec<&str> = relative.split('/').collect();

    if reference.first() == Some(&".") {
        Some(joined(&base[..base.len() - 1].join("/"), &reference[1..].join("/")))
    } else if reference.first() == Some(&"..") {
        let dots = reference.iter().take_while(|part| **part == "..").count();
        if base.len() - 1 < dots {
            return None;
        }
        let new_base = base[..base.len() - 1 - dots].join("/");
        Some(joined(&new_base, &reference[dots..].join("/")))
    } else {
        Some(joined(&base[..base.len() - 1].join("/"), &reference.join("/")))
    }
}

/// Locate a node by absolute slash-joined path, matching each segment
/// against node titles.
pub fn find_node_from_absolute_path<'a>(
    path: &str,
    nodes: &'a [FolderNode],
) -> Option<&'a FolderNode> {
    let segments: Vec<&str> = path.split('/').collect();
    let mut current = nodes;
    for segment in &segments[..segments.len() - 1] {
        let found = current.iter().find(|node| node.title == *segment)?;
        current = found.children.as_deref()?;
    }
    current
        .iter()
        .find(|node| node.title == *segments.last().unwrap())
}

pub fn content_from_absolute_path<'a>(path: &str, nodes: &'a [FolderNode]) -> Option<&'a Value> {
    find_node_from_absolute_path(path, nodes)?.content.as_ref()
}
