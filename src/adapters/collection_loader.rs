//! Collection directory loader.
//!
//! Walks a test-case collection directory and produces the flat record list
//! consumed by the folder tree builder. Record paths are slash-separated and
//! relative to the collection root; unreadable files are skipped with a
//! warning rather than failing the whole load.

use crate::domain::FileRecord;
use std::path::PathBuf;
use tracing::warn;

pub struct CollectionLoader {
    root: PathBuf,
}

impl CollectionLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn load(&self) -> anyhow::Result<Vec<FileRecord>> {
        let pattern = format!("{}/**/*.json", self.root.display());
        let mut records = Vec::new();
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) => {
                    let relative = path
                        .strip_prefix(&self.root)
                        .unwrap_or(&path)
                        .to_string_lossy()
                        .replace('\\', "/");
                    match std::fs::read_to_string(&path)
                        .map_err(anyhow::Error::from)
                        .and_then(|raw| serde_json::from_str(&raw).map_err(anyhow::Error::from))
                    {
                        Ok(content) => records.push(FileRecord {
                            path: relative,
                            content,
                        }),
                        Err(err) => {
                            warn!("Skipping collection file {}: {}", path.display(), err)
                        }
                    }
                }
                Err(err) => warn!("Failed to read glob entry: {}", err),
            }
        }
        Ok(records)
    }
}
