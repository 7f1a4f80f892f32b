//! File-backed storage slot

use crate::{BlobStore, StoreError};
use std::path::{Path, PathBuf};

/// Stores the blob as a single file, written via temp file + rename so a
/// crashed write never leaves a half-serialized store behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlobStore for FileStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, blob: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, blob)?;
        std::fs::rename(temp_path, &self.path)?;
        Ok(())
    }
}
