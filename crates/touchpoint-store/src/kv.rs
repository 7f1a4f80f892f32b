//! Single-slot blob storage

use crate::StoreError;

/// One origin-scoped slot holding the serialized attribution store.
///
/// The slot is read and replaced as a whole; there are no partial updates.
/// Concurrent writers from other processes may race, last write wins.
pub trait BlobStore {
    /// Read the slot; `None` when nothing has been written yet.
    fn get(&self) -> Result<Option<String>, StoreError>;

    /// Replace the slot's contents as one unit.
    fn set(&mut self, blob: &str) -> Result<(), StoreError>;
}

/// In-process slot for tests and benches.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the slot, e.g. with corrupt data.
    pub fn seeded(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }

    /// Raw slot contents, for inspection.
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(self.blob.clone())
    }

    fn set(&mut self, blob: &str) -> Result<(), StoreError> {
        self.blob = Some(blob.to_string());
        Ok(())
    }
}
