//! Storage slot abstractions backing the attribution store

mod error;
mod file;
mod kv;
mod paths;

pub use error::StoreError;
pub use file::FileStore;
pub use kv::{BlobStore, MemoryStore};
pub use paths::{Paths, STORE_FILE};
