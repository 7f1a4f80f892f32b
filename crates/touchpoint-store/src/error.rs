//! Storage error type

use thiserror::Error;

/// Failure reading or writing the storage slot.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
