pub mod decorate;
pub mod resolve;
pub mod show;
pub mod version;
pub mod visit;

use std::path::Path;
use touchpoint_core::{SystemClock, Tracker};
use touchpoint_store::{FileStore, Paths};

/// Open the tracker against `store`, or the default per-user slot.
pub(crate) fn open_tracker(store: Option<&Path>) -> anyhow::Result<Tracker<FileStore, SystemClock>> {
    let path = match store {
        Some(path) => path.to_path_buf(),
        None => Paths::new()?.store_file(),
    };
    Ok(Tracker::new(FileStore::new(path), SystemClock))
}
