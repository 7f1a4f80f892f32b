//! Default location for the attribution slot

use std::path::PathBuf;

/// Well-known file name for the serialized store, one slot per user.
pub const STORE_FILE: &str = "utm_params_storage.json";

/// Resolves where the store file lives for the current user.
#[derive(Debug, Clone)]
pub struct Paths {
    pub home_touchpoint: PathBuf,
}

impl Paths {
    pub fn new() -> std::io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self {
            home_touchpoint: home.join(".touchpoint"),
        })
    }

    /// Path of the storage slot file.
    pub fn store_file(&self) -> PathBuf {
        self.home_touchpoint.join(STORE_FILE)
    }
}
