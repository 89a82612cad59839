//! File-backed key-value storage.
//!
//! # Responsibility
//! - Persist one value per key as `<root>/<key>.json`.
//!
//! # Invariants
//! - Writes go through a temp file followed by a rename, so a crashed
//!   write leaves either the old value or the new one, never a torn file.

use super::{validate_key, ContentStorage, StorageResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Stores each key as a standalone file under a root directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Creates the backend, creating the root directory if needed.
    pub fn open(root: impl AsRef<Path>) -> StorageResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl ContentStorage for FileStorage {
    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        match fs::read_to_string(self.value_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        let final_path = self.value_path(key);
        let temp_path = self.root.join(format!("{key}.json.tmp"));
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &final_path)?;
        Ok(())
    }
}
