//! Durable key-value persistence capability.
//!
//! # Responsibility
//! - Define the storage contract the content store persists through.
//! - Provide interchangeable file-backed and embedded-SQLite backends.
//!
//! # Invariants
//! - One key maps to at most one value; `save` overwrites unconditionally.
//! - `load` distinguishes "absent" (`Ok(None)`) from transport failure.
//! - Backends never interpret the stored value; parsing is the caller's
//!   concern.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;
mod sqlite;

pub use file::FileStorage;
pub use sqlite::SqliteStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level persistence error.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Sqlite(rusqlite::Error),
    InvalidKey(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::InvalidKey(key) => write!(f, "invalid storage key: `{key}`"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Sqlite(err) => Some(err),
            Self::InvalidKey(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Pluggable persistence contract for whole-document values.
pub trait ContentStorage {
    /// Returns the stored value for `key`, or `None` when absent.
    fn load(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any prior value.
    fn save(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Accepts keys that are safe as both SQL text and file names.
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
