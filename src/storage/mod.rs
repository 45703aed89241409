//! Persistence for vocabulary collections
//!
//! Stores hold one snapshot per user. The scheduler never touches a store;
//! `crate::session::ReviewSession` loads a snapshot, works on it in memory and
//! commits the whole collection back.

mod file_storage;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

use crate::vocab::VocabItem;

pub use file_storage::JsonFileStore;
pub use memory::MemoryStore;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Invalid user key: {0:?}")]
    InvalidUser(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// A key-value store of vocabulary snapshots keyed by user
pub trait VocabStore {
    /// Load the user's collection; an unknown user has an empty one
    fn load(&self, user: &str) -> Result<Vec<VocabItem>>;

    /// Replace the user's collection with `items`
    fn save(&self, user: &str, items: &[VocabItem]) -> Result<()>;
}

impl<S: VocabStore + ?Sized> VocabStore for &S {
    fn load(&self, user: &str) -> Result<Vec<VocabItem>> {
        (**self).load(user)
    }

    fn save(&self, user: &str, items: &[VocabItem]) -> Result<()> {
        (**self).save(user, items)
    }
}

impl<S: VocabStore + ?Sized> VocabStore for Box<S> {
    fn load(&self, user: &str) -> Result<Vec<VocabItem>> {
        (**self).load(user)
    }

    fn save(&self, user: &str, items: &[VocabItem]) -> Result<()> {
        (**self).save(user, items)
    }
}

/// Get the default data directory
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|p| p.join("vocab-srs"))
        .ok_or(StorageError::DataDirNotFound)
}
