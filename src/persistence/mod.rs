//! Persisted key-value storage for session data.
//!
//! State reducers never touch storage. Components that need it get a
//! [`Persistence`] injected.

mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FilePersistence;
pub use memory::MemoryPersistence;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to read storage file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse storage file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize storage: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Failed to write storage file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// String key-value storage.
pub trait Persistence: Send + Sync {
    /// Read a value. Missing keys are `Ok(None)`.
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Remove every stored key.
    fn clear(&self) -> Result<(), PersistenceError>;
}
