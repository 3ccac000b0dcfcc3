use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::{Persistence, PersistenceError};

/// Storage backed by a flat TOML table of strings.
///
/// A missing file reads as empty. The whole table is rewritten on every
/// save; the lock serializes writers within the process.
#[derive(Debug)]
pub struct FilePersistence {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// `~/.local/share/stockroom/session.toml` or the platform equivalent.
    /// Falls back to the current directory if no data dir is known.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("stockroom").join("session.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>, PersistenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(PersistenceError::ReadError {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        toml::from_str(&content).map_err(|e| PersistenceError::ParseError {
            path: self.path.clone(),
            source: e,
        })
    }

    fn write_table(&self, table: &BTreeMap<String, String>) -> Result<(), PersistenceError> {
        let content = toml::to_string(table)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PersistenceError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;
        }
        fs::write(&self.path, content).map_err(|e| PersistenceError::WriteError {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl Persistence for FilePersistence {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let _guard = self.lock.lock();
        Ok(self.read_table()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let _guard = self.lock.lock();
        let mut table = self.read_table()?;
        table.insert(key.to_string(), value.to_string());
        self.write_table(&table)
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        let _guard = self.lock.lock();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PersistenceError::WriteError {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
