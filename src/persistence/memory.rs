use std::collections::HashMap;

use parking_lot::Mutex;

use super::{Persistence, PersistenceError};

/// In-process storage; contents die with the process.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

impl Persistence for MemoryPersistence {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        self.values.lock().clear();
        Ok(())
    }
}
