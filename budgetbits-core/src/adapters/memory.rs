//! In-memory storage adapter for unit tests
//!
//! Keeps documents in a process-local map so service tests can run without
//! touching the filesystem.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::result::{Error, Result};
use crate::ports::{DocumentStore, JsonDocument};

/// DocumentStore backed by an in-memory map
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, JsonDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self, key: &str) -> Result<JsonDocument> {
        let documents = self
            .documents
            .lock()
            .map_err(|e| Error::storage(format!("lock poisoned: {}", e)))?;
        Ok(documents.get(key).cloned().unwrap_or_default())
    }

    fn save(&self, key: &str, document: &JsonDocument) -> Result<()> {
        let mut documents = self
            .documents
            .lock()
            .map_err(|e| Error::storage(format!("lock poisoned: {}", e)))?;
        documents.insert(key.to_string(), document.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_unknown_key_loads_as_empty() {
        let store = MemoryStore::new();
        assert!(store.load("accounts").unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();

        let mut document = JsonDocument::new();
        document.insert("liza".to_string(), Value::String("secret".to_string()));
        store.save("accounts", &document).unwrap();

        assert_eq!(store.load("accounts").unwrap(), document);
        assert!(store.load("profiles").unwrap().is_empty());
    }
}
