//! JSON file storage adapter

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::result::Result;
use crate::ports::{DocumentStore, JsonDocument};

/// Stores each document as a pretty-printed `<key>.json` file in the data
/// directory
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed
    pub fn new(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            data_dir: data_dir.to_path_buf(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl DocumentStore for JsonFileStore {
    /// A missing file and a file that does not parse as a JSON object both
    /// read as an empty document
    fn load(&self, key: &str) -> Result<JsonDocument> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(JsonDocument::new());
        }
        let content = fs::read_to_string(&path)?;
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(document)) => Ok(document),
            _ => Ok(JsonDocument::new()),
        }
    }

    fn save(&self, key: &str, document: &JsonDocument) -> Result<()> {
        let content = serde_json::to_string_pretty(document)?;
        fs::write(self.path_for(key), content)?;
        Ok(())
    }
}
