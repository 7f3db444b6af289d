//! Document storage port
//!
//! The core persists flat JSON documents (one per key) through this trait
//! and stays unaware of where or how they are stored.

use serde_json::{Map, Value};

use crate::domain::result::Result;

/// A JSON object document
///
/// serde_json's `preserve_order` feature backs this with an ordered map, so
/// keys keep their insertion order across load/save cycles.
pub type JsonDocument = Map<String, Value>;

/// Keyed whole-document storage
///
/// `load` treats a missing or unparseable backing resource as "no data yet"
/// and returns an empty document rather than an error. `save` rewrites the
/// whole document; a failed write fails the whole operation, since there is
/// no partial-write recovery.
pub trait DocumentStore: Send + Sync {
    /// Load the document stored under `key`
    fn load(&self, key: &str) -> Result<JsonDocument>;

    /// Overwrite the document stored under `key`
    fn save(&self, key: &str, document: &JsonDocument) -> Result<()>;
}
