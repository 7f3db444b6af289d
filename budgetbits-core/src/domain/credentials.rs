//! Credential store domain model
//!
//! Maps usernames to secrets in registration order. Secrets are stored and
//! compared as plain text to stay compatible with existing account files;
//! hashing is deliberately out of scope here, not an oversight.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::result::{Error, Result};

/// All registered credentials, keyed by username
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialStore {
    accounts: IndexMap<String, String>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the store from a persisted flat mapping
    ///
    /// A document holding anything other than string secrets is treated as
    /// unparseable and yields an empty store ("no data yet").
    pub fn from_document(document: serde_json::Map<String, JsonValue>) -> Self {
        serde_json::from_value(JsonValue::Object(document)).unwrap_or_default()
    }

    /// Render the store as a flat JSON document for persistence
    pub fn to_document(&self) -> serde_json::Map<String, JsonValue> {
        self.accounts
            .iter()
            .map(|(username, secret)| (username.clone(), JsonValue::String(secret.clone())))
            .collect()
    }

    /// Register a new username/secret pair
    ///
    /// Checks run in a fixed order: empty username, then duplicate username,
    /// then empty secret.
    pub fn register(&mut self, username: &str, secret: &str) -> Result<()> {
        if username.trim().is_empty() {
            return Err(Error::invalid_input("username cannot be empty"));
        }
        if self.accounts.contains_key(username) {
            return Err(Error::DuplicateUsername(username.to_string()));
        }
        if secret.trim().is_empty() {
            return Err(Error::invalid_input("password cannot be empty"));
        }
        self.accounts
            .insert(username.to_string(), secret.to_string());
        Ok(())
    }

    /// Check a username/secret pair against the store
    ///
    /// A wrong secret is `Ok(false)`, not an error. The error cases are an
    /// empty store, an empty username, and an unknown username. The
    /// comparison is exact and case-sensitive.
    pub fn authenticate(&self, username: &str, secret: &str) -> Result<bool> {
        if self.accounts.is_empty() {
            return Err(Error::EmptyStore);
        }
        if username.trim().is_empty() {
            return Err(Error::invalid_input("username cannot be empty"));
        }
        match self.accounts.get(username) {
            Some(stored) => Ok(stored == secret),
            None => Err(Error::UnknownUsername(username.to_string())),
        }
    }

    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
