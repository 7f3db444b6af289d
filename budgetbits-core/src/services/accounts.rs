//! Account service - credential registration and authentication

use std::sync::Arc;

use crate::domain::result::Result;
use crate::domain::CredentialStore;
use crate::ports::DocumentStore;

/// Document key for the credential map
pub const ACCOUNTS_KEY: &str = "accounts";

/// Owns the credential store and keeps it in sync with storage
///
/// Credentials load once at construction and the full map is written back
/// synchronously after every registration. There is no rollback: a failed
/// save leaves the in-memory store ahead of disk and surfaces the error.
pub struct AccountService {
    store: Arc<dyn DocumentStore>,
    credentials: CredentialStore,
}

impl AccountService {
    /// Load the credential store from the `accounts` document
    pub fn load(store: Arc<dyn DocumentStore>) -> Result<Self> {
        let document = store.load(ACCOUNTS_KEY)?;
        let credentials = CredentialStore::from_document(document);
        Ok(Self { store, credentials })
    }

    /// Register a new account and persist the full store
    pub fn register(&mut self, username: &str, secret: &str) -> Result<()> {
        self.credentials.register(username, secret)?;
        self.persist()
    }

    /// Check a username/secret pair; never mutates anything
    pub fn authenticate(&self, username: &str, secret: &str) -> Result<bool> {
        self.credentials.authenticate(username, secret)
    }

    pub fn is_registered(&self, username: &str) -> bool {
        self.credentials.contains(username)
    }

    pub fn user_count(&self) -> usize {
        self.credentials.len()
    }

    fn persist(&self) -> Result<()> {
        self.store.save(ACCOUNTS_KEY, &self.credentials.to_document())
    }
}
