//! BudgetBits Core - Business logic for personal expense tracking
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (BudgetProfile, CredentialStore, Ledger)
//! - **ports**: Trait definitions for external dependencies (DocumentStore)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (JSON file storage)

pub mod domain;
pub mod ports;
pub mod services;
pub mod adapters;
pub mod config;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::json_file::JsonFileStore;
use config::Config;
use ports::DocumentStore;
use services::{AccountService, ProfileService};

// Re-export commonly used types at crate root
pub use domain::{
    BudgetProfile, CredentialStore, ExpenseEntry, ExpenseRow, Ledger, ProfileSummary,
    MIN_REMAINING_BALANCE,
};
pub use domain::result::{Error, Result as DomainResult};
pub use domain::rollover::{
    policy_by_name, Always, FirstOfMonth, Never, NewMonth, RolloverPolicy, DEFAULT_POLICY_NAME,
};
pub use services::{LogEntry, LogEvent, LoggingService};

/// Main context for BudgetBits operations
///
/// This is the primary entry point for all business logic. It holds the
/// document store, configuration, and the account and profile services.
pub struct BudgetBitsContext {
    pub config: Config,
    pub store: Arc<JsonFileStore>,
    pub accounts: AccountService,
    pub profiles: ProfileService,
}

impl BudgetBitsContext {
    /// Create a new BudgetBits context
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;

        let store = Arc::new(JsonFileStore::new(data_dir)?);

        // Create services
        let accounts = AccountService::load(Arc::clone(&store) as Arc<dyn DocumentStore>)?;
        let profiles = ProfileService::load(
            Arc::clone(&store) as Arc<dyn DocumentStore>,
            config.policy(),
        )?;

        Ok(Self {
            config,
            store,
            accounts,
            profiles,
        })
    }
}
