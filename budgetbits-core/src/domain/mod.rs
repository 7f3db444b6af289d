//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod credentials;
mod ledger;
mod profile;
pub mod result;
pub mod rollover;

pub use credentials::CredentialStore;
pub use ledger::{ExpenseEntry, ExpenseRow, Ledger};
pub use profile::{BudgetProfile, ProfileSummary, MIN_REMAINING_BALANCE};
