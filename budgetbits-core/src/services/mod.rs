//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod accounts;
pub mod logging;
mod profile;

pub use accounts::{AccountService, ACCOUNTS_KEY};
pub use logging::{LogEntry, LogEvent, LoggingService};
pub use profile::{ProfileService, PROFILES_KEY};
