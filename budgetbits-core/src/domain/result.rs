//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Every variant except `Storage`, `Io`, and `Json` is a recoverable
/// condition: the caller reports the message and resubmits corrected input.
/// Storage failures are the only class that should end the process, since
/// there is no in-memory durability fallback.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Username '{0}' is already registered")]
    DuplicateUsername(String),

    #[error("Username '{0}' is not registered")]
    UnknownUsername(String),

    #[error("No accounts registered yet")]
    EmptyStore,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("An expense of {amount} would leave no remaining balance ({remaining} available)")]
    BudgetExceeded { amount: i64, remaining: i64 },

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an invalid amount error
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    /// Create an invalid field error
    pub fn invalid_field(msg: impl Into<String>) -> Self {
        Self::InvalidField(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Stable machine-readable name of the error class
    ///
    /// Safe to write to the event log: unlike the display message, it never
    /// carries usernames or amounts.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::DuplicateUsername(_) => "duplicate_username",
            Self::UnknownUsername(_) => "unknown_username",
            Self::EmptyStore => "empty_store",
            Self::InvalidAmount(_) => "invalid_amount",
            Self::BudgetExceeded { .. } => "budget_exceeded",
            Self::InvalidField(_) => "invalid_field",
            Self::Storage(_) => "storage",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
        }
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
