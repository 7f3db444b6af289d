//! CLI command implementations

pub mod add;
pub mod export;
pub mod list;
pub mod logs;
pub mod register;
pub mod rollover;
pub mod status;
pub mod summary;

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use dialoguer::{Input, Password};

use budgetbits_core::{BudgetBitsContext, LogEvent, LoggingService};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok()?;
    LoggingService::new(&data_dir, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the data directory from environment or default
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("BUDGETBITS_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".budgetbits")
    }
}

/// Get or create the BudgetBits context
pub fn get_context() -> Result<BudgetBitsContext> {
    let data_dir = get_data_dir();

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    BudgetBitsContext::new(&data_dir).context("Failed to initialize budgetbits context")
}

/// Resolve the acting username from the --username flag (clap also fills it
/// from BUDGETBITS_USER) or an interactive prompt
pub fn resolve_username(username: Option<String>) -> Result<String> {
    let name = match username {
        Some(name) => name,
        None => {
            if atty::isnt(atty::Stream::Stdin) {
                bail!("No username provided. Use --username or set BUDGETBITS_USER.");
            }
            Input::new().with_prompt("Username").interact_text()?
        }
    };

    let name = name.trim().to_string();
    if name.is_empty() {
        bail!("Username cannot be empty");
    }
    Ok(name)
}

/// Take a flag value or prompt for it interactively
pub fn text_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => {
            if atty::isnt(atty::Stream::Stdin) {
                bail!(
                    "No {} provided. Pass the flag when running non-interactively.",
                    prompt.to_lowercase()
                );
            }
            Ok(Input::new().with_prompt(prompt).interact_text()?)
        }
    }
}

/// Get the account secret from BUDGETBITS_PASSWORD or a hidden prompt
pub fn get_secret_or_prompt(prompt: &str) -> Result<String> {
    if let Ok(p) = env::var("BUDGETBITS_PASSWORD") {
        return Ok(p);
    }

    if atty::isnt(atty::Stream::Stdin) {
        bail!("No secret provided. Set BUDGETBITS_PASSWORD when running non-interactively.");
    }

    let p = Password::new().with_prompt(prompt).interact()?;
    Ok(p)
}

/// Check the caller's secret before touching their data
///
/// One attempt only; a wrong secret exits nonzero so scripts stay scriptable.
pub fn authenticate(ctx: &BudgetBitsContext, username: &str) -> Result<()> {
    let secret = get_secret_or_prompt(&format!("Secret for {}", username))?;
    if !ctx.accounts.authenticate(username, &secret)? {
        bail!("Authentication failed: wrong secret for '{}'", username);
    }
    Ok(())
}

/// Today's date on the local clock
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
