//! Export command - write expenses as CSV

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use budgetbits_core::LogEvent;

use super::{authenticate, get_context, get_logger, log_event, resolve_username};
use crate::output;

pub fn run(username: Option<String>, output_path: Option<PathBuf>) -> Result<()> {
    let logger = get_logger();
    log_event(
        &logger,
        LogEvent::new("export_started").with_command("export"),
    );

    let ctx = get_context()?;
    let username = resolve_username(username)?;
    authenticate(&ctx, &username)?;

    let rows = match ctx.profiles.expense_rows(&username) {
        Ok(rows) => rows,
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("export_failed")
                    .with_command("export")
                    .with_error(e.kind()),
            );
            return Err(e.into());
        }
    };

    let rows = match rows {
        Some(rows) => rows,
        None => {
            println!("No expenses recorded yet; nothing to export.");
            return Ok(());
        }
    };

    match &output_path {
        Some(path) => {
            let mut writer = csv::Writer::from_path(path)
                .with_context(|| format!("Failed to open {:?} for writing", path))?;
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
            output::success(&format!(
                "Exported {} expense(s) to {}",
                rows.len(),
                path.display()
            ));
        }
        None => {
            let mut writer = csv::Writer::from_writer(io::stdout());
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
    }

    log_event(
        &logger,
        LogEvent::new("export_completed").with_command("export"),
    );

    Ok(())
}
