//! Logs command - view application log entries

use anyhow::Result;
use colored::Colorize;

use budgetbits_core::LoggingService;

use super::get_data_dir;
use crate::output;

fn get_logging_service() -> Result<LoggingService> {
    let data_dir = get_data_dir();
    LoggingService::new(&data_dir, env!("CARGO_PKG_VERSION"))
}

fn format_timestamp(timestamp_ms: i64) -> String {
    use chrono::{TimeZone, Utc};
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

pub fn run(limit: usize, errors: bool, json: bool) -> Result<()> {
    let service = get_logging_service()?;
    let entries = if errors {
        service.get_errors(limit)?
    } else {
        service.get_recent(limit)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No log entries found.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Time", "Event", "Command", "Error"]);

    for entry in entries {
        let error_indicator = match &entry.error_message {
            Some(kind) => kind.red().to_string(),
            None => String::new(),
        };

        table.add_row(vec![
            format_timestamp(entry.timestamp),
            entry.event,
            entry.command.unwrap_or_default(),
            error_indicator,
        ]);
    }

    println!("{}", table);

    Ok(())
}
