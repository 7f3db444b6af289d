//! Status command - data directory overview

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::{get_context, get_data_dir, get_logger};
use crate::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport {
    data_dir: String,
    registered_users: usize,
    profiles: usize,
    rollover_policy: String,
    currency_symbol: String,
    log_entries: usize,
}

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let data_dir = get_data_dir();

    let log_entries = get_logger().and_then(|l| l.count().ok()).unwrap_or(0);

    let report = StatusReport {
        data_dir: data_dir.display().to_string(),
        registered_users: ctx.accounts.user_count(),
        profiles: ctx.profiles.profile_count(),
        rollover_policy: ctx.profiles.policy_name().to_string(),
        currency_symbol: ctx.config.currency_symbol.clone(),
        log_entries,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "BudgetBits Status".bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Data directory", &report.data_dir]);
    table.add_row(vec![
        "Registered users",
        &report.registered_users.to_string(),
    ]);
    table.add_row(vec!["Budget profiles", &report.profiles.to_string()]);
    table.add_row(vec!["Rollover policy", &report.rollover_policy]);
    table.add_row(vec!["Currency symbol", &report.currency_symbol]);
    table.add_row(vec!["Log entries", &report.log_entries.to_string()]);

    println!("{}", table);

    Ok(())
}
