//! Summary command - show the monthly budget overview

use anyhow::Result;

use budgetbits_core::LogEvent;

use super::{authenticate, get_context, get_logger, log_event, resolve_username};
use crate::output;

pub fn run(username: Option<String>, json: bool) -> Result<()> {
    let logger = get_logger();
    log_event(
        &logger,
        LogEvent::new("summary_started").with_command("summary"),
    );

    let ctx = get_context()?;
    let username = resolve_username(username)?;
    authenticate(&ctx, &username)?;

    let summary = match ctx.profiles.summary(&username) {
        Ok(summary) => {
            log_event(
                &logger,
                LogEvent::new("summary_completed").with_command("summary"),
            );
            summary
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("summary_failed")
                    .with_command("summary")
                    .with_error(e.kind()),
            );
            return Err(e.into());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let symbol = &ctx.config.currency_symbol;

    let mut table = output::create_table();
    table.set_header(vec![
        "PERSONAL INFORMATION",
        &format!("MONTH: {}", summary.month.to_uppercase()),
    ]);
    table.add_row(vec!["Username", &summary.username]);
    table.add_row(vec!["Name", &summary.full_name]);
    table.add_row(vec![
        "Monthly budget",
        &output::format_amount(symbol, summary.monthly_budget),
    ]);
    table.add_row(vec![
        "Total spent",
        &output::format_amount(symbol, summary.total_spent),
    ]);
    table.add_row(vec![
        "Remaining balance",
        &output::format_amount(symbol, summary.remaining_balance),
    ]);

    println!("{}", table);

    Ok(())
}
