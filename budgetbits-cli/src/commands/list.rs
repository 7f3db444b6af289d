//! List command - show recorded expenses

use anyhow::Result;

use budgetbits_core::LogEvent;

use super::{authenticate, get_context, get_logger, log_event, resolve_username};
use crate::output;

pub fn run(username: Option<String>, json: bool) -> Result<()> {
    let logger = get_logger();
    log_event(&logger, LogEvent::new("list_started").with_command("list"));

    let ctx = get_context()?;
    let username = resolve_username(username)?;
    authenticate(&ctx, &username)?;

    let rows = match ctx.profiles.expense_rows(&username) {
        Ok(rows) => {
            log_event(&logger, LogEvent::new("list_completed").with_command("list"));
            rows
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("list_failed")
                    .with_command("list")
                    .with_error(e.kind()),
            );
            return Err(e.into());
        }
    };

    if json {
        // `null` keeps the nothing-recorded sentinel distinct from an
        // empty listing
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let rows = match rows {
        Some(rows) => rows,
        None => {
            println!("No expenses recorded yet. Use 'bb add' to start tracking your spending.");
            return Ok(());
        }
    };

    let symbol = &ctx.config.currency_symbol;
    let mut table = output::create_table();
    table.set_header(vec!["Category", "Date", "Amount", "Notes"]);

    for row in &rows {
        table.add_row(vec![
            row.category.clone(),
            row.date.to_string(),
            output::format_amount(symbol, row.amount),
            row.notes.clone(),
        ]);
    }

    println!("{}", table);
    println!();
    println!("{} expense(s) recorded", rows.len());

    Ok(())
}
