//! Add command - record an expense

use anyhow::Result;
use dialoguer::Input;

use budgetbits_core::LogEvent;

use super::{
    authenticate, get_context, get_logger, log_event, resolve_username, text_or_prompt, today,
};
use crate::input::{normalize_name, parse_amount};
use crate::output;

pub fn run(
    username: Option<String>,
    category: Option<String>,
    amount: Option<String>,
    notes: Option<String>,
    json: bool,
) -> Result<()> {
    let logger = get_logger();
    log_event(&logger, LogEvent::new("add_started").with_command("add"));

    let mut ctx = get_context()?;
    let username = resolve_username(username)?;
    authenticate(&ctx, &username)?;

    let category = normalize_name(&text_or_prompt(category, "Category")?)?;
    let amount = parse_amount(&text_or_prompt(amount, "Amount")?)?;
    let notes = match notes {
        Some(notes) => notes,
        // Notes are optional, so a piped stdin just leaves them blank
        None if atty::is(atty::Stream::Stdin) => Input::new()
            .with_prompt("Notes")
            .allow_empty(true)
            .interact_text()?,
        None => String::new(),
    };

    match ctx
        .profiles
        .record_expense(&username, &category, amount, &notes, today())
    {
        Ok(profile) => {
            log_event(&logger, LogEvent::new("add_completed").with_command("add"));
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                let symbol = &ctx.config.currency_symbol;
                output::success(&format!(
                    "Recorded {} under {}",
                    output::format_amount(symbol, amount),
                    category
                ));
                println!(
                    "  Remaining balance: {}",
                    output::format_amount(symbol, profile.remaining_balance)
                );
            }
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("add_failed")
                    .with_command("add")
                    .with_error(e.kind()),
            );
            Err(e.into())
        }
    }
}
