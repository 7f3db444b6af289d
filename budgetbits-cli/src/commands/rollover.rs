//! Rollover command - reset the monthly budget

use anyhow::Result;
use dialoguer::Confirm;

use budgetbits_core::LogEvent;

use super::{
    authenticate, get_context, get_logger, log_event, resolve_username, text_or_prompt, today,
};
use crate::input::parse_amount;
use crate::output;

pub fn run(username: Option<String>, budget: Option<String>, json: bool) -> Result<()> {
    let logger = get_logger();
    log_event(
        &logger,
        LogEvent::new("rollover_started").with_command("rollover"),
    );

    let mut ctx = get_context()?;
    let username = resolve_username(username)?;
    authenticate(&ctx, &username)?;

    let today = today();
    if !ctx.profiles.rollover_due(&username, today)? {
        output::info(&format!(
            "No rollover due today (policy: {}).",
            ctx.profiles.policy_name()
        ));
        return Ok(());
    }

    let new_budget = parse_amount(&text_or_prompt(budget, "New monthly budget")?)?;

    if !json && atty::is(atty::Stream::Stdin) {
        let prompt = format!(
            "Reset the monthly budget to {}?",
            output::format_amount(&ctx.config.currency_symbol, new_budget)
        );
        if !Confirm::new().with_prompt(prompt).default(true).interact()? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    match ctx.profiles.rollover(&username, new_budget, today) {
        Ok(Some(profile)) => {
            log_event(
                &logger,
                LogEvent::new("rollover_completed").with_command("rollover"),
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&profile.summary())?);
            } else {
                output::success("Monthly budget reset");
                println!(
                    "  New budget: {}",
                    output::format_amount(&ctx.config.currency_symbol, profile.monthly_budget)
                );
            }
            Ok(())
        }
        Ok(None) => {
            // The due check above passed, so the policy cannot refuse here;
            // handled anyway to keep the match total
            output::info("No rollover due today.");
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("rollover_failed")
                    .with_command("rollover")
                    .with_error(e.kind()),
            );
            Err(e.into())
        }
    }
}
