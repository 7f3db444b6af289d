//! Register command - create an account and its budget profile

use anyhow::{bail, Result};
use dialoguer::Password;

use budgetbits_core::LogEvent;

use super::{
    authenticate, get_context, get_logger, log_event, resolve_username, text_or_prompt, today,
};
use crate::input::{normalize_name, parse_amount};
use crate::output;

pub fn run(
    username: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    budget: Option<String>,
) -> Result<()> {
    let logger = get_logger();
    log_event(
        &logger,
        LogEvent::new("register_started").with_command("register"),
    );

    let mut ctx = get_context()?;
    let username = resolve_username(username)?;

    let has_account = ctx.accounts.is_registered(&username);
    if has_account && ctx.profiles.exists(&username) {
        bail!(
            "Username '{}' is already registered. Use 'bb summary' to see the profile.",
            username
        );
    }

    if has_account {
        // The credential exists but profile setup never finished.
        // Authenticate and pick up where it left off.
        output::info(&format!(
            "Account '{}' exists but has no profile yet; finishing setup.",
            username
        ));
        authenticate(&ctx, &username)?;
    } else {
        let secret = new_secret()?;
        if let Err(e) = ctx.accounts.register(&username, &secret) {
            log_event(
                &logger,
                LogEvent::new("register_failed")
                    .with_command("register")
                    .with_error(e.kind()),
            );
            return Err(e.into());
        }
        output::success(&format!("Account '{}' registered", username));
    }

    let first_name = normalize_name(&text_or_prompt(first_name, "First name")?)?;
    let last_name = normalize_name(&text_or_prompt(last_name, "Last name")?)?;
    let monthly_budget = parse_amount(&text_or_prompt(budget, "Monthly budget")?)?;

    match ctx
        .profiles
        .create(&username, &first_name, &last_name, monthly_budget, today())
    {
        Ok(profile) => {
            log_event(
                &logger,
                LogEvent::new("register_completed").with_command("register"),
            );
            output::success(&format!("Welcome to BudgetBits, {}!", profile.full_name()));
            println!(
                "  Monthly budget: {}",
                output::format_amount(&ctx.config.currency_symbol, profile.monthly_budget)
            );
            println!("  Record your first expense with 'bb add'.");
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("register_failed")
                    .with_command("register")
                    .with_error(e.kind()),
            );
            Err(e.into())
        }
    }
}

/// Take BUDGETBITS_PASSWORD as-is, or ask for a new secret twice
fn new_secret() -> Result<String> {
    if let Ok(p) = std::env::var("BUDGETBITS_PASSWORD") {
        return Ok(p);
    }

    if atty::isnt(atty::Stream::Stdin) {
        bail!("No secret provided. Set BUDGETBITS_PASSWORD when running non-interactively.");
    }

    let p1 = Password::new().with_prompt("Choose a secret").interact()?;
    let p2 = Password::new().with_prompt("Confirm the secret").interact()?;

    if p1 != p2 {
        bail!("Secrets do not match");
    }
    Ok(p1)
}
