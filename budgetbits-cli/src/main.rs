//! BudgetBits CLI - Personal expense tracking in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod input;
mod output;

use commands::{add, export, list, logs, register, rollover, status, summary};

/// BudgetBits - personal expense tracking in your terminal
#[derive(Parser)]
#[command(name = "bb", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register an account and set up its budget profile
    Register {
        /// Username to register
        #[arg(long, env = "BUDGETBITS_USER")]
        username: Option<String>,
        /// First name
        #[arg(long)]
        first_name: Option<String>,
        /// Last name
        #[arg(long)]
        last_name: Option<String>,
        /// Monthly budget in whole currency units, e.g. 3,000
        #[arg(long)]
        budget: Option<String>,
    },

    /// Show the monthly budget summary
    Summary {
        /// Username to summarize
        #[arg(long, env = "BUDGETBITS_USER")]
        username: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record an expense
    Add {
        /// Username recording the expense
        #[arg(long, env = "BUDGETBITS_USER")]
        username: Option<String>,
        /// Expense category
        #[arg(long)]
        category: Option<String>,
        /// Amount in whole currency units, e.g. 1,500
        #[arg(long)]
        amount: Option<String>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
        /// Output the updated profile as JSON
        #[arg(long)]
        json: bool,
    },

    /// List recorded expenses
    List {
        /// Username whose expenses to list
        #[arg(long, env = "BUDGETBITS_USER")]
        username: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reset the monthly budget when a new month starts
    Rollover {
        /// Username to roll over
        #[arg(long, env = "BUDGETBITS_USER")]
        username: Option<String>,
        /// New monthly budget, e.g. 4,000
        #[arg(long)]
        budget: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export expenses to CSV
    Export {
        /// Username whose expenses to export
        #[arg(long, env = "BUDGETBITS_USER")]
        username: Option<String>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show data directory status
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show recent application log entries
    Logs {
        /// Number of entries to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
        /// Show only errors
        #[arg(long)]
        errors: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Register { username, first_name, last_name, budget } => {
            register::run(username, first_name, last_name, budget)
        }
        Commands::Summary { username, json } => summary::run(username, json),
        Commands::Add { username, category, amount, notes, json } => {
            add::run(username, category, amount, notes, json)
        }
        Commands::List { username, json } => list::run(username, json),
        Commands::Rollover { username, budget, json } => rollover::run(username, budget, json),
        Commands::Export { username, output } => export::run(username, output),
        Commands::Status { json } => status::run(json),
        Commands::Logs { limit, errors, json } => logs::run(limit, errors, json),
    }
}
