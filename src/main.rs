use anyhow::Result;
use clap::Parser;
use std::io;

use ledger_cli::cli::{handle_ledger_command, LedgerCommands};
use ledger_cli::Ledger;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Command-line budget ledger",
    long_about = "Tracks a fixed pool of funds allocated across named budgets, \
                  records expenditures against each budget, and reports the \
                  remaining balances."
)]
struct Cli {
    /// Total funds available to allocate across budgets
    #[arg(env = "LEDGER_TOTAL_FUNDS", allow_negative_numbers = true)]
    total: f64,

    #[command(subcommand)]
    command: Option<LedgerCommands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut ledger = Ledger::new(cli.total);

    // Bare invocation reports the (empty) summary
    let cmd = cli
        .command
        .unwrap_or(LedgerCommands::Summary { json: false });
    handle_ledger_command(&mut ledger, cmd, &mut io::stdout())?;

    Ok(())
}
