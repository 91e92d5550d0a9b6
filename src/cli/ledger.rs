//! Ledger CLI commands
//!
//! Implements the CLI commands for budget allocation, reallocation,
//! spending, and the summary report. Domain failures are rendered to the
//! output sink as `Error: <message>` rather than aborting the run; only
//! I/O failures propagate.

use clap::Subcommand;
use std::io::{self, Write};

use crate::display::format_summary;
use crate::ledger::Ledger;

/// Ledger subcommands
#[derive(Subcommand)]
pub enum LedgerCommands {
    /// Create a budget and allocate funds to it
    Add {
        /// Budget name
        name: String,
        /// Amount to allocate
        amount: f64,
    },

    /// Change the amount allocated to an existing budget
    Change {
        /// Budget name
        name: String,
        /// New allocated amount
        amount: f64,
    },

    /// Record an expenditure against a budget
    Spend {
        /// Budget name
        name: String,
        /// Amount spent
        amount: f64,
    },

    /// Print the budget summary
    Summary {
        /// Emit the summary as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Handle a ledger command, writing all output to the given sink
pub fn handle_ledger_command<W: Write>(
    ledger: &mut Ledger,
    cmd: LedgerCommands,
    out: &mut W,
) -> io::Result<()> {
    match cmd {
        LedgerCommands::Add { name, amount } => match ledger.add_budget(&name, amount) {
            Ok(available) => {
                writeln!(out, "Added budget '{}' ({:.2} available)", name, available)?;
            }
            Err(e) => writeln!(out, "Error: {}", e)?,
        },

        LedgerCommands::Change { name, amount } => match ledger.change_budget(&name, amount) {
            Ok(available) => {
                writeln!(out, "Changed budget '{}' ({:.2} available)", name, available)?;
            }
            Err(e) => writeln!(out, "Error: {}", e)?,
        },

        LedgerCommands::Spend { name, amount } => match ledger.spend(&name, amount) {
            Ok(remaining) => {
                writeln!(
                    out,
                    "Spent {:.2} from '{}' ({:.2} remaining)",
                    amount, name, remaining
                )?;
            }
            Err(e) => writeln!(out, "Error: {}", e)?,
        },

        LedgerCommands::Summary { json } => {
            let summary = ledger.summary();
            if json {
                let rendered = serde_json::to_string_pretty(&summary)?;
                writeln!(out, "{}", rendered)?;
            } else {
                out.write_all(format_summary(&summary).as_bytes())?;
            }
        }
    }

    Ok(())
}
