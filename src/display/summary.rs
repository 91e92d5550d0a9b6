//! Summary table formatting
//!
//! Renders a ledger summary as a fixed-width table: header, rule, one row
//! per budget, rule, totals row. Budget names are left-justified in 15
//! columns and each amount is right-justified in 10 columns with exactly
//! two decimal places.

use crate::ledger::LedgerSummary;

/// Width of the budget-name column
const NAME_WIDTH: usize = 15;

/// Width of each amount column
const AMOUNT_WIDTH: usize = 10;

/// Full table width (name column plus three amount columns)
const TABLE_WIDTH: usize = NAME_WIDTH + 3 * AMOUNT_WIDTH;

/// Format a separator rule
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Format a ledger summary as a fixed-width table
pub fn format_summary(summary: &LedgerSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<name$}{:>amount$}{:>amount$}{:>amount$}\n",
        "Budget",
        "Budgeted",
        "Spent",
        "Remaining",
        name = NAME_WIDTH,
        amount = AMOUNT_WIDTH,
    ));
    output.push_str(&separator(TABLE_WIDTH));
    output.push('\n');

    for line in &summary.budgets {
        output.push_str(&format_row(
            &line.name,
            line.budgeted,
            line.spent,
            line.remaining,
        ));
    }

    output.push_str(&separator(TABLE_WIDTH));
    output.push('\n');
    output.push_str(&format_row(
        "Total",
        summary.total_budgeted,
        summary.total_spent,
        summary.total_remaining,
    ));

    output
}

fn format_row(name: &str, budgeted: f64, spent: f64, remaining: f64) -> String {
    format!(
        "{:<name$}{:>amount$.2}{:>amount$.2}{:>amount$.2}\n",
        name,
        budgeted,
        spent,
        remaining,
        name = NAME_WIDTH,
        amount = AMOUNT_WIDTH,
    )
}
