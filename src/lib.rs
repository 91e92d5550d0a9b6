//! ledger-cli - Command-line budget ledger
//!
//! This library provides the core functionality for the ledger CLI. It
//! tracks a fixed pool of funds allocated across named budgets, records
//! expenditures against each budget, and reports remaining balances. State
//! is in-memory for the duration of one run.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (budgets and summary lines)
//! - `ledger`: The ledger itself (available funds, budgets, operations)
//! - `display`: Summary table formatting for terminal output
//! - `cli`: CLI command handlers
//!
//! # Example
//!
//! ```rust
//! use ledger_cli::Ledger;
//!
//! let mut ledger = Ledger::new(1000.0);
//! ledger.add_budget("Groceries", 200.0)?;
//! ledger.spend("Groceries", 50.0)?;
//! assert_eq!(ledger.available(), 800.0);
//! # Ok::<(), ledger_cli::LedgerError>(())
//! ```

pub mod cli;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
