//! Core data models
//!
//! Data types owned by the ledger: budgets and their computed summary lines.

pub mod budget;

pub use budget::{Budget, BudgetSummary};
