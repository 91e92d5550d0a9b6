//! Custom error types for the ledger
//!
//! This module defines the failure kinds for ledger operations using
//! thiserror for ergonomic error definitions. Every failure is a
//! precondition violation: checks run before any mutation, so a failed
//! operation leaves the ledger untouched.

use thiserror::Error;

/// The error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Allocation targets a budget name that already exists
    #[error("Budget exists")]
    BudgetExists,

    /// Allocation or reallocation asks for more than the available pool covers
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Reallocation targets a budget that was never created
    #[error("Budget does not exist")]
    BudgetNotFound,

    /// Spend targets a budget that was never created
    #[error("No such budget")]
    NoSuchBudget,
}

impl LedgerError {
    /// Check if this error reports a missing budget (from either context)
    pub fn is_missing_budget(&self) -> bool {
        matches!(self, Self::BudgetNotFound | Self::NoSuchBudget)
    }

    /// Check if this is an insufficient-funds error
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds)
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(LedgerError::BudgetExists.to_string(), "Budget exists");
        assert_eq!(
            LedgerError::InsufficientFunds.to_string(),
            "Insufficient funds"
        );
        assert_eq!(
            LedgerError::BudgetNotFound.to_string(),
            "Budget does not exist"
        );
        assert_eq!(LedgerError::NoSuchBudget.to_string(), "No such budget");
    }

    #[test]
    fn test_is_missing_budget() {
        assert!(LedgerError::BudgetNotFound.is_missing_budget());
        assert!(LedgerError::NoSuchBudget.is_missing_budget());
        assert!(!LedgerError::BudgetExists.is_missing_budget());
    }

    #[test]
    fn test_is_insufficient_funds() {
        assert!(LedgerError::InsufficientFunds.is_insufficient_funds());
        assert!(!LedgerError::BudgetExists.is_insufficient_funds());
    }
}
