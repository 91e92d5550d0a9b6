//! Budget model
//!
//! A budget is a named allocation of funds with the ordered list of
//! expenditures recorded against it. Spent and remaining amounts are
//! derived, never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named budget with its allocated amount and recorded expenditures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Budget name (unique within a ledger)
    pub name: String,

    /// Amount currently allocated to this budget
    pub allocated: f64,

    /// Individual spend amounts in the order they were recorded
    pub expenditures: Vec<f64>,
}

impl Budget {
    /// Create a new budget with no expenditures
    pub fn new(name: impl Into<String>, allocated: f64) -> Self {
        Self {
            name: name.into(),
            allocated,
            expenditures: Vec::new(),
        }
    }

    /// Record an expenditure against this budget
    ///
    /// Spending is not capped by the allocation; remaining may go negative.
    pub fn record(&mut self, amount: f64) {
        self.expenditures.push(amount);
    }

    /// Total spent against this budget
    pub fn spent(&self) -> f64 {
        self.expenditures.iter().sum()
    }

    /// Allocated amount minus total spent (may be negative)
    pub fn remaining(&self) -> f64 {
        self.allocated - self.spent()
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.2} allocated, {:.2} spent",
            self.name,
            self.allocated,
            self.spent()
        )
    }
}

/// A computed summary line for one budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Budget name
    pub name: String,

    /// Amount allocated
    pub budgeted: f64,

    /// Total spent
    pub spent: f64,

    /// Budgeted minus spent
    pub remaining: f64,
}

impl BudgetSummary {
    /// Build the summary line for a budget
    pub fn from_budget(budget: &Budget) -> Self {
        let spent = budget.spent();
        Self {
            name: budget.name.clone(),
            budgeted: budget.allocated,
            spent,
            remaining: budget.allocated - spent,
        }
    }

    /// Check if more has been spent than was budgeted
    pub fn is_overspent(&self) -> bool {
        self.remaining < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget() {
        let budget = Budget::new("Groceries", 200.0);
        assert_eq!(budget.name, "Groceries");
        assert_eq!(budget.allocated, 200.0);
        assert!(budget.expenditures.is_empty());
        assert_eq!(budget.spent(), 0.0);
        assert_eq!(budget.remaining(), 200.0);
    }

    #[test]
    fn test_record_and_spent() {
        let mut budget = Budget::new("Groceries", 200.0);
        budget.record(50.0);
        budget.record(25.0);
        assert_eq!(budget.expenditures, vec![50.0, 25.0]);
        assert_eq!(budget.spent(), 75.0);
        assert_eq!(budget.remaining(), 125.0);
    }

    #[test]
    fn test_remaining_can_go_negative() {
        let mut budget = Budget::new("Dining Out", 30.0);
        budget.record(45.0);
        assert_eq!(budget.remaining(), -15.0);
    }

    #[test]
    fn test_display() {
        let mut budget = Budget::new("Rent", 900.0);
        budget.record(900.0);
        assert_eq!(budget.to_string(), "Rent: 900.00 allocated, 900.00 spent");
    }

    #[test]
    fn test_summary_from_budget() {
        let mut budget = Budget::new("Groceries", 200.0);
        budget.record(50.0);

        let summary = BudgetSummary::from_budget(&budget);
        assert_eq!(summary.name, "Groceries");
        assert_eq!(summary.budgeted, 200.0);
        assert_eq!(summary.spent, 50.0);
        assert_eq!(summary.remaining, 150.0);
        assert!(!summary.is_overspent());
    }

    #[test]
    fn test_summary_overspent() {
        let mut budget = Budget::new("Groceries", 40.0);
        budget.record(60.0);

        let summary = BudgetSummary::from_budget(&budget);
        assert_eq!(summary.remaining, -20.0);
        assert!(summary.is_overspent());
    }
}
