//! Selection validation for analysis views
//!
//! A selection names which budgets and expenses the user wants compared.
//! Validation decides whether a chart can be shown at all; an invalid
//! selection never produces a partial chart.

use std::fmt;

use crate::models::{BudgetId, ExpenseId};

/// What the user has picked for comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// One budget against one expense
    Pair {
        budget: Option<BudgetId>,
        expense: Option<ExpenseId>,
    },
    /// Any number of budgets against any number of expenses
    Multi {
        budgets: Vec<BudgetId>,
        expenses: Vec<ExpenseId>,
    },
}

impl Selection {
    /// Check whether this selection can be displayed
    ///
    /// Pair mode requires both sides to be chosen. Multi mode rejects the
    /// empty selection and the two lone-single-item cases; every other
    /// combination is displayable, including several items on one side
    /// with none on the other.
    pub fn validate(&self) -> Result<(), SelectionError> {
        match self {
            Selection::Pair { budget, expense } => {
                if budget.is_none() || expense.is_none() {
                    return Err(SelectionError::IncompletePair);
                }
                Ok(())
            }
            Selection::Multi { budgets, expenses } => {
                let b = budgets.len();
                let e = expenses.len();
                if (b == 0 && e == 0) || (b == 0 && e == 1) || (b == 1 && e == 0) {
                    return Err(SelectionError::TooFewItems);
                }
                Ok(())
            }
        }
    }
}

/// Why a selection cannot be displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Pair mode with one or both sides missing
    IncompletePair,
    /// Multi mode with nothing selected, or a single lone item
    TooFewItems,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompletePair => {
                write!(
                    f,
                    "Please select both a budget and an expense to show the analysis."
                )
            }
            Self::TooFewItems => {
                write!(
                    f,
                    "Please select at least one budget and expense to show the analysis."
                )
            }
        }
    }
}

impl std::error::Error for SelectionError {}
