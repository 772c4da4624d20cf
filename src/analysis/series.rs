//! Chart series construction
//!
//! Pure functions that turn selected budgets and expenses into a
//! positionally aligned dataset for rendering. A series is ephemeral:
//! it is rebuilt on every "show analysis" action and discarded when the
//! selection changes.

use serde::{Deserialize, Serialize};

use crate::models::{Budget, Expense};

/// Label used for the two-item comparison chart
pub const PAIR_LABEL: &str = "Selected Items";

/// A chart-ready dataset
///
/// All three vectors have the same length. A position holds `None` in one
/// value array when the label at that position came from the other record
/// kind; `None` serializes as JSON null and renders as an empty bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// One label per chart position
    pub labels: Vec<String>,
    /// Budget amount at each position, None where the position is expense-derived
    pub budget_values: Vec<Option<f64>>,
    /// Expense amount at each position, None where the position is budget-derived
    pub expense_values: Vec<Option<f64>>,
}

impl ChartSeries {
    /// Number of chart positions
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the series has no positions
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Build the series for a one-budget-against-one-expense comparison
///
/// Single label, both value arrays populated at the one position.
pub fn pair_series(budget: &Budget, expense: &Expense) -> ChartSeries {
    ChartSeries {
        labels: vec![PAIR_LABEL.to_string()],
        budget_values: vec![Some(budget.amount)],
        expense_values: vec![Some(expense.amount)],
    }
}

/// Build the series for a multi-item comparison
///
/// Budget positions come first in the given order, then expense positions.
/// Each position carries the record's own name and amount; the other value
/// array holds None there. Items are never merged or deduplicated by name.
pub fn multi_series(budgets: &[Budget], expenses: &[Expense]) -> ChartSeries {
    let total = budgets.len() + expenses.len();
    let mut labels = Vec::with_capacity(total);
    let mut budget_values = Vec::with_capacity(total);
    let mut expense_values = Vec::with_capacity(total);

    for budget in budgets {
        labels.push(budget.name.clone());
        budget_values.push(Some(budget.amount));
        expense_values.push(None);
    }

    for expense in expenses {
        labels.push(expense.name.clone());
        budget_values.push(None);
        expense_values.push(Some(expense.amount));
    }

    ChartSeries {
        labels,
        budget_values,
        expense_values,
    }
}
