//! Budget-vs-expense analysis
//!
//! Validates a selection and builds the chart series for it.

pub mod selection;
pub mod series;

pub use selection::{Selection, SelectionError};
pub use series::{multi_series, pair_series, ChartSeries, PAIR_LABEL};

use crate::error::PaisaError;
use crate::models::{Budget, Expense};

/// Validate a selection and build its chart series
///
/// Records are picked out of the given lists by ID, keeping list order.
/// Selected IDs that match no record are skipped; in pair mode a missing
/// record is reported as not found.
pub fn build(
    selection: &Selection,
    budgets: &[Budget],
    expenses: &[Expense],
) -> Result<ChartSeries, PaisaError> {
    selection.validate()?;

    match selection {
        Selection::Pair { budget, expense } => {
            // validate() guarantees both sides are Some
            let budget_id = budget.ok_or(SelectionError::IncompletePair)?;
            let expense_id = expense.ok_or(SelectionError::IncompletePair)?;

            let budget = budgets
                .iter()
                .find(|b| b.id == budget_id)
                .ok_or_else(|| PaisaError::budget_not_found(budget_id.to_string()))?;
            let expense = expenses
                .iter()
                .find(|e| e.id == expense_id)
                .ok_or_else(|| PaisaError::expense_not_found(expense_id.to_string()))?;

            Ok(pair_series(budget, expense))
        }
        Selection::Multi {
            budgets: budget_ids,
            expenses: expense_ids,
        } => {
            let selected_budgets: Vec<Budget> = budgets
                .iter()
                .filter(|b| budget_ids.contains(&b.id))
                .cloned()
                .collect();
            let selected_expenses: Vec<Expense> = expenses
                .iter()
                .filter(|e| expense_ids.contains(&e.id))
                .cloned()
                .collect();

            Ok(multi_series(&selected_budgets, &selected_expenses))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetId, ExpenseId};
    use chrono::NaiveDate;

    fn budget(id: i64, name: &str, amount: f64) -> Budget {
        Budget::new(BudgetId::from_raw(id), name.into(), amount, "Misc".into())
    }

    fn expense(id: i64, name: &str, amount: f64) -> Expense {
        Expense::new(
            ExpenseId::from_raw(id),
            name.into(),
            amount,
            "Misc".into(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_build_pair() {
        let budgets = vec![budget(1, "Food", 5000.0)];
        let expenses = vec![expense(1, "Lunch", 300.0)];

        let selection = Selection::Pair {
            budget: Some(BudgetId::from_raw(1)),
            expense: Some(ExpenseId::from_raw(1)),
        };

        let series = build(&selection, &budgets, &expenses).unwrap();
        assert_eq!(series.labels, vec!["Selected Items"]);
        assert_eq!(series.budget_values, vec![Some(5000.0)]);
        assert_eq!(series.expense_values, vec![Some(300.0)]);
    }

    #[test]
    fn test_build_pair_incomplete_is_rejected() {
        let selection = Selection::Pair {
            budget: Some(BudgetId::from_raw(1)),
            expense: None,
        };

        let err = build(&selection, &[], &[]).unwrap_err();
        assert!(matches!(err, PaisaError::Selection(_)));
    }

    #[test]
    fn test_build_pair_missing_record() {
        let selection = Selection::Pair {
            budget: Some(BudgetId::from_raw(99)),
            expense: Some(ExpenseId::from_raw(1)),
        };

        let err = build(&selection, &[], &[expense(1, "Lunch", 300.0)]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_build_multi_keeps_list_order() {
        let budgets = vec![budget(1, "Food", 5000.0), budget(2, "Rent", 12000.0)];
        let expenses = vec![expense(1, "Lunch", 300.0), expense(2, "Taxi", 150.0)];

        // Selection order does not matter; list order does
        let selection = Selection::Multi {
            budgets: vec![BudgetId::from_raw(2), BudgetId::from_raw(1)],
            expenses: vec![ExpenseId::from_raw(2), ExpenseId::from_raw(1)],
        };

        let series = build(&selection, &budgets, &expenses).unwrap();
        assert_eq!(series.labels, vec!["Food", "Rent", "Lunch", "Taxi"]);
    }

    #[test]
    fn test_build_multi_lone_item_rejected() {
        let selection = Selection::Multi {
            budgets: vec![BudgetId::from_raw(1)],
            expenses: vec![],
        };

        let err = build(&selection, &[budget(1, "Food", 5000.0)], &[]).unwrap_err();
        assert!(matches!(err, PaisaError::Selection(_)));
    }

    #[test]
    fn test_build_multi_one_sided_is_valid() {
        let expenses = vec![expense(1, "Lunch", 300.0), expense(2, "Taxi", 150.0)];
        let selection = Selection::Multi {
            budgets: vec![],
            expenses: vec![ExpenseId::from_raw(1), ExpenseId::from_raw(2)],
        };

        let series = build(&selection, &[], &expenses).unwrap();
        assert_eq!(series.labels, vec!["Lunch", "Taxi"]);
        assert_eq!(series.budget_values, vec![None, None]);
    }
}
