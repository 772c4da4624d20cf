//! Budget model
//!
//! A budget is a named spending target tied to a category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;

/// A named spending target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Display name (e.g. "Food")
    pub name: String,

    /// Budgeted amount
    pub amount: f64,

    /// Category name this budget belongs to
    pub category: String,

    /// When this budget was created
    pub created_at: DateTime<Utc>,

    /// When this budget was last modified
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget
    pub fn new(id: BudgetId, name: String, amount: f64, category: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            amount,
            category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the editable fields, bumping the modification timestamp
    pub fn apply_update(&mut self, name: String, amount: f64, category: String) {
        self.name = name;
        self.amount = amount;
        self.category = category;
        self.updated_at = Utc::now();
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.name.trim().is_empty() {
            return Err(BudgetValidationError::EmptyName);
        }

        if !self.amount.is_finite() {
            return Err(BudgetValidationError::InvalidAmount);
        }

        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.category, self.amount)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyName,
    InvalidAmount,
    EmptyCategory,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Budget name cannot be empty"),
            Self::InvalidAmount => write!(f, "Budget amount must be a number"),
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget() {
        let budget = Budget::new(BudgetId::from_raw(1), "Food".into(), 5000.0, "Food".into());

        assert_eq!(budget.id, BudgetId::from_raw(1));
        assert_eq!(budget.name, "Food");
        assert_eq!(budget.amount, 5000.0);
        assert!(budget.validate().is_ok());
    }

    #[test]
    fn test_apply_update() {
        let mut budget = Budget::new(BudgetId::from_raw(1), "Food".into(), 5000.0, "Food".into());
        let created = budget.created_at;

        budget.apply_update("Groceries".into(), 6000.0, "Food".into());

        assert_eq!(budget.name, "Groceries");
        assert_eq!(budget.amount, 6000.0);
        assert_eq!(budget.created_at, created);
        assert!(budget.updated_at >= created);
    }

    #[test]
    fn test_validation() {
        let mut budget = Budget::new(BudgetId::from_raw(1), "Food".into(), 5000.0, "Food".into());
        assert!(budget.validate().is_ok());

        budget.name = "  ".into();
        assert_eq!(budget.validate(), Err(BudgetValidationError::EmptyName));

        budget.name = "Food".into();
        budget.amount = f64::NAN;
        assert_eq!(budget.validate(), Err(BudgetValidationError::InvalidAmount));

        budget.amount = 5000.0;
        budget.category = "".into();
        assert_eq!(budget.validate(), Err(BudgetValidationError::EmptyCategory));
    }

    #[test]
    fn test_serialization() {
        let budget = Budget::new(BudgetId::from_raw(3), "Rent".into(), 12000.0, "Housing".into());

        let json = serde_json::to_string(&budget).unwrap();
        let deserialized: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(budget.id, deserialized.id);
        assert_eq!(budget.name, deserialized.name);
        assert_eq!(budget.amount, deserialized.amount);
    }
}
