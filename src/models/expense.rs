//! Expense model
//!
//! A dated spending record tied to a category.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;

/// A single spending record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Display name (e.g. "Lunch")
    pub name: String,

    /// Amount spent
    pub amount: f64,

    /// Category name this expense belongs to
    pub category: String,

    /// The date the expense occurred
    pub date: NaiveDate,

    /// When this expense was created
    pub created_at: DateTime<Utc>,

    /// When this expense was last modified
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(id: ExpenseId, name: String, amount: f64, category: String, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            amount,
            category,
            date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the editable fields, bumping the modification timestamp
    pub fn apply_update(&mut self, name: String, amount: f64, category: String, date: NaiveDate) {
        self.name = name;
        self.amount = amount;
        self.category = category;
        self.date = date;
        self.updated_at = Utc::now();
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::InvalidAmount);
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) on {}: {}",
            self.name, self.category, self.date, self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    InvalidAmount,
    EmptyCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::InvalidAmount => write!(f, "Expense amount must be a number"),
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
