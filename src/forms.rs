//! Form input validation
//!
//! Forms hold raw string inputs exactly as the user typed them. Calling
//! `validate()` either produces a typed payload ready for the store or a
//! [`FieldErrors`] map of per-field messages. A form that fails validation
//! never reaches the store; the raw inputs are preserved so the user can
//! correct them in place.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

/// Per-field validation messages, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    /// Create an empty error map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Get the message for a field, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Whether any field has an error
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over (field, message) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Validated budget input, ready to store
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetPayload {
    pub name: String,
    pub amount: f64,
    pub category: String,
}

/// Raw budget form inputs
#[derive(Debug, Clone, Default)]
pub struct BudgetForm {
    pub name: String,
    pub amount: String,
    pub category: String,
}

impl BudgetForm {
    /// Validate all fields, collecting every failure
    pub fn validate(&self) -> Result<BudgetPayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert("name", "Budget Name is required");
        }

        let amount_input = self.amount.trim();
        let mut amount = 0.0;
        if amount_input.is_empty() {
            errors.insert("amount", "Budget Amount is required");
        } else {
            match amount_input.parse::<f64>() {
                Ok(value) if value.is_finite() => amount = value,
                _ => errors.insert("amount", "Budget Amount must be a number"),
            }
        }

        let category = self.category.trim();
        if category.is_empty() {
            errors.insert("category", "Budget Category is required");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(BudgetPayload {
            name: name.to_string(),
            amount,
            category: category.to_string(),
        })
    }
}

/// Validated expense input, ready to store
#[derive(Debug, Clone, PartialEq)]
pub struct ExpensePayload {
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

/// Raw expense form inputs
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub name: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl ExpenseForm {
    /// Validate all fields, collecting every failure
    pub fn validate(&self) -> Result<ExpensePayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert("name", "Expense Name is required");
        }

        let amount_input = self.amount.trim();
        let mut amount = 0.0;
        if amount_input.is_empty() {
            errors.insert("amount", "Expense Amount is required");
        } else {
            match amount_input.parse::<f64>() {
                Ok(value) if value.is_finite() => amount = value,
                _ => errors.insert("amount", "Expense Amount must be a number"),
            }
        }

        let category = self.category.trim();
        if category.is_empty() {
            errors.insert("category", "Expense Category is required");
        }

        let date_input = self.date.trim();
        let mut date = None;
        if date_input.is_empty() {
            errors.insert("date", "Expense Date is required");
        } else {
            match NaiveDate::parse_from_str(date_input, "%Y-%m-%d") {
                Ok(parsed) => date = Some(parsed),
                Err(_) => errors.insert("date", "Expense Date must be a valid date (YYYY-MM-DD)"),
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ExpensePayload {
            name: name.to_string(),
            amount,
            category: category.to_string(),
            date: date.unwrap(),
        })
    }
}
