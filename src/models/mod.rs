//! Core data models
//!
//! Defines the persisted record types (budgets, expenses, categories)
//! and their strongly-typed identifiers.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;

pub use budget::{Budget, BudgetValidationError};
pub use category::{Category, CategoryValidationError};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::{BudgetId, CategoryId, ExpenseId};
