//! Business logic services
//!
//! Services sit between the surfaces (CLI/TUI) and the store. Each one
//! validates input, performs the mutation, persists, and writes the
//! audit entry.

pub mod budget;
pub mod category;
pub mod expense;

pub use budget::BudgetService;
pub use category::CategoryService;
pub use expense::ExpenseService;
