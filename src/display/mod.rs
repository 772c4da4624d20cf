//! Display formatting for terminal output
//!
//! Formats data models and chart series for the CLI.

pub mod analysis;
pub mod budget;
pub mod category;
pub mod expense;

pub use analysis::format_series;
pub use budget::{format_budget_details, format_budget_list};
pub use category::format_category_list;
pub use expense::{format_expense_details, format_expense_list};
