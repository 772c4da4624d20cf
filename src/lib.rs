//! paisa - a terminal-based personal budget and expense tracker
//!
//! Budgets, expenses, and a shared category vocabulary are stored as JSON
//! files with atomic writes. The analysis module turns a selection of
//! budgets and expenses into a chart series for side-by-side comparison,
//! rendered as a bar chart in the TUI or a table on the CLI. Every
//! mutation lands in a JSONL audit log.

pub mod analysis;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod forms;
pub mod models;
pub mod services;
pub mod store;
pub mod tui;

pub use error::{PaisaError, PaisaResult};
