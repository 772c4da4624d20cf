//! Terminal user interface
//!
//! Interactive mode built on ratatui and crossterm. The App struct holds
//! all state; events arrive from a background polling thread; the handler
//! mutates the App and the views render it.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
