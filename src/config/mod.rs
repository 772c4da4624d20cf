//! Configuration module
//!
//! Handles path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::PaisaPaths;
pub use settings::Settings;
