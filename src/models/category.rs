//! Category model
//!
//! Categories form the shared vocabulary that budgets and expenses
//! reference by name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A spending category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name, unique within the vocabulary
    pub name: String,

    /// When this category was created
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category
    pub fn new(id: CategoryId, name: String) -> Self {
        Self {
            id,
            name,
            created_at: Utc::now(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(CategoryValidationError::NameTooLong);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong => write!(f, "Category name is too long (max 100 characters)"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
