//! Storage layer for paisa-cli
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. One file per record kind under the data directory.

pub mod budgets;
pub mod categories;
pub mod expenses;
pub mod file_io;

pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::PaisaPaths;
use crate::error::PaisaError;

/// Main storage coordinator that provides access to all repositories
pub struct RecordStore {
    paths: PaisaPaths,
    audit: AuditLogger,
    pub budgets: BudgetRepository,
    pub expenses: ExpenseRepository,
    pub categories: CategoryRepository,
}

impl RecordStore {
    /// Create a new RecordStore instance
    pub fn new(paths: PaisaPaths) -> Result<Self, PaisaError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            budgets: BudgetRepository::new(paths.budgets_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PaisaPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), PaisaError> {
        self.budgets.load()?;
        self.expenses.load()?;
        self.categories.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), PaisaError> {
        self.budgets.save()?;
        self.expenses.save()?;
        self.categories.save()?;
        Ok(())
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), PaisaError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update operation in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), PaisaError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ))
    }

    /// Record a delete operation in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), PaisaError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}
