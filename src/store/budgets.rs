//! Budget repository for JSON storage
//!
//! Manages loading and saving budgets to budgets.json. IDs are allocated
//! sequentially (max existing + 1) so an ID is never reused while the
//! file still holds the record.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PaisaError;
use crate::models::{Budget, BudgetId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<HashMap<BudgetId, Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(HashMap::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), PaisaError> {
        let file_data: Vec<Budget> = read_json(&self.path)?;

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire write lock: {}", e)))?;

        budgets.clear();
        for budget in file_data {
            budgets.insert(budget.id, budget);
        }

        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), PaisaError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = budgets.values().cloned().collect();
        list.sort_by_key(|b| b.id);

        write_json_atomic(&self.path, &list)
    }

    /// Get a budget by ID
    pub fn get(&self, id: BudgetId) -> Result<Option<Budget>, PaisaError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.get(&id).cloned())
    }

    /// Get all budgets, ordered by ID
    pub fn get_all(&self) -> Result<Vec<Budget>, PaisaError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = budgets.values().cloned().collect();
        list.sort_by_key(|b| b.id);
        Ok(list)
    }

    /// Allocate the next ID and insert a new budget
    pub fn insert(
        &self,
        name: String,
        amount: f64,
        category: String,
    ) -> Result<Budget, PaisaError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire write lock: {}", e)))?;

        let next_id = budgets
            .keys()
            .max()
            .map(|id| id.next())
            .unwrap_or_else(|| BudgetId::from_raw(1));

        let budget = Budget::new(next_id, name, amount, category);
        budgets.insert(budget.id, budget.clone());
        Ok(budget)
    }

    /// Replace an existing budget
    pub fn update(&self, budget: Budget) -> Result<(), PaisaError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire write lock: {}", e)))?;

        if !budgets.contains_key(&budget.id) {
            return Err(PaisaError::budget_not_found(budget.id.to_string()));
        }

        budgets.insert(budget.id, budget);
        Ok(())
    }

    /// Delete a budget, returning whether it existed
    pub fn delete(&self, id: BudgetId) -> Result<bool, PaisaError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire write lock: {}", e)))?;

        Ok(budgets.remove(&id).is_some())
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, PaisaError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire read lock: {}", e)))?;
        Ok(budgets.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");
        let repo = BudgetRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_allocates_sequential_ids() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let first = repo.insert("Food".into(), 5000.0, "Food".into()).unwrap();
        let second = repo
            .insert("Rent".into(), 12000.0, "Housing".into())
            .unwrap();

        assert_eq!(first.id, BudgetId::from_raw(1));
        assert_eq!(second.id, BudgetId::from_raw(2));
    }

    #[test]
    fn test_id_not_reused_after_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let first = repo.insert("Food".into(), 5000.0, "Food".into()).unwrap();
        let second = repo
            .insert("Rent".into(), 12000.0, "Housing".into())
            .unwrap();

        // Removing the first record must not free its ID while the
        // second (higher) record remains
        assert!(repo.delete(first.id).unwrap());
        let third = repo.insert("Fuel".into(), 2000.0, "Transport".into()).unwrap();
        assert!(third.id > second.id);
    }

    #[test]
    fn test_update() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut budget = repo.insert("Food".into(), 5000.0, "Food".into()).unwrap();
        budget.apply_update("Groceries".into(), 6000.0, "Food".into());
        repo.update(budget.clone()).unwrap();

        let retrieved = repo.get(budget.id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Groceries");
        assert_eq!(retrieved.amount, 6000.0);
    }

    #[test]
    fn test_update_missing_budget_fails() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let budget = Budget::new(BudgetId::from_raw(99), "Ghost".into(), 1.0, "Misc".into());
        let err = repo.update(budget).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let budget = repo.insert("Food".into(), 5000.0, "Food".into()).unwrap();
        repo.save().unwrap();

        let repo2 = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        repo2.load().unwrap();

        let retrieved = repo2.get(budget.id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Food");
        assert_eq!(retrieved.amount, 5000.0);
    }
}
