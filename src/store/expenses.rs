//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. ID allocation
//! follows the same max-plus-one rule as the budget repository.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::PaisaError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    expenses: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), PaisaError> {
        let file_data: Vec<Expense> = read_json(&self.path)?;

        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire write lock: {}", e)))?;

        expenses.clear();
        for expense in file_data {
            expenses.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), PaisaError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = expenses.values().cloned().collect();
        list.sort_by_key(|e| e.id);

        write_json_atomic(&self.path, &list)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, PaisaError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(expenses.get(&id).cloned())
    }

    /// Get all expenses, ordered by ID
    pub fn get_all(&self) -> Result<Vec<Expense>, PaisaError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = expenses.values().cloned().collect();
        list.sort_by_key(|e| e.id);
        Ok(list)
    }

    /// Allocate the next ID and insert a new expense
    pub fn insert(
        &self,
        name: String,
        amount: f64,
        category: String,
        date: NaiveDate,
    ) -> Result<Expense, PaisaError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire write lock: {}", e)))?;

        let next_id = expenses
            .keys()
            .max()
            .map(|id| id.next())
            .unwrap_or_else(|| ExpenseId::from_raw(1));

        let expense = Expense::new(next_id, name, amount, category, date);
        expenses.insert(expense.id, expense.clone());
        Ok(expense)
    }

    /// Replace an existing expense
    pub fn update(&self, expense: Expense) -> Result<(), PaisaError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire write lock: {}", e)))?;

        if !expenses.contains_key(&expense.id) {
            return Err(PaisaError::expense_not_found(expense.id.to_string()));
        }

        expenses.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense, returning whether it existed
    pub fn delete(&self, id: ExpenseId) -> Result<bool, PaisaError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire write lock: {}", e)))?;

        Ok(expenses.remove(&id).is_some())
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, PaisaError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire read lock: {}", e)))?;
        Ok(expenses.len())
    }
}
