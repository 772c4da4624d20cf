//! Expense service
//!
//! Business logic for expense management, mirroring the budget service
//! with the extra date field.

use crate::audit::EntityType;
use crate::error::{PaisaError, PaisaResult};
use crate::forms::ExpenseForm;
use crate::models::{Expense, ExpenseId};
use crate::store::RecordStore;

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a RecordStore,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Create an expense from form input
    pub fn create(&self, form: &ExpenseForm) -> PaisaResult<Expense> {
        let payload = form.validate()?;

        let expense = self.store.expenses.insert(
            payload.name,
            payload.amount,
            payload.category,
            payload.date,
        )?;
        self.store.expenses.save()?;

        self.store.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.name.clone()),
            &expense,
        )?;

        Ok(expense)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> PaisaResult<Option<Expense>> {
        self.store.expenses.get(id)
    }

    /// List all expenses in ID order
    pub fn list(&self) -> PaisaResult<Vec<Expense>> {
        self.store.expenses.get_all()
    }

    /// Update an expense from form input
    pub fn update(&self, id: ExpenseId, form: &ExpenseForm) -> PaisaResult<Expense> {
        let payload = form.validate()?;

        let mut expense = self
            .store
            .expenses
            .get(id)?
            .ok_or_else(|| PaisaError::expense_not_found(id.to_string()))?;

        let before = expense.clone();
        expense.apply_update(payload.name, payload.amount, payload.category, payload.date);

        self.store.expenses.update(expense.clone())?;
        self.store.expenses.save()?;

        self.store.log_update(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.name.clone()),
            &before,
            &expense,
        )?;

        Ok(expense)
    }

    /// Delete an expense by ID
    pub fn delete(&self, id: ExpenseId) -> PaisaResult<()> {
        let expense = self
            .store
            .expenses
            .get(id)?
            .ok_or_else(|| PaisaError::expense_not_found(id.to_string()))?;

        self.store.expenses.delete(id)?;
        self.store.expenses.save()?;

        self.store.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.name.clone()),
            &expense,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PaisaPaths;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, RecordStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaisaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = RecordStore::new(paths).unwrap();
        store.load_all().unwrap();
        (temp_dir, store)
    }

    fn valid_form() -> ExpenseForm {
        ExpenseForm {
            name: "Lunch".into(),
            amount: "300".into(),
            category: "Food".into(),
            date: "2025-01-15".into(),
        }
    }

    #[test]
    fn test_create_and_list() {
        let (_temp, store) = create_test_store();
        let service = ExpenseService::new(&store);

        let expense = service.create(&valid_form()).unwrap();
        assert_eq!(expense.name, "Lunch");
        assert_eq!(expense.amount, 300.0);

        let all = service.list().unwrap();
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_invalid_form_never_reaches_store() {
        let (_temp, store) = create_test_store();
        let service = ExpenseService::new(&store);

        let mut form = valid_form();
        form.date = "not a date".into();

        let err = service.create(&form).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_update_and_delete() {
        let (_temp, store) = create_test_store();
        let service = ExpenseService::new(&store);

        let expense = service.create(&valid_form()).unwrap();

        let mut form = valid_form();
        form.amount = "450".into();
        let updated = service.update(expense.id, &form).unwrap();
        assert_eq!(updated.amount, 450.0);

        service.delete(expense.id).unwrap();
        assert_eq!(store.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_missing_expense() {
        let (_temp, store) = create_test_store();
        let service = ExpenseService::new(&store);

        let err = service.delete(ExpenseId::from_raw(7)).unwrap_err();
        assert!(err.is_not_found());
    }
}
