//! Budget service
//!
//! Business logic for budget management. Every mutation validates the
//! form first; a failing validation never reaches the store. Successful
//! mutations persist immediately and land in the audit log.

use crate::audit::EntityType;
use crate::error::{PaisaError, PaisaResult};
use crate::forms::BudgetForm;
use crate::models::{Budget, BudgetId};
use crate::store::RecordStore;

/// Service for budget management
pub struct BudgetService<'a> {
    store: &'a RecordStore,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Create a budget from form input
    pub fn create(&self, form: &BudgetForm) -> PaisaResult<Budget> {
        let payload = form.validate()?;

        let budget = self
            .store
            .budgets
            .insert(payload.name, payload.amount, payload.category)?;
        self.store.budgets.save()?;

        self.store.log_create(
            EntityType::Budget,
            budget.id.to_string(),
            Some(budget.name.clone()),
            &budget,
        )?;

        Ok(budget)
    }

    /// Get a budget by ID
    pub fn get(&self, id: BudgetId) -> PaisaResult<Option<Budget>> {
        self.store.budgets.get(id)
    }

    /// List all budgets in ID order
    pub fn list(&self) -> PaisaResult<Vec<Budget>> {
        self.store.budgets.get_all()
    }

    /// Update a budget from form input
    pub fn update(&self, id: BudgetId, form: &BudgetForm) -> PaisaResult<Budget> {
        let payload = form.validate()?;

        let mut budget = self
            .store
            .budgets
            .get(id)?
            .ok_or_else(|| PaisaError::budget_not_found(id.to_string()))?;

        let before = budget.clone();
        budget.apply_update(payload.name, payload.amount, payload.category);

        self.store.budgets.update(budget.clone())?;
        self.store.budgets.save()?;

        self.store.log_update(
            EntityType::Budget,
            budget.id.to_string(),
            Some(budget.name.clone()),
            &before,
            &budget,
        )?;

        Ok(budget)
    }

    /// Delete a budget by ID
    pub fn delete(&self, id: BudgetId) -> PaisaResult<()> {
        let budget = self
            .store
            .budgets
            .get(id)?
            .ok_or_else(|| PaisaError::budget_not_found(id.to_string()))?;

        self.store.budgets.delete(id)?;
        self.store.budgets.save()?;

        self.store.log_delete(
            EntityType::Budget,
            budget.id.to_string(),
            Some(budget.name.clone()),
            &budget,
        )?;

        Ok(())
    }
}
