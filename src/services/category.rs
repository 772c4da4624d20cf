//! Category service
//!
//! Business logic for the category vocabulary. Resolution is an exact
//! name match; creation trims the name and rejects duplicates ignoring
//! case, so two entries can never differ only in casing.

use crate::audit::EntityType;
use crate::error::{PaisaError, PaisaResult};
use crate::models::{Category, CategoryId};
use crate::store::RecordStore;

/// Service for category management
pub struct CategoryService<'a> {
    store: &'a RecordStore,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Resolve a category by exact name
    pub fn resolve(&self, name: &str) -> PaisaResult<Option<Category>> {
        self.store.categories.get_by_name(name)
    }

    /// Create a new category
    pub fn create(&self, name: &str) -> PaisaResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PaisaError::field("name", "Category name is required"));
        }

        // Duplicate check ignores case so "food" cannot join "Food"
        if self.store.categories.get_by_name_ci(name)?.is_some() {
            return Err(PaisaError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        if name.len() > 100 {
            return Err(PaisaError::field(
                "name",
                "Category name is too long (max 100 characters)",
            ));
        }

        let category = self.store.categories.insert(name.to_string())?;
        self.store.categories.save()?;

        self.store.log_create(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        )?;

        Ok(category)
    }

    /// Resolve a category by name, creating it if absent
    ///
    /// An existing entry under a different casing counts as present and is
    /// returned as-is.
    pub fn resolve_or_create(&self, name: &str) -> PaisaResult<Category> {
        if let Some(existing) = self.store.categories.get_by_name(name)? {
            return Ok(existing);
        }
        if let Some(existing) = self.store.categories.get_by_name_ci(name)? {
            return Ok(existing);
        }
        self.create(name)
    }

    /// List all categories in ID order
    pub fn list(&self) -> PaisaResult<Vec<Category>> {
        self.store.categories.get_all()
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> PaisaResult<Option<Category>> {
        self.store.categories.get(id)
    }

    /// Delete a category by ID
    pub fn delete(&self, id: CategoryId) -> PaisaResult<()> {
        let category = self
            .store
            .categories
            .get(id)?
            .ok_or_else(|| PaisaError::category_not_found(id.to_string()))?;

        self.store.categories.delete(id)?;
        self.store.categories.save()?;

        self.store.log_delete(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
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

    #[test]
    fn test_create_and_resolve() {
        let (_temp, store) = create_test_store();
        let service = CategoryService::new(&store);

        let category = service.create("Food").unwrap();
        assert_eq!(category.name, "Food");

        let resolved = service.resolve("Food").unwrap();
        assert!(resolved.is_some());
    }

    #[test]
    fn test_resolution_is_case_sensitive() {
        let (_temp, store) = create_test_store();
        let service = CategoryService::new(&store);

        service.create("Food").unwrap();

        assert!(service.resolve("food").unwrap().is_none());
        assert!(service.resolve("Food").unwrap().is_some());
    }

    #[test]
    fn test_create_rejects_case_insensitive_duplicate() {
        let (_temp, store) = create_test_store();
        let service = CategoryService::new(&store);

        service.create("Food").unwrap();

        let err = service.create("food").unwrap_err();
        assert!(matches!(err, PaisaError::Duplicate { .. }));
        assert_eq!(store.categories.count().unwrap(), 1);
    }

    #[test]
    fn test_create_trims_and_rejects_empty() {
        let (_temp, store) = create_test_store();
        let service = CategoryService::new(&store);

        let category = service.create("  Transport  ").unwrap();
        assert_eq!(category.name, "Transport");

        let err = service.create("   ").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_resolve_or_create() {
        let (_temp, store) = create_test_store();
        let service = CategoryService::new(&store);

        let first = service.resolve_or_create("Food").unwrap();
        let second = service.resolve_or_create("Food").unwrap();
        assert_eq!(first.id, second.id);

        // Different casing resolves to the existing entry rather than
        // creating a near-duplicate
        let third = service.resolve_or_create("FOOD").unwrap();
        assert_eq!(first.id, third.id);
        assert_eq!(store.categories.count().unwrap(), 1);
    }

    #[test]
    fn test_delete() {
        let (_temp, store) = create_test_store();
        let service = CategoryService::new(&store);

        let category = service.create("Food").unwrap();
        service.delete(category.id).unwrap();

        assert_eq!(store.categories.count().unwrap(), 0);
        assert!(service.delete(category.id).is_err());
    }
}
