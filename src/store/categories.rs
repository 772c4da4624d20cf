//! Category repository for JSON storage
//!
//! Manages the category vocabulary in categories.json. Name lookup is
//! exact; a separate case-insensitive lookup exists for duplicate checks
//! at creation time.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PaisaError;
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), PaisaError> {
        let file_data: Vec<Category> = read_json(&self.path)?;

        let mut categories = self
            .categories
            .write()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire write lock: {}", e)))?;

        categories.clear();
        for category in file_data {
            categories.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), PaisaError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = categories.values().cloned().collect();
        list.sort_by_key(|c| c.id);

        write_json_atomic(&self.path, &list)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, PaisaError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.get(&id).cloned())
    }

    /// Get all categories, ordered by ID
    pub fn get_all(&self) -> Result<Vec<Category>, PaisaError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = categories.values().cloned().collect();
        list.sort_by_key(|c| c.id);
        Ok(list)
    }

    /// Get a category by exact name
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, PaisaError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.values().find(|c| c.name == name).cloned())
    }

    /// Get a category by name, ignoring case (used for duplicate checks)
    pub fn get_by_name_ci(&self, name: &str) -> Result<Option<Category>, PaisaError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(categories
            .values()
            .find(|c| c.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Allocate the next ID and insert a new category
    pub fn insert(&self, name: String) -> Result<Category, PaisaError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire write lock: {}", e)))?;

        let next_id = categories
            .keys()
            .max()
            .map(|id| id.next())
            .unwrap_or_else(|| CategoryId::from_raw(1));

        let category = Category::new(next_id, name);
        categories.insert(category.id, category.clone());
        Ok(category)
    }

    /// Delete a category, returning whether it existed
    pub fn delete(&self, id: CategoryId) -> Result<bool, PaisaError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire write lock: {}", e)))?;

        Ok(categories.remove(&id).is_some())
    }

    /// Count categories
    pub fn count(&self) -> Result<usize, PaisaError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| PaisaError::Store(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CategoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        let repo = CategoryRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_get_by_name_is_exact() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert("Food".into()).unwrap();

        assert!(repo.get_by_name("Food").unwrap().is_some());
        assert!(repo.get_by_name("food").unwrap().is_none());
        assert!(repo.get_by_name("FOOD").unwrap().is_none());
    }

    #[test]
    fn test_get_by_name_ci() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert("Food".into()).unwrap();

        assert!(repo.get_by_name_ci("food").unwrap().is_some());
        assert!(repo.get_by_name_ci("FOOD").unwrap().is_some());
        assert!(repo.get_by_name_ci("Transport").unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let category = repo.insert("Food".into()).unwrap();
        repo.save().unwrap();

        let repo2 = CategoryRepository::new(temp_dir.path().join("categories.json"));
        repo2.load().unwrap();

        let retrieved = repo2.get(category.id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Food");
    }
}
