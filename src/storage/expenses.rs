//! Expense repository for JSON storage
//!
//! Holds the ordered collection of expense items and mirrors it to a single
//! JSON array on disk.

use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{info, warn};

use crate::error::ExpenseError;
use crate::models::{ExpenseId, ExpenseItem};

use super::file_io::{quarantine, read_expenses, write_expenses};

/// How the collection was populated by [`ExpenseRepository::load`]
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Items were read from the data file
    Loaded(usize),
    /// No data file existed; the seed item was installed
    Seeded,
    /// The data file could not be parsed; the seed item was installed and the
    /// unreadable file moved to `preserved_as` when possible
    Recovered {
        reason: String,
        preserved_as: Option<PathBuf>,
    },
}

/// Repository for expense persistence, insertion order preserved
pub struct ExpenseRepository {
    path: PathBuf,
    items: RwLock<Vec<ExpenseItem>>,
}

impl ExpenseRepository {
    /// Create a new, empty repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            items: RwLock::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load items from disk, falling back to the seed item
    ///
    /// An unreadable file is moved aside, so later loads see no file and
    /// report `Seeded` until the next save writes a fresh one.
    pub fn load(&self) -> Result<LoadOutcome, ExpenseError> {
        let (loaded, outcome) = match read_expenses(&self.path) {
            Ok(Some(items)) => {
                let count = items.len();
                info!(path = %self.path.display(), count, "loaded expenses");
                (items, LoadOutcome::Loaded(count))
            }
            Ok(None) => {
                info!(path = %self.path.display(), "no expense file, starting with seed item");
                (vec![ExpenseItem::seed()], LoadOutcome::Seeded)
            }
            Err(e @ ExpenseError::Json(_)) => {
                let reason = e.to_string();
                let preserved_as = match quarantine(&self.path) {
                    Ok(moved) => Some(moved),
                    Err(move_err) => {
                        warn!(error = %move_err, "could not move unreadable expense file aside");
                        None
                    }
                };
                warn!(
                    path = %self.path.display(),
                    error = %reason,
                    preserved_as = ?preserved_as,
                    "expense file unreadable, starting with seed item"
                );
                (
                    vec![ExpenseItem::seed()],
                    LoadOutcome::Recovered {
                        reason,
                        preserved_as,
                    },
                )
            }
            Err(e) => return Err(e),
        };

        *self.write_items()? = loaded;
        Ok(outcome)
    }

    /// Save the whole collection to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        let items = self.read_items()?;
        write_expenses(&self.path, &items)?;
        info!(path = %self.path.display(), count = items.len(), "saved expenses");
        Ok(())
    }

    /// Get an item by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<ExpenseItem>, ExpenseError> {
        Ok(self.read_items()?.iter().find(|item| item.id == id).cloned())
    }

    /// Get all items in insertion order
    pub fn get_all(&self) -> Result<Vec<ExpenseItem>, ExpenseError> {
        Ok(self.read_items()?.clone())
    }

    /// Get an item by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<ExpenseItem>, ExpenseError> {
        Ok(self.read_items()?.iter().find(|item| item.has_name(name)).cloned())
    }

    /// Append a new item
    pub fn insert(&self, item: ExpenseItem) -> Result<(), ExpenseError> {
        self.write_items()?.push(item);
        Ok(())
    }

    /// Replace the item with the same ID in place; false if absent
    pub fn update(&self, item: ExpenseItem) -> Result<bool, ExpenseError> {
        let mut items = self.write_items()?;
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(slot) => {
                *slot = item;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove an item, returning it if it was present
    pub fn delete(&self, id: ExpenseId) -> Result<Option<ExpenseItem>, ExpenseError> {
        let mut items = self.write_items()?;
        Ok(items
            .iter()
            .position(|item| item.id == id)
            .map(|index| items.remove(index)))
    }

    fn read_items(&self) -> Result<RwLockReadGuard<'_, Vec<ExpenseItem>>, ExpenseError> {
        self.items
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_items(&self) -> Result<RwLockWriteGuard<'_, Vec<ExpenseItem>>, ExpenseError> {
        self.items
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryType;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_missing_file_seeds_example() {
        let (_temp_dir, repo) = create_test_repo();

        assert_eq!(repo.load().unwrap(), LoadOutcome::Seeded);

        let items = repo.get_all().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Example");
        assert_eq!(items[0].monthly_value, 100.0);
        assert_eq!(items[0].category, CategoryType::Other);
    }

    #[test]
    fn test_corrupt_file_seeds_and_preserves() {
        let (temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), "[{\"id\": ").unwrap();

        let outcome = repo.load().unwrap();

        match outcome {
            LoadOutcome::Recovered { preserved_as, .. } => {
                let moved = preserved_as.unwrap();
                assert!(moved.starts_with(temp_dir.path()));
                assert_eq!(fs::read_to_string(moved).unwrap(), "[{\"id\": ");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!repo.path().exists());
        assert_eq!(repo.get_all().unwrap()[0].name, "Example");
    }

    #[test]
    fn test_repeated_loads_keep_one_preserved_file() {
        let (temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), "not json").unwrap();

        assert!(matches!(repo.load().unwrap(), LoadOutcome::Recovered { .. }));
        assert_eq!(repo.load().unwrap(), LoadOutcome::Seeded);
        assert_eq!(repo.load().unwrap(), LoadOutcome::Seeded);

        let preserved = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().contains(".corrupt-"))
            .count();
        assert_eq!(preserved, 1);
    }

    #[test]
    fn test_reads_legacy_document_with_numeric_category() {
        let (_temp_dir, repo) = create_test_repo();
        let legacy = r#"[{
            "Id": "550e8400-e29b-41d4-a716-446655440000",
            "Name": "Gym",
            "Value": 39.99,
            "description": null,
            "Category": 1
        }]"#;
        fs::write(repo.path(), legacy).unwrap();

        assert_eq!(repo.load().unwrap(), LoadOutcome::Loaded(1));
        let items = repo.get_all().unwrap();
        assert_eq!(items[0].name, "Gym");
        assert_eq!(items[0].category, CategoryType::FitnessAndHealth);
    }

    #[test]
    fn test_empty_array_stays_empty() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), "[]").unwrap();

        assert_eq!(repo.load().unwrap(), LoadOutcome::Loaded(0));
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (temp_dir, repo) = create_test_repo();

        let rent = ExpenseItem::new("Rent", 1200.0, CategoryType::HousingAndUtilities);
        let gym = ExpenseItem::new("Gym", 33.33, CategoryType::FitnessAndHealth)
            .with_description("Downtown branch");
        repo.insert(rent.clone()).unwrap();
        repo.insert(gym.clone()).unwrap();
        repo.save().unwrap();

        let reloaded = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        assert_eq!(reloaded.load().unwrap(), LoadOutcome::Loaded(2));

        let items = reloaded.get_all().unwrap();
        assert_eq!(items.len(), 2);
        for (original, loaded) in [rent, gym].iter().zip(items.iter()) {
            assert_eq!(original.id, loaded.id);
            assert_eq!(original.name, loaded.name);
            assert_eq!(original.monthly_value, loaded.monthly_value);
            assert_eq!(original.category, loaded.category);
            assert_eq!(original.description, loaded.description);
        }
    }

    #[test]
    fn test_update_and_delete() {
        let (_temp_dir, repo) = create_test_repo();

        let mut item = ExpenseItem::new("Bus pass", 50.0, CategoryType::Transportation);
        repo.insert(item.clone()).unwrap();

        item.monthly_value = 45.0;
        assert!(repo.update(item.clone()).unwrap());
        assert_eq!(repo.get(item.id).unwrap().unwrap().monthly_value, 45.0);

        assert_eq!(repo.delete(item.id).unwrap(), Some(item.clone()));
        assert!(repo.delete(item.id).unwrap().is_none());
        assert!(!repo.update(item).unwrap());
    }

    #[test]
    fn test_get_by_name_case_insensitive() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(ExpenseItem::new("Netflix", 15.0, CategoryType::MediaAndEntertainment))
            .unwrap();

        assert!(repo.get_by_name("NETFLIX").unwrap().is_some());
        assert!(repo.get_by_name("Hulu").unwrap().is_none());
    }
}
