//! Storage layer for fintrack
//!
//! The terminal front end keeps the store between invocations as a single
//! JSON snapshot, written atomically.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use tracing::{debug, info};

use crate::config::paths::FinancePaths;
use crate::error::FinanceError;
use crate::store::FinanceStore;

/// Loads and saves the store snapshot
pub struct Storage {
    paths: FinancePaths,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: FinancePaths) -> Result<Self, FinanceError> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinancePaths {
        &self.paths
    }

    /// Load the saved store, or an empty one on first run
    pub fn load(&self) -> Result<FinanceStore, FinanceError> {
        let path = self.paths.store_file();
        let store: FinanceStore = read_json(&path)?;
        debug!(
            path = %path.display(),
            transactions = store.transactions().len(),
            goals = store.saving_goals().len(),
            budgets = store.budgets().len(),
            "loaded store"
        );
        Ok(store)
    }

    /// Persist the store snapshot
    pub fn save(&self, store: &FinanceStore) -> Result<(), FinanceError> {
        let path = self.paths.store_file();
        write_json_atomic(&path, store)?;
        info!(path = %path.display(), "saved store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.paths().store_file().exists());
        assert_eq!(storage.load().unwrap(), FinanceStore::new());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let mut store = FinanceStore::new();
        store
            .add_transaction(
                Transaction::income(
                    Money::from_cents(100_000),
                    "Salary",
                    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                )
                .with_id("t1"),
            )
            .unwrap();
        storage.save(&store).unwrap();

        assert!(storage.paths().store_file().exists());
        assert_eq!(storage.load().unwrap(), store);
    }
}
