//! Storage layer for monthly-expenses
//!
//! Provides JSON file storage with atomic writes, automatic directory
//! creation, and the audit trail of mutations.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseRepository, LoadOutcome};

use crate::audit::AuditLogger;
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Storage coordinator: the expense repository plus the audit log
pub struct Storage {
    pub expenses: ExpenseRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Set up storage under `paths`, creating its directories
    ///
    /// With `audit_enabled` false no audit log is written or read.
    pub fn open(paths: &ExpensePaths, audit_enabled: bool) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: audit_enabled.then(|| AuditLogger::new(paths.audit_log())),
        })
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<LoadOutcome, ExpenseError> {
        self.expenses.load()
    }

    /// The audit logger, when auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths, true).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.audit().unwrap().path(), paths.audit_log());
        assert_eq!(storage.expenses.path(), paths.expenses_file());
    }

    #[test]
    fn test_audit_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths, false).unwrap();

        assert!(storage.audit().is_none());
    }
}
