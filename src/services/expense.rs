//! Expense service
//!
//! Business logic for adding, editing and removing expense items: input
//! validation, name uniqueness, and mirroring every change to disk.

use tracing::{debug, error};

use crate::audit::AuditLogger;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, ExpenseInput, ExpenseItem};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and append a new expense
    ///
    /// The stored item is returned even when writing it to disk fails; the
    /// in-memory collection is authoritative.
    pub fn add(&self, input: &ExpenseInput) -> ExpenseResult<ExpenseItem> {
        let name = require_name(input)?;
        if self.name_taken(name, None)? {
            return Err(ExpenseError::name_conflict(name));
        }

        let item = input
            .validate()
            .map_err(|e| ExpenseError::InvalidInput(e.to_string()))?
            .into_item();

        self.storage.expenses.insert(item.clone())?;
        debug!(id = %item.id, name = %item.name, value = item.monthly_value, "added expense");

        self.persist();
        self.audit(|log| log.record_create(&item));

        Ok(item)
    }

    /// Validate and apply new fields to an existing expense, keeping its ID
    pub fn update(&self, id: ExpenseId, input: &ExpenseInput) -> ExpenseResult<ExpenseItem> {
        let before = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| ExpenseError::not_found(id.to_string()))?;

        let name = require_name(input)?;
        if self.name_taken(name, Some(id))? {
            return Err(ExpenseError::name_conflict(name));
        }

        let fields = input
            .validate()
            .map_err(|e| ExpenseError::InvalidInput(e.to_string()))?;

        let mut item = before.clone();
        item.apply(fields);

        if !self.storage.expenses.update(item.clone())? {
            return Err(ExpenseError::not_found(id.to_string()));
        }
        debug!(id = %item.id, name = %item.name, value = item.monthly_value, "updated expense");

        self.persist();
        self.audit(|log| log.record_update(&before, &item));

        Ok(item)
    }

    /// Remove an expense, returning the removed item
    pub fn remove(&self, id: ExpenseId) -> ExpenseResult<ExpenseItem> {
        let item = self
            .storage
            .expenses
            .delete(id)?
            .ok_or_else(|| ExpenseError::not_found(id.to_string()))?;
        debug!(id = %item.id, name = %item.name, "removed expense");

        self.persist();
        self.audit(|log| log.record_delete(&item));

        Ok(item)
    }

    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<ExpenseItem>> {
        self.storage.expenses.get(id)
    }

    /// Find an expense by name, full UUID, or short `exp-` prefix
    pub fn find(&self, identifier: &str) -> ExpenseResult<Option<ExpenseItem>> {
        if let Some(item) = self.storage.expenses.get_by_name(identifier)? {
            return Ok(Some(item));
        }

        if let Ok(id) = ExpenseId::parse(identifier.trim()) {
            return self.storage.expenses.get(id);
        }

        let mut matches = self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(|item| item.id.matches_short(identifier.trim()));

        // An ambiguous prefix resolves to nothing
        match (matches.next(), matches.next()) {
            (Some(item), None) => Ok(Some(item)),
            _ => Ok(None),
        }
    }

    /// All expenses in insertion order
    pub fn list(&self) -> ExpenseResult<Vec<ExpenseItem>> {
        self.storage.expenses.get_all()
    }

    fn name_taken(&self, name: &str, except: Option<ExpenseId>) -> ExpenseResult<bool> {
        Ok(self
            .storage
            .expenses
            .get_all()?
            .iter()
            .any(|item| Some(item.id) != except && item.has_name(name)))
    }

    fn persist(&self) {
        if let Err(e) = self.storage.expenses.save() {
            error!(
                path = %self.storage.expenses.path().display(),
                error = %e,
                "failed to save expenses; in-memory state kept"
            );
        }
    }

    /// Audit failures are logged, never returned
    fn audit(&self, record: impl FnOnce(&AuditLogger) -> ExpenseResult<()>) {
        if let Some(log) = self.storage.audit() {
            if let Err(e) = record(log) {
                error!(path = %log.path().display(), error = %e, "failed to write audit entry");
            }
        }
    }
}

fn require_name(input: &ExpenseInput) -> ExpenseResult<&str> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ExpenseError::InvalidInput("Name is required".into()));
    }
    Ok(name)
}
