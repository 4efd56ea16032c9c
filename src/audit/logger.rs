//! Append-only audit log, one JSON entry per line

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::ExpenseResult;
use crate::models::ExpenseItem;

use super::entry::AuditEntry;

/// Records changes to expense items in the audit log file
pub struct AuditLogger {
    path: PathBuf,
}

impl AuditLogger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record_create(&self, item: &ExpenseItem) -> ExpenseResult<()> {
        self.append(&AuditEntry::created(item))
    }

    pub fn record_update(&self, before: &ExpenseItem, after: &ExpenseItem) -> ExpenseResult<()> {
        self.append(&AuditEntry::updated(before, after))
    }

    pub fn record_delete(&self, item: &ExpenseItem) -> ExpenseResult<()> {
        self.append(&AuditEntry::deleted(item))
    }

    /// The last `limit` entries, oldest first
    pub fn history(&self, limit: usize) -> ExpenseResult<Vec<AuditEntry>> {
        Ok(last(self.entries()?, limit))
    }

    /// The last `limit` entries about one expense, oldest first
    ///
    /// Works for deleted items too, since entries carry their own snapshots.
    pub fn history_of(&self, identifier: &str, limit: usize) -> ExpenseResult<Vec<AuditEntry>> {
        let matching = self
            .entries()?
            .into_iter()
            .filter(|entry| entry.concerns(identifier))
            .collect();
        Ok(last(matching, limit))
    }

    fn append(&self, entry: &AuditEntry) -> ExpenseResult<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        // One write per entry keeps lines whole
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?
            .write_all(line.as_bytes())?;
        Ok(())
    }

    /// Every readable entry; lines that fail to parse are skipped
    fn entries(&self) -> ExpenseResult<Vec<AuditEntry>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(index, line)| match serde_json::from_str(line) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(line = index + 1, error = %e, "skipping unreadable audit entry");
                    None
                }
            })
            .collect())
    }
}

fn last(mut entries: Vec<AuditEntry>, limit: usize) -> Vec<AuditEntry> {
    let start = entries.len().saturating_sub(limit);
    entries.split_off(start)
}
