//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ExpenseId, ExpenseItem};

use super::diff::describe_changes;

/// Kind of change recorded in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// One recorded change to an expense item
///
/// `before` and `after` are full snapshots of the item, so a deleted item can
/// still be inspected from its history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub expense_id: ExpenseId,

    /// Item name at the time of the change
    pub expense_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<ExpenseItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<ExpenseItem>,

    /// Field-by-field summary, updates only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    fn about(operation: Operation, item: &ExpenseItem) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            expense_id: item.id,
            expense_name: item.name.clone(),
            before: None,
            after: None,
            changes: None,
        }
    }

    pub fn created(item: &ExpenseItem) -> Self {
        Self {
            after: Some(item.clone()),
            ..Self::about(Operation::Create, item)
        }
    }

    pub fn updated(before: &ExpenseItem, after: &ExpenseItem) -> Self {
        Self {
            before: Some(before.clone()),
            after: Some(after.clone()),
            changes: describe_changes(before, after),
            ..Self::about(Operation::Update, after)
        }
    }

    pub fn deleted(item: &ExpenseItem) -> Self {
        Self {
            before: Some(item.clone()),
            ..Self::about(Operation::Delete, item)
        }
    }

    /// Whether this entry is about the expense `identifier` names
    ///
    /// Matches the recorded name (case-insensitive, including a previous name
    /// before a rename), the full UUID, or the short `exp-` form.
    pub fn concerns(&self, identifier: &str) -> bool {
        let identifier = identifier.trim();
        let named = |snapshot: &Option<ExpenseItem>| {
            snapshot.as_ref().is_some_and(|item| item.has_name(identifier))
        };

        self.expense_name.eq_ignore_ascii_case(identifier)
            || named(&self.before)
            || named(&self.after)
            || ExpenseId::parse(identifier).is_ok_and(|id| id == self.expense_id)
            || self.expense_id.matches_short(identifier)
    }

    /// One line per entry, plus a second line listing changed fields
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.expense_name,
            self.expense_id
        );

        if let Some(changes) = &self.changes {
            output.push_str(&format!("\n  Changes: {}", changes));
        }

        output
    }
}
