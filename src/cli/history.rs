//! Audit history command

use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Print recent audit entries, oldest first
///
/// With `expense` set, only entries about that expense are shown; deleted
/// expenses can still be looked up by their old name.
pub fn handle_history_command(
    storage: &Storage,
    expense: Option<&str>,
    limit: usize,
) -> ExpenseResult<()> {
    let Some(audit) = storage.audit() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let entries = match expense {
        Some(identifier) => audit.history_of(identifier, limit)?,
        None => audit.history(limit)?,
    };

    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
