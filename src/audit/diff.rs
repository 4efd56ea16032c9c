//! Change summaries for update entries

use crate::models::ExpenseItem;

const MAX_TEXT_CHARS: usize = 40;

/// Describe the fields that differ between two versions of an item
///
/// `None` when the edit changed nothing.
pub fn describe_changes(before: &ExpenseItem, after: &ExpenseItem) -> Option<String> {
    let mut changes = Vec::new();

    if before.name != after.name {
        changes.push(format!(
            "name: {} -> {}",
            quoted(&before.name),
            quoted(&after.name)
        ));
    }
    if before.monthly_value != after.monthly_value {
        changes.push(format!(
            "monthly value: {:.2} -> {:.2}",
            before.monthly_value, after.monthly_value
        ));
    }
    if before.category != after.category {
        changes.push(format!(
            "category: {} -> {}",
            before.category.label(),
            after.category.label()
        ));
    }
    if before.description != after.description {
        changes.push(format!(
            "description: {} -> {}",
            optional_text(before.description.as_deref()),
            optional_text(after.description.as_deref())
        ));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn optional_text(text: Option<&str>) -> String {
    text.map(quoted).unwrap_or_else(|| "(none)".to_string())
}

fn quoted(text: &str) -> String {
    if text.chars().count() > MAX_TEXT_CHARS {
        let head: String = text.chars().take(MAX_TEXT_CHARS - 3).collect();
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", text)
    }
}
