//! Expense display formatting
//!
//! Formats expense items for terminal output in table and detail views.

use crate::models::{CategoryInfo, ExpenseItem};

/// Format a list of expenses as a table
pub fn format_expense_list(items: &[ExpenseItem], currency: &str) -> String {
    if items.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let name_width = items
        .iter()
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let category_width = items
        .iter()
        .map(|item| item.category.label().chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<category_width$}  {:>14}  {}\n",
        "ID",
        "Name",
        "Category",
        "Monthly",
        "Color",
        name_width = name_width,
        category_width = category_width,
    ));

    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<category_width$}  {:->14}  {:-<7}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        category_width = category_width,
    ));

    for item in items {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:<category_width$}  {:>14}  {}\n",
            item.id.to_string(),
            item.name,
            item.category.label(),
            format!("{:.2} {}", item.monthly_value, currency),
            item.color(),
            name_width = name_width,
            category_width = category_width,
        ));
    }

    output
}

/// Format one expense with all its fields
pub fn format_expense_details(item: &ExpenseItem, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Name: {}\n", item.name));
    output.push_str(&format!("Value: {:.2} {} per month\n", item.monthly_value, currency));
    output.push_str(&format!("       {:.2} {} per year\n", item.yearly_value(), currency));
    output.push_str(&format!("Category: {}\n", item.category.label()));
    output.push_str(&format!("Color: {}\n", item.color()));
    output.push_str(&format!("ID: {}\n", item.id.as_uuid()));

    if let Some(description) = item.description.as_deref().filter(|d| !d.trim().is_empty()) {
        output.push_str(&format!("\nDescription:\n{}\n", description));
    }

    output
}

/// Format the category registry for pickers and help output
pub fn format_category_list(categories: &[CategoryInfo]) -> String {
    let tag_width = categories
        .iter()
        .map(|info| info.category.tag().len())
        .max()
        .unwrap_or(3)
        .max(3);

    let mut output = String::new();
    for info in categories {
        output.push_str(&format!(
            "{:<tag_width$}  {}\n",
            info.category.tag(),
            info.label,
            tag_width = tag_width,
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryType, CATEGORY_REGISTRY};

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&[], "$"), "No expenses found.\n");
    }

    #[test]
    fn test_list_contains_rows() {
        let items = vec![
            ExpenseItem::new("Rent", 1200.0, CategoryType::HousingAndUtilities),
            ExpenseItem::new("Netflix", 15.0, CategoryType::MediaAndEntertainment),
        ];
        let output = format_expense_list(&items, "$");

        assert!(output.contains("Rent"));
        assert!(output.contains("1200.00 $"));
        assert!(output.contains("Media & Entertainment"));
        assert!(output.contains(&items[1].color().to_hex()));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn test_details_with_description() {
        let item =
            ExpenseItem::new("Vet", 25.0, CategoryType::Pets).with_description("Yearly checkup");
        let output = format_expense_details(&item, "$");

        assert!(output.contains("Name: Vet"));
        assert!(output.contains("300.00 $ per year"));
        assert!(output.contains("Description:\nYearly checkup"));
    }

    #[test]
    fn test_details_without_description() {
        let item = ExpenseItem::new("Vet", 25.0, CategoryType::Pets);
        assert!(!format_expense_details(&item, "$").contains("Description"));
    }

    #[test]
    fn test_category_list() {
        let output = format_category_list(&CATEGORY_REGISTRY);
        assert_eq!(output.lines().count(), 9);
        assert!(output.contains("SoftwareAndTools"));
        assert!(output.contains("Software & Tools"));
    }
}
