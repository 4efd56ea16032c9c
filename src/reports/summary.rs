//! Category Summary
//!
//! Per-category totals and their share of all monthly spending. The rows are
//! the data behind the pie chart legend.

use crate::models::{CategoryType, Color, ExpenseItem};

/// One category's slice of the total
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummaryRow {
    pub category: CategoryType,
    pub label: &'static str,
    /// Sum of monthly values in this category
    pub total: f64,
    /// Share of the grand total, 0 when the grand total is 0
    pub percentage: f64,
    /// Color of the first item seen in this category
    pub color: Color,
}

/// Category breakdown in first-seen order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategorySummary {
    pub rows: Vec<CategorySummaryRow>,
    pub grand_total: f64,
}

impl CategorySummary {
    /// Group items by category, keeping the order categories first appear
    pub fn compute(items: &[ExpenseItem]) -> Self {
        let mut rows: Vec<CategorySummaryRow> = Vec::new();

        for item in items {
            match rows.iter_mut().find(|row| row.category == item.category) {
                Some(row) => row.total += item.monthly_value,
                None => rows.push(CategorySummaryRow {
                    category: item.category,
                    label: item.category.label(),
                    total: item.monthly_value,
                    percentage: 0.0,
                    color: item.color(),
                }),
            }
        }

        let grand_total: f64 = rows.iter().map(|row| row.total).sum();
        if grand_total > 0.0 {
            for row in &mut rows {
                row.percentage = row.total / grand_total * 100.0;
            }
        }

        Self { rows, grand_total }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        if self.rows.is_empty() {
            return "No expenses recorded.\n".to_string();
        }

        let label_width = self
            .rows
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(8)
            .max(8);

        let mut output = String::new();
        output.push_str(&format!(
            "{:<label_width$}  {:>12}  {:>7}  {}\n",
            "Category",
            "Monthly",
            "%",
            "Color",
            label_width = label_width,
        ));
        output.push_str(&format!(
            "{:-<label_width$}  {:->12}  {:->7}  {:-<7}\n",
            "",
            "",
            "",
            "",
            label_width = label_width,
        ));

        for row in &self.rows {
            output.push_str(&format!(
                "{:<label_width$}  {:>12}  {:>6.1}%  {}\n",
                row.label,
                format!("{:.2} {}", row.total, currency),
                row.percentage,
                row.color,
                label_width = label_width,
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let summary = CategorySummary::compute(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.grand_total, 0.0);
    }

    #[test]
    fn test_rent_and_netflix() {
        let items = vec![
            ExpenseItem::new("Rent", 1200.0, CategoryType::HousingAndUtilities),
            ExpenseItem::new("Netflix", 15.0, CategoryType::MediaAndEntertainment),
        ];
        let summary = CategorySummary::compute(&items);

        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].category, CategoryType::HousingAndUtilities);
        assert_eq!(summary.rows[0].label, "Housing & Utilities");
        assert_eq!(summary.rows[0].total, 1200.0);
        assert_eq!(format!("{:.1}", summary.rows[0].percentage), "98.8");
        assert_eq!(summary.rows[1].category, CategoryType::MediaAndEntertainment);
        assert_eq!(summary.rows[1].total, 15.0);
        assert_eq!(format!("{:.1}", summary.rows[1].percentage), "1.2");
    }

    #[test]
    fn test_first_seen_order_and_grouping() {
        let items = vec![
            ExpenseItem::new("Netflix", 15.0, CategoryType::MediaAndEntertainment),
            ExpenseItem::new("Rent", 1000.0, CategoryType::HousingAndUtilities),
            ExpenseItem::new("Spotify", 10.0, CategoryType::MediaAndEntertainment),
        ];
        let summary = CategorySummary::compute(&items);

        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].category, CategoryType::MediaAndEntertainment);
        assert_eq!(summary.rows[0].total, 25.0);
        assert_eq!(summary.rows[0].color, items[0].color());
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let items = vec![
            ExpenseItem::new("A", 33.33, CategoryType::Pets),
            ExpenseItem::new("B", 12.5, CategoryType::Other),
            ExpenseItem::new("C", 7.77, CategoryType::SoftwareAndTools),
        ];
        let total: f64 = CategorySummary::compute(&items)
            .rows
            .iter()
            .map(|row| row.percentage)
            .sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_gives_zero_percent() {
        let items = vec![ExpenseItem::new("Free tier", 0.0, CategoryType::SoftwareAndTools)];
        let summary = CategorySummary::compute(&items);

        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows[0].percentage, 0.0);
        assert!(!summary.rows[0].percentage.is_nan());
    }

    #[test]
    fn test_format_terminal() {
        let items = vec![ExpenseItem::new("Rent", 1200.0, CategoryType::HousingAndUtilities)];
        let output = CategorySummary::compute(&items).format_terminal("$");

        assert!(output.contains("Housing & Utilities"));
        assert!(output.contains("1200.00 $"));
        assert!(output.contains("100.0%"));
    }
}
