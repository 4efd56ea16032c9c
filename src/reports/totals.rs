//! Grand totals

use crate::models::ExpenseItem;

/// Monthly and yearly sums across all expenses
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExpenseTotals {
    pub monthly: f64,
    pub yearly: f64,
}

impl ExpenseTotals {
    pub fn compute(items: &[ExpenseItem]) -> Self {
        let monthly: f64 = items.iter().map(|item| item.monthly_value).sum();
        Self {
            monthly,
            yearly: monthly * 12.0,
        }
    }

    pub fn format_terminal(&self, currency: &str) -> String {
        format!(
            "Monthly Expense: {:.2} {}\nYearly Expense: {:.2} {}\n",
            self.monthly, currency, self.yearly, currency
        )
    }
}
