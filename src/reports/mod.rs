//! Reports module for monthly-expenses
//!
//! Aggregated views over the expense collection: the per-category breakdown
//! and the grand totals.

pub mod summary;
pub mod totals;

pub use summary::{CategorySummary, CategorySummaryRow};
pub use totals::ExpenseTotals;
