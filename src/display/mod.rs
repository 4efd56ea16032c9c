//! Display formatting for terminal output
//!
//! Provides utilities for formatting expense items and the category registry
//! for terminal display.

pub mod expense;

pub use expense::{format_category_list, format_expense_details, format_expense_list};
