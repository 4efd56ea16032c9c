//! Core data models for monthly-expenses
//!
//! This module contains the data structures of the expense domain: items,
//! their categories, input periods and derived colors.

pub mod category;
pub mod color;
pub mod expense;
pub mod ids;
pub mod period;

pub use category::{CategoryInfo, CategoryType, CATEGORY_REGISTRY};
pub use color::{color_for, Color, Hsl};
pub use expense::{ExpenseInput, ExpenseItem, ExpenseValidationError, ValidatedExpense};
pub use ids::ExpenseId;
pub use period::{normalize, round_to_cents, InputPeriod};
