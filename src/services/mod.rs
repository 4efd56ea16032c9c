//! Service layer for monthly-expenses
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, uniqueness, persistence of every change, and the list view.

pub mod expense;
pub mod view;

pub use expense::ExpenseService;
pub use view::{compute_view, SortCriterion, ViewQuery};
