//! Monthly Expenses - recurring expense tracking
//!
//! This library keeps a list of recurring expenses, normalizes every amount
//! to a monthly value, and derives the views a front end needs: a searchable
//! and sortable list, a per-category breakdown, and monthly/yearly totals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense items, categories, input periods and colors
//! - `storage`: JSON file storage layer
//! - `services`: Validation, mutation and view logic
//! - `reports`: Category breakdown and totals
//! - `audit`: Audit logging system
//! - `tracker`: The facade a front end drives
//! - `cli` / `display`: Command-line front end
//!
//! # Example
//!
//! ```rust,ignore
//! use expenses::config::{ExpensePaths, Settings};
//! use expenses::models::ExpenseInput;
//! use expenses::ExpenseTracker;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let tracker = ExpenseTracker::open(paths, &settings)?;
//! tracker.add_item(&ExpenseInput::new("Rent", "1200"))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tracker;

pub use error::{ExpenseError, ExpenseResult};
pub use tracker::ExpenseTracker;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, writing to stderr
///
/// `RUST_LOG` overrides the default `expenses=info` filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("expenses=info"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
