//! budget-projector - Personal budget projection calculator
//!
//! This library takes a monthly income, a list of recurring expenses and an
//! investment percentage, and projects twelve months of cumulative expenses,
//! accumulated savings and an investment balance compounding at 8% a year.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `projection`: The projection calculator, chart series and summary
//! - `models`: Expenses, cost coercion and expense IDs
//! - `storage`: Key-value store holding income and expenses
//! - `services`: Business logic layer and projection input sources
//! - `audit`: Audit logging system
//! - `config`: Configuration and path management
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `budget` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use budget_projector::models::Expense;
//! use budget_projector::projection::compute_projection;
//!
//! let expenses = vec![Expense::new("Rent", "1000"), Expense::new("Food", "500")];
//! let projection = compute_projection(3000.0, &expenses, 0.0);
//!
//! assert_eq!(projection.expense_totals[0], 1500.0);
//! assert_eq!(projection.savings_balance[11], 18000.0);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod projection;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
