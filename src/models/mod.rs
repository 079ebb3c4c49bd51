//! Core data models for budget-projector
//!
//! Expenses, their loosely-typed costs, and the ids used to address them.

pub mod cost;
pub mod expense;
pub mod ids;

pub use cost::{deserialize_amount, parse_number, Cost};
pub use expense::{total_monthly_expenses, Expense, ExpenseValidationError};
pub use ids::ExpenseId;
