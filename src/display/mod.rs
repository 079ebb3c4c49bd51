//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and projections for terminal
//! display, including tables, text charts and summary blocks.

pub mod expense;
pub mod format;
pub mod projection;

pub use expense::{format_breakdown, format_expense_details, format_expense_list};
pub use format::{format_amount, format_bar, format_percentage};
pub use projection::{format_chart, format_projection_table, format_summary};
