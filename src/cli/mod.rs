//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod expense;
pub mod export;
pub mod income;
pub mod project;

pub use config::{handle_config_command, ConfigCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use income::{handle_income_command, IncomeCommands};
pub use project::{
    handle_breakdown_command, handle_project_command, handle_summary_command, ProjectArgs,
    ProjectionOptions,
};
