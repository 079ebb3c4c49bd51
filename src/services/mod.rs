//! Service layer for budget-projector
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, audit logging and projection of the stored budget.

pub mod expense;
pub mod income;
pub mod projection;
pub mod source;

pub use expense::{ExpenseSelector, ExpenseService, ExpenseUpdate};
pub use income::{parse_amount, IncomeService};
pub use projection::{ProjectionReport, ProjectionService};
pub use source::{FallbackSource, FinanceSnapshot, FinanceSource, JsonFileSource, StoreSource};
