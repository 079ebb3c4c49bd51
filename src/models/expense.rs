//! Expense model
//!
//! A recurring monthly cost line item. Stored lists may come from older
//! data without ids; those entries get a fresh id when loaded.

use serde::{Deserialize, Deserializer, Serialize};

use super::cost::Cost;
use super::ids::ExpenseId;

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeCost,
    NameTooLong(usize),
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeCost => write!(f, "Expense cost cannot be negative"),
            Self::NameTooLong(len) => {
                write!(f, "Expense name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// Longest accepted expense name
pub const MAX_NAME_LEN: usize = 100;

/// Label used for expenses with a blank name
pub const UNNAMED_EXPENSE: &str = "Unknown";

/// A recurring monthly expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default)]
    pub id: ExpenseId,
    #[serde(default, deserialize_with = "deserialize_name")]
    pub name: String,
    #[serde(default)]
    pub cost: Cost,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Older stored lists may carry `"name": null`
fn deserialize_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Expense {
    /// Create a new expense without a description
    pub fn new(name: impl Into<String>, cost: impl Into<Cost>) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            cost: cost.into(),
            description: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.set_description(Some(description.into()));
        self
    }

    /// Replace the description; blank text clears it
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description.filter(|d| !d.trim().is_empty());
    }

    /// Monthly amount of this expense after cost coercion
    pub fn amount(&self) -> f64 {
        self.cost.amount()
    }

    /// Name for charts and lists
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            UNNAMED_EXPENSE
        } else {
            name
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        let name_len = self.name.chars().count();
        if name_len > MAX_NAME_LEN {
            return Err(ExpenseValidationError::NameTooLong(name_len));
        }
        if self.amount() < 0.0 {
            return Err(ExpenseValidationError::NegativeCost);
        }
        Ok(())
    }
}

/// Sum of the monthly amounts of all expenses
pub fn total_monthly_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().fold(0.0, |total, expense| total + expense.amount())
}
