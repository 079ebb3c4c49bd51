//! Where projection inputs come from
//!
//! A `FinanceSource` resolves the income and expense list the calculator
//! runs on. The store-backed source reads the local store; `FallbackSource`
//! tries one source and falls back to another when the first fails.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{deserialize_amount, total_monthly_expenses, Expense};
use crate::storage::Storage;

/// Income and expenses resolved from a source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinanceSnapshot {
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub income: f64,
    pub expenses: Vec<Expense>,
}

impl FinanceSnapshot {
    pub fn new(income: f64, expenses: Vec<Expense>) -> Self {
        Self { income, expenses }
    }

    /// Sum of the monthly expense amounts
    pub fn total_monthly_expenses(&self) -> f64 {
        total_monthly_expenses(&self.expenses)
    }
}

/// Provider of projection inputs
pub trait FinanceSource {
    /// Short name used in log messages
    fn name(&self) -> &str;

    /// Resolve the current income and expenses
    fn load(&self) -> BudgetResult<FinanceSnapshot>;
}

impl FinanceSource for FinanceSnapshot {
    fn name(&self) -> &str {
        "snapshot"
    }

    fn load(&self) -> BudgetResult<FinanceSnapshot> {
        Ok(self.clone())
    }
}

/// Reads income and expenses from the key-value store
pub struct StoreSource<'a> {
    storage: &'a Storage,
}

impl<'a> StoreSource<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }
}

impl FinanceSource for StoreSource<'_> {
    fn name(&self) -> &str {
        "store"
    }

    fn load(&self) -> BudgetResult<FinanceSnapshot> {
        Ok(FinanceSnapshot {
            income: self.storage.income()?,
            expenses: self.storage.expenses()?,
        })
    }
}

/// Reads a snapshot from a JSON file of the form `{"income": .., "expenses": [..]}`
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FinanceSource for JsonFileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn load(&self) -> BudgetResult<FinanceSnapshot> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            BudgetError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Uses `primary`, switching to `fallback` when `primary` fails
pub struct FallbackSource<P, F> {
    primary: P,
    fallback: F,
}

impl<P: FinanceSource, F: FinanceSource> FallbackSource<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: FinanceSource, F: FinanceSource> FinanceSource for FallbackSource<P, F> {
    fn name(&self) -> &str {
        self.primary.name()
    }

    fn load(&self) -> BudgetResult<FinanceSnapshot> {
        match self.primary.load() {
            Ok(snapshot) => Ok(snapshot),
            Err(err) => {
                tracing::warn!(
                    source = self.primary.name(),
                    fallback = self.fallback.name(),
                    error = %err,
                    "failed to load finance data, using fallback"
                );
                self.fallback.load()
            }
        }
    }
}
