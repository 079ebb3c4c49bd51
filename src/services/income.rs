//! Income service
//!
//! Validates and stores the monthly take-home income.

use crate::audit::{summarize_changes, EntityType};
use crate::error::{BudgetError, BudgetResult};
use crate::storage::Storage;

/// Audit id used for the single income record
const INCOME_ENTITY_ID: &str = "income";

/// Parse a user-entered amount such as `"3000"`, `"$3,000.50"` or `" 12.5 "`
///
/// Unlike stored costs, typed amounts must be entirely numeric.
pub fn parse_amount(text: &str) -> BudgetResult<f64> {
    let cleaned: String = text
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| BudgetError::Validation(format!("Invalid amount: {}", text.trim())))
}

/// Service for the monthly income figure
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the monthly income
    pub fn set_income(&self, amount: f64) -> BudgetResult<f64> {
        if !amount.is_finite() {
            return Err(BudgetError::Validation("Income must be a number".into()));
        }
        if amount < 0.0 {
            return Err(BudgetError::Validation("Income cannot be negative".into()));
        }

        let previous = self.get_income()?;
        self.storage.set_income(amount)?;

        match previous {
            Some(before) => self.storage.log_update(
                EntityType::Income,
                INCOME_ENTITY_ID,
                None,
                &before,
                &amount,
                summarize_changes(&before, &amount),
            )?,
            None => self
                .storage
                .log_create(EntityType::Income, INCOME_ENTITY_ID, None, &amount)?,
        }

        tracing::info!(income = amount, "income updated");
        Ok(amount)
    }

    /// Stored income, or `None` if it was never set
    pub fn get_income(&self) -> BudgetResult<Option<f64>> {
        if self.storage.has_income()? {
            Ok(Some(self.storage.income()?))
        } else {
            Ok(None)
        }
    }
}
