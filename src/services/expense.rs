//! Expense service
//!
//! Provides business logic for the expense list: adding, editing and
//! removing line items, addressed either by list position or by id.

use std::fmt;
use std::str::FromStr;

use crate::audit::{summarize_changes, EntityType};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Cost, Expense};
use crate::storage::Storage;

/// How a user refers to an existing expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseSelector {
    /// 1-based position in the list
    Position(usize),
    /// Full UUID or short id such as `exp-1a2b3c4d`
    Id(String),
}

impl FromStr for ExpenseSelector {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BudgetError::Validation("Expense selector cannot be empty".into()));
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            let position: usize = s
                .parse()
                .map_err(|_| BudgetError::Validation(format!("Invalid position: {}", s)))?;
            if position == 0 {
                return Err(BudgetError::Validation("Positions start at 1".into()));
            }
            return Ok(Self::Position(position));
        }
        Ok(Self::Id(s.to_string()))
    }
}

impl fmt::Display for ExpenseSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(position) => write!(f, "#{}", position),
            Self::Id(id) => write!(f, "{}", id),
        }
    }
}

/// Fields to change on an existing expense; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub name: Option<String>,
    pub cost: Option<String>,
    pub description: Option<String>,
}

impl ExpenseUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.cost.is_none() && self.description.is_none()
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All expenses in insertion order
    pub fn list(&self) -> BudgetResult<Vec<Expense>> {
        self.storage.expenses()
    }

    /// Resolve a selector to the list index and expense it names
    pub fn find(&self, selector: &ExpenseSelector) -> BudgetResult<(usize, Expense)> {
        let expenses = self.storage.expenses()?;
        Self::locate(&expenses, selector).map(|index| (index, expenses[index].clone()))
    }

    fn locate(expenses: &[Expense], selector: &ExpenseSelector) -> BudgetResult<usize> {
        let found = match selector {
            ExpenseSelector::Position(position) => {
                position.checked_sub(1).filter(|index| *index < expenses.len())
            }
            ExpenseSelector::Id(reference) => {
                expenses.iter().position(|expense| expense.id.matches(reference))
            }
        };
        found.ok_or_else(|| BudgetError::expense_not_found(selector.to_string()))
    }

    /// Append a new expense
    ///
    /// The cost is stored as typed; a cost without a numeric value is
    /// accepted and counts as 0 in projections.
    pub fn add(
        &self,
        name: &str,
        cost: &str,
        description: Option<&str>,
    ) -> BudgetResult<Expense> {
        let mut expense = Expense::new(name.trim(), cost.trim());
        expense.set_description(description.map(str::to_string));

        expense
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;
        warn_if_not_numeric(&expense);

        let mut expenses = self.storage.expenses()?;
        expenses.push(expense.clone());
        self.storage.set_expenses(&expenses)?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.display_name().to_string()),
            &expense,
        )?;

        tracing::info!(id = %expense.id, amount = expense.amount(), "expense added");
        Ok(expense)
    }

    /// Edit an existing expense
    pub fn update(
        &self,
        selector: &ExpenseSelector,
        update: ExpenseUpdate,
    ) -> BudgetResult<Expense> {
        let mut expenses = self.storage.expenses()?;
        let index = Self::locate(&expenses, selector)?;

        let before = expenses[index].clone();
        let mut expense = before.clone();

        if let Some(name) = update.name {
            expense.name = name.trim().to_string();
        }
        if let Some(cost) = update.cost {
            expense.cost = Cost::from(cost.trim());
        }
        if let Some(description) = update.description {
            expense.set_description(Some(description));
        }

        expense
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;
        warn_if_not_numeric(&expense);

        let Some(diff) = summarize_changes(&before, &expense) else {
            return Ok(expense);
        };

        expenses[index] = expense.clone();
        self.storage.set_expenses(&expenses)?;

        self.storage.log_update(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.display_name().to_string()),
            &before,
            &expense,
            Some(diff),
        )?;

        Ok(expense)
    }

    /// Remove an expense, returning it
    pub fn remove(&self, selector: &ExpenseSelector) -> BudgetResult<Expense> {
        let mut expenses = self.storage.expenses()?;
        let index = Self::locate(&expenses, selector)?;
        let expense = expenses.remove(index);

        self.storage.set_expenses(&expenses)?;
        self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.display_name().to_string()),
            &expense,
        )?;

        tracing::info!(id = %expense.id, "expense removed");
        Ok(expense)
    }

    /// Remove every expense, returning how many were removed
    pub fn clear_all(&self) -> BudgetResult<usize> {
        let expenses = self.storage.expenses()?;
        if expenses.is_empty() {
            return Ok(0);
        }

        self.storage.set_expenses(&[])?;
        for expense in &expenses {
            self.storage.log_delete(
                EntityType::Expense,
                expense.id.to_string(),
                Some(expense.display_name().to_string()),
                expense,
            )?;
        }

        Ok(expenses.len())
    }
}

fn warn_if_not_numeric(expense: &Expense) {
    if !expense.cost.is_numeric() {
        tracing::warn!(
            name = expense.display_name(),
            cost = %expense.cost,
            "expense cost is not a number and will count as 0"
        );
    }
}
