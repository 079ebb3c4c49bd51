//! Storage layer for budget-projector
//!
//! Budget data is kept in a string key-value store under a few logical
//! keys. `Storage` wraps a store with typed accessors for income and
//! expenses, keeps the derived remaining balance up to date and writes
//! the audit log.

pub mod file_io;
pub mod store;

pub use file_io::{read_json, write_json_atomic};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{parse_number, total_monthly_expenses, Expense};

/// Logical keys in the store
pub mod keys {
    /// Monthly income as decimal text
    pub const INCOME: &str = "income";
    /// Expense list as a JSON array
    pub const EXPENSES: &str = "expenses";
    /// Income minus total monthly expenses as decimal text
    pub const REMAINING_BALANCE: &str = "remainingBalance";
}

/// Typed access to the key-value store
pub struct Storage {
    store: Box<dyn KeyValueStore>,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Open the file-backed store and audit log under `paths`
    pub fn new(paths: &BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            store: Box::new(FileStore::open(paths.store_file())?),
            audit: Some(AuditLogger::new(paths.audit_log())),
        })
    }

    /// Wrap an arbitrary store without audit logging
    pub fn with_store(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            audit: None,
        }
    }

    /// Attach an audit logger
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Underlying key-value store
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Audit logger, if one is attached
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Stored monthly income; missing or unreadable values are 0
    pub fn income(&self) -> BudgetResult<f64> {
        Ok(self
            .store
            .get(keys::INCOME)?
            .map(|raw| parse_number(&raw))
            .unwrap_or(0.0))
    }

    /// Whether an income value has been stored
    pub fn has_income(&self) -> BudgetResult<bool> {
        Ok(self.store.get(keys::INCOME)?.is_some())
    }

    /// Store the monthly income
    pub fn set_income(&self, amount: f64) -> BudgetResult<()> {
        self.store.set(keys::INCOME, &amount.to_string())?;
        self.refresh_remaining_balance()
    }

    /// Stored expenses in insertion order; a missing key is an empty list
    ///
    /// Entries saved without an id are given one and written back, so ids
    /// stay stable across reads.
    pub fn expenses(&self) -> BudgetResult<Vec<Expense>> {
        let Some(raw) = self.store.get(keys::EXPENSES)? else {
            return Ok(Vec::new());
        };

        let values: Vec<serde_json::Value> = serde_json::from_str(&raw)
            .map_err(|e| BudgetError::Storage(format!("Stored expenses are not valid: {}", e)))?;
        let missing_ids = values.iter().any(|v| v.get("id").is_none());

        let expenses: Vec<Expense> = values
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<_, _>>()
            .map_err(|e| BudgetError::Storage(format!("Stored expenses are not valid: {}", e)))?;

        if missing_ids {
            tracing::info!(count = expenses.len(), "assigning ids to stored expenses");
            self.write_expenses(&expenses)?;
        }

        Ok(expenses)
    }

    /// Replace the stored expense list
    pub fn set_expenses(&self, expenses: &[Expense]) -> BudgetResult<()> {
        self.write_expenses(expenses)?;
        self.refresh_remaining_balance()
    }

    fn write_expenses(&self, expenses: &[Expense]) -> BudgetResult<()> {
        let json = serde_json::to_string(expenses)?;
        self.store.set(keys::EXPENSES, &json)
    }

    /// Derived remaining balance, if it has been computed
    pub fn remaining_balance(&self) -> BudgetResult<Option<f64>> {
        Ok(self
            .store
            .get(keys::REMAINING_BALANCE)?
            .map(|raw| parse_number(&raw)))
    }

    fn refresh_remaining_balance(&self) -> BudgetResult<()> {
        let remaining = self.income()? - total_monthly_expenses(&self.expenses()?);
        self.store
            .set(keys::REMAINING_BALANCE, &remaining.to_string())
    }

    /// Remove everything from the store, returning the keys that were present
    pub fn clear(&self) -> BudgetResult<Vec<String>> {
        let keys = self.store.keys()?;
        self.store.clear()?;
        if !keys.is_empty() {
            self.log(AuditEntry::delete(EntityType::Store, "store", None, &keys))?;
        }
        Ok(keys)
    }

    /// Record creation of an entity
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> BudgetResult<()> {
        self.log(AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record a modification of an entity
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> BudgetResult<()> {
        self.log(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    /// Record deletion of an entity
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> BudgetResult<()> {
        self.log(AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    fn log(&self, entry: AuditEntry) -> BudgetResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn memory_storage() -> Storage {
        Storage::with_store(MemoryStore::new())
    }

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(&paths).unwrap();

        assert!(paths.data_dir().exists());
        assert_eq!(storage.income().unwrap(), 0.0);
        assert!(storage.expenses().unwrap().is_empty());
    }

    #[test]
    fn test_income_round_trip() {
        let storage = memory_storage();
        assert!(!storage.has_income().unwrap());

        storage.set_income(3250.75).unwrap();
        assert!(storage.has_income().unwrap());
        assert_eq!(storage.income().unwrap(), 3250.75);
        assert_eq!(
            storage.store().get(keys::INCOME).unwrap().as_deref(),
            Some("3250.75")
        );
    }

    #[test]
    fn test_unreadable_income_is_zero() {
        let storage = memory_storage();
        storage.store().set(keys::INCOME, "lots").unwrap();
        assert_eq!(storage.income().unwrap(), 0.0);
    }

    #[test]
    fn test_expenses_round_trip_and_remaining_balance() {
        let storage = memory_storage();
        storage.set_income(3000.0).unwrap();
        assert_eq!(storage.remaining_balance().unwrap(), Some(3000.0));

        let expenses = vec![Expense::new("Rent", "1000"), Expense::new("Food", 250.0)];
        storage.set_expenses(&expenses).unwrap();

        assert_eq!(storage.expenses().unwrap(), expenses);
        assert_eq!(storage.remaining_balance().unwrap(), Some(1750.0));
    }

    #[test]
    fn test_legacy_expenses_get_stable_ids() {
        let storage = memory_storage();
        storage
            .store()
            .set(
                keys::EXPENSES,
                r#"[{"name":"Rent","cost":"900","description":""}]"#,
            )
            .unwrap();

        let first = storage.expenses().unwrap();
        let second = storage.expenses().unwrap();
        assert_eq!(first[0].id, second[0].id);
        assert_eq!(first[0].amount(), 900.0);
    }

    #[test]
    fn test_legacy_null_names_are_empty() {
        let storage = memory_storage();
        storage
            .store()
            .set(
                keys::EXPENSES,
                r#"[{"name":null,"cost":"45"},{"name":"Gym","cost":null}]"#,
            )
            .unwrap();

        let expenses = storage.expenses().unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].name, "");
        assert_eq!(expenses[0].amount(), 45.0);
        assert_eq!(expenses[1].name, "Gym");
        assert_eq!(expenses[1].amount(), 0.0);
    }

    #[test]
    fn test_malformed_expenses_are_reported() {
        let storage = memory_storage();
        storage.store().set(keys::EXPENSES, "{oops").unwrap();
        assert!(matches!(storage.expenses(), Err(BudgetError::Storage(_))));
    }

    #[test]
    fn test_clear_logs_removed_keys() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let storage = memory_storage().with_audit(logger.clone());

        storage.set_income(100.0).unwrap();
        let removed = storage.clear().unwrap();
        assert_eq!(removed, vec![keys::INCOME, keys::REMAINING_BALANCE]);
        assert!(storage.store().keys().unwrap().is_empty());

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_type, EntityType::Store);

        // clearing an empty store is not logged
        storage.clear().unwrap();
        assert_eq!(logger.read_all().unwrap().len(), 1);
    }
}
