//! Strongly-typed ID wrappers
//!
//! Expenses carry a UUID so they can be addressed independently of their
//! position in the list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Display prefix for expense ids
const EXPENSE_PREFIX: &str = "exp-";

/// Identifier of a single expense line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Short form shown to users (`exp-` plus the first 8 hex digits)
    pub fn short(&self) -> String {
        self.to_string()
    }

    /// Whether a user-typed reference (full UUID or short form) names this id
    pub fn matches(&self, reference: &str) -> bool {
        let reference = reference.trim().to_ascii_lowercase();
        if reference.is_empty() {
            return false;
        }
        let full = self.0.to_string();
        let bare = reference.strip_prefix(EXPENSE_PREFIX).unwrap_or(&reference);
        full == bare || (bare.len() >= 8 && full.starts_with(bare))
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", EXPENSE_PREFIX, &self.0.to_string()[..8])
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(EXPENSE_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
