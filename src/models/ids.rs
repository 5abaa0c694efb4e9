//! Strongly-typed expense identifiers
//!
//! Ids are random v4 UUIDs, so two expenses added within the same instant
//! still get distinct ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix used by the short display form (`exp-1a2b3c4d`)
pub const EXPENSE_ID_PREFIX: &str = "exp-";

/// Unique identifier of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short form shown in listings: prefix plus the first 8 hex digits
    pub fn short(&self) -> String {
        format!("{}{}", EXPENSE_ID_PREFIX, &self.0.simple().to_string()[..8])
    }

    /// Whether `query` names this id, either as a full UUID or as a
    /// (possibly prefixed) leading fragment of it
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        let query = query.strip_prefix(EXPENSE_ID_PREFIX).unwrap_or(query);
        if query.is_empty() {
            return false;
        }
        let query = query.to_ascii_lowercase();
        self.0.to_string().starts_with(&query) || self.0.simple().to_string().starts_with(&query)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short())
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
        let s = s.trim();
        let s = s.strip_prefix(EXPENSE_ID_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
