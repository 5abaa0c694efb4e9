//! Snapshot persistence
//!
//! Writes the whole budget state as one JSON document under a fixed key and
//! reads it back. Persistence is best-effort: write failures are logged and
//! swallowed, and a damaged document loads field by field, each unreadable
//! field falling back to its zero value.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{BudgetState, CategoryTotals, Expense, Money};

use super::kv::KeyValueStore;

/// Key the snapshot is stored under
pub const SNAPSHOT_KEY: &str = "expenseTracker";

/// Serializable projection of [`BudgetState`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub user_name: String,
    pub daily_budget: Money,
    pub expenses: Vec<Expense>,
    pub category_totals: CategoryTotals,
    pub total_spent: Money,
    /// Set on every write; `None` when nothing was stored
    pub last_updated: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Capture the state as of `now`
    pub fn capture(state: &BudgetState, now: DateTime<Utc>) -> Self {
        Self {
            user_name: state.user_name.clone(),
            daily_budget: state.daily_budget,
            expenses: state.expenses.clone(),
            category_totals: state.category_totals,
            total_spent: state.total_spent,
            last_updated: Some(now),
        }
    }

    /// Convert back into budget state
    pub fn into_state(self) -> BudgetState {
        BudgetState {
            user_name: self.user_name,
            daily_budget: self.daily_budget,
            expenses: self.expenses,
            category_totals: self.category_totals,
            total_spent: self.total_spent,
        }
    }

    /// Decode a stored document, defaulting each unreadable field
    pub fn from_json_lenient(raw: &str) -> Self {
        let map = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                tracing::warn!(kind = json_kind(&other), "stored snapshot is not an object, starting fresh");
                return Self::default();
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored snapshot is not valid JSON, starting fresh");
                return Self::default();
            }
        };

        let mut daily_budget: Money = field(&map, "dailyBudget");
        if daily_budget.is_negative() {
            tracing::warn!("snapshot field dailyBudget is negative, using zero");
            daily_budget = Money::zero();
        }

        Self {
            user_name: field(&map, "userName"),
            daily_budget,
            expenses: expenses_field(&map),
            category_totals: field(&map, "categoryTotals"),
            total_spent: field(&map, "totalSpent"),
            last_updated: field(&map, "lastUpdated"),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn field<T: DeserializeOwned + Default>(map: &Map<String, Value>, name: &str) -> T {
    match map.get(name) {
        None | Some(Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            tracing::warn!(field = name, error = %e, "malformed snapshot field, using default");
            T::default()
        }),
    }
}

/// Expenses decode one record at a time so a single bad entry doesn't cost
/// the rest of the list
fn expenses_field(map: &Map<String, Value>) -> Vec<Expense> {
    let items = match map.get("expenses") {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            tracing::warn!(kind = json_kind(other), "snapshot field expenses is not a list, using empty list");
            return Vec::new();
        }
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            serde_json::from_value::<Expense>(item.clone())
                .map_err(|e| tracing::warn!(index, error = %e, "skipping malformed expense"))
                .ok()
        })
        .collect()
}

/// Reads and writes the snapshot through a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct SnapshotRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SnapshotRepository<S> {
    /// Repository using the default key
    pub fn new(store: S) -> Self {
        Self::with_key(store, SNAPSHOT_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write the snapshot; failures are logged, never returned
    pub fn save(&self, snapshot: &Snapshot) {
        let encoded = match serde_json::to_string(snapshot) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::error!(error = %e, "failed to encode snapshot");
                return;
            }
        };

        if let Err(e) = self.store.set(&self.key, &encoded) {
            tracing::error!(key = %self.key, error = %e, "failed to persist snapshot");
        }
    }

    /// Read the snapshot; never fails
    pub fn load(&self) -> Snapshot {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => Snapshot::from_json_lenient(&raw),
            Ok(None) => Snapshot::default(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read snapshot, starting fresh");
                Snapshot::default()
            }
        }
    }

    /// Remove the stored snapshot; no-op if absent
    pub fn erase(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            tracing::error!(key = %self.key, error = %e, "failed to erase snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::storage::kv::{FileStore, MemoryStore};
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn sample_state() -> BudgetState {
        let mut state = BudgetState {
            user_name: "Mei".into(),
            daily_budget: Money::from_units(100),
            expenses: vec![
                Expense::new(Category::Transport, "bus", Money::from_units(60)).unwrap(),
                Expense::new(Category::Food, "lunch", Money::from_cents(4550)).unwrap(),
            ],
            ..Default::default()
        };
        state.rebuild_aggregates();
        state
    }

    #[test]
    fn test_save_then_load_reproduces_state() {
        let repo = SnapshotRepository::new(MemoryStore::new());
        let state = sample_state();

        repo.save(&Snapshot::capture(&state, Utc::now()));
        let loaded = repo.load();

        assert!(loaded.last_updated.is_some());
        assert_eq!(loaded.into_state(), state);
    }

    #[test]
    fn test_save_through_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SnapshotRepository::new(FileStore::new(temp_dir.path().to_path_buf()));
        let state = sample_state();

        repo.save(&Snapshot::capture(&state, Utc::now()));
        assert!(temp_dir.path().join("expenseTracker.json").exists());
        assert_eq!(repo.load().into_state(), state);

        repo.erase();
        assert!(!temp_dir.path().join("expenseTracker.json").exists());
        assert_eq!(repo.load(), Snapshot::default());
    }

    #[test]
    fn test_wire_format_field_names() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let value = serde_json::to_value(Snapshot::capture(&sample_state(), now)).unwrap();

        for key in [
            "userName",
            "dailyBudget",
            "expenses",
            "categoryTotals",
            "totalSpent",
            "lastUpdated",
        ] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(value["categoryTotals"]["transport"], 6000);
        assert_eq!(value["lastUpdated"], "2025-01-15T12:00:00Z");
    }

    #[test]
    fn test_missing_key_loads_defaults() {
        let repo = SnapshotRepository::new(MemoryStore::new());
        assert_eq!(repo.load(), Snapshot::default());
    }

    #[test]
    fn test_unparseable_document_loads_defaults() {
        let store = MemoryStore::new();
        store.insert_raw(SNAPSHOT_KEY, "{not json");
        let repo = SnapshotRepository::new(store.clone());
        assert_eq!(repo.load(), Snapshot::default());

        store.insert_raw(SNAPSHOT_KEY, "[1, 2, 3]");
        assert_eq!(repo.load(), Snapshot::default());
    }

    #[test]
    fn test_malformed_fields_default_individually() {
        let store = MemoryStore::new();
        store.insert_raw(
            SNAPSHOT_KEY,
            r#"{
                "userName": 42,
                "dailyBudget": 10000,
                "expenses": "oops",
                "categoryTotals": {"food": "lots", "daily": 300},
                "totalSpent": null
            }"#,
        );
        let loaded = SnapshotRepository::new(store).load();

        assert_eq!(loaded.user_name, "");
        assert_eq!(loaded.daily_budget, Money::from_units(100));
        assert!(loaded.expenses.is_empty());
        assert_eq!(loaded.category_totals, CategoryTotals::default());
        assert_eq!(loaded.total_spent, Money::zero());
        assert_eq!(loaded.last_updated, None);
    }

    #[test]
    fn test_bad_expense_entries_are_skipped() {
        let good = Expense::new(Category::Food, "tea", Money::from_units(3)).unwrap();
        let doc = serde_json::json!({
            "userName": "Mei",
            "expenses": [serde_json::to_value(&good).unwrap(), {"id": "nope"}],
        });
        let store = MemoryStore::new();
        store.insert_raw(SNAPSHOT_KEY, &doc.to_string());

        let loaded = SnapshotRepository::new(store).load();
        assert_eq!(loaded.user_name, "Mei");
        assert_eq!(loaded.expenses, vec![good]);
    }

    #[test]
    fn test_negative_budget_is_reset() {
        let store = MemoryStore::new();
        store.insert_raw(SNAPSHOT_KEY, r#"{"dailyBudget": -500}"#);
        assert_eq!(SnapshotRepository::new(store).load().daily_budget, Money::zero());
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);
        let repo = SnapshotRepository::new(store.clone());

        repo.save(&Snapshot::capture(&sample_state(), Utc::now()));
        repo.erase();
        assert!(!store.contains(SNAPSHOT_KEY));
    }
}
