//! Expense ledger service
//!
//! Owns the budget state and keeps the running totals in step with the
//! expense records. Every successful mutation writes the snapshot through
//! and reports its outcome on the notification scheduler. A rejected
//! mutation leaves the state exactly as it was.

use std::collections::HashSet;

use chrono::Utc;

use crate::error::{SpendError, SpendResult};
use crate::export::{ExportJob, ExportOutcome, ExportRequest};
use crate::level::{self, LevelReport};
use crate::models::expense::{validate_amount, validate_description};
use crate::models::{
    BudgetState, Category, EditSession, Expense, ExpenseId, ExpenseValidationError, Money,
};
use crate::notify::{NotificationScheduler, NotificationType};
use crate::storage::{KeyValueStore, Snapshot, SnapshotRepository};

const TOTAL_OVERFLOW: &str = "That amount would take the total spent out of range";

/// The ledger and everything it owns
#[derive(Debug)]
pub struct ExpenseLedger<S: KeyValueStore> {
    state: BudgetState,
    edit: Option<EditSession>,
    repository: SnapshotRepository<S>,
    notifications: NotificationScheduler,
}

impl<S: KeyValueStore> ExpenseLedger<S> {
    /// Load the stored snapshot and take ownership of the repository
    pub fn open(repository: SnapshotRepository<S>, notifications: NotificationScheduler) -> Self {
        let mut state = repository.load().into_state();
        let dropped = reconcile(&mut state);

        let mut ledger = Self {
            state,
            edit: None,
            repository,
            notifications,
        };
        if dropped > 0 {
            ledger.notifications.warning(format!(
                "{} stored expense(s) could not be loaded and were skipped",
                dropped
            ));
        }
        ledger
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Expenses, newest first
    pub fn expenses(&self) -> &[Expense] {
        &self.state.expenses
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn notifications(&self) -> &NotificationScheduler {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationScheduler {
        &mut self.notifications
    }

    pub fn repository(&self) -> &SnapshotRepository<S> {
        &self.repository
    }

    /// Spend as a whole percentage of the daily budget
    pub fn percentage(&self) -> u32 {
        level::percentage(self.state.total_spent, self.state.daily_budget)
    }

    /// Current stress tier, quote, status and character image
    pub fn level(&self) -> LevelReport {
        LevelReport::for_percentage(self.percentage())
    }

    /// Money left for today, never below zero
    pub fn remaining(&self) -> Money {
        self.state.remaining()
    }

    /// Set the user's name and daily allowance
    pub fn set_budget(&mut self, name: &str, daily_budget: Money) -> SpendResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(self.reject("Please enter your name"));
        }
        if !daily_budget.is_positive() {
            return Err(self.reject("Please set a valid daily budget (greater than 0)"));
        }

        self.state.user_name = name.to_string();
        self.state.daily_budget = daily_budget;
        tracing::debug!(user = name, budget = daily_budget.cents(), "budget set");

        self.persist();
        self.notifications.success("Profile saved!");
        Ok(())
    }

    /// Record a new expense and return its id
    ///
    /// `category` is free text from the caller and must name one of the
    /// known categories.
    pub fn add(&mut self, category: &str, description: &str, amount: Money) -> SpendResult<ExpenseId> {
        let category: Category = match category.parse() {
            Ok(category) => category,
            Err(e) => {
                let err = ExpenseValidationError::UnknownCategory(e.0);
                return Err(self.reject(err.to_string()));
            }
        };
        let expense = match Expense::new(category, description, amount) {
            Ok(expense) => expense,
            Err(e) => return Err(self.reject(e.to_string())),
        };

        let Some(total_spent) = self.state.total_spent.checked_add(expense.amount) else {
            return Err(self.reject(TOTAL_OVERFLOW));
        };

        let id = expense.id;
        self.state.total_spent = total_spent;
        self.state
            .category_totals
            .adjust(expense.category, expense.amount);
        tracing::debug!(id = %id, category = category.key(), amount = amount.cents(), "expense added");
        self.state.expenses.insert(0, expense);

        self.persist();
        self.notifications.success("Expense recorded!");
        Ok(id)
    }

    /// Remove an expense; unknown ids are ignored
    pub fn delete(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.state.position(id)?;
        let removed = self.state.expenses.remove(index);

        self.state.total_spent -= removed.amount;
        self.state
            .category_totals
            .adjust(removed.category, Money::zero() - removed.amount);

        if self.edit.as_ref().is_some_and(|s| s.expense_id == id) {
            self.edit = None;
        }
        tracing::debug!(id = %id, "expense deleted");

        self.persist();
        self.notifications.success("Expense deleted");
        Some(removed)
    }

    /// Open an edit session on an expense, discarding any previous one
    pub fn begin_edit(&mut self, id: ExpenseId) -> SpendResult<&EditSession> {
        let Some(expense) = self.state.find(id) else {
            let err = SpendError::expense_not_found(id.to_string());
            self.notifications.error(err.user_message());
            return Err(err);
        };

        let session = EditSession::seeded_from(expense);
        Ok(self.edit.insert(session))
    }

    /// Apply new description and amount to the expense being edited
    ///
    /// On validation failure the session stays open so the caller can retry.
    pub fn commit_edit(&mut self, description: &str, amount: Money) -> SpendResult<Expense> {
        let Some(session) = self.edit.as_ref() else {
            let err = SpendError::no_edit_session();
            self.notifications.error(err.user_message());
            return Err(err);
        };
        let id = session.expense_id;

        let description = match validate_description(description) {
            Ok(description) => description,
            Err(e) => return Err(self.reject(e.to_string())),
        };
        if let Err(e) = validate_amount(amount) {
            return Err(self.reject(e.to_string()));
        }

        let Some(index) = self.state.position(id) else {
            self.edit = None;
            let err = SpendError::expense_not_found(id.to_string());
            self.notifications.error(err.user_message());
            return Err(err);
        };

        let delta = amount - self.state.expenses[index].amount;
        let Some(total_spent) = self.state.total_spent.checked_add(delta) else {
            return Err(self.reject(TOTAL_OVERFLOW));
        };

        let record = &mut self.state.expenses[index];
        record.description = description;
        record.amount = amount;
        let category = record.category;
        let updated = record.clone();

        self.state.total_spent = total_spent;
        self.state.category_totals.adjust(category, delta);
        self.edit = None;
        tracing::debug!(id = %id, delta = delta.cents(), "expense updated");

        self.persist();
        self.notifications.success("Expense updated!");
        Ok(updated)
    }

    /// Drop the edit session without touching anything else; idempotent
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Reset everything to zero values and erase the stored snapshot
    pub fn clear(&mut self) {
        self.state.reset();
        self.edit = None;
        self.repository.erase();
        tracing::info!("all data cleared");
        self.notifications.success("All data cleared");
    }

    /// Resolve a full id or a unique short form (`exp-1a2b3c4d`)
    pub fn find_expense(&self, query: &str) -> SpendResult<ExpenseId> {
        if let Ok(id) = query.parse::<ExpenseId>() {
            if self.state.find(id).is_some() {
                return Ok(id);
            }
        }

        let mut matches = self.state.expenses.iter().filter(|e| e.id.matches(query));
        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense.id),
            (Some(_), Some(_)) => Err(SpendError::Validation(format!(
                "'{}' matches more than one expense, use a longer id",
                query.trim()
            ))),
            (None, _) => Err(SpendError::expense_not_found(query.trim())),
        }
    }

    /// Start exporting a copy of the current state
    pub fn start_export(&mut self, request: ExportRequest) -> SpendResult<ExportJob> {
        if self.state.expenses.is_empty() {
            return Err(self.reject("No data to export"));
        }

        match ExportJob::spawn(self.state.clone(), request) {
            Ok(job) => {
                self.notifications
                    .show("Exporting expenses...", NotificationType::Info, 0);
                Ok(job)
            }
            Err(e) => {
                self.notifications.sticky_error(e.user_message());
                Err(e)
            }
        }
    }

    /// Wait for an export and report how it went
    pub fn finish_export(&mut self, job: ExportJob) -> SpendResult<ExportOutcome> {
        match job.wait() {
            Ok(outcome) => {
                // Success auto-hides after the default duration; only failures stay up
                self.notifications.success(format!(
                    "Exported {} expenses to {}",
                    outcome.expense_count,
                    outcome.path.display()
                ));
                Ok(outcome)
            }
            Err(e) => {
                self.notifications
                    .sticky_error(format!("Export failed: {}", e.user_message()));
                Err(e)
            }
        }
    }

    fn persist(&self) {
        self.repository
            .save(&Snapshot::capture(&self.state, Utc::now()));
    }

    /// Report a validation failure and build the matching error
    fn reject(&mut self, message: impl Into<String>) -> SpendError {
        let message = message.into();
        self.notifications.error(message.clone());
        SpendError::Validation(message)
    }
}

/// Make loaded state satisfy the ledger invariants
///
/// Returns how many expense records were dropped.
fn reconcile(state: &mut BudgetState) -> usize {
    let before = state.expenses.len();
    let mut seen = HashSet::new();
    let mut running = Money::zero();
    state.expenses.retain(|e| {
        if e.validate().is_err() || seen.contains(&e.id) {
            return false;
        }
        // Anything that would overflow the total cannot be tracked
        let Some(total) = running.checked_add(e.amount) else {
            return false;
        };
        running = total;
        seen.insert(e.id);
        true
    });
    let dropped = before - state.expenses.len();
    if dropped > 0 {
        tracing::warn!(
            dropped,
            "dropped invalid, duplicate or out-of-range expenses from stored snapshot"
        );
    }

    if !state.aggregates_consistent() {
        tracing::warn!("stored totals disagree with expenses, recomputing");
        state.rebuild_aggregates();
    }
    dropped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, SNAPSHOT_KEY};

    fn ledger() -> (MemoryStore, ExpenseLedger<MemoryStore>) {
        let store = MemoryStore::new();
        let ledger = ExpenseLedger::open(
            SnapshotRepository::new(store.clone()),
            NotificationScheduler::default(),
        );
        (store, ledger)
    }

    fn units(n: i64) -> Money {
        Money::from_units(n)
    }

    fn assert_invariants(ledger: &ExpenseLedger<MemoryStore>) {
        let state = ledger.state();
        let total: Money = state.expenses.iter().map(|e| e.amount).sum();
        assert_eq!(state.total_spent, total);
        for category in Category::ALL {
            let sum: Money = state
                .expenses
                .iter()
                .filter(|e| e.category == category)
                .map(|e| e.amount)
                .sum();
            assert_eq!(state.category_totals.get(category), sum, "{:?}", category);
        }
        let ids: HashSet<_> = state.expenses.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), state.expenses.len());
    }

    fn last_message(ledger: &ExpenseLedger<MemoryStore>) -> (String, NotificationType) {
        let n = ledger.notifications().current().unwrap();
        (n.message.clone(), n.notification_type)
    }

    #[test]
    fn test_scenario_from_budget_to_delete() {
        let (_, mut ledger) = ledger();
        ledger.set_budget("Mei", units(100)).unwrap();

        let lunch = ledger.add("food", "lunch", units(45)).unwrap();
        assert_eq!(ledger.state().total_spent, units(45));
        assert_eq!(ledger.percentage(), 45);
        assert_eq!(ledger.level().tier, 5);
        assert_eq!(ledger.remaining(), units(55));

        let bus = ledger.add("transport", "bus", units(60)).unwrap();
        assert_eq!(ledger.state().total_spent, units(105));
        assert_eq!(ledger.percentage(), 105);
        assert_eq!(ledger.level().tier, 11);
        assert_eq!(ledger.remaining(), Money::zero());

        ledger.begin_edit(lunch).unwrap();
        ledger.commit_edit("lunch", units(20)).unwrap();
        assert_eq!(ledger.state().total_spent, units(85));
        assert_eq!(ledger.state().category_totals.food, units(20));
        assert_eq!(ledger.state().category_totals.transport, units(60));

        ledger.delete(bus).unwrap();
        assert_eq!(ledger.state().total_spent, units(20));
        assert_eq!(ledger.state().category_totals.transport, Money::zero());
        assert_eq!(ledger.percentage(), 20);
        assert_eq!(ledger.level().tier, 2);
        assert_invariants(&ledger);
    }

    #[test]
    fn test_add_prepends_and_trims() {
        let (_, mut ledger) = ledger();
        ledger.add("food", "first", units(1)).unwrap();
        let second = ledger.add(" Daily ", "  shampoo ", units(2)).unwrap();

        assert_eq!(ledger.expenses()[0].id, second);
        assert_eq!(ledger.expenses()[0].description, "shampoo");
        assert_eq!(ledger.expenses()[0].category, Category::Daily);
        assert_eq!(
            last_message(&ledger),
            ("Expense recorded!".into(), NotificationType::Success)
        );
    }

    #[test]
    fn test_add_rejections_leave_state_untouched() {
        let (store, mut ledger) = ledger();
        ledger.add("food", "lunch", units(45)).unwrap();
        let before = ledger.state().clone();
        let stored = store.get(SNAPSHOT_KEY).unwrap();

        for (category, description, amount) in [
            ("rent", "flat", units(10)),
            ("", "nothing", units(10)),
            ("food", "   ", units(10)),
            ("food", "free", Money::zero()),
            ("food", "refund", Money::from_cents(-300)),
        ] {
            let err = ledger.add(category, description, amount).unwrap_err();
            assert!(err.is_validation(), "{:?}", err);
            assert_eq!(ledger.state(), &before);
            assert_eq!(last_message(&ledger).1, NotificationType::Error);
        }
        assert_eq!(store.get(SNAPSHOT_KEY).unwrap(), stored);
    }

    #[test]
    fn test_add_then_delete_restores_aggregates() {
        let (_, mut ledger) = ledger();
        ledger.add("entertainment", "movie", Money::from_cents(1234)).unwrap();
        let before = ledger.state().clone();

        let id = ledger.add("entertainment", "popcorn", Money::from_cents(799)).unwrap();
        ledger.delete(id).unwrap();

        assert_eq!(ledger.state().total_spent, before.total_spent);
        assert_eq!(ledger.state().category_totals, before.category_totals);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let (_, mut ledger) = ledger();
        ledger.add("food", "lunch", units(45)).unwrap();
        let before = ledger.state().clone();

        assert!(ledger.delete(ExpenseId::new()).is_none());
        assert_eq!(ledger.state(), &before);
    }

    #[test]
    fn test_begin_edit_unknown_fails() {
        let (_, mut ledger) = ledger();
        let err = ledger.begin_edit(ExpenseId::new()).unwrap_err();
        assert!(err.is_not_found());
        assert!(ledger.edit_session().is_none());
    }

    #[test]
    fn test_begin_edit_replaces_previous_session() {
        let (_, mut ledger) = ledger();
        let a = ledger.add("food", "a", units(1)).unwrap();
        let b = ledger.add("food", "b", units(2)).unwrap();

        ledger.begin_edit(a).unwrap();
        let session = ledger.begin_edit(b).unwrap();
        assert_eq!(session.expense_id, b);
        assert_eq!(session.draft.description, "b");
        assert_eq!(session.draft.amount, units(2));
    }

    #[test]
    fn test_commit_edit_validation_keeps_session() {
        let (_, mut ledger) = ledger();
        let id = ledger.add("food", "lunch", units(45)).unwrap();
        ledger.begin_edit(id).unwrap();
        let before = ledger.state().clone();

        assert!(ledger.commit_edit("  ", units(10)).unwrap_err().is_validation());
        assert!(ledger.commit_edit("dinner", Money::zero()).unwrap_err().is_validation());
        assert_eq!(ledger.state(), &before);
        assert_eq!(ledger.edit_session().unwrap().expense_id, id);

        let updated = ledger.commit_edit(" dinner ", units(50)).unwrap();
        assert_eq!(updated.description, "dinner");
        assert_eq!(updated.category, Category::Food);
        assert!(ledger.edit_session().is_none());
        assert_invariants(&ledger);
    }

    #[test]
    fn test_commit_without_session_fails() {
        let (_, mut ledger) = ledger();
        assert!(ledger.commit_edit("x", units(1)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_cancel_edit_is_idempotent() {
        let (_, mut ledger) = ledger();
        ledger.cancel_edit();

        let id = ledger.add("transport", "taxi", units(30)).unwrap();
        ledger.begin_edit(id).unwrap();
        let before = ledger.state().clone();

        ledger.cancel_edit();
        ledger.cancel_edit();
        assert!(ledger.edit_session().is_none());
        assert_eq!(ledger.state(), &before);
    }

    #[test]
    fn test_deleting_edited_expense_closes_session() {
        let (_, mut ledger) = ledger();
        let id = ledger.add("food", "lunch", units(45)).unwrap();
        ledger.begin_edit(id).unwrap();

        ledger.delete(id).unwrap();
        assert!(ledger.edit_session().is_none());
    }

    #[test]
    fn test_set_budget_validation() {
        let (_, mut ledger) = ledger();
        assert!(ledger.set_budget("  ", units(100)).unwrap_err().is_validation());
        assert!(ledger.set_budget("Mei", Money::zero()).unwrap_err().is_validation());
        assert_eq!(ledger.state(), &BudgetState::default());

        ledger.set_budget("  Mei ", units(250)).unwrap();
        assert_eq!(ledger.state().user_name, "Mei");
        assert_eq!(ledger.state().daily_budget, units(250));
    }

    #[test]
    fn test_mutations_write_through() {
        let (store, mut ledger) = ledger();
        ledger.set_budget("Mei", units(100)).unwrap();
        ledger.add("food", "lunch", units(45)).unwrap();

        let reopened = ExpenseLedger::open(
            SnapshotRepository::new(store.clone()),
            NotificationScheduler::default(),
        );
        assert_eq!(reopened.state(), ledger.state());
    }

    #[test]
    fn test_storage_failure_does_not_block_mutation() {
        let (store, mut ledger) = ledger();
        store.set_fail_writes(true);

        let id = ledger.add("food", "lunch", units(45)).unwrap();
        assert!(ledger.state().find(id).is_some());
        assert!(!store.contains(SNAPSHOT_KEY));
    }

    #[test]
    fn test_clear_resets_and_erases() {
        let (store, mut ledger) = ledger();
        ledger.set_budget("Mei", units(100)).unwrap();
        let id = ledger.add("food", "lunch", units(45)).unwrap();
        ledger.begin_edit(id).unwrap();

        ledger.clear();
        assert_eq!(ledger.state(), &BudgetState::default());
        assert!(ledger.edit_session().is_none());
        assert!(!store.contains(SNAPSHOT_KEY));
    }

    #[test]
    fn test_open_reconciles_inconsistent_snapshot() {
        let store = MemoryStore::new();
        let lunch = Expense::new(Category::Food, "lunch", units(45)).unwrap();
        let doc = serde_json::json!({
            "userName": "Mei",
            "dailyBudget": 10000,
            "expenses": [lunch.clone(), lunch.clone()],
            "totalSpent": "broken",
        });
        store.insert_raw(SNAPSHOT_KEY, &doc.to_string());

        let ledger = ExpenseLedger::open(
            SnapshotRepository::new(store),
            NotificationScheduler::default(),
        );
        assert_eq!(ledger.expenses().len(), 1);
        assert_eq!(ledger.state().total_spent, units(45));
        assert_eq!(ledger.state().category_totals.food, units(45));
        assert_invariants(&ledger);
    }

    #[test]
    fn test_add_rejects_total_overflow() {
        let (store, mut ledger) = ledger();
        let big = Money::parse("92233720368547758").unwrap();
        ledger.add("food", "a", big).unwrap();
        let saved = store.get(SNAPSHOT_KEY).unwrap();

        let err = ledger.add("food", "b", big).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(ledger.expenses().len(), 1);
        assert_eq!(ledger.state().total_spent, big);
        assert_eq!(store.get(SNAPSHOT_KEY).unwrap(), saved);
        assert_eq!(last_message(&ledger).1, NotificationType::Error);
        assert_invariants(&ledger);
    }

    #[test]
    fn test_commit_edit_rejects_total_overflow() {
        let (_, mut ledger) = ledger();
        let big = Money::from_cents(i64::MAX - 100);
        ledger.add("food", "a", big).unwrap();
        let small = ledger.add("transport", "b", units(1)).unwrap();

        ledger.begin_edit(small).unwrap();
        let err = ledger.commit_edit("b", Money::from_cents(i64::MAX)).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(ledger.state().find(small).unwrap().amount, units(1));
        assert!(ledger.edit_session().is_some());
        assert_invariants(&ledger);
    }

    #[test]
    fn test_open_drops_expenses_that_overflow_total() {
        let store = MemoryStore::new();
        let huge = Money::from_cents(i64::MAX);
        let first = Expense::new(Category::Food, "a", huge).unwrap();
        let second = Expense::new(Category::Daily, "b", huge).unwrap();
        let doc = serde_json::json!({
            "userName": "Mei",
            "dailyBudget": 10000,
            "expenses": [first.clone(), second],
            "totalSpent": 5,
        });
        store.insert_raw(SNAPSHOT_KEY, &doc.to_string());

        let ledger = ExpenseLedger::open(
            SnapshotRepository::new(store),
            NotificationScheduler::default(),
        );

        assert_eq!(ledger.expenses(), std::slice::from_ref(&first));
        assert_eq!(ledger.state().total_spent, huge);
        assert_eq!(ledger.state().category_totals.daily, Money::zero());
        assert_invariants(&ledger);
        assert_eq!(last_message(&ledger).1, NotificationType::Warning);
    }

    #[test]
    fn test_export_ignores_changes_made_while_running() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let (_, mut ledger) = ledger();
        ledger.add("food", "lunch", units(12)).unwrap();
        let bus = ledger.add("transport", "bus", units(3)).unwrap();

        let output = temp_dir.path().join("expenses.csv");
        let job = ledger
            .start_export(ExportRequest {
                format: crate::export::ExportFormat::Csv,
                output: output.clone(),
                pretty: false,
                date_format: "%Y-%m-%d".into(),
            })
            .unwrap();
        ledger.add("entertainment", "cinema", units(9)).unwrap();
        ledger.delete(bus);

        let outcome = ledger.finish_export(job).unwrap();
        let contents = std::fs::read_to_string(&output).unwrap();

        assert_eq!(outcome.expense_count, 2);
        assert!(contents.contains("lunch"));
        assert!(contents.contains("bus"));
        assert!(!contents.contains("cinema"));
        assert_eq!(ledger.expenses().len(), 2);
    }

    #[test]
    fn test_find_expense_by_short_id() {
        let (_, mut ledger) = ledger();
        let id = ledger.add("food", "lunch", units(45)).unwrap();

        assert_eq!(ledger.find_expense(&id.to_string()).unwrap(), id);
        assert_eq!(ledger.find_expense(&id.as_uuid().to_string()).unwrap(), id);
        assert!(ledger.find_expense("exp-zzzz").unwrap_err().is_not_found());
    }

    #[test]
    fn test_export_of_empty_ledger_is_rejected() {
        let (_, mut ledger) = ledger();
        let request = ExportRequest {
            format: crate::export::ExportFormat::Csv,
            output: std::env::temp_dir().join("never-written.csv"),
            pretty: false,
            date_format: "%Y-%m-%d".into(),
        };
        assert!(ledger.start_export(request).unwrap_err().is_validation());
    }

    #[test]
    fn test_invariants_hold_over_mixed_sequence() {
        let (_, mut ledger) = ledger();
        let mut ids = Vec::new();
        for i in 0..40i64 {
            let category = Category::ALL[(i % 4) as usize].key();
            ids.push(ledger.add(category, "item", Money::from_cents(101 * (i + 1))).unwrap());
            assert_invariants(&ledger);

            if i % 3 == 0 {
                let target = ids[(i as usize) / 2];
                if ledger.begin_edit(target).is_ok() {
                    ledger.commit_edit("edited", Money::from_cents(7 * (i + 1))).unwrap();
                }
                assert_invariants(&ledger);
            }
            if i % 5 == 4 {
                ledger.delete(ids[(i as usize) - 2]);
                assert_invariants(&ledger);
            }
        }
    }
}
