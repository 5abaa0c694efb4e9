//! Profile and status CLI commands

use serde::Serialize;

use crate::config::settings::Settings;
use crate::display::format_status;
use crate::error::{SpendError, SpendResult};
use crate::level::LevelReport;
use crate::models::{CategoryTotals, Money};
use crate::services::ExpenseLedger;
use crate::storage::KeyValueStore;

use super::expense::parse_amount;

/// Machine-readable status for `status --json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusView {
    pub user_name: String,
    pub daily_budget: Money,
    pub total_spent: Money,
    pub remaining: Money,
    pub expense_count: usize,
    pub category_totals: CategoryTotals,
    pub level: LevelReport,
}

impl StatusView {
    pub fn from_ledger<S: KeyValueStore>(ledger: &ExpenseLedger<S>) -> Self {
        let state = ledger.state();
        Self {
            user_name: state.user_name.clone(),
            daily_budget: state.daily_budget,
            total_spent: state.total_spent,
            remaining: state.remaining(),
            expense_count: state.expenses.len(),
            category_totals: state.category_totals,
            level: ledger.level(),
        }
    }
}

/// Set the user's name and daily budget
pub fn handle_setup<S: KeyValueStore>(
    ledger: &mut ExpenseLedger<S>,
    settings: &Settings,
    name: &str,
    budget: &str,
) -> SpendResult<()> {
    let budget = parse_amount(ledger, budget)?;
    ledger.set_budget(name, budget)?;

    println!(
        "Hi {}! Your daily budget is {}.",
        ledger.state().user_name,
        budget.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Show today's spending and stress level
pub fn handle_status<S: KeyValueStore>(
    ledger: &ExpenseLedger<S>,
    settings: &Settings,
    json: bool,
) -> SpendResult<()> {
    if json {
        let view = StatusView::from_ledger(ledger);
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    print!(
        "{}",
        format_status(ledger.state(), &ledger.level(), &settings.currency_symbol)
    );
    Ok(())
}

/// Erase all expenses and the profile
pub fn handle_clear<S: KeyValueStore>(ledger: &mut ExpenseLedger<S>, yes: bool) -> SpendResult<()> {
    if !yes {
        return Err(SpendError::Validation(
            "Refusing to clear all data without --yes".into(),
        ));
    }
    ledger.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationScheduler;
    use crate::storage::{MemoryStore, SnapshotRepository};

    fn ledger() -> ExpenseLedger<MemoryStore> {
        ExpenseLedger::open(
            SnapshotRepository::new(MemoryStore::new()),
            NotificationScheduler::default(),
        )
    }

    #[test]
    fn test_setup_rejects_bad_budget() {
        let mut ledger = ledger();
        let err = handle_setup(&mut ledger, &Settings::default(), "Mei", "-5").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ledger.state().daily_budget, Money::zero());
    }

    #[test]
    fn test_status_view() {
        let mut ledger = ledger();
        handle_setup(&mut ledger, &Settings::default(), "Mei", "100").unwrap();
        ledger.add("food", "lunch", Money::from_units(45)).unwrap();

        let view = StatusView::from_ledger(&ledger);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["userName"], "Mei");
        assert_eq!(json["remaining"], 5500);
        assert_eq!(json["level"]["percentage"], 45);
        assert_eq!(json["level"]["tier"], 5);
        assert_eq!(json["categoryTotals"]["food"], 4500);
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let mut ledger = ledger();
        ledger.add("food", "lunch", Money::from_units(45)).unwrap();

        assert!(handle_clear(&mut ledger, false).is_err());
        assert_eq!(ledger.expenses().len(), 1);

        handle_clear(&mut ledger, true).unwrap();
        assert!(ledger.expenses().is_empty());
    }
}
