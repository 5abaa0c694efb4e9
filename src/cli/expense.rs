//! Expense CLI commands
//!
//! Implements adding, listing, editing and deleting expenses.

use crate::config::settings::Settings;
use crate::display::{format_expense_line, format_expense_table};
use crate::error::{SpendError, SpendResult};
use crate::models::{ExpenseId, Money};
use crate::services::ExpenseLedger;
use crate::storage::KeyValueStore;

/// Parse a user-entered amount, reporting failures through the ledger's notifications
pub(crate) fn parse_amount<S: KeyValueStore>(
    ledger: &mut ExpenseLedger<S>,
    input: &str,
) -> SpendResult<Money> {
    Money::parse(input).map_err(|e| {
        let message = format!("Please enter a valid amount: {}", e);
        ledger.notifications_mut().error(message.clone());
        SpendError::Validation(message)
    })
}

fn resolve_id<S: KeyValueStore>(ledger: &mut ExpenseLedger<S>, query: &str) -> SpendResult<ExpenseId> {
    ledger.find_expense(query).inspect_err(|e| {
        tracing::debug!(query, error = %e, "expense lookup failed");
        ledger.notifications_mut().error(e.user_message());
    })
}

/// Record a new expense
pub fn handle_add<S: KeyValueStore>(
    ledger: &mut ExpenseLedger<S>,
    settings: &Settings,
    category: &str,
    description: &str,
    amount: &str,
) -> SpendResult<()> {
    let amount = parse_amount(ledger, amount)?;
    let id = ledger.add(category, description, amount)?;

    if let Some(expense) = ledger.state().find(id) {
        println!("{}", format_expense_line(expense, &settings.currency_symbol));
    }
    Ok(())
}

/// List expenses, newest first
pub fn handle_list<S: KeyValueStore>(
    ledger: &ExpenseLedger<S>,
    settings: &Settings,
    limit: Option<usize>,
) -> SpendResult<()> {
    let expenses = ledger.expenses();
    let shown = match limit {
        Some(limit) => &expenses[..limit.min(expenses.len())],
        None => expenses,
    };

    print!(
        "{}",
        format_expense_table(shown, &settings.currency_symbol, &settings.date_format)
    );
    if shown.len() < expenses.len() {
        println!("Showing {} of {} expenses", shown.len(), expenses.len());
    }
    Ok(())
}

/// Edit an expense's description and/or amount
///
/// Fields left out keep their current value.
pub fn handle_edit<S: KeyValueStore>(
    ledger: &mut ExpenseLedger<S>,
    settings: &Settings,
    query: &str,
    description: Option<&str>,
    amount: Option<&str>,
) -> SpendResult<()> {
    let id = resolve_id(ledger, query)?;
    let draft = ledger.begin_edit(id)?.draft.clone();
    let description = description.map(str::to_string).unwrap_or(draft.description);
    let amount = match amount {
        Some(input) => match parse_amount(ledger, input) {
            Ok(amount) => amount,
            Err(e) => {
                ledger.cancel_edit();
                return Err(e);
            }
        },
        None => draft.amount,
    };

    match ledger.commit_edit(&description, amount) {
        Ok(expense) => {
            println!("{}", format_expense_line(&expense, &settings.currency_symbol));
            Ok(())
        }
        Err(e) => {
            ledger.cancel_edit();
            Err(e)
        }
    }
}

/// Delete an expense
pub fn handle_delete<S: KeyValueStore>(ledger: &mut ExpenseLedger<S>, query: &str) -> SpendResult<()> {
    let id = resolve_id(ledger, query)?;
    if let Some(removed) = ledger.delete(id) {
        println!("Removed: {} ({})", removed.description, removed.amount);
    }
    Ok(())
}
