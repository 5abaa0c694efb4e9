//! Expense display formatting
//!
//! Renders the expense list as a terminal table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::settings::DEFAULT_DATE_FORMAT;
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses (already in display order) as a table
pub fn format_expense_table(expenses: &[Expense], currency_symbol: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.to_string(),
            date: e
                .format_created_at(date_format)
                .unwrap_or_else(|| e.created_at.format(DEFAULT_DATE_FORMAT).to_string()),
            category: e.category.to_string(),
            description: truncate(&e.description, 40),
            amount: e.amount.format_with_symbol(currency_symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format a single expense for confirmation output
pub fn format_expense_line(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "{}  {}  {}  {}",
        expense.id,
        expense.category,
        expense.description,
        expense.amount.format_with_symbol(currency_symbol)
    )
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
