//! JSON Export functionality
//!
//! Exports the complete budget state together with a derived summary.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{SpendError, SpendResult};
use crate::level;
use crate::models::{BudgetState, Category, CategoryTotals, Expense, Money};

/// Headline figures of a full export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub user_name: String,
    pub daily_budget: Money,
    pub total_spent: Money,
    pub remaining: Money,
    pub percentage: u32,
    /// `None` while nothing has been spent
    pub most_expensive_category: Option<Category>,
    pub average_expense: Money,
}

/// Full snapshot export structure
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullExport {
    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub summary: ExportSummary,

    pub category_totals: CategoryTotals,

    /// Newest first
    pub expenses: Vec<Expense>,
}

impl FullExport {
    /// Build the export from a state captured by the caller
    pub fn from_state(state: &BudgetState) -> Self {
        let summary = ExportSummary {
            user_name: state.user_name.clone(),
            daily_budget: state.daily_budget,
            total_spent: state.total_spent,
            remaining: state.remaining(),
            percentage: level::percentage(state.total_spent, state.daily_budget),
            most_expensive_category: most_expensive_category(&state.category_totals),
            average_expense: average_expense(state.total_spent, state.expenses.len()),
        };

        Self {
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            summary,
            category_totals: state.category_totals,
            expenses: state.expenses.clone(),
        }
    }
}

/// Category with the largest total; ties go to the earlier category
pub fn most_expensive_category(totals: &CategoryTotals) -> Option<Category> {
    let mut best: Option<(Category, Money)> = None;
    for (category, total) in totals.iter() {
        if !total.is_positive() {
            continue;
        }
        match best {
            Some((_, best_total)) if total <= best_total => {}
            _ => best = Some((category, total)),
        }
    }
    best.map(|(category, _)| category)
}

/// Mean expense rounded half up to whole currency units; zero with no expenses
pub fn average_expense(total_spent: Money, count: usize) -> Money {
    if count == 0 || !total_spent.is_positive() {
        return Money::zero();
    }
    let total = i128::from(total_spent.cents());
    let divisor = i128::try_from(count).unwrap_or(i128::MAX) * 100;
    let units = (2 * total + divisor) / (2 * divisor);
    Money::from_units(i64::try_from(units).unwrap_or(i64::MAX / 100))
}

/// Write the full export as JSON
pub fn export_full_json<W: Write>(
    export: &FullExport,
    writer: &mut W,
    pretty: bool,
) -> SpendResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| SpendError::Export(e.to_string()))?;

    Ok(())
}
