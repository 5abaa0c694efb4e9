//! CSV Export functionality
//!
//! Flattens the expense list into spreadsheet rows, newest first.

use std::io::Write;

use serde::Serialize;

use crate::error::{SpendError, SpendResult};
use crate::models::{BudgetState, Money};

/// Header row of the tabular export
pub const CSV_HEADER: [&str; 4] = ["Date", "Category", "Description", "Amount"];

/// One row of the tabular export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    pub date: String,
    pub category_label: String,
    pub description: String,
    pub amount: Money,
}

/// Rows for every expense in ledger order (newest first)
pub fn tabular_rows(state: &BudgetState, date_format: &str) -> SpendResult<Vec<ExportRow>> {
    state
        .expenses
        .iter()
        .map(|expense| {
            let date = expense.format_created_at(date_format).ok_or_else(|| {
                SpendError::Export(format!("Invalid date format: {:?}", date_format))
            })?;
            Ok(ExportRow {
                date,
                category_label: expense.category.label().to_string(),
                description: expense.description.clone(),
                amount: expense.amount,
            })
        })
        .collect()
}

/// Write rows as CSV with a header line
pub fn write_rows_csv<W: Write>(rows: &[ExportRow], writer: W) -> SpendResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| SpendError::Export(e.to_string()))?;

    for row in rows {
        let amount = row.amount.format_with_symbol("");
        csv_writer
            .write_record([
                row.date.as_str(),
                row.category_label.as_str(),
                row.description.as_str(),
                amount.as_str(),
            ])
            .map_err(|e| SpendError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SpendError::Export(e.to_string()))?;

    Ok(())
}

/// Export the expense list of `state` to CSV
pub fn export_expenses_csv<W: Write>(
    state: &BudgetState,
    date_format: &str,
    writer: W,
) -> SpendResult<usize> {
    let rows = tabular_rows(state, date_format)?;
    write_rows_csv(&rows, writer)?;
    Ok(rows.len())
}
