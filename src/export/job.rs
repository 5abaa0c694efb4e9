//! Background export jobs
//!
//! An export runs on its own thread against a copy of the budget state taken
//! when the job starts. Later ledger changes never reach a running export.

use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

use crate::error::{SpendError, SpendResult};
use crate::models::BudgetState;
use crate::storage::file_io::write_atomic;

use super::csv::export_expenses_csv;
use super::json::{export_full_json, FullExport};
use super::yaml::export_full_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSV rows (expenses only)
    Csv,
    /// JSON (summary, totals and expenses)
    Json,
    /// YAML (summary, totals and expenses, human-readable)
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// What to export and where
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub output: PathBuf,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// strftime format for CSV dates
    pub date_format: String,
}

/// Result of a finished export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub expense_count: usize,
}

/// Default export file name: `expenses_<user>_<date>.<ext>`
pub fn default_file_name(user_name: &str, format: ExportFormat, date: NaiveDate) -> String {
    let user: String = user_name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    let user = if user.is_empty() { "user".to_string() } else { user };
    format!(
        "expenses_{}_{}.{}",
        user,
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Run an export synchronously
///
/// The document is encoded in memory and written atomically, so a failed
/// export leaves nothing at the target path.
pub fn run_export(state: &BudgetState, request: &ExportRequest) -> SpendResult<ExportOutcome> {
    let mut buffer = Vec::new();

    match request.format {
        ExportFormat::Csv => {
            export_expenses_csv(state, &request.date_format, &mut buffer)?;
        }
        ExportFormat::Json => {
            export_full_json(&FullExport::from_state(state), &mut buffer, request.pretty)?;
        }
        ExportFormat::Yaml => {
            export_full_yaml(&FullExport::from_state(state), &mut buffer)?;
        }
    }

    write_atomic(&request.output, &buffer).map_err(|e| {
        SpendError::Export(format!(
            "Failed to write {}: {}",
            request.output.display(),
            e.user_message()
        ))
    })?;

    Ok(ExportOutcome {
        path: request.output.clone(),
        format: request.format,
        expense_count: state.expenses.len(),
    })
}

/// An export running on a worker thread
#[derive(Debug)]
pub struct ExportJob {
    handle: JoinHandle<SpendResult<ExportOutcome>>,
}

impl ExportJob {
    /// Start exporting `state`, which the job takes ownership of
    pub fn spawn(state: BudgetState, request: ExportRequest) -> SpendResult<Self> {
        let handle = thread::Builder::new()
            .name("spendwatch-export".into())
            .spawn(move || {
                let result = run_export(&state, &request);
                if let Err(e) = &result {
                    tracing::error!(path = %request.output.display(), error = %e, "export failed");
                }
                result
            })
            .map_err(|e| SpendError::Export(format!("Failed to start export: {}", e)))?;

        Ok(Self { handle })
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the export is done
    pub fn wait(self) -> SpendResult<ExportOutcome> {
        self.handle
            .join()
            .map_err(|_| SpendError::Export("export worker panicked".into()))?
    }
}
