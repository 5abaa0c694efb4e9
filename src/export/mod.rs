//! Export module for spendwatch
//!
//! Provides data export in multiple formats:
//! - CSV: expense rows (spreadsheet-compatible)
//! - JSON: summary, category totals and expenses
//! - YAML: the same content as JSON, human-readable
//!
//! Exports work on a copy of the state and run on a worker thread.

pub mod csv;
pub mod job;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, tabular_rows, ExportRow};
pub use job::{default_file_name, run_export, ExportFormat, ExportJob, ExportOutcome, ExportRequest};
pub use json::{export_full_json, ExportSummary, FullExport};
pub use yaml::export_full_yaml;
