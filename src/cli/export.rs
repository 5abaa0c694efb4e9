//! CLI commands for data export
//!
//! Exports run on a worker thread; the command waits for the job and prints
//! where the file landed.

use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use crate::config::paths::SpendPaths;
use crate::config::settings::Settings;
use crate::error::SpendResult;
use crate::export::{default_file_name, ExportFormat, ExportRequest};
use crate::services::ExpenseLedger;
use crate::storage::KeyValueStore;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (defaults to the export directory)
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Build the export request, filling in the default location
pub fn build_request(
    args: &ExportArgs,
    user_name: &str,
    paths: &SpendPaths,
    settings: &Settings,
) -> ExportRequest {
    let output = args.output.clone().unwrap_or_else(|| {
        paths.export_dir().join(default_file_name(
            user_name,
            args.format,
            Local::now().date_naive(),
        ))
    });

    ExportRequest {
        format: args.format,
        output,
        pretty: args.pretty,
        date_format: settings.date_format.clone(),
    }
}

/// Handle the export command
pub fn handle_export_command<S: KeyValueStore>(
    ledger: &mut ExpenseLedger<S>,
    paths: &SpendPaths,
    settings: &Settings,
    args: &ExportArgs,
) -> SpendResult<()> {
    let request = build_request(args, &ledger.state().user_name, paths, settings);
    tracing::info!(format = ?request.format, path = %request.output.display(), "starting export");

    let job = ledger.start_export(request)?;
    let outcome = ledger.finish_export(job)?;

    if outcome.format == ExportFormat::Csv {
        println!("Note: CSV format exports expenses only. Use JSON or YAML for the summary.");
    }
    Ok(())
}
