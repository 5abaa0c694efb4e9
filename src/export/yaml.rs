//! YAML Export functionality
//!
//! Writes the full export in a human-readable form.

use std::io::Write;

use crate::error::{SpendError, SpendResult};
use crate::export::json::FullExport;

/// Export the full snapshot to YAML format
pub fn export_full_yaml<W: Write>(export: &FullExport, writer: &mut W) -> SpendResult<()> {
    writeln!(writer, "# spendwatch export").map_err(|e| SpendError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| SpendError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| SpendError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SpendError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| SpendError::Export(e.to_string()))?;

    Ok(())
}
