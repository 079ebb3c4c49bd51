//! YAML Export functionality
//!
//! Exports a projection to YAML for human reading.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::ProjectionExport;

/// Export a projection to YAML format
pub fn export_projection_yaml<W: Write>(
    export: &ProjectionExport,
    writer: &mut W,
) -> BudgetResult<()> {
    writeln!(writer, "# budget-projector 12-month projection")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
