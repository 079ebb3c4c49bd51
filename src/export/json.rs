//! JSON Export functionality
//!
//! Exports a projection and the inputs it was computed from, with schema
//! versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::projection::{FinancialProjection, PROJECTION_MONTHS};
use crate::services::ProjectionReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Projection export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Monthly income the projection was computed from
    pub income: f64,

    /// Share of the remaining balance invested each month
    pub investment_percentage: f64,

    /// Sum of the monthly expenses
    pub total_monthly_expenses: f64,

    /// Month labels, one per projected month
    pub months: Vec<String>,

    /// The projected series
    pub projection: FinancialProjection,
}

impl ProjectionExport {
    /// Build an export from a computed report
    pub fn from_report(report: &ProjectionReport, months: Vec<String>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            income: report.snapshot.income,
            investment_percentage: report.investment_percentage,
            total_monthly_expenses: report.snapshot.total_monthly_expenses(),
            months,
            projection: report.projection.clone(),
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.months.len() != PROJECTION_MONTHS {
            return Err(format!(
                "Expected {} month labels, got {}",
                PROJECTION_MONTHS,
                self.months.len()
            ));
        }

        Ok(())
    }
}

/// Export a projection to JSON
pub fn export_projection_json<W: Write>(
    export: &ProjectionExport,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
