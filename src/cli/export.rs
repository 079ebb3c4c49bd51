//! CLI command for projection export
//!
//! Writes the 12-month projection to a file in CSV, JSON or YAML.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use super::project::{start_month, ProjectionOptions};
use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{csv, json, yaml, ProjectionExport};
use crate::projection::month_labels;
use crate::services::ProjectionService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per month)
    Csv,
    /// JSON format (projection with its inputs)
    Json,
    /// YAML format (projection with its inputs, human-readable)
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Arguments for the `export` command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format (defaults to the file extension, then CSV)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    #[command(flatten)]
    pub options: ProjectionOptions,

    /// Label months January to December instead of starting at the current month
    #[arg(long)]
    pub calendar: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the `export` command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> BudgetResult<()> {
    let format = args
        .format
        .or_else(|| ExportFormat::from_path(&args.output))
        .unwrap_or(ExportFormat::Csv);

    let source = args.options.source(storage);
    let report = ProjectionService::new(source.as_ref())
        .project(args.options.investment_percentage(settings))?;
    let months = month_labels(start_month(settings, args.calendar));
    let export = ProjectionExport::from_report(&report, months);
    export.validate().map_err(BudgetError::Export)?;

    let file = File::create(&args.output).map_err(|e| {
        BudgetError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            csv::export_projection_csv(&export.projection, &export.months, &mut writer)?
        }
        ExportFormat::Json => json::export_projection_json(&export, &mut writer, args.pretty)?,
        ExportFormat::Yaml => yaml::export_projection_yaml(&export, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    tracing::info!(path = %args.output.display(), ?format, "projection exported");
    println!("Projection exported to: {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use crate::storage::MemoryStore;
    use std::path::Path;
    use tempfile::TempDir;

    fn export_args(output: PathBuf, format: Option<ExportFormat>) -> ExportArgs {
        ExportArgs {
            output,
            format,
            options: ProjectionOptions {
                invest: Some(0),
                input: None,
            },
            calendar: true,
            pretty: false,
        }
    }

    #[test]
    fn test_export_csv_from_store() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::with_store(MemoryStore::new());
        storage.set_income(3000.0).unwrap();
        storage.set_expenses(&[Expense::new("Rent", "1000")]).unwrap();

        let output = temp_dir.path().join("plan.csv");
        handle_export_command(&storage, &Settings::default(), export_args(output.clone(), None))
            .unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[1], "Jan,1000.00,2000.00,0.00");
    }

    #[test]
    fn test_export_yaml_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::with_store(MemoryStore::new());
        storage.set_income(1200.0).unwrap();

        let output = temp_dir.path().join("plan.yaml");
        handle_export_command(&storage, &Settings::default(), export_args(output.clone(), None))
            .unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        let parsed: ProjectionExport = serde_yaml::from_str(&contents).unwrap();
        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.income, 1200.0);
        assert_eq!(parsed.months[0], "Jan");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("plan.csv")),
            Some(ExportFormat::Csv)
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("plan.JSON")),
            Some(ExportFormat::Json)
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("out/plan.yml")),
            Some(ExportFormat::Yaml)
        );
        assert_eq!(ExportFormat::from_path(Path::new("plan")), None);
        assert_eq!(ExportFormat::from_path(Path::new("plan.txt")), None);
    }
}
