//! Projection CLI commands
//!
//! Implements the `project`, `summary` and `breakdown` commands.

use chrono::{Datelike, Local};
use clap::Args;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::display::{format_breakdown, format_chart, format_projection_table, format_summary};
use crate::error::BudgetResult;
use crate::projection::month_labels;
use crate::services::{
    FallbackSource, FinanceSource, JsonFileSource, ProjectionService, StoreSource,
};
use crate::storage::Storage;

/// Options shared by commands that compute a projection
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectionOptions {
    /// Percentage of the remaining balance to invest each month (0-100)
    #[arg(
        short = 'i',
        long = "invest",
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub invest: Option<u8>,

    /// Read income and expenses from a JSON file, falling back to the
    /// saved budget if it cannot be read
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl ProjectionOptions {
    /// Investment percentage, or the configured default when not given
    pub fn investment_percentage(&self, settings: &Settings) -> f64 {
        f64::from(
            self.invest
                .unwrap_or(settings.default_investment_percentage),
        )
    }

    /// Where to read income and expenses from
    pub fn source<'a>(&self, storage: &'a Storage) -> Box<dyn FinanceSource + 'a> {
        match &self.input {
            Some(path) => Box::new(FallbackSource::new(
                JsonFileSource::new(path.clone()),
                StoreSource::new(storage),
            )),
            None => Box::new(StoreSource::new(storage)),
        }
    }
}

/// Arguments for the `project` command
#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub options: ProjectionOptions,

    /// Label months January to December instead of starting at the current month
    #[arg(long)]
    pub calendar: bool,

    /// Draw a text chart instead of a table
    #[arg(long)]
    pub chart: bool,
}

/// First projected month (1 = January)
pub fn start_month(settings: &Settings, calendar: bool) -> u32 {
    if calendar || !settings.start_at_current_month {
        1
    } else {
        Local::now().month()
    }
}

/// Handle the `project` command
pub fn handle_project_command(
    storage: &Storage,
    settings: &Settings,
    args: ProjectArgs,
) -> BudgetResult<()> {
    let source = args.options.source(storage);
    let service = ProjectionService::new(source.as_ref());
    let percentage = args.options.investment_percentage(settings);
    let start = start_month(settings, args.calendar);
    let symbol = settings.currency_symbol.as_str();

    if args.chart {
        let chart = service.chart(percentage, start)?;
        println!("{}", format_chart(&chart, symbol));
        return Ok(());
    }

    let report = service.project(percentage)?;
    println!(
        "12-Month Projection ({}% invested at 8% annual)",
        report.investment_percentage
    );
    println!(
        "{}",
        format_projection_table(&report.projection, &month_labels(start), symbol)
    );

    Ok(())
}

/// Handle the `summary` command
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    options: ProjectionOptions,
) -> BudgetResult<()> {
    let source = options.source(storage);
    let service = ProjectionService::new(source.as_ref());
    let summary = service.summary(options.investment_percentage(settings))?;

    print!("{}", format_summary(&summary, &settings.currency_symbol));
    Ok(())
}

/// Handle the `breakdown` command
pub fn handle_breakdown_command(
    storage: &Storage,
    settings: &Settings,
    input: Option<PathBuf>,
) -> BudgetResult<()> {
    let options = ProjectionOptions {
        invest: None,
        input,
    };
    let source = options.source(storage);
    let breakdown = ProjectionService::new(source.as_ref()).breakdown()?;

    println!("Monthly Expense Breakdown");
    println!("{}", format_breakdown(&breakdown, &settings.currency_symbol));
    Ok(())
}
