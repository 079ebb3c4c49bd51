use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use budget_projector::cli::{
    handle_breakdown_command, handle_config_command, handle_expense_command,
    handle_export_command, handle_income_command, handle_project_command,
    handle_summary_command, ConfigCommands, ExpenseCommands, ExportArgs, IncomeCommands,
    ProjectArgs, ProjectionOptions,
};
use budget_projector::config::{paths::BudgetPaths, settings::Settings};
use budget_projector::logging::init_tracing;
use budget_projector::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Personal budget projection calculator",
    long_about = "budget-projector takes your monthly income and recurring expenses \
                  and projects the next twelve months of spending, savings and \
                  investment growth at 8% a year."
)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Show the 12-month projection
    Project(ProjectArgs),

    /// Show monthly and year-end totals
    Summary(ProjectionOptions),

    /// Show how monthly expenses are distributed
    Breakdown {
        /// Read expenses from a JSON file, falling back to the saved budget
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Export the 12-month projection to a file
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Delete all saved budget data
    Clear,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(&paths)?;

    match cli.command {
        Some(Commands::Income(cmd)) => handle_income_command(&storage, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Project(args)) => handle_project_command(&storage, &settings, args)?,
        Some(Commands::Summary(options)) => {
            handle_summary_command(&storage, &settings, options)?
        }
        Some(Commands::Breakdown { input }) => {
            handle_breakdown_command(&storage, &settings, input)?
        }
        Some(Commands::Export(args)) => handle_export_command(&storage, &settings, args)?,
        Some(Commands::History { limit }) => {
            let entries = match storage.audit() {
                Some(logger) => logger.read_recent(limit)?,
                None => Vec::new(),
            };
            if entries.is_empty() {
                println!("No changes recorded.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Clear) => {
            let removed = storage.clear()?;
            if removed.is_empty() {
                println!("Nothing to clear.");
            } else {
                println!("Cleared saved data: {}", removed.join(", "));
            }
        }
        Some(Commands::Config { action }) => handle_config_command(&paths, settings, action)?,
        None => {
            println!("budget-projector - 12-month budget projections");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget income set <amount>' to get started.");
        }
    }

    Ok(())
}
