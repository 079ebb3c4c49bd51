//! Expense CLI commands
//!
//! Implements CLI commands for managing the monthly expense list.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_amount, format_expense_details, format_expense_list};
use crate::error::BudgetResult;
use crate::services::{ExpenseSelector, ExpenseService, ExpenseUpdate};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a monthly expense
    Add {
        /// Expense name
        name: String,

        /// Monthly cost (e.g., "1200" or "45.50")
        cost: String,

        /// Description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Show a single expense
    Show {
        /// Position in the list (1-based) or expense ID
        expense: String,
    },

    /// Edit an expense
    Edit {
        /// Position in the list (1-based) or expense ID
        expense: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New monthly cost
        #[arg(short, long)]
        cost: Option<String>,

        /// New description (empty to clear)
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Remove an expense
    #[command(alias = "rm")]
    Remove {
        /// Position in the list (1-based) or expense ID
        expense: String,
    },

    /// Remove all expenses
    Clear,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            cost,
            description,
        } => {
            let expense = service.add(&name, &cost, description.as_deref())?;
            println!(
                "Added expense: {} ({}) [{}]",
                expense.display_name(),
                format_amount(expense.amount(), symbol),
                expense.id
            );
            if !expense.cost.is_numeric() {
                println!(
                    "Note: cost \"{}\" is not a number and counts as {}.",
                    expense.cost,
                    format_amount(0.0, symbol)
                );
            }
        }

        ExpenseCommands::List => {
            let expenses = service.list()?;
            println!("{}", format_expense_list(&expenses, symbol));
        }

        ExpenseCommands::Show { expense } => {
            let selector: ExpenseSelector = expense.parse()?;
            let (_, expense) = service.find(&selector)?;
            print!("{}", format_expense_details(&expense, symbol));
        }

        ExpenseCommands::Edit {
            expense,
            name,
            cost,
            description,
        } => {
            let selector: ExpenseSelector = expense.parse()?;
            let update = ExpenseUpdate {
                name,
                cost,
                description,
            };

            if update.is_empty() {
                println!("No changes specified.");
                return Ok(());
            }

            let expense = service.update(&selector, update)?;
            println!(
                "Updated expense: {} ({})",
                expense.display_name(),
                format_amount(expense.amount(), symbol)
            );
        }

        ExpenseCommands::Remove { expense } => {
            let selector: ExpenseSelector = expense.parse()?;
            let removed = service.remove(&selector)?;
            println!("Removed expense: {}", removed.display_name());
        }

        ExpenseCommands::Clear => {
            let count = service.clear_all()?;
            println!("Removed {} expense(s).", count);
        }
    }

    Ok(())
}
