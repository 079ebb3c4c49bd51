//! Income CLI commands
//!
//! Implements CLI commands for setting and showing the monthly income.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_amount;
use crate::error::BudgetResult;
use crate::services::{parse_amount, IncomeService};
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand, Debug)]
pub enum IncomeCommands {
    /// Set the monthly take-home income
    Set {
        /// Income amount (e.g., "3000" or "3,000.00")
        amount: String,
    },

    /// Show the monthly income
    Show,
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> BudgetResult<()> {
    let service = IncomeService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            let income = service.set_income(amount)?;
            println!("Monthly income set to {}", format_amount(income, symbol));

            if let Some(remaining) = storage.remaining_balance()? {
                println!(
                    "Remaining after expenses: {}",
                    format_amount(remaining, symbol)
                );
            }
        }
        IncomeCommands::Show => match service.get_income()? {
            Some(income) => println!("Monthly income: {}", format_amount(income, symbol)),
            None => {
                println!("No income set.");
                println!("Use 'budget income set <amount>' to set one.");
            }
        },
    }

    Ok(())
}
