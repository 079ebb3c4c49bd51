//! Configuration CLI commands
//!
//! Shows where budget data lives and updates the saved settings.

use clap::Subcommand;

use crate::config::{paths::BudgetPaths, settings::Settings};
use crate::error::{BudgetError, BudgetResult};

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,

    /// Change saved settings
    Set {
        /// Investment percentage used when a command doesn't pass --invest
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        default_invest: Option<u8>,

        /// Currency symbol used when printing amounts
        #[arg(long)]
        currency: Option<String>,

        /// Label the first projected month with the current month (true/false)
        #[arg(long)]
        start_at_current_month: Option<bool>,
    },
}

/// Handle a config command; no subcommand shows the configuration
pub fn handle_config_command(
    paths: &BudgetPaths,
    mut settings: Settings,
    cmd: Option<ConfigCommands>,
) -> BudgetResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => print_config(paths, &settings),
        ConfigCommands::Set {
            default_invest,
            currency,
            start_at_current_month,
        } => {
            if default_invest.is_none() && currency.is_none() && start_at_current_month.is_none()
            {
                println!("No settings given.");
                println!("Use 'budget config set --help' to see what can be changed.");
                return Ok(());
            }

            if let Some(percentage) = default_invest {
                settings.default_investment_percentage = percentage;
            }
            if let Some(symbol) = currency {
                let symbol = symbol.trim();
                if symbol.is_empty() {
                    return Err(BudgetError::Config(
                        "Currency symbol cannot be empty".into(),
                    ));
                }
                settings.currency_symbol = symbol.to_string();
            }
            if let Some(start) = start_at_current_month {
                settings.start_at_current_month = start;
            }

            settings.validate()?;
            settings.save(paths)?;
            tracing::info!(path = %paths.settings_file().display(), "settings saved");

            println!("Settings saved.");
            print_settings(&settings);
        }
    }

    Ok(())
}

fn print_config(paths: &BudgetPaths, settings: &Settings) {
    println!("budget-projector Configuration");
    println!("==============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data store:     {}", paths.store_file().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    print_settings(settings);
}

fn print_settings(settings: &Settings) {
    println!("Settings:");
    println!(
        "  Default investment:     {}%",
        settings.default_investment_percentage
    );
    println!("  Currency symbol:        {}", settings.currency_symbol);
    println!(
        "  Start at current month: {}",
        settings.start_at_current_month
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_paths() -> (TempDir, BudgetPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, paths)
    }

    #[test]
    fn test_set_saves_settings() {
        let (_temp, paths) = temp_paths();
        let cmd = ConfigCommands::Set {
            default_invest: Some(30),
            currency: Some(" £ ".into()),
            start_at_current_month: Some(false),
        };
        handle_config_command(&paths, Settings::default(), Some(cmd)).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_investment_percentage, 30);
        assert_eq!(loaded.currency_symbol, "£");
        assert!(!loaded.start_at_current_month);
    }

    #[test]
    fn test_set_keeps_unchanged_fields() {
        let (_temp, paths) = temp_paths();
        let mut settings = Settings::default();
        settings.currency_symbol = "€".into();

        let cmd = ConfigCommands::Set {
            default_invest: Some(15),
            currency: None,
            start_at_current_month: None,
        };
        handle_config_command(&paths, settings, Some(cmd)).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_investment_percentage, 15);
        assert_eq!(loaded.currency_symbol, "€");
        assert!(loaded.start_at_current_month);
    }

    #[test]
    fn test_empty_currency_rejected() {
        let (_temp, paths) = temp_paths();
        let cmd = ConfigCommands::Set {
            default_invest: None,
            currency: Some("  ".into()),
            start_at_current_month: None,
        };
        let result = handle_config_command(&paths, Settings::default(), Some(cmd));

        assert!(matches!(result, Err(BudgetError::Config(_))));
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_set_without_flags_writes_nothing() {
        let (_temp, paths) = temp_paths();
        let cmd = ConfigCommands::Set {
            default_invest: None,
            currency: None,
            start_at_current_month: None,
        };
        handle_config_command(&paths, Settings::default(), Some(cmd)).unwrap();
        assert!(!paths.settings_file().exists());
    }
}
