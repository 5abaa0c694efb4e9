use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendwatch::cli::{dispatch, report, Commands};
use spendwatch::config::{paths::SpendPaths, settings::Settings};
use spendwatch::notify::NotificationScheduler;
use spendwatch::services::ExpenseLedger;
use spendwatch::storage::{open_file_repository, SNAPSHOT_KEY};

#[derive(Parser)]
#[command(
    name = "spendwatch",
    version,
    about = "Daily allowance expense tracker",
    long_about = "spendwatch tracks what you spend against a daily budget. Record \
                  expenses by category and watch your stress level climb as the \
                  allowance runs out."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<TopCommands>,
}

#[derive(Subcommand)]
enum TopCommands {
    #[command(flatten)]
    Ledger(Commands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<ExitCode> {
    spendwatch::init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SpendPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(TopCommands::Ledger(command)) => {
            let repository = open_file_repository(&paths)?;
            let scheduler =
                NotificationScheduler::new(Duration::from_millis(settings.notification_duration_ms));
            let mut ledger = ExpenseLedger::open(repository, scheduler);

            let result = dispatch(&mut ledger, &paths, &settings, command);
            if !report(&mut ledger, &result) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(TopCommands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            println!("spendwatch Configuration");
            println!("========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Snapshot key:     {}", SNAPSHOT_KEY);
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Date format:           {}", settings.date_format);
            println!(
                "  Notification duration: {} ms",
                settings.notification_duration_ms
            );
        }
        None => {
            println!("spendwatch - daily allowance expense tracker");
            println!();
            println!("Run 'spendwatch setup <NAME> <BUDGET>' to get started.");
            println!("Run 'spendwatch --help' for usage information.");
        }
    }

    Ok(ExitCode::SUCCESS)
}
