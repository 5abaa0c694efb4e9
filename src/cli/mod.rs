//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger service.

pub mod expense;
pub mod export;
pub mod profile;

use clap::Subcommand;

use crate::config::paths::SpendPaths;
use crate::config::settings::Settings;
use crate::display::format_notification;
use crate::error::{SpendError, SpendResult};
use crate::notify::NotificationType;
use crate::services::ExpenseLedger;
use crate::storage::KeyValueStore;

pub use expense::{handle_add, handle_delete, handle_edit, handle_list};
pub use export::{handle_export_command, ExportArgs};
pub use profile::{handle_clear, handle_setup, handle_status, StatusView};

/// Commands that operate on the ledger
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set your name and daily budget
    Setup {
        /// Your name
        name: String,
        /// Daily budget (e.g., "100" or "100.50")
        budget: String,
    },

    /// Record an expense
    Add {
        /// Category: food, transport, entertainment or daily
        category: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// What the money was spent on
        description: String,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Edit an expense's description or amount
    Edit {
        /// Expense ID (full or short form)
        id: String,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (full or short form)
        id: String,
    },

    /// Show spending against today's budget
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Erase all expenses and the profile
    Clear {
        /// Confirm the erase
        #[arg(long)]
        yes: bool,
    },

    /// Export expenses to a file
    Export(ExportArgs),
}

/// Run a ledger command
pub fn dispatch<S: KeyValueStore>(
    ledger: &mut ExpenseLedger<S>,
    paths: &SpendPaths,
    settings: &Settings,
    command: Commands,
) -> SpendResult<()> {
    match command {
        Commands::Setup { name, budget } => handle_setup(ledger, settings, &name, &budget),
        Commands::Add {
            category,
            amount,
            description,
        } => handle_add(ledger, settings, &category, &description, &amount),
        Commands::List { limit } => handle_list(ledger, settings, limit),
        Commands::Edit {
            id,
            description,
            amount,
        } => handle_edit(
            ledger,
            settings,
            &id,
            description.as_deref(),
            amount.as_deref(),
        ),
        Commands::Delete { id } => handle_delete(ledger, &id),
        Commands::Status { json } => handle_status(ledger, settings, json),
        Commands::Clear { yes } => handle_clear(ledger, yes),
        Commands::Export(args) => handle_export_command(ledger, paths, settings, &args),
    }
}

/// Print the visible notification and any error it does not already cover
///
/// Expired notifications are hidden first. Returns whether the command
/// succeeded.
pub fn report<S: KeyValueStore>(ledger: &mut ExpenseLedger<S>, result: &SpendResult<()>) -> bool {
    ledger.notifications_mut().poll();
    let notification = ledger.notifications().current();

    if let Some(notification) = notification {
        let line = format_notification(notification);
        if notification.notification_type == NotificationType::Error {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    match result {
        Ok(()) => true,
        Err(e) => {
            let already_shown = notification.is_some_and(|n| {
                n.notification_type == NotificationType::Error && covers(&n.message, e)
            });
            if !already_shown {
                eprintln!("Error: {}", e.user_message());
            }
            false
        }
    }
}

fn covers(message: &str, error: &SpendError) -> bool {
    message.contains(&error.user_message())
}
