//! spendwatch - daily allowance expense tracker
//!
//! This library provides the core functionality for the spendwatch CLI. Users
//! set a daily budget, record categorized expenses against it and get a
//! stress level that rises as the allowance is used up.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, money, budget state)
//! - `level`: Spending percentage, stress tier, quotes and status
//! - `notify`: Single-slot transient notifications
//! - `storage`: Key-value stores and the snapshot repository
//! - `services`: The expense ledger
//! - `export`: CSV, JSON and YAML exports run on a worker thread
//! - `display`, `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendwatch::config::paths::SpendPaths;
//! use spendwatch::models::Money;
//! use spendwatch::notify::NotificationScheduler;
//! use spendwatch::services::ExpenseLedger;
//! use spendwatch::storage::open_file_repository;
//!
//! let paths = SpendPaths::new()?;
//! let mut ledger = ExpenseLedger::open(open_file_repository(&paths)?, NotificationScheduler::default());
//! ledger.add("food", "lunch", Money::parse("12.50")?)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod level;
pub mod models;
pub mod notify;
pub mod services;
pub mod storage;

use std::sync::Once;

pub use error::{SpendError, SpendResult};

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// Honors `RUST_LOG`; defaults to warnings from this crate. Logs go to stderr
/// so command output stays clean.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("spendwatch=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
