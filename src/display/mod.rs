//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, the budget status and
//! notifications for terminal display.

pub mod expense;
pub mod status;

pub use expense::{format_expense_line, format_expense_table};
pub use status::{format_notification, format_status};
