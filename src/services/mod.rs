//! Business logic layer for spendwatch
//!
//! The ledger service owns the budget state and coordinates validation,
//! persistence and user notifications.

pub mod ledger;

pub use ledger::ExpenseLedger;
