//! Core data models for spendwatch
//!
//! Expenses, their categories, money amounts and the budget state that
//! aggregates them.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use budget::{BudgetState, CategoryTotals, EditDraft, EditSession};
pub use category::{Category, UnknownCategory};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
