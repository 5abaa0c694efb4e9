//! Expense model
//!
//! A single spending entry. Category is fixed at creation; only the
//! description and amount can change afterwards.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    pub category: Category,

    /// Trimmed, never empty
    pub description: String,

    /// Always positive
    pub amount: Money,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a validated expense stamped with the current time
    pub fn new(
        category: Category,
        description: &str,
        amount: Money,
    ) -> Result<Self, ExpenseValidationError> {
        let description = validate_description(description)?;
        validate_amount(amount)?;
        Ok(Self {
            id: ExpenseId::new(),
            category,
            description,
            amount,
            created_at: Utc::now(),
        })
    }

    /// Creation time rendered with a strftime format
    ///
    /// Returns `None` when chrono cannot render the format.
    pub fn format_created_at(&self, date_format: &str) -> Option<String> {
        let mut out = String::new();
        write!(out, "{}", self.created_at.format(date_format)).ok()?;
        Some(out)
    }

    /// Check the record still satisfies the creation rules
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_description(&self.description)?;
        validate_amount(self.amount)
    }
}

/// Validation errors for expense fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseValidationError {
    #[error("Please choose a spending category ({0})")]
    UnknownCategory(String),

    #[error("Please enter a description")]
    EmptyDescription,

    #[error("Please enter a valid amount (greater than 0)")]
    NonPositiveAmount,
}

/// Trim a description, rejecting it if nothing is left
pub fn validate_description(description: &str) -> Result<String, ExpenseValidationError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(ExpenseValidationError::EmptyDescription);
    }
    Ok(trimmed.to_string())
}

pub fn validate_amount(amount: Money) -> Result<(), ExpenseValidationError> {
    if !amount.is_positive() {
        return Err(ExpenseValidationError::NonPositiveAmount);
    }
    Ok(())
}
