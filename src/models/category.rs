//! Spending categories
//!
//! The set of categories is closed. Every lookup table over it is an
//! exhaustive `match`, so adding a variant fails to compile until every
//! table knows about it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Daily,
}

impl Category {
    /// All categories in enumeration order
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Daily,
    ];

    /// Stable machine key, as used in the persisted snapshot
    pub fn key(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Daily => "daily",
        }
    }

    /// Display icon
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍽️",
            Self::Transport => "🚌",
            Self::Entertainment => "🎮",
            Self::Daily => "🧴",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Daily => "Daily necessities",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}

/// Returned when text does not name one of the known categories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category '{0}' (expected one of: food, transport, entertainment, daily)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.key() == needle)
            .ok_or_else(|| UnknownCategory(s.trim().to_string()))
    }
}
