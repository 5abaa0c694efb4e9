//! Budget state
//!
//! `BudgetState` holds the user's daily allowance, the expense records and
//! the running sums derived from them. The running sums are kept in step by
//! the ledger service; `aggregates_consistent` checks them against the records.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::expense::Expense;
use super::ids::ExpenseId;
use super::money::Money;

/// Running sum of expense amounts per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    #[serde(default)]
    pub food: Money,
    #[serde(default)]
    pub transport: Money,
    #[serde(default)]
    pub entertainment: Money,
    #[serde(default)]
    pub daily: Money,
}

impl CategoryTotals {
    /// Total recorded for one category
    pub fn get(&self, category: Category) -> Money {
        match category {
            Category::Food => self.food,
            Category::Transport => self.transport,
            Category::Entertainment => self.entertainment,
            Category::Daily => self.daily,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Money {
        match category {
            Category::Food => &mut self.food,
            Category::Transport => &mut self.transport,
            Category::Entertainment => &mut self.entertainment,
            Category::Daily => &mut self.daily,
        }
    }

    /// Add `amount` (which may be negative) to a category's total
    pub fn adjust(&mut self, category: Category, amount: Money) {
        *self.slot_mut(category) += amount;
    }

    /// Iterate `(category, total)` in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Recompute totals from a set of expenses
    pub fn from_expenses<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Self {
        let mut totals = Self::default();
        for expense in expenses {
            totals.adjust(expense.category, expense.amount);
        }
        totals
    }
}

/// The whole tracked state of one user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetState {
    pub user_name: String,

    /// Daily allowance; zero until set up
    pub daily_budget: Money,

    /// Newest first
    pub expenses: Vec<Expense>,

    pub category_totals: CategoryTotals,

    pub total_spent: Money,
}

impl BudgetState {
    /// Look up an expense by id
    pub fn find(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub(crate) fn position(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }

    /// Money left for today, never below zero
    pub fn remaining(&self) -> Money {
        (self.daily_budget - self.total_spent).max(Money::zero())
    }

    /// Whether the running sums match the records
    pub fn aggregates_consistent(&self) -> bool {
        let total: Money = self.expenses.iter().map(|e| e.amount).sum();
        total == self.total_spent
            && CategoryTotals::from_expenses(&self.expenses) == self.category_totals
    }

    /// Recompute the running sums from the records
    pub fn rebuild_aggregates(&mut self) {
        self.category_totals = CategoryTotals::from_expenses(&self.expenses);
        self.total_spent = self.expenses.iter().map(|e| e.amount).sum();
    }

    /// Reset every field to its zero value
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Working copy of the fields an edit may change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub description: String,
    pub amount: Money,
}

/// The single in-flight, uncommitted edit of one expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub expense_id: ExpenseId,
    pub draft: EditDraft,
}

impl EditSession {
    /// Open a session seeded from the current record
    pub fn seeded_from(expense: &Expense) -> Self {
        Self {
            expense_id: expense.id,
            draft: EditDraft {
                description: expense.description.clone(),
                amount: expense.amount,
            },
        }
    }
}
