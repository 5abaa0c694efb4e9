//! Stress level engine
//!
//! Maps the ratio of money spent to the daily allowance onto a stress tier,
//! a status descriptor, an advisory quote and a character image. Every
//! function here is pure and total; callers recompute on demand.
//!
//! Tiers use inclusive upper bounds: 0% is tier 0, 1-10% tier 1, ...,
//! 91-100% tier 10, anything above 100% the overflow tier 11.

use serde::Serialize;

use crate::models::Money;

/// Tier reported once spending exceeds the allowance
pub const OVERFLOW_TIER: u8 = 11;

/// Advisory quotes, indexed by tier
pub const QUOTES: &[&str] = &[
    "Earning money is hard work; every cent deserves a plan.",
    "A small treat now and then is well deserved.",
    "Hmm... spending is a little above what I expected, time to rein it in.",
    "This pace is a bit fast, better look at the budget again.",
    "Things are starting to look bad, money could get tight.",
    "Calm down, no more spending on a whim.",
    "Uh oh, at this rate I'll spend more than I have.",
    "That's it, the living allowance is almost gone.",
    "Now this is real trouble, the wallet is nearly empty.",
    "Completely broke, even the basics are in question.",
    "Oh no! Already way over budget!",
    "Help! This is going to end badly!",
    "Emergency! Stop spending immediately!",
];

/// Character images, indexed by tier and clamped to the last one
pub const CHARACTER_ASSETS: &[&str] = &[
    "images/level-0.png",
    "images/level-1.png",
    "images/level-2.png",
    "images/level-3.png",
    "images/level-4.png",
    "images/level-5.png",
    "images/level-6.png",
    "images/level-7.png",
    "images/level-8.png",
    "images/level-9.png",
];

/// Ordinal urgency used for status coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Green,
    Yellow,
    Orange,
    Red,
    /// Only used beyond 100%
    Overflow,
}

impl Severity {
    /// Hex color for the presentation layer
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Green => "#22c55e",
            Self::Yellow => "#eab308",
            Self::Orange => "#f97316",
            Self::Red => "#ef4444",
            Self::Overflow => "#7c3aed",
        }
    }
}

/// Status descriptor for a spend percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub label: &'static str,
    pub emoji: &'static str,
    pub severity: Severity,
    /// Always `severity.color()`
    pub severity_color: &'static str,
}

const STATUSES: [Status; 12] = [
    status("Carefree", "😄", Severity::Green),
    status("Relaxed", "🙂", Severity::Green),
    status("Comfortable", "😊", Severity::Green),
    status("Watchful", "😐", Severity::Yellow),
    status("Uneasy", "😕", Severity::Yellow),
    status("Tense", "😟", Severity::Yellow),
    status("Worried", "😰", Severity::Orange),
    status("Anxious", "😨", Severity::Orange),
    status("Stressed", "😫", Severity::Red),
    status("Panicking", "😱", Severity::Red),
    status("Maxed out", "🥵", Severity::Red),
    status("Over budget", "💀", Severity::Overflow),
];

const fn status(label: &'static str, emoji: &'static str, severity: Severity) -> Status {
    Status {
        label,
        emoji,
        severity,
        severity_color: severity.color(),
    }
}

/// Spend as a whole percentage of the allowance, rounded half up.
///
/// Returns 0 when no allowance is set or nothing has been spent.
pub fn percentage(total_spent: Money, daily_budget: Money) -> u32 {
    if !daily_budget.is_positive() || !total_spent.is_positive() {
        return 0;
    }
    let spent = i128::from(total_spent.cents()) * 100;
    let budget = i128::from(daily_budget.cents());
    let rounded = (2 * spent + budget) / (2 * budget);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Tier 0-11 for a percentage
pub fn tier(percentage: u32) -> u8 {
    match percentage {
        0 => 0,
        // 1..=100 fits in u8 after the division
        1..=100 => percentage.div_ceil(10) as u8,
        _ => OVERFLOW_TIER,
    }
}

/// Pick `items[index]`, falling back to the last item when out of range
pub fn pick_clamped<'a>(items: &[&'a str], index: usize) -> Option<&'a str> {
    let last = items.len().checked_sub(1)?;
    Some(items[index.min(last)])
}

/// Advisory quote for a tier
pub fn quote(tier: u8) -> &'static str {
    pick_clamped(QUOTES, usize::from(tier)).unwrap_or_default()
}

/// Status descriptor for a percentage
pub fn status_for(percentage: u32) -> Status {
    STATUSES[usize::from(tier(percentage)).min(STATUSES.len() - 1)]
}

/// Character image reference for a percentage
pub fn character_asset(percentage: u32) -> &'static str {
    pick_clamped(CHARACTER_ASSETS, usize::from(tier(percentage))).unwrap_or_default()
}

/// Everything the presentation layer needs for the current spend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelReport {
    pub percentage: u32,
    pub tier: u8,
    pub quote: &'static str,
    pub status: Status,
    pub character_asset: &'static str,
}

impl LevelReport {
    /// Derive the report from a percentage
    pub fn for_percentage(percentage: u32) -> Self {
        let tier = tier(percentage);
        Self {
            percentage,
            tier,
            quote: quote(tier),
            status: status_for(percentage),
            character_asset: character_asset(percentage),
        }
    }

    /// Derive the report from the raw totals
    pub fn compute(total_spent: Money, daily_budget: Money) -> Self {
        Self::for_percentage(percentage(total_spent, daily_budget))
    }
}
