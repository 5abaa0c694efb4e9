//! Status and notification formatting for terminal output

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::level::LevelReport;
use crate::models::{BudgetState, Money};
use crate::notify::Notification;

const BAR_WIDTH: usize = 20;

/// Create a simple bar for a percentage, full at 100%
pub fn format_bar(percentage: u32, width: usize) -> String {
    let filled = (percentage.min(100) as usize * width + 50) / 100;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[derive(Tabled)]
struct TotalRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
}

/// Budget overview: figures, stress level and per-category totals
pub fn format_status(state: &BudgetState, report: &LevelReport, currency_symbol: &str) -> String {
    let fmt = |m: Money| m.format_with_symbol(currency_symbol);
    let mut output = String::new();

    let name = if state.user_name.is_empty() {
        "(not set up)"
    } else {
        state.user_name.as_str()
    };

    output.push_str(&format!("User:         {}\n", name));
    output.push_str(&format!("Daily budget: {}\n", fmt(state.daily_budget)));
    output.push_str(&format!("Spent:        {}\n", fmt(state.total_spent)));
    output.push_str(&format!("Remaining:    {}\n", fmt(state.remaining())));
    output.push_str(&format!(
        "Used:         {} {}%\n",
        format_bar(report.percentage, BAR_WIDTH),
        report.percentage
    ));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!(
        "Level {:>2}:     {} {} ({})\n",
        report.tier,
        report.status.emoji,
        report.status.label,
        report.status.severity_color
    ));
    output.push_str(&format!("\"{}\"\n", report.quote));
    output.push_str(&separator(40));
    output.push('\n');

    let rows: Vec<TotalRow> = state
        .category_totals
        .iter()
        .map(|(category, total)| TotalRow {
            category: category.to_string(),
            spent: fmt(total),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output.push_str(&table.to_string());
    output.push('\n');

    output
}

/// One-line rendering of a notification
pub fn format_notification(notification: &Notification) -> String {
    let kind = notification.notification_type;
    format!("[{}] {}: {}", kind.icon(), kind.title(), notification.message)
}
