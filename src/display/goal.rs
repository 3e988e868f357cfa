//! Saving goal display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format_money;
use crate::models::Currency;
use crate::views::{GoalCard, GoalsView};

const BAR_WIDTH: usize = 20;

/// Text progress bar for a percentage in `[0, 100]`
pub fn progress_bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn deadline_label(card: &GoalCard) -> String {
    if card.complete {
        "reached".to_string()
    } else if card.days_left < 0 {
        format!("{} days overdue", -card.days_left)
    } else {
        format!("{} days left", card.days_left)
    }
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format all goals as a table with totals
pub fn format_goal_list(view: &GoalsView, currency: Currency) -> String {
    if view.cards.is_empty() {
        return "No saving goals yet.\n".to_string();
    }

    let rows = view.cards.iter().map(|card| GoalRow {
        name: card.name.clone(),
        saved: format_money(card.current, currency),
        target: format_money(card.target, currency),
        progress: format!("{} {:.0}%", progress_bar(card.progress_percent), card.progress_percent),
        deadline: format!("{} ({})", card.deadline, deadline_label(card)),
        id: card.id.to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!(
        "{}\nSaved {} of {}\n",
        table,
        format_money(view.total_saved, currency),
        format_money(view.total_target, currency)
    )
}

/// Format a single goal, as printed after a contribution
pub fn format_goal_card(card: &GoalCard, currency: Currency) -> String {
    format!(
        "{}: {} / {} {} {:.0}% ({} to go, {})\n",
        card.name,
        format_money(card.current, currency),
        format_money(card.target, currency),
        progress_bar(card.progress_percent),
        card.progress_percent,
        format_money(card.remaining, currency),
        deadline_label(card)
    )
}
