//! Display formatting for terminal output
//!
//! Turns views into text: tables through `tabled`, summaries by hand.
//! Amounts are printed with the symbol of the selected currency.

pub mod dashboard;
pub mod goal;
pub mod transaction;

pub use dashboard::{format_analytics, format_budget_table, format_header, format_overview, format_settings};
pub use goal::{format_goal_card, format_goal_list, progress_bar};
pub use transaction::{format_transaction_details, format_transaction_register};

use crate::models::{Currency, Money};

/// Format an amount with the currency's symbol
pub fn format_money(amount: Money, currency: Currency) -> String {
    amount.format_with_symbol(currency.symbol())
}

/// Shorten `s` to at most `max_len` characters, ending with `...`
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
