//! Settings view
//!
//! Current preferences, the currency choices, and the actions the settings
//! panel dispatches to the store.

use crate::models::{Currency, PreferencesUpdate, UserPreferences};
use crate::store::FinanceStore;

/// A user action on the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    ToggleDarkMode,
    SetCurrency(Currency),
    SetNotifications(bool),
    /// Wipe transactions, goals and budgets
    ClearAllData,
}

impl SettingsAction {
    /// Apply the action to the store
    pub fn apply(self, store: &mut FinanceStore) {
        match self {
            Self::ToggleDarkMode => {
                store.toggle_dark_mode();
            }
            Self::SetCurrency(currency) => {
                store.update_preferences(PreferencesUpdate::new().currency(currency));
            }
            Self::SetNotifications(enabled) => {
                store.update_preferences(PreferencesUpdate::new().notifications(enabled));
            }
            Self::ClearAllData => store.clear_all(),
        }
    }

    /// Whether the action destroys data and should be confirmed first
    pub fn is_destructive(&self) -> bool {
        matches!(self, Self::ClearAllData)
    }

    /// Toast text shown after the action succeeds
    pub fn confirmation(&self, preferences: &UserPreferences) -> String {
        match self {
            Self::ToggleDarkMode => format!(
                "Dark mode {}",
                if preferences.dark_mode { "enabled" } else { "disabled" }
            ),
            Self::SetCurrency(c) => format!("Currency set to {} ({})", c.code(), c.symbol()),
            Self::SetNotifications(true) => "Notifications enabled".to_string(),
            Self::SetNotifications(false) => "Notifications disabled".to_string(),
            Self::ClearAllData => "All data cleared".to_string(),
        }
    }
}

/// One entry of the currency selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyOption {
    pub currency: Currency,
    pub selected: bool,
}

/// Presentation data for the settings tab
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsView {
    pub preferences: UserPreferences,
    pub currencies: Vec<CurrencyOption>,
}

impl SettingsView {
    pub fn build(store: &FinanceStore) -> Self {
        let preferences = store.preferences().clone();
        let currencies = Currency::ALL
            .iter()
            .map(|&currency| CurrencyOption {
                currency,
                selected: currency == preferences.currency,
            })
            .collect();

        Self {
            preferences,
            currencies,
        }
    }
}
