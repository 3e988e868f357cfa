//! User preferences
//!
//! Display and notification choices for the session, plus the partial update
//! used by the settings panel.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currencies offered by the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
}

impl Currency {
    /// All supported currencies, in menu order
    pub const ALL: [Currency; 4] = [Self::Usd, Self::Eur, Self::Gbp, Self::Jpy];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy => "¥",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| format!("unsupported currency '{}'", s.trim()))
    }
}

/// Per-session display and notification settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default)]
    pub currency: Currency,

    /// Budget alert notifications
    #[serde(default = "default_notifications")]
    pub notifications: bool,
}

fn default_notifications() -> bool {
    true
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            currency: Currency::default(),
            notifications: default_notifications(),
        }
    }
}

impl UserPreferences {
    /// Merge a partial update; fields left as `None` keep their value
    pub fn apply(&mut self, update: PreferencesUpdate) {
        if let Some(dark_mode) = update.dark_mode {
            self.dark_mode = dark_mode;
        }
        if let Some(currency) = update.currency {
            self.currency = currency;
        }
        if let Some(notifications) = update.notifications {
            self.notifications = notifications;
        }
    }
}

/// Partial preferences update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferencesUpdate {
    pub dark_mode: Option<bool>,
    pub currency: Option<Currency>,
    pub notifications: Option<bool>,
}

impl PreferencesUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dark_mode(mut self, enabled: bool) -> Self {
        self.dark_mode = Some(enabled);
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn notifications(mut self, enabled: bool) -> Self {
        self.notifications = Some(enabled);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.dark_mode.is_none() && self.currency.is_none() && self.notifications.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = UserPreferences::default();
        assert!(!prefs.dark_mode);
        assert_eq!(prefs.currency, Currency::Usd);
        assert!(prefs.notifications);
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let mut prefs = UserPreferences {
            dark_mode: true,
            currency: Currency::Gbp,
            notifications: false,
        };
        prefs.apply(PreferencesUpdate::new().currency(Currency::Eur));

        assert!(prefs.dark_mode);
        assert_eq!(prefs.currency, Currency::Eur);
        assert!(!prefs.notifications);
    }

    #[test]
    fn test_currency_parse_and_symbol() {
        assert_eq!("eur".parse::<Currency>(), Ok(Currency::Eur));
        assert_eq!(Currency::Jpy.symbol(), "¥");
        assert!("CHF".parse::<Currency>().is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(UserPreferences::default()).unwrap();
        assert_eq!(json["dark_mode"], false);
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["notifications"], true);
    }
}
