//! Session and identity
//!
//! The dashboard only renders for an authenticated user. Identity comes from
//! an [`IdentityProvider`]; [`SessionGate`] turns the provider's state into
//! what the front end should show. The terminal front end uses
//! [`LocalIdentity`], a profile kept in the settings file.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Settings;
use crate::error::{FinanceError, FinanceResult};

/// The signed-in user as shown in the dashboard header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl UserProfile {
    /// `name <email>`, or just the name without an email
    pub fn display_name(&self) -> String {
        if self.email.is_empty() {
            self.name.clone()
        } else {
            format!("{} <{}>", self.name, self.email)
        }
    }
}

/// Source of the current user's identity
pub trait IdentityProvider {
    fn is_authenticated(&self) -> bool;

    /// Whether the provider is still resolving the session
    fn is_loading(&self) -> bool;

    fn user(&self) -> Option<&UserProfile>;

    /// End the session
    fn logout(&mut self);
}

/// What the front end shows for the current identity state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionGate {
    Loading,
    LoginRequired,
    Ready(UserProfile),
}

impl SessionGate {
    pub fn evaluate(provider: &dyn IdentityProvider) -> Self {
        if provider.is_loading() {
            return Self::Loading;
        }
        match provider.user() {
            Some(profile) if provider.is_authenticated() => Self::Ready(profile.clone()),
            _ => Self::LoginRequired,
        }
    }
}

/// Identity stored in the local settings file
#[derive(Debug, Clone, Default)]
pub struct LocalIdentity {
    profile: Option<UserProfile>,
}

impl LocalIdentity {
    /// Read the profile from settings; an empty name means signed out
    pub fn from_settings(settings: &Settings) -> Self {
        let name = settings.user_name.trim();
        let profile = (!name.is_empty()).then(|| UserProfile {
            name: name.to_string(),
            email: settings.user_email.trim().to_string(),
            picture: None,
        });
        Self { profile }
    }

    /// Start a session for `name`
    pub fn login(&mut self, name: &str, email: Option<&str>) -> FinanceResult<&UserProfile> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FinanceError::Validation("Name is required".into()));
        }

        info!(user = name, "local login");
        Ok(self.profile.insert(UserProfile {
            name: name.to_string(),
            email: email.unwrap_or_default().trim().to_string(),
            picture: None,
        }))
    }

    /// Write the session back into settings
    pub fn store_in(&self, settings: &mut Settings) {
        match &self.profile {
            Some(profile) => {
                settings.user_name = profile.name.clone();
                settings.user_email = profile.email.clone();
            }
            None => {
                settings.user_name.clear();
                settings.user_email.clear();
            }
        }
    }
}

impl IdentityProvider for LocalIdentity {
    fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    fn is_loading(&self) -> bool {
        false
    }

    fn user(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    fn logout(&mut self) {
        if let Some(profile) = self.profile.take() {
            info!(user = %profile.name, "local logout");
        }
    }
}
