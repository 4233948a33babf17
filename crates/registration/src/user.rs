//! User accounts and their profile settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user preferences, seeded with platform defaults at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub language: String,
    pub timezone: String,
    pub email_notifications: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            timezone: "UTC".to_string(),
            email_notifications: true,
        }
    }
}

/// A registered account. Starts unactivated; activation is one-way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    email: String,
    password_hash: String,
    registered_at: DateTime<Utc>,
    activated: bool,
    profile: Profile,
}

impl User {
    /// Creates an unactivated account with the default profile.
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            registered_at: Utc::now(),
            activated: false,
            profile: Profile::default(),
        }
    }

    /// Returns the account's email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the stored password hash.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Returns the registration instant.
    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Returns true once the account has been activated.
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Returns the profile settings.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Mutable access to the profile settings.
    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    /// Marks the account as activated.
    pub fn activate(&mut self) {
        self.activated = true;
    }
}
