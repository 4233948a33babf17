//! Verification tokens issued at registration time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Hours a verification token stays valid after issue.
pub const TOKEN_EXPIRY_HOURS: i64 = 24;

/// Length of the random suffix in a `VERIFY-` token.
pub(crate) const TOKEN_SUFFIX_LEN: usize = 16;

/// Single-use token binding an email address to an activation window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationToken {
    token: String,
    email: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    used: bool,
}

impl VerificationToken {
    /// Creates a token valid for [`TOKEN_EXPIRY_HOURS`] from now.
    pub fn new(token: impl Into<String>, email: impl Into<String>) -> Self {
        Self::expiring_at(token, email, Utc::now() + Duration::hours(TOKEN_EXPIRY_HOURS))
    }

    /// Creates a token with an explicit expiry instant.
    pub fn expiring_at(
        token: impl Into<String>,
        email: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token: token.into(),
            email: email.into(),
            created_at: Utc::now(),
            expires_at,
            used: false,
        }
    }

    /// Returns the token string.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the address the token is bound to.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the issue instant.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the expiry instant.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns true once the token has been consumed.
    pub fn is_used(&self) -> bool {
        self.used
    }

    /// True once the expiry instant has passed.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Consumes the token. A used token never validates again.
    pub fn mark_used(&mut self) {
        self.used = true;
    }
}
