//! Registration orchestrator.
//!
//! Owns the users, issued tokens, and the timestamped event log, and
//! drives the two-step lifecycle: register (verification email goes
//! out) then activate (welcome email goes out). Each instance is an
//! isolated world, which keeps tests hermetic.

use chrono::Utc;
use common::{IdSource, Latency, RandomIds};

use crate::emails::{self, Email};
use crate::error::RegistrationError;
use crate::password::hash_password;
use crate::token::{TOKEN_SUFFIX_LEN, VerificationToken};
use crate::user::User;
use crate::validation::{is_valid_email, is_valid_password};

/// Simulated delivery delay for outbound email, in milliseconds.
const DELIVERY_DELAY_MS: u64 = 50;

/// Outcome of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub verification_token: String,
}

/// In-memory registration service.
#[derive(Debug)]
pub struct UserRegistration<I: IdSource> {
    users: Vec<User>,
    tokens: Vec<VerificationToken>,
    logs: Vec<String>,
    last_verification_email_sent_to: Option<String>,
    last_welcome_email_sent_to: Option<String>,
    latency: Latency,
    ids: I,
}

impl UserRegistration<RandomIds> {
    /// Service with random tokens and the stock delivery delay.
    pub fn new() -> Self {
        Self::with_parts(Latency::from_millis(DELIVERY_DELAY_MS), RandomIds::new())
    }
}

impl Default for UserRegistration<RandomIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> UserRegistration<I> {
    /// Service with explicit delivery latency and token id source.
    pub fn with_parts(latency: Latency, ids: I) -> Self {
        Self {
            users: Vec::new(),
            tokens: Vec::new(),
            logs: Vec::new(),
            last_verification_email_sent_to: None,
            last_welcome_email_sent_to: None,
            latency,
            ids,
        }
    }

    /// Registers a new account and sends the verification email.
    ///
    /// Checks run in order: email shape, duplicate address, password
    /// strength. The first failure is logged and returned; nothing is
    /// stored on failure. On success the account, its token, and the
    /// log entries commit only after the verification email delivery,
    /// so an interrupted call stores nothing either.
    #[tracing::instrument(skip(self, password))]
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Registration, RegistrationError> {
        metrics::counter!("registrations_total").increment(1);

        if !is_valid_email(email) {
            self.reject_registration(email, "Invalid email format");
            return Err(RegistrationError::InvalidEmail);
        }
        if self.user_exists(email) {
            self.reject_registration(email, "Email already exists");
            return Err(RegistrationError::DuplicateEmail);
        }
        if !is_valid_password(password) {
            self.reject_registration(email, "Password does not meet requirements");
            return Err(RegistrationError::WeakPassword);
        }

        let user = User::new(email, hash_password(password));
        let token = self.mint_token();
        self.send_verification_email(email, &token).await;

        // No awaits past this point; the stored effects land together.
        self.log_event(&format!("Registration attempt for email: {email}"));
        self.users.push(user);
        self.store_token(&token, email);
        self.log_event(&format!("User registered successfully: {email}"));
        metrics::counter!("registrations_completed").increment(1);

        Ok(Registration {
            email: email.to_string(),
            verification_token: token,
        })
    }

    fn reject_registration(&mut self, email: &str, reason: &str) {
        self.log_event(&format!("Registration attempt for email: {email}"));
        self.log_event(&format!("Registration failed: {reason}"));
        metrics::counter!("registrations_failed").increment(1);
    }

    /// Activates an account with a previously issued token.
    ///
    /// Returns false when the token is unknown, already used, expired,
    /// or bound to a different address, or when no such account exists.
    /// On success the token is consumed and the welcome email goes out;
    /// the activation flag, the consumed token, and the log entries all
    /// commit after the delivery await, so an interrupted call changes
    /// nothing.
    #[tracing::instrument(skip(self))]
    pub async fn activate(&mut self, email: &str, token: &str) -> bool {
        if !self.verify_token(token, email) {
            self.log_event(&format!("Account activation attempt for: {email}"));
            self.log_event("Account activation failed: Invalid or expired token");
            return false;
        }
        if !self.user_exists(email) {
            self.log_event(&format!("Account activation attempt for: {email}"));
            self.log_event("Account activation failed: User not found");
            return false;
        }

        self.send_welcome_email(email).await;

        self.log_event(&format!("Account activation attempt for: {email}"));
        if let Some(user) = self.user_by_email_mut(email) {
            user.activate();
        }
        if let Some(stored) = self.tokens.iter_mut().find(|t| t.token() == token) {
            stored.mark_used();
        }
        self.log_event(&format!("Account activated successfully: {email}"));
        true
    }

    fn mint_token(&self) -> String {
        format!("VERIFY-{}", self.ids.suffix(TOKEN_SUFFIX_LEN))
    }

    fn store_token(&mut self, token: &str, email: &str) {
        self.tokens.push(VerificationToken::new(token, email));
        tracing::info!(email, "verification token generated");
    }

    /// Issues a fresh `VERIFY-` token bound to the address.
    pub fn generate_verification_token(&mut self, email: &str) -> String {
        let token = self.mint_token();
        self.store_token(&token, email);
        token
    }

    /// Looks up an issued token by its string form.
    pub fn verification_token(&self, token: &str) -> Option<&VerificationToken> {
        self.tokens.iter().find(|t| t.token() == token)
    }

    /// A token validates when it exists, is unused, is unexpired, and
    /// is bound to the same address (case-insensitive).
    pub fn verify_token(&self, token: &str, email: &str) -> bool {
        self.verification_token(token).is_some_and(|stored| {
            !stored.is_used() && !stored.is_expired() && stored.email().eq_ignore_ascii_case(email)
        })
    }

    /// Renders and delivers the verification email, recording the
    /// recipient once delivery completes.
    pub async fn send_verification_email(&mut self, email: &str, token: &str) {
        let message = emails::verification_email(email, token);
        self.deliver(&message).await;
        self.last_verification_email_sent_to = Some(email.to_string());
    }

    /// Renders and delivers the welcome email for an activated account.
    /// Does nothing when the address is unknown.
    pub async fn send_welcome_email(&mut self, email: &str) {
        let Some(user) = self.user_by_email(email) else {
            return;
        };
        let message = emails::welcome_email(user);
        self.deliver(&message).await;
        self.last_welcome_email_sent_to = Some(email.to_string());
    }

    async fn deliver(&self, message: &Email) {
        tracing::info!(to = %message.to, subject = %message.subject, "sending email");
        tracing::debug!(body = %message.body, "email body");
        self.latency.wait().await;
        tracing::info!(to = %message.to, "email sent");
    }

    /// True when any stored account uses this address, ignoring case.
    pub fn user_exists(&self, email: &str) -> bool {
        self.users
            .iter()
            .any(|u| u.email().eq_ignore_ascii_case(email))
    }

    /// Returns the account stored under this address, ignoring case.
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.email().eq_ignore_ascii_case(email))
    }

    fn user_by_email_mut(&mut self, email: &str) -> Option<&mut User> {
        self.users
            .iter_mut()
            .find(|u| u.email().eq_ignore_ascii_case(email))
    }

    /// True when the account exists and has been activated.
    pub fn is_activated(&self, email: &str) -> bool {
        self.user_by_email(email).is_some_and(User::is_activated)
    }

    /// Snapshot of all stored accounts.
    pub fn users(&self) -> Vec<User> {
        self.users.clone()
    }

    /// Snapshot of the timestamped event log.
    pub fn logs(&self) -> Vec<String> {
        self.logs.clone()
    }

    /// Returns the recipient of the most recent verification email.
    pub fn last_verification_email_sent_to(&self) -> Option<&str> {
        self.last_verification_email_sent_to.as_deref()
    }

    /// Returns the recipient of the most recent welcome email.
    pub fn last_welcome_email_sent_to(&self) -> Option<&str> {
        self.last_welcome_email_sent_to.as_deref()
    }

    fn log_event(&mut self, event: &str) {
        let entry = format!("[{}] {event}", Utc::now().to_rfc3339());
        tracing::info!("{entry}");
        self.logs.push(entry);
    }
}
