//! Email documents produced by the registration flow.

use serde::{Deserialize, Serialize};

use crate::token::TOKEN_EXPIRY_HOURS;
use crate::user::User;

/// Base URL for the verification link embedded in the first email.
const VERIFICATION_BASE_URL: &str = "https://example.com/verify";

/// A rendered email, ready for a delivery channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Renders the address-verification email sent right after registration.
pub fn verification_email(email: &str, token: &str) -> Email {
    let link = format!("{VERIFICATION_BASE_URL}?token={token}&email={email}");
    let body = format!(
        "Hello,\n\n\
         Thank you for registering with us!\n\n\
         Please verify your email address by clicking the link below:\n\
         {link}\n\n\
         Or use this verification code: {token}\n\n\
         This link will expire in {TOKEN_EXPIRY_HOURS} hours.\n\n\
         If you did not create an account, please ignore this email.\n\n\
         Best regards,\n\
         The Team"
    );
    Email {
        to: email.to_string(),
        subject: "Verify Your Account".to_string(),
        body,
    }
}

/// Renders the welcome email sent once the account is activated.
pub fn welcome_email(user: &User) -> Email {
    let notifications = if user.profile().email_notifications {
        "Enabled"
    } else {
        "Disabled"
    };
    let body = format!(
        "Welcome {email}!\n\n\
         Your account has been successfully activated.\n\n\
         Your account details:\n\
         - Email: {email}\n\
         - Registration Date: {registered}\n\
         - Language: {language}\n\
         - Timezone: {timezone}\n\
         - Email Notifications: {notifications}\n\n\
         Thank you for joining us!\n\n\
         Best regards,\n\
         The Team",
        email = user.email(),
        registered = user.registered_at().to_rfc3339(),
        language = user.profile().language,
        timezone = user.profile().timezone,
    );
    Email {
        to: user.email().to_string(),
        subject: "Welcome to Our Platform!".to_string(),
        body,
    }
}
