//! User registration flow.
//!
//! This crate provides an in-memory registration service around five
//! concerns:
//! - email and password validation
//! - deterministic password hashing
//! - single-use verification tokens with a 24-hour window
//! - user accounts with default profile settings
//! - the verification and welcome email documents
//!
//! The lifecycle runs: register (validate → store → issue token → send
//! verification email) then activate (verify token → flag the account →
//! consume the token → send welcome email). Every attempt lands in a
//! timestamped event log the service exposes for inspection.

pub mod emails;
pub mod error;
pub mod password;
pub mod service;
pub mod token;
pub mod user;
pub mod validation;

pub use emails::{Email, verification_email, welcome_email};
pub use error::RegistrationError;
pub use password::{hash_password, verify_password};
pub use service::{Registration, UserRegistration};
pub use token::{TOKEN_EXPIRY_HOURS, VerificationToken};
pub use user::{Profile, User};
pub use validation::{MIN_PASSWORD_LENGTH, is_valid_email, is_valid_password};
