//! Password hashing for stored accounts.
//!
//! Simulation-grade hashing, not suitable for real credentials. The
//! scheme is deterministic so stored hashes stay verifiable for the
//! lifetime of the process.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Prefix carried by every hash this module produces.
pub const HASH_PREFIX: &str = "HASHED_";

/// Hashes a password with a length-derived salt.
pub fn hash_password(password: &str) -> String {
    let salted = format!("{password}SALT_{}", password.chars().count());
    let mut hasher = DefaultHasher::new();
    salted.hash(&mut hasher);
    format!("{HASH_PREFIX}{}", hasher.finish())
}

/// Checks a candidate password against a stored hash.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    hash_password(password) == hashed
}
