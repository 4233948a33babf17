//! Input validation for registration requests.

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Checks the shape of an email address: a local part, an `@`, and a
/// dotted domain whose final label is at least two letters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(is_local_char) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if host.is_empty() || !host.chars().all(is_domain_char) {
        return false;
    }
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-')
}

fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-')
}

/// Checks password strength: at least [`MIN_PASSWORD_LENGTH`] characters,
/// with an uppercase letter, a lowercase letter, and a digit.
pub fn is_valid_password(password: &str) -> bool {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return false;
    }
    password.chars().any(char::is_uppercase)
        && password.chars().any(char::is_lowercase)
        && password.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@mail-host.example.org"));
        assert!(is_valid_email("a@b.co"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("notanemail"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@example.com."));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn test_domain_may_carry_inner_dots() {
        assert!(is_valid_email("user@mail.example.co.uk"));
        // Consecutive dots sit inside the host part and pass the shape check
        assert!(is_valid_email("user@example..com"));
    }

    #[test]
    fn test_accepts_strong_passwords() {
        assert!(is_valid_password("SecurePass123"));
        assert!(is_valid_password("Aa345678"));
    }

    #[test]
    fn test_rejects_weak_passwords() {
        assert!(!is_valid_password(""));
        assert!(!is_valid_password("short"));
        assert!(!is_valid_password("Sh0rt"));
        assert!(!is_valid_password("nouppercase123"));
        assert!(!is_valid_password("NOLOWERCASE123"));
        assert!(!is_valid_password("NoDigitsHere"));
    }

    #[test]
    fn test_length_is_counted_in_characters() {
        // 8 characters, more than 8 bytes
        assert!(is_valid_password("Pässw0rd"));
    }
}
