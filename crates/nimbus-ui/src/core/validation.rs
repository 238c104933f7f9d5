//! Input validation rules for auth forms.
//!
//! # Design
//! - The HTML `pattern` strings are what the browser enforces on inputs.
//! - The native validators mirror those patterns so submit gating can be
//!   tested without a DOM (the password pattern uses lookaheads, which the
//!   `regex` crate does not support, so it is expressed as character checks).

use crate::core::pattern::{attribute_pattern, html_pattern_matches};
use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length.
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Browser-side password pattern: a digit, an upper and a lower case letter,
/// a symbol, and at least six characters.
pub const PASSWORD_PATTERN: &str =
    r##"(?=.*[0-9])(?=.*[A-Z])(?=.*[a-z])(?=.*[ !"#$%&'\(\)*+,\-.\/:;<=>?@\[\\\]^_`\{\|\}~]).{6,}"##;

/// Message shown when a password does not satisfy [`PASSWORD_PATTERN`].
pub const PASSWORD_ERROR: &str = "Your password must include numbers, letters (both lowercase and uppercase) and symbols, and must be at least 6 characters long.";

/// Message shown when the confirmation differs from the new password.
pub const CONFIRM_PASSWORD_ERROR: &str = "Passwords must match.";

/// Message shown for a malformed email address.
pub const EMAIL_ERROR: &str = "Please enter a valid email address.";

/// Email grammar used by `<input type="email">`.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

/// Whether `password` satisfies [`PASSWORD_PATTERN`].
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LENGTH
        && password.chars().any(|ch| ch.is_ascii_digit())
        && password.chars().any(|ch| ch.is_ascii_uppercase())
        && password.chars().any(|ch| ch.is_ascii_lowercase())
        && password
            .chars()
            .any(|ch| ch == ' ' || ch.is_ascii_punctuation())
}

/// Whether `email` is a syntactically valid address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX
        .as_ref()
        .is_some_and(|regex| regex.is_match(email))
}

/// Pattern attribute for the confirmation field, built from the new password.
#[must_use]
pub fn confirm_password_pattern(new_password: &str) -> String {
    attribute_pattern(new_password)
}

/// Whether the confirmation equals the new password exactly (case-sensitive).
#[must_use]
pub fn confirmation_matches(new_password: &str, confirmation: &str) -> bool {
    html_pattern_matches(&confirm_password_pattern(new_password), confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_requires_every_character_class() {
        assert!(is_valid_password("Pa$$w0rd"));
        assert!(!is_valid_password("Pa$w0"));
        assert!(!is_valid_password("pa$$w0rd"));
        assert!(!is_valid_password("PA$$W0RD"));
        assert!(!is_valid_password("Password0"));
        assert!(!is_valid_password("Pa$$word"));
        assert!(is_valid_password("Pass w0rd"));
    }

    #[test]
    fn email_validation_follows_input_grammar() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("ada+nimbus@mail.example.co"));
        assert!(!is_valid_email("ada@"));
        assert!(!is_valid_email("ada example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn confirmation_is_exact_and_case_sensitive() {
        assert!(confirmation_matches("Pa$$w0rd", "Pa$$w0rd"));
        assert!(!confirmation_matches("Pa$$w0rd", "pa$$w0rd"));
        assert!(!confirmation_matches("Pa$$w0rd", "Pa$$w0rd "));
    }

    #[test]
    fn confirmation_escapes_metacharacters() {
        assert_eq!(confirm_password_pattern("a.b*"), r"a\.b\*");
        assert!(!confirmation_matches("a.b*", "axbbb"));
        assert!(confirmation_matches("a.b*", "a.b*"));
    }

    #[test]
    fn confirmation_pattern_avoids_identity_escapes() {
        let pattern = confirm_password_pattern("Pa#&-~w0rd");
        assert_eq!(pattern, "Pa#&-~w0rd");
        assert!(!pattern.contains('\\'));
        assert!(confirmation_matches("Pa#&-~w0rd", "Pa#&-~w0rd"));
        assert!(!confirmation_matches("Pa#&-~w0rd", "Pa#&-~w0rD"));
    }
}
