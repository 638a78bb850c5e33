//! Pre-submission gate
//!
//! Input hygiene only: decides whether the Login action is enabled.

/// Minimum length, in characters, of both username and password.
pub const MIN_CREDENTIAL_LENGTH: usize = 5;

/// Returns true when both fields are long enough to submit.
pub fn is_submittable(username: &str, password: &str) -> bool {
    username.chars().count() >= MIN_CREDENTIAL_LENGTH
        && password.chars().count() >= MIN_CREDENTIAL_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_on_username() {
        assert!(!is_submittable("abcd", "secret"));
        assert!(is_submittable("abcde", "secret"));
    }

    #[test]
    fn test_boundary_on_password() {
        assert!(!is_submittable("alice", "1234"));
        assert!(is_submittable("alice", "12345"));
    }

    #[test]
    fn test_both_short() {
        assert!(!is_submittable("", ""));
        assert!(!is_submittable("abcd", "1234"));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // Four characters, eight bytes
        assert!(!is_submittable("şəğü", "secret"));
        assert!(is_submittable("şəğüx", "secret"));
    }
}
