//! Modal notifications shown for refused logins

use std::fmt;

use crate::auth::{DenialReason, RoleMismatch};

pub const LOGIN_FAILED_TITLE: &str = "Login Failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    /// Builds the notification for a denied attempt.
    ///
    /// Role mismatches are warnings; bad credentials are critical.
    pub fn for_denial(reason: &DenialReason) -> Self {
        let (severity, message) = match reason {
            DenialReason::RoleMismatch(RoleMismatch::NotAdmin) => (
                Severity::Warning,
                "You are not an admin. Untick 'Login as Admin' to log in as a user.",
            ),
            DenialReason::RoleMismatch(RoleMismatch::MustToggleAdmin) => (
                Severity::Warning,
                "To log in as an admin you must tick 'Login as Admin'.",
            ),
            DenialReason::CredentialsInvalid => {
                (Severity::Critical, "Invalid username or password!")
            }
        };

        Self {
            title: LOGIN_FAILED_TITLE,
            severity,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ({}) {}", self.title, self.severity, self.message)
    }
}
