//! Login attempt
//!
//! Ephemeral input built per submission and discarded after validation.

use crate::directory::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub username: String,
    pub password: String,
    pub requested_role: Role,
}

impl LoginAttempt {
    /// Builds an attempt from the form fields and the "Login as Admin" toggle.
    pub fn new(username: impl Into<String>, password: impl Into<String>, as_admin: bool) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            requested_role: Role::from_admin_flag(as_admin),
        }
    }
}
