//! Session validator
//!
//! Decides the outcome of one login attempt against the user directory.
//! Matching is a linear first-match scan over the directory in file order.

use log::info;

use super::attempt::LoginAttempt;
use super::results::{DenialReason, RoleMismatch, SessionOutcome};
use crate::directory::{Role, UserDirectory};

/// Validates credentials first, then the role intent.
///
/// A record whose role differs from the requested one is never granted, even
/// when username and password match.
pub fn validate(attempt: &LoginAttempt, directory: &UserDirectory) -> SessionOutcome {
    let Some(record) = directory.find_by_credentials(&attempt.username, &attempt.password) else {
        info!("Login denied for '{}': credentials invalid", attempt.username);
        return SessionOutcome::Denied(DenialReason::CredentialsInvalid);
    };

    let mismatch = match (attempt.requested_role, record.role) {
        (Role::Admin, Role::User) => Some(RoleMismatch::NotAdmin),
        (Role::User, Role::Admin) => Some(RoleMismatch::MustToggleAdmin),
        _ => None,
    };

    match mismatch {
        Some(mismatch) => {
            let reason = DenialReason::RoleMismatch(mismatch);
            info!("Login denied for '{}': {}", attempt.username, reason);
            SessionOutcome::Denied(reason)
        }
        None => {
            info!("Login granted for '{}' as {}", record.username, record.role);
            SessionOutcome::Granted(record.clone())
        }
    }
}
