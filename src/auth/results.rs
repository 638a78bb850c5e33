//! Authentication result types
//!
//! Defines the outcome of a single login attempt.

use std::fmt;

use crate::directory::UserRecord;

/// Which way the requested role disagreed with the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleMismatch {
    /// Admin was requested but the record is a plain user.
    NotAdmin,
    /// User was requested but the record is an admin.
    MustToggleAdmin,
}

/// Why a login attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    CredentialsInvalid,
    RoleMismatch(RoleMismatch),
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::CredentialsInvalid => write!(f, "credentials invalid"),
            DenialReason::RoleMismatch(RoleMismatch::NotAdmin) => {
                write!(f, "role mismatch: not admin")
            }
            DenialReason::RoleMismatch(RoleMismatch::MustToggleAdmin) => {
                write!(f, "role mismatch: must toggle admin")
            }
        }
    }
}

/// Result of validating a login attempt.
///
/// A granted record always carries the role that was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Granted(UserRecord),
    Denied(DenialReason),
}
