//! Module `state`
//!
//! Two-state presentation state machine. The shell drives it from
//! `SessionOutcome` values instead of keeping page logic in its handlers.

use log::debug;

use super::notification::Notification;
use crate::auth::SessionOutcome;
use crate::directory::UserRecord;
use crate::error::SessionError;

/// The page currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Profile(UserRecord),
}

/// Owns the current view and enforces the allowed transitions.
#[derive(Debug, Default)]
pub struct Navigator {
    view: View,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current view.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Returns the signed-in user while the profile view is active.
    pub fn current_user(&self) -> Option<&UserRecord> {
        match &self.view {
            View::Profile(user) => Some(user),
            View::Login => None,
        }
    }

    pub fn is_login_view(&self) -> bool {
        matches!(self.view, View::Login)
    }

    /// Moves from the login view to the profile view for `user`.
    pub fn login_succeeded(&mut self, user: UserRecord) -> Result<(), SessionError> {
        if !self.is_login_view() {
            return Err(SessionError::InvalidTransition(
                "already on the profile view".into(),
            ));
        }

        debug!("Switching to profile view for '{}'", user.username);
        self.view = View::Profile(user);
        Ok(())
    }

    /// Returns to the login view.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        if self.is_login_view() {
            return Err(SessionError::InvalidTransition("no user logged in".into()));
        }

        debug!("Switching to login view");
        self.view = View::Login;
        Ok(())
    }

    /// Applies a validation outcome.
    ///
    /// A grant switches to the profile view. A denial leaves the view as it is
    /// and returns the notification to show.
    pub fn apply(&mut self, outcome: SessionOutcome) -> Result<Option<Notification>, SessionError> {
        match outcome {
            SessionOutcome::Granted(user) => {
                self.login_succeeded(user)?;
                Ok(None)
            }
            SessionOutcome::Denied(reason) => Ok(Some(Notification::for_denial(&reason))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{DenialReason, RoleMismatch};
    use crate::directory::Role;
    use crate::session::Severity;

    fn alice() -> UserRecord {
        UserRecord::new("alice", "secret1", Role::User)
    }

    #[test]
    fn test_starts_on_login_view() {
        let navigator = Navigator::new();
        assert_eq!(navigator.view(), &View::Login);
        assert!(navigator.current_user().is_none());
    }

    #[test]
    fn test_login_then_logout() {
        let mut navigator = Navigator::new();

        navigator.login_succeeded(alice()).unwrap();
        assert_eq!(navigator.view(), &View::Profile(alice()));

        navigator.logout().unwrap();
        assert!(navigator.is_login_view());
    }

    #[test]
    fn test_logout_from_login_view_rejected() {
        let mut navigator = Navigator::new();
        assert!(matches!(
            navigator.logout(),
            Err(SessionError::InvalidTransition(_))
        ));
        assert!(navigator.is_login_view());
    }

    #[test]
    fn test_second_login_rejected() {
        let mut navigator = Navigator::new();
        navigator.login_succeeded(alice()).unwrap();

        let boss = UserRecord::new("boss", "rootroot", Role::Admin);
        assert!(navigator.login_succeeded(boss).is_err());
        assert_eq!(navigator.current_user(), Some(&alice()));
    }

    #[test]
    fn test_denied_outcome_keeps_view() {
        let mut navigator = Navigator::new();
        let notification = navigator
            .apply(SessionOutcome::Denied(DenialReason::RoleMismatch(
                RoleMismatch::MustToggleAdmin,
            )))
            .unwrap()
            .unwrap();

        assert!(navigator.is_login_view());
        assert_eq!(notification.severity, Severity::Warning);
        assert_eq!(notification.title, "Login Failed");
    }

    #[test]
    fn test_granted_outcome_switches_view() {
        let mut navigator = Navigator::new();
        let notification = navigator.apply(SessionOutcome::Granted(alice())).unwrap();

        assert!(notification.is_none());
        assert_eq!(navigator.current_user().map(|u| u.role), Some(Role::User));
    }

    #[test]
    fn test_invalid_credentials_are_critical() {
        let notification = Notification::for_denial(&DenialReason::CredentialsInvalid);
        assert_eq!(notification.severity, Severity::Critical);
        assert_eq!(notification.message, "Invalid username or password!");
    }
}
