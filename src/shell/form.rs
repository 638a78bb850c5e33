//! Login form contents

use crate::auth::{LoginAttempt, is_submittable};

/// Field values of the login page.
///
/// Contents survive a logout, so the page shows what was last typed.
#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    username: String,
    password: String,
    login_as_admin: bool,
}

impl LoginForm {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn login_as_admin(&self) -> bool {
        self.login_as_admin
    }

    pub fn set_username(&mut self, username: String) {
        self.username = username;
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
    }

    pub fn set_login_as_admin(&mut self, login_as_admin: bool) {
        self.login_as_admin = login_as_admin;
    }

    /// Whether the Login action is enabled.
    pub fn submit_enabled(&self) -> bool {
        is_submittable(&self.username, &self.password)
    }

    /// Builds an attempt from the current fields, if the form may be submitted.
    pub fn to_attempt(&self) -> Option<LoginAttempt> {
        self.submit_enabled().then(|| {
            LoginAttempt::new(
                self.username.clone(),
                self.password.clone(),
                self.login_as_admin,
            )
        })
    }
}
