//! Command handlers module for the login shell.
//!
//! Each handler stands in for one widget callback of the login or profile
//! page. Handlers only touch the form and the navigator; the decision itself
//! comes from `auth::validate`.

use log::{debug, info};

use super::LoginApp;
use super::commands::{Command, CommandResult, CommandStatus};
use super::render::{HELP_TEXT, render_login_page, render_profile_page};
use crate::auth::{self, MIN_CREDENTIAL_LENGTH};
use crate::session::View;

/// Dispatches a parsed command to its handler.
pub fn handle_command(app: &mut LoginApp, command: &Command) -> CommandResult {
    match command {
        Command::Username(text) => on_username_changed(app, text),
        Command::Password(text) => on_password_changed(app, text),
        Command::Admin(state) => {
            let checked = state.unwrap_or(!app.form.login_as_admin());
            on_admin_toggled(app, checked)
        }
        Command::Login => on_login_clicked(app),
        Command::Logout => on_logout_clicked(app),
        Command::Show => CommandResult::success(render_current(app)),
        Command::Help => CommandResult::success(HELP_TEXT),
        Command::Quit => CommandResult {
            status: CommandStatus::Close,
            message: Some("Goodbye\n".into()),
        },
        Command::Unknown(raw) => CommandResult::failure(
            format!("Unknown command: {}", raw),
            "Unknown command. Type 'help' for a list of commands.\n",
        ),
    }
}

/// Renders whichever page is currently active.
pub fn render_current(app: &LoginApp) -> String {
    match app.navigator.view() {
        View::Login => render_login_page(&app.form),
        View::Profile(user) => render_profile_page(user),
    }
}

fn not_on_login_page() -> CommandResult {
    CommandResult::failure(
        "Not on login page",
        "The login form is not shown. Use 'logout' first.\n",
    )
}

/// Username field edited.
pub fn on_username_changed(app: &mut LoginApp, text: &str) -> CommandResult {
    if !app.navigator.is_login_view() {
        return not_on_login_page();
    }

    app.form.set_username(text.to_string());
    CommandResult::success(render_login_page(&app.form))
}

/// Password field edited.
pub fn on_password_changed(app: &mut LoginApp, text: &str) -> CommandResult {
    if !app.navigator.is_login_view() {
        return not_on_login_page();
    }

    app.form.set_password(text.to_string());
    CommandResult::success(render_login_page(&app.form))
}

/// "Login as Admin" checkbox changed.
pub fn on_admin_toggled(app: &mut LoginApp, checked: bool) -> CommandResult {
    if !app.navigator.is_login_view() {
        return not_on_login_page();
    }

    app.form.set_login_as_admin(checked);
    CommandResult::success(render_login_page(&app.form))
}

/// Login button pressed.
///
/// The validator runs only while the button is enabled.
pub fn on_login_clicked(app: &mut LoginApp) -> CommandResult {
    if !app.navigator.is_login_view() {
        return not_on_login_page();
    }

    let Some(attempt) = app.form.to_attempt() else {
        debug!("Login pressed while disabled");
        return CommandResult::failure(
            "Login disabled",
            format!(
                "Login is disabled until username and password each have at least {} characters.\n",
                MIN_CREDENTIAL_LENGTH
            ),
        );
    };

    let outcome = auth::validate(&attempt, &app.directory);
    match app.navigator.apply(outcome) {
        Ok(None) => CommandResult::success(render_current(app)),
        Ok(Some(notification)) => CommandResult::failure(
            notification.message.clone(),
            format!("{}\n", notification),
        ),
        Err(e) => CommandResult::failure(e.to_string(), format!("{}\n", e)),
    }
}

/// Logout button pressed.
pub fn on_logout_clicked(app: &mut LoginApp) -> CommandResult {
    let username = app.navigator.current_user().map(|u| u.username.clone());

    match app.navigator.logout() {
        Ok(()) => {
            if let Some(username) = username {
                info!("User '{}' logged out", username);
            }
            CommandResult::success(render_login_page(&app.form))
        }
        Err(e) => CommandResult::failure(e.to_string(), "Nobody is logged in.\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{Role, UserDirectory, UserRecord};

    fn app() -> LoginApp {
        LoginApp::new(UserDirectory::new(vec![
            UserRecord::new("alice", "secret1", Role::User),
            UserRecord::new("boss1", "rootroot", Role::Admin),
        ]))
    }

    fn fill(app: &mut LoginApp, user: &str, pass: &str, admin: bool) {
        on_username_changed(app, user);
        on_password_changed(app, pass);
        on_admin_toggled(app, admin);
    }

    #[test]
    fn test_login_and_logout() {
        let mut app = app();
        fill(&mut app, "alice", "secret1", false);

        let result = on_login_clicked(&mut app);
        assert_eq!(result.status, CommandStatus::Success);
        assert!(result.message.unwrap().contains("Welcome to your profile"));
        assert_eq!(app.navigator.current_user().unwrap().username, "alice");

        let result = on_logout_clicked(&mut app);
        assert_eq!(result.status, CommandStatus::Success);
        assert!(app.navigator.is_login_view());
        // Form keeps its contents after logout
        assert_eq!(app.form.username(), "alice");
    }

    #[test]
    fn test_disabled_login_does_not_validate() {
        let mut app = app();
        fill(&mut app, "alice", "1234", false);

        let result = on_login_clicked(&mut app);
        assert_eq!(
            result.status,
            CommandStatus::Failure("Login disabled".into())
        );
        assert!(app.navigator.is_login_view());
    }

    #[test]
    fn test_role_mismatch_notifies() {
        let mut app = app();
        fill(&mut app, "boss1", "rootroot", false);

        let result = on_login_clicked(&mut app);
        let message = result.message.unwrap();
        assert!(message.starts_with("[Login Failed] (warning)"));
        assert!(app.navigator.is_login_view());
    }

    #[test]
    fn test_bad_credentials_notify_critical() {
        let mut app = app();
        fill(&mut app, "bobby", "wrongpass", false);

        let message = on_login_clicked(&mut app).message.unwrap();
        assert_eq!(message, "[Login Failed] (critical) Invalid username or password!\n");
    }

    #[test]
    fn test_form_locked_on_profile_page() {
        let mut app = app();
        fill(&mut app, "boss1", "rootroot", true);
        on_login_clicked(&mut app);

        let result = on_username_changed(&mut app, "mallory");
        assert!(matches!(result.status, CommandStatus::Failure(_)));
        assert_eq!(app.form.username(), "boss1");

        let result = handle_command(&mut app, &Command::Login);
        assert!(matches!(result.status, CommandStatus::Failure(_)));
    }

    #[test]
    fn test_bare_admin_toggles() {
        let mut app = app();
        handle_command(&mut app, &Command::Admin(None));
        assert!(app.form.login_as_admin());
        handle_command(&mut app, &Command::Admin(None));
        assert!(!app.form.login_as_admin());
    }

    #[test]
    fn test_logout_without_login() {
        let mut app = app();
        let result = on_logout_clicked(&mut app);
        assert!(matches!(result.status, CommandStatus::Failure(_)));
    }
}
