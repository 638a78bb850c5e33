//! Text rendering of the login and profile pages

use super::form::LoginForm;
use crate::directory::UserRecord;

pub const HELP_TEXT: &str = "\
Commands:
  user <name>       set the username field
  pass <password>   set the password field
  admin [on|off]    set or toggle 'Login as Admin'
  login             submit the form (needs 5+ characters in both fields)
  logout            leave the profile page
  show              redraw the current page
  quit              close the shell
";

/// Title banner printed once when the shell opens
pub fn render_banner(title: &str) -> String {
    let rule = "=".repeat(title.chars().count());
    format!("{}\n{}\n{}\n", rule, title, rule)
}

pub fn render_login_page(form: &LoginForm) -> String {
    let username = if form.username().is_empty() {
        "<Enter your username>".to_string()
    } else {
        form.username().to_string()
    };
    let password = if form.password().is_empty() {
        "<Enter your password>".to_string()
    } else {
        "*".repeat(form.password().chars().count())
    };
    let checkbox = if form.login_as_admin() { "[x]" } else { "[ ]" };
    let button = if form.submit_enabled() {
        "[ Login ]"
    } else {
        "[ Login ] (disabled)"
    };

    format!(
        "Username: {}\nPassword: {}\n{} Login as Admin\n{}\n",
        username, password, checkbox, button
    )
}

pub fn render_profile_page(user: &UserRecord) -> String {
    format!(
        "Welcome to your profile\nUsername: {}\nRole: {}\n[ Logout ]\n",
        user.username, user.role
    )
}
