//! Module `commands`
//!
//! Line commands accepted by the shell, and the result types the
//! handlers hand back to the event loop.

/// A user action parsed from one input line.
///
/// Field-setting commands keep their argument verbatim so passwords may
/// contain spaces.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Username(String),
    Password(String),
    /// `None` toggles the checkbox
    Admin(Option<bool>),
    Login,
    Logout,
    Show,
    Help,
    Quit,
    Unknown(String),
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Close,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
        }
    }

    pub fn failure(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Failure(reason.into()),
            message: Some(message.into()),
        }
    }
}

/// Parses a raw input line into a `Command`.
///
/// The verb is case-insensitive. The argument is everything after the first
/// space, with only the line ending stripped.
pub fn parse_command(raw: &str) -> Command {
    let line = raw.trim_end_matches(['\r', '\n']);
    let (verb, arg) = match line.trim_start().split_once(' ') {
        Some((verb, arg)) => (verb, arg),
        None => (line.trim(), ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "user" | "username" => Command::Username(arg.to_string()),
        "pass" | "password" => Command::Password(arg.to_string()),
        "admin" => match arg.trim().to_ascii_lowercase().as_str() {
            "" => Command::Admin(None),
            "on" | "yes" | "true" => Command::Admin(Some(true)),
            "off" | "no" | "false" => Command::Admin(Some(false)),
            _ => Command::Unknown(line.to_string()),
        },
        "login" if arg.trim().is_empty() => Command::Login,
        "logout" if arg.trim().is_empty() => Command::Logout,
        "show" if arg.trim().is_empty() => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(line.trim().to_string()),
    }
}
