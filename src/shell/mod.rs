//! Terminal presentation shell
//!
//! A thin line-oriented front end over the validator and the view state
//! machine. Holds no domain logic of its own.

pub mod commands;
pub mod event_loop;
pub mod form;
pub mod handlers;
pub mod render;

pub use commands::{Command, CommandResult, CommandStatus, parse_command};
pub use event_loop::run;
pub use form::LoginForm;
pub use handlers::handle_command;

use crate::directory::UserDirectory;
use crate::session::Navigator;

/// Everything the shell needs between two input lines.
#[derive(Debug)]
pub struct LoginApp {
    pub directory: UserDirectory,
    pub form: LoginForm,
    pub navigator: Navigator,
}

impl LoginApp {
    pub fn new(directory: UserDirectory) -> Self {
        Self {
            directory,
            form: LoginForm::default(),
            navigator: Navigator::new(),
        }
    }
}
