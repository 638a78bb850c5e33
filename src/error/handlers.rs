//! Error handlers
//!
//! Logs fatal errors and decides the process exit code.

use log::error;

use crate::error::types::AppError;

/// Exit code for normal termination, including closing the shell.
pub const EXIT_OK: u8 = 0;

/// Exit code when the process cannot start.
pub const EXIT_STARTUP_FAILURE: u8 = 1;

/// Handle a fatal application error
pub fn handle_error(err: &AppError) {
    error!("{}", err);
}

/// Convert error to process exit code
pub fn exit_code(err: &AppError) -> u8 {
    match err {
        AppError::Startup(_) => EXIT_STARTUP_FAILURE,
    }
}
