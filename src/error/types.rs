//! Error types
//!
//! Defines domain-specific error types for each module of the login shell.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// User directory errors
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to read user data from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed user data in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Presentation state machine errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Startup sequence errors. Every variant is fatal.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("No user data found in {}", .0.display())]
    NoUserData(PathBuf),
}

/// Top-level error that ends the process.
///
/// Only startup failures qualify; errors once the shell is running end the
/// session normally.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Startup error: {0}")]
    Startup(#[from] StartupError),
}
