//! RAX Login
//!
//! Loads a read-only user directory, gates and validates login attempts
//! against it, and drives a two-page login/profile shell on the terminal.

pub mod auth;
pub mod config;
pub mod directory;
pub mod error;
pub mod session;
pub mod shell;
pub mod startup;
pub mod utils;

pub use auth::{LoginAttempt, SessionOutcome, validate};
pub use directory::{Role, UserDirectory, UserRecord};
