//! Error handling
//!
//! Defines error types and exit-code handling for the login shell.

pub mod handlers;
pub mod types;

pub use types::*;
