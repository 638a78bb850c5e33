//! Presentation session
//!
//! Tracks which page is shown and what to tell the user after a refused login.

pub mod notification;
pub mod state;

pub use notification::{LOGIN_FAILED_TITLE, Notification, Severity};
pub use state::{Navigator, View};
