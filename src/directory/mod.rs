//! User directory
//!
//! Read-only collection of user records, loaded once at startup.

pub mod loader;
pub mod record;

pub use loader::{load, read_records};
pub use record::{Role, UserRecord};

/// Ordered, immutable sequence of user records.
///
/// Usernames are not required to be unique; lookups return the first match
/// in file order.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    records: Vec<UserRecord>,
}

impl UserDirectory {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self { records }
    }

    /// Returns the first record whose username and password both match.
    pub fn find_by_credentials(&self, username: &str, password: &str) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.matches(username, password))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
