//! User directory loader
//!
//! Reads the startup data file. The file must hold a JSON array of
//! `{"username", "password", "role"}` objects.

use log::{debug, error};
use std::fs;
use std::path::Path;

use super::record::UserRecord;
use crate::error::DirectoryError;

/// Reads and parses the data file, reporting what went wrong.
pub fn read_records(path: &Path) -> Result<Vec<UserRecord>, DirectoryError> {
    let contents = fs::read_to_string(path).map_err(|source| DirectoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| DirectoryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads user records, falling back to an empty list on any failure.
///
/// The failure is logged here and never reaches the caller; an empty result is
/// the only signal.
pub fn load(path: &Path) -> Vec<UserRecord> {
    match read_records(path) {
        Ok(records) => {
            debug!("Loaded {} user records from {}", records.len(), path.display());
            records
        }
        Err(e) => {
            error!("Error loading user data: {}", e);
            Vec::new()
        }
    }
}
