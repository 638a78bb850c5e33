//! Startup sequence
//!
//! Loads the user directory and decides whether the process may go on to
//! open the shell.

use log::info;

use crate::config::AppConfig;
use crate::directory::{self, UserDirectory};
use crate::error::StartupError;

/// Loads the directory named by `config`.
///
/// An empty result, whether from a failed load or an empty file, is fatal.
pub fn prepare(config: &AppConfig) -> Result<UserDirectory, StartupError> {
    let path = config.data_file_path();
    let directory = UserDirectory::new(directory::load(&path));

    if directory.is_empty() {
        return Err(StartupError::NoUserData(path));
    }

    info!("Loaded {} users from {}", directory.len(), path.display());
    Ok(directory)
}
