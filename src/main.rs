//! RAX Login - Entry Point
//!
//! Loads the user directory, then runs the login/profile shell on the terminal.

use log::{error, info};
use std::process::ExitCode;
use tokio::io::BufReader;

use rax_login::config::AppConfig;
use rax_login::error::AppError;
use rax_login::error::handlers::{EXIT_OK, exit_code, handle_error};
use rax_login::shell::{self, LoginApp};
use rax_login::startup;
use rax_login::utils::logging::setup_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    setup_logging();

    match run().await {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(e) => {
            handle_error(&e);
            ExitCode::from(exit_code(&e))
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load();

    // Nothing is shown unless the directory loaded
    let directory = startup::prepare(&config)?;

    info!("Launching login shell...");
    let mut app = LoginApp::new(directory);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    // Once the shell is up, any ending is a normal close
    if let Err(e) = shell::run(&mut app, &config.window_title, stdin, &mut stdout).await {
        error!("Shell output failed: {}", e);
    }
    Ok(())
}
