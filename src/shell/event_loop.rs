//! Shell event loop
//!
//! Reads one command per line and writes the handler's response back.
//! Runs on the caller's task; there is no background work. Input bytes that
//! are not valid UTF-8 are replaced, never fatal.

use log::{debug, error, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::LoginApp;
use super::commands::{CommandStatus, parse_command};
use super::handlers::{handle_command, render_current};
use super::render::render_banner;

const MAX_LINE_LENGTH: usize = 512;
const PROMPT: &str = "> ";

/// Drives `app` until the input ends, fails, or the user quits.
///
/// All three endings count as a normal close. Only write errors are returned.
pub async fn run<R, W>(
    app: &mut LoginApp,
    title: &str,
    mut reader: R,
    writer: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(render_banner(title).as_bytes()).await?;
    writer.write_all(render_current(app).as_bytes()).await?;
    writer.write_all(PROMPT.as_bytes()).await?;
    writer.flush().await?;

    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => {
                info!("Input closed, shutting down");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);

        // Enforce line length limit
        if buf.len() > MAX_LINE_LENGTH {
            warn!("Discarding {} byte input line", buf.len());
            writer.write_all(b"Input too long\n").await?;
            writer.write_all(PROMPT.as_bytes()).await?;
            writer.flush().await?;
            continue;
        }

        let command = parse_command(&line);
        let result = handle_command(app, &command);

        if let Some(msg) = result.message {
            writer.write_all(msg.as_bytes()).await?;
        }

        match result.status {
            CommandStatus::Close => {
                info!("Shell closed by user");
                break;
            }
            CommandStatus::Failure(reason) => debug!("Command failed: {}", reason),
            CommandStatus::Success => {}
        }

        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;
    }

    writer.flush().await
}
