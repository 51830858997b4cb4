//! Shell-out to an external terminal image renderer.

use std::fmt;
use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::error::ImageError;

/// Result of running the renderer command.
#[derive(Debug)]
pub struct DisplayOutcome {
    /// The full command string handed to the shell.
    pub command: String,
    /// Exit status of the shell.
    pub status: ExitStatus,
}

impl fmt::Display for DisplayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.command, self.status)
    }
}

/// Build the shell command string that renders `image` with `program`.
#[must_use]
pub fn build_command(program: &str, image: &Path) -> String {
    format!("{program} {}", shell_quote(&image.to_string_lossy()))
}

/// Quote `arg` for `sh` unless it only contains characters the shell leaves alone.
fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg.chars().all(|c| c.is_ascii_alphanumeric() || "/._-+,:=@%~".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Run `command` through `sh -c`, inheriting stdio.
///
/// A non-zero exit from the renderer is reported in the outcome, not as an error.
///
/// # Errors
///
/// Returns an error only if the shell itself cannot be spawned.
pub fn run_command(command: &str) -> Result<DisplayOutcome, ImageError> {
    tracing::debug!(%command, "spawning renderer");
    let status = Command::new("sh").arg("-c").arg(command).status()?;
    if !status.success() {
        tracing::debug!(%status, "renderer exited unsuccessfully");
    }
    Ok(DisplayOutcome { command: command.to_string(), status })
}
