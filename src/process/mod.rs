//! Detached process spawning for opening links and running row commands.
//!
//! Spawned processes get their own session via `setsid()`, so they keep
//! running after the settings window closes.

use crate::error::ProcessError;
use std::ffi::OsStr;
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

/// Builder for creating detached processes.
///
/// # Example
/// ```ignore
/// use zsettings::process::DetachedProcess;
///
/// DetachedProcess::new("xdg-open")
///     .arg("https://example.com")
///     .spawn()?;
/// ```
pub struct DetachedProcess {
    command: Command,
    shell_command: Option<String>,
}

impl DetachedProcess {
    /// Create a new detached process builder for the given program.
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            command: Command::new(program),
            shell_command: None,
        }
    }

    /// Create a detached process that runs `sh -c "command"`.
    pub fn shell<S: Into<String>>(command: S) -> Self {
        Self {
            command: Command::new("sh"),
            shell_command: Some(command.into()),
        }
    }

    /// Add an argument to the process.
    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        self.command.arg(arg);
        self
    }

    /// Set an environment variable for the process.
    pub fn env<K: AsRef<OsStr>, V: AsRef<OsStr>>(mut self, key: K, value: V) -> Self {
        self.command.env(key, value);
        self
    }

    /// Spawn the process with stdio redirected to null in a new session.
    pub fn spawn(mut self) -> Result<(), ProcessError> {
        if let Some(cmd) = &self.shell_command {
            self.command.args(["-c", cmd]);
        }

        self.command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // SAFETY: setsid() is async-signal-safe and only detaches the child
        // from the parent's process group.
        unsafe {
            self.command.pre_exec(|| {
                libc::setsid();
                Ok(())
            });
        }

        self.command.spawn().map_err(ProcessError::SpawnFailed)?;

        Ok(())
    }
}

/// Open a URL using the system default handler (`xdg-open`).
pub fn open_url(url: &str) -> Result<(), ProcessError> {
    if url.trim().is_empty() {
        return Err(ProcessError::EmptyCommand);
    }
    tracing::debug!(url, "Opening URL");
    DetachedProcess::new("xdg-open").arg(url).spawn()
}

/// Environment variable carrying the id of the row that ran a command.
pub const ROW_ENV: &str = "ZSETTINGS_ROW";

/// Execute a row's shell command in a detached process.
///
/// The command sees the row id in [`ROW_ENV`], so one script can serve
/// several rows.
pub fn run_shell_command(command: &str, row_id: &str) -> Result<(), ProcessError> {
    if command.trim().is_empty() {
        return Err(ProcessError::EmptyCommand);
    }
    tracing::debug!(command, row_id, "Running shell command");
    DetachedProcess::shell(command).env(ROW_ENV, row_id).spawn()
}
