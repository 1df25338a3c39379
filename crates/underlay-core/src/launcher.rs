//! Detached command launching.
//!
//! Menu commands run through a shell in a new session with all standard
//! streams closed, so a launched application outlives the surface process
//! and is not signaled when it terminates.

use crate::{Error, Result};
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Launches shell command lines as detached background processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandLauncher;

impl CommandLauncher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Fire-and-forget launch. A spawn failure is logged and never
    /// propagates; a bad menu command degrades to a no-op plus a
    /// diagnostic.
    pub fn launch(&self, command_line: &str) {
        debug!("Launching command: {command_line}");
        if let Err(e) = spawn_detached(command_line) {
            warn!("Error executing command '{command_line}': {e}");
        }
    }
}

/// Spawn `command_line` through `sh -c` in a new session with stdin, stdout
/// and stderr redirected to null. The child handle is dropped immediately;
/// ownership of the process transfers to the OS.
///
/// # Errors
///
/// Returns [`Error::Spawn`] when the shell itself cannot be spawned. A
/// command line that fails inside the shell is not observable here.
pub fn spawn_detached(command_line: &str) -> Result<()> {
    let mut command = Command::new("sh");
    command
        .arg("-c")
        .arg(command_line)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    // New session so the child is not signaled when this process exits
    unsafe {
        command.pre_exec(|| {
            if libc::setsid() == -1 {
                return Err(std::io::Error::last_os_error());
            }
            Ok(())
        });
    }

    command
        .spawn()
        .map(drop)
        .map_err(|e| Error::Spawn(format!("{command_line}: {e}")))
}
