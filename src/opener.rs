//! Opening files with the platform's default application.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenError {
    #[error("Failed to launch default application for {path}: {source}")]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Capability to hand a file to the OS default handler.
pub trait DocumentOpener {
    fn open(&self, path: &Path) -> Result<(), OpenError>;
}

/// Launches the platform's "open with default application" command.
///
/// The child is spawned and not waited on.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl SystemOpener {
    /// Command that opens `path`, or `None` on platforms without a known handler.
    pub fn command_for(path: &Path) -> Option<Command> {
        match platform_name() {
            "win" => {
                let mut cmd = Command::new("cmd");
                // The empty string is `start`'s window title argument.
                cmd.args(["/C", "start", ""]).arg(path);
                Some(cmd)
            }
            "mac" => {
                let mut cmd = Command::new("open");
                cmd.arg(path);
                Some(cmd)
            }
            "linux" | "bsd" => {
                let mut cmd = Command::new("xdg-open");
                cmd.arg(path);
                Some(cmd)
            }
            _ => None,
        }
    }
}

impl DocumentOpener for SystemOpener {
    fn open(&self, path: &Path) -> Result<(), OpenError> {
        let Some(mut cmd) = Self::command_for(path) else {
            tracing::warn!(
                platform = platform_name(),
                path = %path.display(),
                "No default application handler on this platform"
            );
            return Ok(());
        };

        cmd.spawn().map_err(|source| OpenError::Launch {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Opened with default application");
        Ok(())
    }
}

/// Opener that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOpener;

impl DocumentOpener for NoopOpener {
    fn open(&self, path: &Path) -> Result<(), OpenError> {
        tracing::debug!(path = %path.display(), "Skipping open");
        Ok(())
    }
}

/// Select the opener for this run.
pub fn default_opener(enabled: bool) -> Box<dyn DocumentOpener> {
    if enabled {
        Box::new(SystemOpener)
    } else {
        Box::new(NoopOpener)
    }
}

/// Returns os name (win, mac, linux, bsd, or unknown)
pub fn platform_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "win"
    } else if cfg!(target_os = "macos") {
        "mac"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else if cfg!(any(
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "netbsd",
        target_os = "dragonfly"
    )) {
        "bsd"
    } else {
        "unknown"
    }
}
