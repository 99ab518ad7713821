//! File-backed tracing setup shared by both programs.

use std::fs::{self, OpenOptions};

use super::paths::{log_file_path, logs_dir};

/// Route `tracing` output to `<data_dir>/logs/<program>.log`.
///
/// Logs never go to the terminal: the viewer owns the screen and the writer's
/// stdout is read by the launcher.
pub fn init_file_logging(program: &str) -> anyhow::Result<()> {
    fs::create_dir_all(logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path(program))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}
