//! Path utilities for varo-fixtures directories

use std::path::PathBuf;
use std::sync::OnceLock;

/// Environment variable that relocates the data directory.
pub const DATA_DIR_ENV: &str = "VARO_FIXTURES_HOME";

/// Global storage for custom data directory path
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the data directory with an optional custom path.
/// Must be called early in main() before any other path functions are used.
/// If custom_path is None, uses the default ~/.varo-fixtures location.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_data_dir);
    if DATA_DIR.set(path.clone()).is_err() {
        let existing = DATA_DIR
            .get()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        tracing::debug!(
            path = %path.display(),
            existing = %existing,
            "Data directory already initialized"
        );
    }
}

/// Initialize the data directory from `VARO_FIXTURES_HOME`, if set.
pub fn init_data_dir_from_env() {
    let custom = std::env::var_os(DATA_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    init_data_dir(custom);
}

/// Get the default data directory path (~/.varo-fixtures)
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".varo-fixtures"))
        .unwrap_or_else(|| PathBuf::from(".varo-fixtures"))
}

/// Get the base data directory.
/// Returns the custom path if set via init_data_dir(), otherwise ~/.varo-fixtures
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the logs directory (~/.varo-fixtures/logs)
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Get the log file path for a program (~/.varo-fixtures/logs/<program>.log)
pub fn log_file_path(program: &str) -> PathBuf {
    logs_dir().join(format!("{program}.log"))
}

/// Get the config file path (~/.varo-fixtures/config.toml)
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

/// The user's Documents folder, resolved as `~/Documents`.
///
/// Returns `None` when no home directory can be determined.
pub fn documents_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join("Documents"))
}
