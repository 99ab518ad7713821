use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::util::paths::config_path;

/// Marker token written as the first line of the sample file
pub const DEFAULT_MARKER: &str = "python";
/// File name of the sample file inside the output directory
pub const DEFAULT_FILE_NAME: &str = "python_sample.txt";
/// Argument substituted when the writer is invoked without any
pub const DEFAULT_ARG: &str = "Manual test";
/// Static label shown above the environment listing
pub const DEFAULT_LABEL: &str = "Environment Variables";

/// Environment variable overriding `[writer] output_dir`
pub const OUTPUT_DIR_ENV: &str = "VARO_FIXTURES_OUTPUT_DIR";
/// Environment variable that turns off opening the written file
pub const NO_OPEN_ENV: &str = "VARO_FIXTURES_NO_OPEN";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub viewer: ViewerConfig,
    pub writer: WriterConfig,
}

/// Settings for the environment viewer window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Label rendered above the text area
    pub label: String,
    /// Preferred window width in cells
    pub width: u16,
    /// Preferred window height in cells
    pub height: u16,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            width: 600,
            height: 600,
        }
    }
}

/// Settings for the sample file writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// First line of the output document
    pub marker: String,
    /// Output file name
    pub file_name: String,
    /// Output directory (None = ~/Documents)
    pub output_dir: Option<PathBuf>,
    /// Open the file with the default application after writing
    pub open_after_write: bool,
    /// Placeholder used when no arguments are supplied
    pub default_arg: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            output_dir: None,
            open_after_write: true,
            default_arg: DEFAULT_ARG.to_string(),
        }
    }
}

impl WriterConfig {
    /// Apply `VARO_FIXTURES_OUTPUT_DIR` and `VARO_FIXTURES_NO_OPEN` on top of
    /// the file settings. The writer's command line carries only document
    /// lines, so these are its only per-run switches.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<OsString>,
    {
        if let Some(dir) = lookup(OUTPUT_DIR_ENV).filter(|v| !v.is_empty()) {
            self.output_dir = Some(PathBuf::from(dir));
        }
        if let Some(flag) = lookup(NO_OPEN_ENV) {
            let flag = flag.to_string_lossy().trim().to_ascii_lowercase();
            if !matches!(flag.as_str(), "" | "0" | "false" | "no") {
                self.open_after_write = false;
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    viewer: Option<TomlViewerConfig>,
    writer: Option<TomlWriterConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlViewerConfig {
    label: Option<String>,
    width: Option<u16>,
    height: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlWriterConfig {
    marker: Option<String>,
    file_name: Option<String>,
    output_dir: Option<PathBuf>,
    open_after_write: Option<bool>,
    default_arg: Option<String>,
}

impl Config {
    /// Load configuration from the default config file, falling back to
    /// defaults when it is missing or invalid.
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring invalid config, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML, merging it over the defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Config::default();

        if let Some(viewer) = toml_config.viewer {
            if let Some(label) = viewer.label {
                config.viewer.label = label;
            }
            if let Some(width) = viewer.width {
                config.viewer.width = width.max(1);
            }
            if let Some(height) = viewer.height {
                config.viewer.height = height.max(1);
            }
        }

        if let Some(writer) = toml_config.writer {
            if let Some(marker) = writer.marker {
                config.writer.marker = marker;
            }
            if let Some(file_name) = writer.file_name {
                config.writer.file_name = file_name;
            }
            if writer.output_dir.is_some() {
                config.writer.output_dir = writer.output_dir;
            }
            if let Some(open) = writer.open_after_write {
                config.writer.open_after_write = open;
            }
            if let Some(default_arg) = writer.default_arg {
                config.writer.default_arg = default_arg;
            }
        }

        Ok(config)
    }
}
