//! The sample file writer.
//!
//! Writes a marker line, the invoking program's name and the received
//! arguments to `~/Documents/python_sample.txt`, then opens the result.

use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::WriterConfig;
use crate::opener::{DocumentOpener, OpenError};
use crate::util::paths::documents_dir;

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Could not determine the home directory")]
    NoHomeDir,
    #[error("Output directory does not exist: {0}")]
    MissingDirectory(PathBuf),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Open(#[from] OpenError),
}

/// Lines of the file produced by one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    lines: Vec<String>,
}

impl OutputDocument {
    pub fn new(
        marker: impl Into<String>,
        program_name: impl Into<String>,
        args: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut lines = vec![marker.into(), program_name.into()];
        lines.extend(args);
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Every line followed by `\n`. Content is written verbatim.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Replace an empty argument list with the single placeholder.
pub fn with_default_args(args: Vec<String>, placeholder: &str) -> Vec<String> {
    if args.is_empty() {
        vec![placeholder.to_string()]
    } else {
        args
    }
}

/// Command-line arguments as document lines, taken literally.
///
/// Nothing is interpreted as an option; invalid Unicode becomes U+FFFD.
pub fn lossy_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

/// Base file name of the invoking program, e.g. `varo-sample-file` for
/// `/usr/local/bin/varo-sample-file`.
pub fn program_base_name(argv0: Option<&OsStr>) -> String {
    argv0
        .and_then(|a| Path::new(a).file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

pub struct SampleFileWriter {
    config: WriterConfig,
    opener: Box<dyn DocumentOpener>,
}

impl SampleFileWriter {
    pub fn new(config: WriterConfig, opener: Box<dyn DocumentOpener>) -> Self {
        Self { config, opener }
    }

    /// Directory the file is written into: the configured override, or
    /// `~/Documents`.
    pub fn output_dir(&self) -> Result<PathBuf, WriterError> {
        match &self.config.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => documents_dir().ok_or(WriterError::NoHomeDir),
        }
    }

    pub fn target_path(&self) -> Result<PathBuf, WriterError> {
        Ok(self.output_dir()?.join(&self.config.file_name))
    }

    /// Compose the document for this invocation.
    pub fn compose(&self, program_name: &str, args: Vec<String>) -> OutputDocument {
        OutputDocument::new(
            self.config.marker.clone(),
            program_name,
            with_default_args(args, &self.config.default_arg),
        )
    }

    /// Write `document` to the target path, truncating any existing file.
    pub fn write(&self, document: &OutputDocument) -> Result<PathBuf, WriterError> {
        let dir = self.output_dir()?;
        if !dir.is_dir() {
            return Err(WriterError::MissingDirectory(dir));
        }
        let path = dir.join(&self.config.file_name);

        let write_err = |source| WriterError::Write {
            path: path.clone(),
            source,
        };
        let file = File::create(&path).map_err(write_err)?;
        let mut out = BufWriter::new(file);
        for line in document.lines() {
            writeln!(out, "{line}").map_err(write_err)?;
        }
        out.flush().map_err(write_err)?;

        tracing::info!(
            path = %path.display(),
            lines = document.lines().len(),
            "Wrote sample file"
        );
        Ok(path)
    }

    /// Compose, write, then open the file if it exists.
    pub fn run(&self, program_name: &str, args: Vec<String>) -> Result<PathBuf, WriterError> {
        let document = self.compose(program_name, args);
        let path = self.write(&document)?;

        if path.is_file() {
            self.opener.open(&path)?;
        } else {
            tracing::warn!(path = %path.display(), "Written file not found, not opening");
        }
        Ok(path)
    }
}
