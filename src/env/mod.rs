//! Environment capture for the viewer.
//!
//! The viewer never reads `std::env` directly; it asks an
//! [`EnvironmentProvider`] so tests can inject a fixed mapping.

use std::collections::BTreeMap;
use std::ffi::OsStr;

/// Source of environment variables.
pub trait EnvironmentProvider {
    /// All name/value pairs, in no particular order.
    fn vars(&self) -> Vec<(String, String)>;
}

/// Reads the environment of the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl EnvironmentProvider for ProcessEnvironment {
    fn vars(&self) -> Vec<(String, String)> {
        // vars_os: std::env::vars panics on non-Unicode entries
        std::env::vars_os().map(|(k, v)| lossy_pair(&k, &v)).collect()
    }
}

/// Convert an OS name/value pair, replacing invalid Unicode with U+FFFD.
pub fn lossy_pair(name: &OsStr, value: &OsStr) -> (String, String) {
    (
        name.to_string_lossy().into_owned(),
        value.to_string_lossy().into_owned(),
    )
}

/// Fixed in-memory environment.
#[derive(Debug, Default, Clone)]
pub struct StaticEnvironment {
    vars: Vec<(String, String)>,
}

impl StaticEnvironment {
    pub fn new<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl EnvironmentProvider for StaticEnvironment {
    fn vars(&self) -> Vec<(String, String)> {
        self.vars.clone()
    }
}

/// Name-sorted, immutable copy of an environment taken at startup.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    entries: Vec<(String, String)>,
}

impl EnvironmentSnapshot {
    /// Capture the provider's variables, sorted by name ascending.
    ///
    /// Names are unique; if the provider repeats a name the last value wins.
    pub fn capture(provider: &dyn EnvironmentProvider) -> Self {
        let entries: BTreeMap<String, String> = provider.vars().into_iter().collect();
        let snapshot = Self {
            entries: entries.into_iter().collect(),
        };
        tracing::debug!(count = snapshot.len(), "Captured environment snapshot");
        snapshot
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Look up a variable by exact name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .binary_search_by(|(k, _)| k.as_str().cmp(name))
            .ok()
            .map(|i| self.entries[i].1.as_str())
    }

    /// The rendered text split into display lines, without terminators.
    ///
    /// A value containing `\n` spans several lines.
    pub fn lines(&self) -> Vec<String> {
        self.render()
            .split_terminator('\n')
            .map(str::to_string)
            .collect()
    }

    /// Concatenation of `name=value\n` for every entry.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (k, v) in self.iter() {
            out.push_str(k);
            out.push('=');
            out.push_str(v);
            out.push('\n');
        }
        out
    }
}
