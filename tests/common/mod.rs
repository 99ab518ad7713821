//! Shared test utilities
//!
//! - TUI terminal testing helpers
//! - Temporary home directories for the CLI binaries

pub mod home;
