//! Domain error types for the viewer subsystem.
//!
//! Absence of a viewer application is not an error; callers probe it with
//! `is_available` and get a boolean. Errors cover caller misuse and launch
//! failures.

use thiserror::Error;

/// Errors surfaced by viewer operations.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// `view` was asked to show a result the viewer cannot display.
    /// Callers are expected to gate with `can_view` first.
    #[error("{viewer} cannot view snapshot result of test {test_name}")]
    NotViewable { viewer: String, test_name: String },

    #[error("{viewer} is not installed")]
    NotInstalled { viewer: String },

    #[error("failed to launch viewer process: {0}")]
    LaunchFailed(#[from] anyhow::Error),
}
