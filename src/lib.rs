//! Viewer subsystem of the Snapreview snapshot-test review companion.
//!
//! Decides whether a snapshot-test result can be visualized by a third-party
//! image-diff application, checks that the application is installed, and
//! launches it with the right image arguments.

pub mod domain;
pub mod infra;
pub mod viewers;
