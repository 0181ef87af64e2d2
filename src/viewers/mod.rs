//! Viewer capability layer.
//!
//! Each external diff tool is a `SnapshotViewer` implementation, selected
//! polymorphically through the `ViewerRegistry`.

pub mod beyond_compare;
pub mod kaleidoscope;
pub mod registry;
pub mod traits;
