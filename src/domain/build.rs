use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identity of the application build a snapshot run was produced from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Build {
    /// When the build was produced, RFC3339 format.
    pub date: String,
    /// Name of the application under test.
    pub application_name: String,
    /// Directories holding the accepted reference images for this build.
    pub reference_image_dirs: Vec<PathBuf>,
}
