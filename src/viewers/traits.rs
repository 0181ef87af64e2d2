use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::domain::{SnapshotTestResult, ViewerError};

/// Looks up installed applications by OS bundle identifier.
pub trait ApplicationFinder {
    /// Returns the install location of the application registered under
    /// `bundle_identifier`, or `None` when it is not installed.
    fn find_application(&self, bundle_identifier: &str) -> Option<PathBuf>;
}

/// Starts external processes on behalf of viewers.
///
/// Fire-and-forget: implementations spawn and detach. No output is captured
/// and no exit status is awaited.
pub trait ProcessLauncher {
    fn launch_process(&self, path: &Path, arguments: &[String]) -> Result<()>;
}

/// A third-party tool that can visualize failed snapshot comparisons.
pub trait SnapshotViewer: Send + Sync {
    /// Stable registry key, e.g. `"kaleidoscope"`.
    fn id(&self) -> &str;

    /// Human-readable name, e.g. `"Kaleidoscope"`.
    fn name(&self) -> &str;

    /// OS application bundle identifier used for the install lookup.
    fn bundle_id(&self) -> &str;

    /// Fixed path of the command-line helper the tool ships.
    fn tool_path(&self) -> &Path;

    /// Whether this viewer can display `result`. Only failed comparisons
    /// carry the images a diff tool needs.
    fn can_view(&self, result: &SnapshotTestResult) -> bool {
        result.failure_images().is_some()
    }

    /// Whether the tool is installed, per the finder's bundle lookup.
    fn is_available(&self, finder: &dyn ApplicationFinder) -> bool {
        finder.find_application(self.bundle_id()).is_some()
    }

    /// Opens `result` in the tool: reference image on the left, failed
    /// image on the right.
    ///
    /// Returns `ViewerError::NotViewable` when `result` carries no failure
    /// images; callers are expected to gate with `can_view` first.
    fn view(
        &self,
        result: &SnapshotTestResult,
        launcher: &dyn ProcessLauncher,
    ) -> Result<(), ViewerError> {
        let Some(images) = result.failure_images() else {
            return Err(ViewerError::NotViewable {
                viewer: self.name().to_string(),
                test_name: result.test_information().test_name.clone(),
            });
        };

        let arguments = vec![
            images.reference_image_path.to_string_lossy().into_owned(),
            images.failed_image_path.to_string_lossy().into_owned(),
        ];
        log::info!(
            "Opening {} in {}",
            result.test_information().test_name,
            self.name()
        );
        log::debug!("{} {}", self.tool_path().display(), arguments.join(" "));

        launcher
            .launch_process(self.tool_path(), &arguments)
            .map_err(ViewerError::LaunchFailed)
    }
}
