//! Kaleidoscope, the reference image-diff tool on macOS.
//!
//! Kaleidoscope ships a command-line helper, `ksdiff`, installed at a fixed
//! location; the viewer hands it the reference and failed images.

use std::path::Path;

use crate::viewers::traits::SnapshotViewer;

const KSDIFF_PATH: &str = "/usr/local/bin/ksdiff";

/// Opens failed snapshots in Kaleidoscope via its `ksdiff` helper.
#[derive(Debug, Clone, Copy, Default)]
pub struct KaleidoscopeViewer;

impl SnapshotViewer for KaleidoscopeViewer {
    fn id(&self) -> &str {
        "kaleidoscope"
    }

    fn name(&self) -> &str {
        "Kaleidoscope"
    }

    fn bundle_id(&self) -> &str {
        "com.blackpixel.kaleidoscope"
    }

    fn tool_path(&self) -> &Path {
        Path::new(KSDIFF_PATH)
    }
}
