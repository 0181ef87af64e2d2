//! Beyond Compare viewer.
//!
//! Beyond Compare's optional command-line tools install `bcompare` at a
//! fixed location; it takes the two files to compare as positional
//! arguments, same shape as `ksdiff`.

use std::path::Path;

use crate::viewers::traits::SnapshotViewer;

const BCOMPARE_PATH: &str = "/usr/local/bin/bcompare";

/// Opens failed snapshots in Beyond Compare via its `bcompare` helper.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeyondCompareViewer;

impl SnapshotViewer for BeyondCompareViewer {
    fn id(&self) -> &str {
        "beyond-compare"
    }

    fn name(&self) -> &str {
        "Beyond Compare"
    }

    fn bundle_id(&self) -> &str {
        "com.ScooterSoftware.BeyondCompare"
    }

    fn tool_path(&self) -> &Path {
        Path::new(BCOMPARE_PATH)
    }
}
