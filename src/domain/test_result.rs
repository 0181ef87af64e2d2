use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::Build;

/// Identity of the test that produced a snapshot result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotTestInformation {
    /// Test class the snapshot assertion lives in.
    pub test_class_name: String,
    /// Test method name.
    pub test_name: String,
    /// Source file the assertion was made from.
    pub test_file_path: PathBuf,
    /// Source line of the assertion.
    pub test_line_number: u32,
}

/// Outcome of a single snapshot comparison.
///
/// Only `Failed` carries the diff and failed image paths; `Recorded` never
/// does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SnapshotTestResult {
    /// A new reference image was recorded; there is nothing to diff.
    Recorded {
        test_information: SnapshotTestInformation,
        reference_image_path: PathBuf,
        build: Build,
    },
    /// The rendered output differed from the accepted reference.
    Failed {
        test_information: SnapshotTestInformation,
        reference_image_path: PathBuf,
        diff_image_path: PathBuf,
        failed_image_path: PathBuf,
        build: Build,
    },
}

/// Image paths of a failed comparison.
///
/// Holding one is proof that the originating result was the `Failed`
/// variant, so viewers never have to re-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureImages<'a> {
    pub reference_image_path: &'a Path,
    pub diff_image_path: &'a Path,
    pub failed_image_path: &'a Path,
}

impl SnapshotTestResult {
    pub fn test_information(&self) -> &SnapshotTestInformation {
        match self {
            Self::Recorded {
                test_information, ..
            }
            | Self::Failed {
                test_information, ..
            } => test_information,
        }
    }

    pub fn build(&self) -> &Build {
        match self {
            Self::Recorded { build, .. } | Self::Failed { build, .. } => build,
        }
    }

    pub fn reference_image_path(&self) -> &Path {
        match self {
            Self::Recorded {
                reference_image_path,
                ..
            }
            | Self::Failed {
                reference_image_path,
                ..
            } => reference_image_path,
        }
    }

    /// Image paths to diff, present only for failed comparisons.
    pub fn failure_images(&self) -> Option<FailureImages<'_>> {
        match self {
            Self::Failed {
                reference_image_path,
                diff_image_path,
                failed_image_path,
                ..
            } => Some(FailureImages {
                reference_image_path,
                diff_image_path,
                failed_image_path,
            }),
            Self::Recorded { .. } => None,
        }
    }

    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Recorded { .. } => "recorded",
            Self::Failed { .. } => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build() -> Build {
        Build {
            date: "2017-05-06T00:00:00+00:00".to_string(),
            application_name: "MyApp".to_string(),
            reference_image_dirs: vec![PathBuf::from("foo/bar")],
        }
    }

    fn test_information() -> SnapshotTestInformation {
        SnapshotTestInformation {
            test_class_name: "ExampleTestClass".to_string(),
            test_name: "testName".to_string(),
            test_file_path: PathBuf::from("testFilePath"),
            test_line_number: 1,
        }
    }

    fn recorded() -> SnapshotTestResult {
        SnapshotTestResult::Recorded {
            test_information: test_information(),
            reference_image_path: PathBuf::from("foo/bar/referenceImage.png"),
            build: build(),
        }
    }

    fn failed() -> SnapshotTestResult {
        SnapshotTestResult::Failed {
            test_information: test_information(),
            reference_image_path: PathBuf::from("foo/bar/referenceImage.png"),
            diff_image_path: PathBuf::from("foo/bar/diffImage.png"),
            failed_image_path: PathBuf::from("foo/bar/failedImage.png"),
            build: build(),
        }
    }

    #[test]
    fn recorded_result_has_no_failure_images() {
        assert!(recorded().failure_images().is_none());
    }

    #[test]
    fn failed_result_exposes_all_three_images() {
        let result = failed();
        let images = result.failure_images().expect("failure images");
        assert_eq!(
            images.reference_image_path,
            Path::new("foo/bar/referenceImage.png")
        );
        assert_eq!(images.diff_image_path, Path::new("foo/bar/diffImage.png"));
        assert_eq!(
            images.failed_image_path,
            Path::new("foo/bar/failedImage.png")
        );
    }

    #[test]
    fn accessors_work_for_both_variants() {
        for result in [recorded(), failed()] {
            assert_eq!(result.test_information().test_name, "testName");
            assert_eq!(result.build().application_name, "MyApp");
            assert_eq!(
                result.reference_image_path(),
                Path::new("foo/bar/referenceImage.png")
            );
        }
    }

    #[test]
    fn outcome_names_the_variant() {
        assert_eq!(recorded().outcome(), "recorded");
        assert_eq!(failed().outcome(), "failed");
    }
}
