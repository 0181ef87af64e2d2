//! Integration tests for viewer selection and launching through the
//! public crate surface.

use snapreview::domain::{Build, SnapshotTestInformation, SnapshotTestResult};
use snapreview::viewers::registry::ViewerRegistry;
use snapreview::viewers::traits::{ApplicationFinder, ProcessLauncher};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

struct StubFinder(Vec<&'static str>);

impl ApplicationFinder for StubFinder {
    fn find_application(&self, bundle_identifier: &str) -> Option<PathBuf> {
        self.0
            .contains(&bundle_identifier)
            .then(|| PathBuf::from("/Applications/Stub.app"))
    }
}

#[derive(Default)]
struct RecordingLauncher {
    launched: RefCell<Vec<(PathBuf, Vec<String>)>>,
}

impl ProcessLauncher for RecordingLauncher {
    fn launch_process(&self, path: &Path, arguments: &[String]) -> anyhow::Result<()> {
        self.launched
            .borrow_mut()
            .push((path.to_path_buf(), arguments.to_vec()));
        Ok(())
    }
}

fn myapp_failed_result() -> SnapshotTestResult {
    SnapshotTestResult::Failed {
        test_information: SnapshotTestInformation {
            test_class_name: "ExampleTestClass".to_string(),
            test_name: "testName".to_string(),
            test_file_path: PathBuf::from("testFilePath"),
            test_line_number: 1,
        },
        reference_image_path: PathBuf::from("foo/bar/referenceImage.png"),
        diff_image_path: PathBuf::from("foo/bar/diffImage.png"),
        failed_image_path: PathBuf::from("foo/bar/failedImage.png"),
        build: Build {
            date: "2017-05-06T00:00:00+00:00".to_string(),
            application_name: "MyApp".to_string(),
            reference_image_dirs: vec![PathBuf::from("foo/bar")],
        },
    }
}

#[test]
fn failed_myapp_snapshot_opens_in_kaleidoscope() {
    let registry = ViewerRegistry::default();
    let finder = StubFinder(vec!["com.blackpixel.kaleidoscope"]);
    let launcher = RecordingLauncher::default();
    let result = myapp_failed_result();

    let viewer = registry
        .viewer_for(&result, &finder, None)
        .expect("kaleidoscope is installed");
    assert!(viewer.can_view(&result));
    assert!(viewer.is_available(&finder));

    viewer.view(&result, &launcher).expect("view succeeds");

    let launched = launcher.launched.borrow();
    assert_eq!(launched.len(), 1);
    assert_eq!(launched[0].0, PathBuf::from("/usr/local/bin/ksdiff"));
    assert_eq!(
        launched[0].1,
        vec![
            "foo/bar/referenceImage.png".to_string(),
            "foo/bar/failedImage.png".to_string(),
        ]
    );
}

#[test]
fn selection_falls_through_to_the_next_installed_viewer() {
    let registry = ViewerRegistry::default();
    let finder = StubFinder(vec!["com.ScooterSoftware.BeyondCompare"]);
    let launcher = RecordingLauncher::default();
    let result = myapp_failed_result();

    let viewer = registry
        .viewer_for(&result, &finder, None)
        .expect("beyond compare is installed");
    assert_eq!(viewer.id(), "beyond-compare");

    viewer.view(&result, &launcher).expect("view succeeds");
    assert_eq!(
        launcher.launched.borrow()[0].0,
        PathBuf::from("/usr/local/bin/bcompare")
    );
}

#[test]
fn recorded_results_are_never_viewable() {
    let registry = ViewerRegistry::default();
    let finder = StubFinder(vec![
        "com.blackpixel.kaleidoscope",
        "com.ScooterSoftware.BeyondCompare",
    ]);
    let result = SnapshotTestResult::Recorded {
        test_information: SnapshotTestInformation {
            test_class_name: "ExampleTestClass".to_string(),
            test_name: "testName".to_string(),
            test_file_path: PathBuf::from("testFilePath"),
            test_line_number: 1,
        },
        reference_image_path: PathBuf::from("foo/bar/referenceImage.png"),
        build: Build {
            date: "2017-05-06T00:00:00+00:00".to_string(),
            application_name: "MyApp".to_string(),
            reference_image_dirs: vec![PathBuf::from("foo/bar")],
        },
    };

    assert!(registry.viewer_for(&result, &finder, None).is_none());
}

#[test]
fn preferred_viewer_from_config_wins() {
    let registry = ViewerRegistry::default();
    let finder = StubFinder(vec![
        "com.blackpixel.kaleidoscope",
        "com.ScooterSoftware.BeyondCompare",
    ]);
    let result = myapp_failed_result();

    let viewer = registry
        .viewer_for(&result, &finder, Some("beyond-compare"))
        .expect("preferred viewer is installed");
    assert_eq!(viewer.id(), "beyond-compare");
}
