use crate::domain::SnapshotTestResult;
use crate::viewers::beyond_compare::BeyondCompareViewer;
use crate::viewers::kaleidoscope::KaleidoscopeViewer;
use crate::viewers::traits::{ApplicationFinder, SnapshotViewer};

/// Owns the set of known viewers, in priority order.
pub struct ViewerRegistry {
    viewers: Vec<Box<dyn SnapshotViewer>>,
}

impl Default for ViewerRegistry {
    fn default() -> Self {
        Self {
            viewers: vec![
                Box::new(KaleidoscopeViewer),
                Box::new(BeyondCompareViewer),
            ],
        }
    }
}

impl ViewerRegistry {
    pub fn get_viewer(&self, id: &str) -> Option<&dyn SnapshotViewer> {
        self.viewers
            .iter()
            .map(|viewer| viewer.as_ref())
            .find(|viewer| viewer.id() == id)
    }

    pub fn viewers(&self) -> Vec<&dyn SnapshotViewer> {
        self.viewers
            .iter()
            .map(|viewer| viewer.as_ref())
            .collect()
    }

    /// First registered viewer that can view `result` and is installed.
    ///
    /// A `preferred` viewer id wins when it satisfies both checks; an
    /// unknown or unavailable preference falls back to registration order.
    pub fn viewer_for(
        &self,
        result: &SnapshotTestResult,
        finder: &dyn ApplicationFinder,
        preferred: Option<&str>,
    ) -> Option<&dyn SnapshotViewer> {
        if let Some(id) = preferred {
            match self.get_viewer(id) {
                Some(viewer) if viewer.can_view(result) && viewer.is_available(finder) => {
                    return Some(viewer);
                }
                Some(_) => log::debug!("preferred viewer {id} cannot handle this result"),
                None => log::warn!("preferred viewer {id} is not registered"),
            }
        }

        self.viewers
            .iter()
            .map(|viewer| viewer.as_ref())
            .find(|viewer| viewer.can_view(result) && viewer.is_available(finder))
    }
}
