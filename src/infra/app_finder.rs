//! Installed-application lookup by bundle identifier.

use std::path::PathBuf;
use std::process::Command;

use crate::infra::platform::{self, Platform};
use crate::viewers::traits::ApplicationFinder;

/// Resolves bundle identifiers against the workstation's application
/// registry.
///
/// On macOS this queries the Spotlight metadata index via `mdfind`.
/// Platforms without a bundle registry report every application as absent,
/// so availability checks simply come up false there.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkstationApplicationFinder;

impl ApplicationFinder for WorkstationApplicationFinder {
    fn find_application(&self, bundle_identifier: &str) -> Option<PathBuf> {
        match platform::current_platform() {
            Platform::MacOS => spotlight_lookup(bundle_identifier),
            _ => None,
        }
    }
}

fn spotlight_lookup(bundle_identifier: &str) -> Option<PathBuf> {
    let query = format!("kMDItemCFBundleIdentifier == '{bundle_identifier}'");
    let output = match Command::new("mdfind").arg(&query).output() {
        Ok(output) => output,
        Err(err) => {
            log::debug!("mdfind unavailable: {err}");
            return None;
        }
    };

    if !output.status.success() {
        log::debug!("mdfind exited with {} for {bundle_identifier}", output.status);
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let location = stdout.lines().map(str::trim).find(|line| !line.is_empty())?;
    Some(PathBuf::from(location))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_bundle_is_absent() {
        // On macOS the Spotlight query comes up empty; elsewhere the
        // platform branch short-circuits.
        let finder = WorkstationApplicationFinder;
        assert!(
            finder
                .find_application("com.example.not-a-real-application-12345")
                .is_none()
        );
    }
}
