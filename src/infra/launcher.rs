//! Detached process launching.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::viewers::traits::ProcessLauncher;

/// Spawns viewer processes detached from the companion.
///
/// No output is captured and the child is never awaited; the handle is
/// dropped once the spawn succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProcessLauncher;

impl ProcessLauncher for OsProcessLauncher {
    fn launch_process(&self, path: &Path, arguments: &[String]) -> Result<()> {
        let child = Command::new(path)
            .args(arguments)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("spawn {}", path.display()))?;
        log::debug!("spawned {} (pid {})", path.display(), child.id());
        Ok(())
    }
}
