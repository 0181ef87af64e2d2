//! Executable lookup across the configured search path.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Locates `command` on the search path.
///
/// A command containing a path separator is checked as given. Directories
/// from `SNAPREVIEW_EXTRA_PATH` are searched before `PATH`.
pub fn find_bin(command: &str) -> Option<PathBuf> {
    find_bin_with_extra(command, None)
}

/// Like [`find_bin`], with extra PATH-style directories (typically from the
/// config file) searched first.
pub fn find_bin_with_extra(command: &str, extra: Option<&str>) -> Option<PathBuf> {
    let as_path = Path::new(command);
    if as_path.components().count() > 1 {
        return as_path.is_file().then(|| as_path.to_path_buf());
    }

    let names = candidate_names(command);
    for dir in search_dirs(extra) {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }

    None
}

#[cfg(target_os = "windows")]
fn candidate_names(command: &str) -> Vec<OsString> {
    let mut names = vec![OsString::from(command)];
    if Path::new(command).extension().is_none() {
        let exts = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
        for ext in exts.split(';') {
            let ext = ext.trim();
            if !ext.is_empty() {
                names.push(OsString::from(format!("{command}{ext}")));
            }
        }
    }
    names
}

#[cfg(not(target_os = "windows"))]
fn candidate_names(command: &str) -> Vec<OsString> {
    vec![OsString::from(command)]
}

fn search_dirs(extra: Option<&str>) -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Some(extra) = extra {
        push_unique(&mut dirs, OsStr::new(extra));
    }
    if let Some(value) = std::env::var_os("SNAPREVIEW_EXTRA_PATH") {
        push_unique(&mut dirs, &value);
    }
    if let Some(value) = std::env::var_os("PATH") {
        push_unique(&mut dirs, &value);
    }

    dirs
}

fn push_unique(dirs: &mut Vec<PathBuf>, value: &OsStr) {
    for dir in std::env::split_paths(value) {
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
}
