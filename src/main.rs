//! Snapreview CLI entry point.
//!
//! Lists the configured viewers and opens failed snapshot comparisons in an
//! installed external diff tool.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

use snapreview::domain::{Build, SnapshotTestInformation, SnapshotTestResult, ViewerError};
use snapreview::infra::app_config::{AppConfig, load_config};
use snapreview::infra::app_finder::WorkstationApplicationFinder;
use snapreview::infra::launcher::OsProcessLauncher;
use snapreview::infra::shell;
use snapreview::viewers::registry::ViewerRegistry;
use snapreview::viewers::traits::{ApplicationFinder, SnapshotViewer};

#[derive(Parser, Debug)]
#[command(name = "snapreview")]
#[command(version)]
#[command(about = "Snapshot-test review companion", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List known viewers and whether they are installed
    Viewers {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Open a failed snapshot comparison in an external diff viewer
    View {
        /// Accepted reference image
        #[arg(long)]
        reference: PathBuf,

        /// Image rendered by the failing test
        #[arg(long)]
        failed: PathBuf,

        /// Diff image produced by the comparison
        #[arg(long)]
        diff: PathBuf,

        /// Viewer id to use instead of the configured preference
        #[arg(long)]
        viewer: Option<String>,

        /// Name of the application under test
        #[arg(long, default_value = "unknown")]
        app_name: String,

        /// Test name shown in logs; defaults to the failed image's stem
        #[arg(long)]
        test_name: Option<String>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewerStatus {
    id: String,
    name: String,
    bundle_id: String,
    installed: bool,
    application_path: Option<String>,
    tool_path: String,
    tool_installed: bool,
    resolved_tool: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Commands::Viewers { json } => run_viewers(json),
        Commands::View {
            reference,
            failed,
            diff,
            viewer,
            app_name,
            test_name,
        } => run_view(reference, failed, diff, viewer, app_name, test_name),
    }
}

fn run_viewers(json: bool) -> Result<()> {
    let config = load_config();
    let registry = ViewerRegistry::default();
    let finder = WorkstationApplicationFinder;

    let statuses: Vec<ViewerStatus> = registry
        .viewers()
        .into_iter()
        .map(|viewer| viewer_status(viewer, &finder, &config))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
        return Ok(());
    }

    for status in &statuses {
        let installed = if status.installed {
            "installed"
        } else {
            "not installed"
        };
        println!("{:<16} {:<14} {}", status.id, installed, status.bundle_id);
        if let Some(path) = &status.application_path {
            println!("{:<16} app:    {}", "", path);
        }
        match &status.resolved_tool {
            Some(tool) => println!("{:<16} helper: {}", "", tool),
            None => println!("{:<16} helper: {} (not found)", "", status.tool_path),
        }
    }

    Ok(())
}

fn viewer_status(
    viewer: &dyn SnapshotViewer,
    finder: &WorkstationApplicationFinder,
    config: &AppConfig,
) -> ViewerStatus {
    let application_path = finder.find_application(viewer.bundle_id());
    let tool_name = viewer
        .tool_path()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let resolved_tool = if viewer.tool_path().is_file() {
        Some(viewer.tool_path().to_path_buf())
    } else {
        shell::find_bin_with_extra(&tool_name, config.extra_path.as_deref())
    };

    ViewerStatus {
        id: viewer.id().to_string(),
        name: viewer.name().to_string(),
        bundle_id: viewer.bundle_id().to_string(),
        installed: application_path.is_some(),
        application_path: application_path.map(|path| path.to_string_lossy().into_owned()),
        tool_path: viewer.tool_path().display().to_string(),
        tool_installed: which::which(&tool_name).is_ok(),
        resolved_tool: resolved_tool.map(|path| path.to_string_lossy().into_owned()),
    }
}

fn run_view(
    reference: PathBuf,
    failed: PathBuf,
    diff: PathBuf,
    viewer: Option<String>,
    app_name: String,
    test_name: Option<String>,
) -> Result<()> {
    let config = load_config();
    let registry = ViewerRegistry::default();
    let finder = WorkstationApplicationFinder;
    let launcher = OsProcessLauncher;

    let test_name = test_name.unwrap_or_else(|| {
        failed
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "snapshot".to_string())
    });
    let build = Build {
        date: chrono::Local::now().to_rfc3339(),
        application_name: app_name,
        reference_image_dirs: reference
            .parent()
            .map(Path::to_path_buf)
            .into_iter()
            .collect(),
    };
    let result = SnapshotTestResult::Failed {
        test_information: SnapshotTestInformation {
            test_class_name: "SnapshotTests".to_string(),
            test_name,
            test_file_path: PathBuf::new(),
            test_line_number: 0,
        },
        reference_image_path: reference,
        diff_image_path: diff,
        failed_image_path: failed,
        build,
    };

    let chosen: &dyn SnapshotViewer = match viewer.as_deref() {
        Some(id) => {
            let chosen = registry
                .get_viewer(id)
                .with_context(|| format!("unknown viewer: {id}"))?;
            if !chosen.is_available(&finder) {
                return Err(ViewerError::NotInstalled {
                    viewer: chosen.name().to_string(),
                }
                .into());
            }
            chosen
        }
        None => registry
            .viewer_for(&result, &finder, config.preferred_viewer.as_deref())
            .context("no installed viewer can display this result")?,
    };

    if let Err(err) = chosen.view(&result, &launcher) {
        log::error!("{err}");
        return Err(err.into());
    }

    println!(
        "Opened {} in {}",
        result.test_information().test_name,
        chosen.name()
    );
    Ok(())
}
