use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persisted companion settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Viewer id tried first when several viewers could open a result.
    pub preferred_viewer: Option<String>,
    /// Extra PATH-style directories searched for helper tools.
    pub extra_path: Option<String>,
}

pub fn load_config() -> AppConfig {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> AppConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return AppConfig::default();
    };
    toml::from_str(&contents).unwrap_or_default()
}

pub fn save_config(config: &AppConfig) -> std::io::Result<()> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config).unwrap_or_default();
    std::fs::write(path, contents)
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("SNAPREVIEW_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

fn app_data_dir() -> PathBuf {
    if let Some(path) = std::env::var_os("SNAPREVIEW_DATA_HOME") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("Snapreview");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("Snapreview");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("snapreview");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("snapreview");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".snapreview")
}
