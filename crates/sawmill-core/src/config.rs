//! Settings parser for ~/.config/sawmill/config.toml

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const CONFIG_FILENAME: &str = "config.toml";
const SAWMILL_DIR: &str = "sawmill";

/// User settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub log: LogSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file to open instead of the build tool's default console log
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// How many trailing entries to show; 0 means all of them
    pub entries_to_show: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { entries_to_show: 0 }
    }
}

/// Load settings from the user config directory.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings() -> Settings {
    let Some(config_dir) = dirs::config_dir() else {
        debug!("No config directory on this platform, using defaults");
        return Settings::default();
    };
    load_settings_from(&config_dir.join(SAWMILL_DIR).join(CONFIG_FILENAME))
}

/// Load settings from an explicit config file path
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// The build tool's own console log path for this platform.
///
/// This mirrors where the Unity editor writes its console log; any other
/// path can be substituted via settings or the command line.
pub fn default_log_path() -> PathBuf {
    if cfg!(target_os = "macos") {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Library")
            .join("Logs")
            .join("Unity")
            .join("Editor.log")
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Unity")
            .join("Editor")
            .join("Editor.log")
    } else {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("unity3d")
            .join("Editor.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings_from(&temp.path().join("config.toml"));

        assert_eq!(settings.log.path, None);
        assert_eq!(settings.ui.entries_to_show, 0);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("config.toml");
        let config = r#"
[log]
path = "/var/log/build.log"

[ui]
entries_to_show = 50
"#;
        std::fs::write(&config_path, config).unwrap();

        let settings = load_settings_from(&config_path);
        assert_eq!(settings.log.path, Some(PathBuf::from("/var/log/build.log")));
        assert_eq!(settings.ui.entries_to_show, 50);
    }

    #[test]
    fn test_load_settings_partial_file() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("config.toml");
        std::fs::write(&config_path, "[ui]\nentries_to_show = 10\n").unwrap();

        let settings = load_settings_from(&config_path);
        assert_eq!(settings.ui.entries_to_show, 10);
        assert_eq!(settings.log.path, None);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("config.toml");
        std::fs::write(&config_path, "not [ valid toml").unwrap();

        assert_eq!(load_settings_from(&config_path), Settings::default());
    }

    #[test]
    fn test_default_log_path_is_absolute_ish() {
        let path = default_log_path();
        assert!(path.to_string_lossy().ends_with("Editor.log"));
    }
}
