//! Application settings and persistence management
//!
//! This module handles loading, saving, and managing user preferences
//! that persist between sessions.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use log::{debug, info, warn};
use crate::error::SettingsError;

/// Application settings that persist between sessions
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Folder the import dialog opens in
    pub last_import_dir: Option<PathBuf>,
    /// Show full paths in the table instead of base names
    pub show_full_paths: bool,
}

impl Settings {
    /// Get the path where settings are stored
    pub fn get_path() -> Result<PathBuf, SettingsError> {
        #[cfg(windows)]
        {
            let exe_path = std::env::current_exe()?;
            let exe_dir = exe_path.parent().ok_or(SettingsError::NoConfigDir)?;
            Ok(exe_dir.join("renamer_with_subs_settings.json"))
        }

        #[cfg(target_os = "macos")]
        {
            let home_dir = dirs::home_dir().ok_or(SettingsError::NoConfigDir)?;
            let app_support = home_dir.join("Library/Application Support/renamer-with-subs");
            std::fs::create_dir_all(&app_support)?;
            Ok(app_support.join("settings.json"))
        }

        #[cfg(not(any(windows, target_os = "macos")))]
        {
            // XDG config directory, falling back to the home directory
            let app_dir = match xdg::BaseDirectories::new() {
                Ok(xdg_dirs) => xdg_dirs.get_config_home().join("renamer-with-subs"),
                Err(_) => dirs::home_dir()
                    .ok_or(SettingsError::NoConfigDir)?
                    .join(".renamer-with-subs"),
            };
            std::fs::create_dir_all(&app_dir)?;
            Ok(app_dir.join("settings.json"))
        }
    }

    /// Read settings from a file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write settings to a file
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load settings from disk, falling back to defaults if the file is missing or unreadable
    pub fn load() -> Self {
        let path = match Self::get_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("Failed to get settings path: {}. Using defaults.", e);
                return Settings::default();
            }
        };
        match Self::load_from(&path) {
            Ok(settings) => {
                info!("Settings loaded from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) => {
                debug!("Settings file not found or unreadable: {}. Using defaults.", e);
                Settings::default()
            }
            Err(e) => {
                warn!("Failed to parse settings file: {}. Using defaults.", e);
                Settings::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::get_path()?;
        self.save_to(&path)?;
        debug!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"show_full_paths": true}"#).unwrap();
        assert!(settings.show_full_paths);
        assert_eq!(settings.last_import_dir, None);
    }

    #[test]
    fn save_then_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            last_import_dir: Some(dir.path().to_path_buf()),
            show_full_paths: true,
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn corrupt_file_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Settings::load_from(&path), Err(SettingsError::Json(_))));
    }
}
