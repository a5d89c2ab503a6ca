//! Application logic for Renamer With Subs
//!
//! This module wires user actions (import, clear, rename, undo, row drags)
//! to the session and keeps the status line and settings up to date.

use std::path::PathBuf;

use eframe::egui;
use rfd::FileDialog;

use crate::config::{SUBTITLE_EXTENSIONS, VIDEO_EXTENSIONS};
use crate::data_structures::{FileRef, RenameDirection, RenamerApp};
use crate::helper_functions::Validation;
use crate::session::Session;
use crate::settings::Settings;

use log::{debug, info, warn};

impl Default for RenamerApp {
    fn default() -> Self {
        info!("Initializing RenamerApp");
        let settings = Settings::load();
        info!(
            "Loaded settings: last_import_dir={:?}, show_full_paths={}",
            settings.last_import_dir, settings.show_full_paths
        );
        Self {
            session: Session::new(),
            settings,
            show_about: false,
            status: "No files imported yet".to_string(),
        }
    }
}

impl RenamerApp {
    /// Save the current user settings to disk
    pub fn save_current_settings(&self) {
        if let Err(e) = self.settings.save() {
            warn!("Failed to save settings: {}", e);
        }
    }

    /// Ask the user for files and import them
    pub fn import_with_dialog(&mut self) {
        let accepted: Vec<&str> = VIDEO_EXTENSIONS
            .iter()
            .chain(SUBTITLE_EXTENSIONS.iter())
            .copied()
            .collect();
        let mut dialog = FileDialog::new()
            .set_title("Import video clips and subtitles")
            .add_filter("Video clips & subtitles", accepted.as_slice())
            .add_filter("All files", &["*"]);
        if let Some(dir) = self.settings.last_import_dir.as_ref() {
            if Validation::is_valid_folder(dir) {
                dialog = dialog.set_directory(dir);
            }
        }

        let Some(files) = dialog.pick_files() else {
            debug!("Import dialog cancelled");
            return;
        };
        if let Some(dir) = files.first().and_then(|f| f.parent()) {
            if self.settings.last_import_dir.as_deref() != Some(dir) {
                self.settings.last_import_dir = Some(dir.to_path_buf());
                self.save_current_settings();
            }
        }
        self.import_paths(files);
    }

    /// Import files dropped onto the window from the OS
    pub fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            info!("{} file(s) dropped onto the window", dropped.len());
            self.import_paths(dropped);
        }
    }

    pub fn import_paths(&mut self, paths: Vec<PathBuf>) {
        let report = self.session.import(paths);
        self.status = format!(
            "Imported {} video clip(s) and {} subtitle(s), {} file(s) rejected",
            report.videos,
            report.subtitles,
            report.rejected.len()
        );
        info!("{}", self.status);
    }

    pub fn clear_table(&mut self) {
        self.session.clear();
        self.status = "Table cleared".to_string();
    }

    pub fn rename(&mut self, direction: RenameDirection) {
        if self.session.store().is_empty() {
            self.status = "Nothing to rename".to_string();
            return;
        }
        let pairs = self.session.store().len();
        self.session.rename_all(direction);
        let renamed = self.session.last_batch_len();
        self.status = format!("Renamed {} of {} pair(s) ({})", renamed, pairs, direction.label());
    }

    pub fn undo_last_rename(&mut self) {
        match self.session.undo_last_rename() {
            Some(lines) => {
                self.status = format!("Undid {} rename(s)", lines.len());
            }
            None => {
                self.status = "Nothing to undo".to_string();
            }
        }
    }

    /// A subtitle was dragged from row `from` and dropped on row `to`
    pub fn swap_rows(&mut self, from: usize, to: usize) {
        if let Err(e) = self.session.reorder(from, to) {
            debug!("Row swap refused: {}", e);
            self.status = format!("Cannot swap: {}", e);
        }
    }

    /// Text shown in a table cell for a file
    pub fn display_name(&self, file: &FileRef) -> String {
        if self.settings.show_full_paths {
            file.path().display().to_string()
        } else {
            file.name()
        }
    }

    pub fn get_status(&self) -> &str { &self.status }
    pub fn can_undo(&self) -> bool { self.session.can_undo() }
    pub fn has_pairs(&self) -> bool { !self.session.store().is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> RenamerApp {
        RenamerApp {
            session: Session::new(),
            settings: Settings::default(),
            show_about: false,
            status: String::new(),
        }
    }

    #[test]
    fn import_updates_status() {
        let mut app = app();
        app.import_paths(vec!["/m/a.mp4".into(), "/m/a.srt".into(), "/m/x.txt".into()]);
        assert_eq!(
            app.get_status(),
            "Imported 1 video clip(s) and 1 subtitle(s), 1 file(s) rejected"
        );
        assert!(app.has_pairs());
    }

    #[test]
    fn refused_swap_is_reported() {
        let mut app = app();
        app.import_paths(vec!["/m/a.mp4".into(), "/m/a.srt".into()]);
        app.swap_rows(0, 0);
        assert_eq!(app.get_status(), "Cannot swap: cannot swap row 0 with itself");
    }

    #[test]
    fn display_name_follows_setting() {
        let mut app = app();
        let file = FileRef::new("/m/a.mp4");
        assert_eq!(app.display_name(&file), "a.mp4");
        app.settings.show_full_paths = true;
        assert_eq!(app.display_name(&file), file.path().display().to_string());
    }

    #[test]
    fn rename_on_empty_table_does_nothing() {
        let mut app = app();
        app.rename(RenameDirection::Subtitles);
        assert_eq!(app.get_status(), "Nothing to rename");
        assert!(!app.can_undo());
    }
}
