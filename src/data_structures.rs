//! Data structures and types for Renamer With Subs
//!
//! This module contains the file references, pairs and enums shared by the
//! pairing store, the rename engine and the UI, plus the application state.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::helper_functions::Utils;
use crate::session::Session;
use crate::settings::Settings;

/// Kind of media a file was classified as on import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Subtitle,
}

/// Which side of each pair gets renamed to match the other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameDirection {
    /// Rename video clips after their subtitles
    Videos,
    /// Rename subtitles after their video clips
    Subtitles,
}

impl RenameDirection {
    pub fn label(self) -> &'static str {
        match self {
            RenameDirection::Videos => "video clips",
            RenameDirection::Subtitles => "subtitles",
        }
    }
}

/// Reference to a file on disk, or a placeholder standing for "no file".
///
/// Non-placeholder paths are made absolute on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FileRef {
    path: PathBuf,
}

impl FileRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Self::placeholder();
        }
        let path = if path.is_absolute() {
            path
        } else {
            match std::env::current_dir() {
                Ok(cwd) => cwd.join(path),
                Err(_) => path,
            }
        };
        Self { path }
    }

    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn is_placeholder(&self) -> bool {
        self.path.as_os_str().is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name with extension, empty for a placeholder
    pub fn name(&self) -> String {
        Utils::get_file_name(&self.path)
    }

    fn file_name_os(&self) -> &OsStr {
        self.path.file_name().unwrap_or(OsStr::new(""))
    }

    /// Base name without the part after the last '.', for display
    pub fn stem(&self) -> String {
        Utils::split_extension(self.file_name_os()).0.to_string_lossy().into_owned()
    }

    /// Part of the base name after the last '.', case preserved, for display and matching
    pub fn extension(&self) -> Option<String> {
        Utils::split_extension(self.file_name_os())
            .1
            .map(|ext| ext.to_string_lossy().into_owned())
    }

    /// Classify by lowercased extension; `None` means the file is not importable
    pub fn kind(&self) -> Option<MediaKind> {
        let ext = self.extension()?;
        if Utils::is_video_extension(&ext) {
            Some(MediaKind::Video)
        } else if Utils::is_subtitle_extension(&ext) {
            Some(MediaKind::Subtitle)
        } else {
            None
        }
    }

    /// Path this file gets when renamed after `source`: the source's
    /// directory and stem combined with this file's own extension.
    pub fn renamed_after(&self, source: &FileRef) -> Option<FileRef> {
        if self.is_placeholder() || source.is_placeholder() {
            return None;
        }
        let ext = Utils::split_extension(self.file_name_os()).1?;
        let (stem, _) = Utils::split_extension(source.file_name_os());
        let mut new_name = OsString::from(stem);
        new_name.push(".");
        new_name.push(ext);
        Some(FileRef {
            path: source.path.with_file_name(new_name),
        })
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A video clip and the subtitle paired with it. At most one side is a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub(crate) video: FileRef,
    pub(crate) subtitle: FileRef,
}

impl Pair {
    /// Returns `None` when both sides are placeholders
    pub fn new(video: FileRef, subtitle: FileRef) -> Option<Self> {
        if video.is_placeholder() && subtitle.is_placeholder() {
            None
        } else {
            Some(Self { video, subtitle })
        }
    }

    pub fn video(&self) -> &FileRef {
        &self.video
    }

    pub fn subtitle(&self) -> &FileRef {
        &self.subtitle
    }

    /// Both sides refer to real files
    pub fn is_complete(&self) -> bool {
        !self.video.is_placeholder() && !self.subtitle.is_placeholder()
    }
}

/// Main application state for the desktop UI
pub struct RenamerApp {
    // Pairing, rename log and undo journal
    pub session: Session,

    // User settings
    pub settings: Settings,

    // UI status
    pub show_about: bool,
    pub status: String,
}
