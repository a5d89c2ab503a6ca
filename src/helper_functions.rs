//! Common utility functions and validation helpers
//!
//! This module provides filename splitting, extension checks and string
//! formatting used by the pairing store, the rename engine and the UI.

use std::ffi::OsStr;
use std::path::Path;
use crate::config::{SUBTITLE_EXTENSIONS, VIDEO_EXTENSIONS};

/// Common utility functions used throughout the application
pub struct Utils;

impl Utils {
    /// Get the file name from a path, or an empty string if there is none
    pub fn get_file_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Split a file name at its last '.' into stem and extension.
    ///
    /// Works on the raw OS string so names that are not valid UTF-8 survive
    /// intact. The extension keeps its case. A leading dot counts as a
    /// separator, so `".srt"` splits into `("", Some("srt"))`.
    pub fn split_extension(name: &OsStr) -> (&OsStr, Option<&OsStr>) {
        let bytes = name.as_encoded_bytes();
        match bytes.iter().rposition(|&b| b == b'.') {
            // SAFETY: both halves are cut right at an ASCII '.', a valid boundary
            Some(idx) => unsafe {
                (
                    OsStr::from_encoded_bytes_unchecked(&bytes[..idx]),
                    Some(OsStr::from_encoded_bytes_unchecked(&bytes[idx + 1..])),
                )
            },
            None => (name, None),
        }
    }

    /// Whether two existing paths name the same file on disk
    pub fn is_same_file(a: &Path, b: &Path) -> bool {
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            match (std::fs::metadata(a), std::fs::metadata(b)) {
                (Ok(ma), Ok(mb)) => ma.dev() == mb.dev() && ma.ino() == mb.ino(),
                _ => false,
            }
        }

        #[cfg(not(unix))]
        {
            match (a.canonicalize(), b.canonicalize()) {
                (Ok(ca), Ok(cb)) => ca == cb,
                _ => false,
            }
        }
    }

    /// Check if an extension belongs to the accepted video formats
    pub fn is_video_extension(ext: &str) -> bool {
        VIDEO_EXTENSIONS.iter().any(|&v| v.eq_ignore_ascii_case(ext))
    }

    /// Check if an extension belongs to the accepted subtitle formats
    pub fn is_subtitle_extension(ext: &str) -> bool {
        SUBTITLE_EXTENSIONS.iter().any(|&s| s.eq_ignore_ascii_case(ext))
    }

    /// Truncate a string to a maximum number of characters, adding ellipsis if needed
    pub fn truncate_string(s: &str, max_len: usize) -> String {
        if s.chars().count() <= max_len {
            s.to_string()
        } else {
            let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
            format!("{}...", kept)
        }
    }
}

/// Input validation utilities
pub struct Validation;

impl Validation {
    /// Validate that a path exists and is a directory
    pub fn is_valid_folder(path: &Path) -> bool {
        !path.as_os_str().is_empty() && path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn split(name: &str) -> (&OsStr, Option<&OsStr>) {
        Utils::split_extension(OsStr::new(name))
    }

    #[test]
    fn split_extension_uses_last_dot() {
        assert_eq!(split("show.s01e01.MKV"), (OsStr::new("show.s01e01"), Some(OsStr::new("MKV"))));
        assert_eq!(split("README"), (OsStr::new("README"), None));
        assert_eq!(split(".srt"), (OsStr::new(""), Some(OsStr::new("srt"))));
        assert_eq!(split("trailing."), (OsStr::new("trailing"), Some(OsStr::new(""))));
    }

    #[cfg(unix)]
    #[test]
    fn split_extension_keeps_invalid_utf8_bytes() {
        use std::os::unix::ffi::OsStrExt;
        let name = OsStr::from_bytes(b"\xffshow.srt");
        let (stem, ext) = Utils::split_extension(name);
        assert_eq!(stem.as_bytes(), b"\xffshow");
        assert_eq!(ext, Some(OsStr::new("srt")));
    }

    #[test]
    fn same_file_follows_hard_links_not_names() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("episode01.mkv");
        let link = dir.path().join("Episode01.mkv");
        let other = dir.path().join("other.mkv");
        std::fs::write(&original, "v").unwrap();
        std::fs::write(&other, "o").unwrap();
        std::fs::hard_link(&original, &link).unwrap();

        assert!(Utils::is_same_file(&original, &link));
        assert!(!Utils::is_same_file(&original, &other));
        assert!(!Utils::is_same_file(&original, &dir.path().join("missing.mkv")));
    }

    #[test]
    fn extension_checks_ignore_case() {
        assert!(Utils::is_video_extension("Mp4"));
        assert!(Utils::is_video_extension("AVI"));
        assert!(Utils::is_subtitle_extension("SRT"));
        assert!(!Utils::is_video_extension("srt"));
        assert!(!Utils::is_subtitle_extension("txt"));
    }

    #[test]
    fn file_name_of_empty_path_is_empty() {
        assert_eq!(Utils::get_file_name(&PathBuf::new()), "");
        assert_eq!(Utils::get_file_name(Path::new("/tmp/a.srt")), "a.srt");
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(Utils::truncate_string("short", 10), "short");
        assert_eq!(Utils::truncate_string("a-very-long-name.mkv", 10), "a-very-...");
    }

    #[test]
    fn folder_validation() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Validation::is_valid_folder(dir.path()));
        assert!(!Validation::is_valid_folder(&dir.path().join("missing")));
        assert!(!Validation::is_valid_folder(Path::new("")));
    }
}
