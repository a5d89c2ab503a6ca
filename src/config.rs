//! Configuration constants for Renamer With Subs
//!
//! This module contains application-wide values: the accepted file formats,
//! window geometry and the fixed texts shown by the UI.

/// The current application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Window title and application name
pub const APP_NAME: &str = "Renamer With Subs";

/// Video clip extensions accepted on import (matched case-insensitively)
pub static VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv"];

/// Subtitle extensions accepted on import (matched case-insensitively)
pub static SUBTITLE_EXTENSIONS: &[&str] = &["srt", "sub"];

/// Default window size
pub static WINDOW_SIZE: [f32; 2] = [1000.0, 600.0];

/// Minimum window size
pub static MIN_WINDOW_SIZE: [f32; 2] = [640.0, 360.0];

/// Environment variable holding the console log filter
pub const LOG_ENV_VAR: &str = "RWS_LOG";

/// Console and file filter used when `RWS_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Level session log lines are mirrored at, kept visible under the default filter
pub const SESSION_LOG_LEVEL: log::Level = log::Level::Info;

/// First lines of the session log
pub const WELCOME_MESSAGE: &[&str] = &[
    "Welcome to 'Rename with subs'",
    "To begin, import your video clip(s) and subtitle(s) files by clicking the 'Import' button or by dragging and dropping them in the middle of the screen",
];

/// Shown in the table while it is empty
pub const EMPTY_TABLE_HINT: &str = "Drag-and-drop files here or click on the 'Import' button.";

/// Credits shown in the About window
pub const ABOUT_TEXT: &str = "Renamer with subs, originally made by Guillaume Comte in 2015.";
