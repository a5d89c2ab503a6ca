//! Error types for Renamer With Subs
//!
//! None of the pairing errors are fatal: each one is rendered as a single
//! line in the session log and the batch carries on with the next item.

use std::path::PathBuf;

/// Recoverable problems met while importing files or renaming pairs.
///
/// The `Display` output of each variant is the exact line appended to the
/// session log.
#[derive(Debug, thiserror::Error)]
pub enum PairingError {
    #[error("Impossible to import file {name}")]
    UnclassifiableFile { name: String, path: PathBuf },

    #[error("Skipped files \"{video}\" & \"{subtitle}\"")]
    IncompletePair { video: String, subtitle: String },

    #[error("Impossible to rename \"{from}\" into \"{to}\"")]
    RenameFailure {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
}

/// Reasons a row swap is refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    #[error("cannot swap row {0} with itself")]
    SameRow(usize),

    #[error("row {index} is out of range (table has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("swapping rows {0} and {1} would leave a row without any file")]
    EmptyPair(usize, usize),
}

/// Errors loading or saving user settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no configuration directory available")]
    NoConfigDir,
}

/// Errors raised while installing the process logger
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logger already installed: {0}")]
    SetLogger(#[from] log::SetLoggerError),

    #[error("no directory available for the log file")]
    NoLogDir,
}
