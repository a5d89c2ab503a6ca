//! Renamer With Subs - Library
//!
//! Pairs video clips with subtitle files by position and renames one side
//! of each pair so that both share the same base name.

pub mod config;
pub mod error;
pub mod data_structures;
pub mod helper_functions;
pub mod logging;
pub mod settings;
pub mod pairing;
pub mod rename;
pub mod session;
pub mod app;
pub mod gui;

// Re-export commonly used items
pub use data_structures::*;
pub use error::*;
pub use pairing::{ImportReport, PairingStore};
pub use rename::{rename_all, RenameOutcome, RenameRecord, RenameReport};
pub use session::Session;
pub use settings::Settings;
