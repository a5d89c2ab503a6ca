//! The controlling session
//!
//! Owns the pairing store, the append-only log shown to the user and the
//! journal of the last rename batch. The UI holds exactly one `Session` and
//! runs every operation on it to completion before handling the next event.

use std::path::PathBuf;

use log::{debug, info, log};

use crate::config::{SESSION_LOG_LEVEL, WELCOME_MESSAGE};
use crate::data_structures::{Pair, RenameDirection};
use crate::error::ReorderError;
use crate::pairing::{ImportReport, PairingStore};
use crate::rename::{self, RenameRecord};

pub struct Session {
    store: PairingStore,
    log: Vec<String>,
    last_batch: Option<Vec<RenameRecord>>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            store: PairingStore::new(),
            log: WELCOME_MESSAGE.iter().map(|line| line.to_string()).collect(),
            last_batch: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    fn log_line(&mut self, line: String) {
        log!(SESSION_LOG_LEVEL, "session: {}", line);
        self.log.push(line);
    }

    pub fn import<I, P>(&mut self, paths: I) -> ImportReport
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let report = self.store.import(paths);
        for line in report.log_lines() {
            self.log_line(line);
        }
        report
    }

    pub fn clear(&mut self) {
        info!("Clearing {} pair(s)", self.store.len());
        self.store.clear();
        self.last_batch = None;
    }

    pub fn reorder(&mut self, a: usize, b: usize) -> Result<(), ReorderError> {
        self.store.reorder(a, b)?;
        debug!("Swapped subtitles of rows {} and {}", a, b);
        Ok(())
    }

    /// Rename every complete pair and replace the store with the result.
    /// Returns the log lines produced by this batch.
    pub fn rename_all(&mut self, direction: RenameDirection) -> Vec<String> {
        info!("Renaming {} across {} pair(s)", direction.label(), self.store.len());
        let report = rename::rename_all(&self.store, direction);
        let lines = report.log_lines();
        let journal = report.journal();
        self.last_batch = if journal.is_empty() { None } else { Some(journal) };
        self.store = report.store;
        for line in &lines {
            self.log_line(line.clone());
        }
        lines
    }

    pub fn can_undo(&self) -> bool {
        self.last_batch.is_some()
    }

    /// Number of files moved by the last rename batch still open to undo
    pub fn last_batch_len(&self) -> usize {
        self.last_batch.as_ref().map_or(0, Vec::len)
    }

    /// Move the files of the last rename batch back to their old names.
    /// Returns the produced log lines, or `None` if there is nothing to undo.
    pub fn undo_last_rename(&mut self) -> Option<Vec<String>> {
        let journal = self.last_batch.take()?;
        info!("Undoing {} rename(s)", journal.len());
        let report = rename::revert(&self.store, &journal);
        self.store = report.store;
        for line in &report.log {
            self.log_line(line.clone());
        }
        Some(report.log)
    }

    pub fn snapshot(&self) -> Vec<Pair> {
        self.store.snapshot()
    }

    pub fn store(&self) -> &PairingStore {
        &self.store
    }

    pub fn log_lines(&self) -> &[String] {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn session_lines_pass_the_default_log_filter() {
        use crate::config::DEFAULT_LOG_FILTER;
        let filter: log::LevelFilter = DEFAULT_LOG_FILTER.parse().unwrap();
        assert!(SESSION_LOG_LEVEL <= filter);
    }

    #[test]
    fn log_starts_with_welcome_and_only_grows() {
        let mut session = Session::new();
        assert_eq!(session.log_lines().len(), WELCOME_MESSAGE.len());

        session.import(["/m/x.txt"]);
        session.clear();
        assert_eq!(session.log_lines().len(), WELCOME_MESSAGE.len() + 1);
        assert_eq!(session.log_lines().last().unwrap(), "Impossible to import file x.txt");
    }

    #[test]
    fn undo_is_a_single_step() {
        let dir = TempDir::new().unwrap();
        let video = dir.path().join("take1.mp4");
        let sub = dir.path().join("Final.srt");
        fs::write(&video, "v").unwrap();
        fs::write(&sub, "s").unwrap();

        let mut session = Session::new();
        session.import([video.clone(), sub]);
        assert!(!session.can_undo());

        session.rename_all(RenameDirection::Videos);
        assert!(session.can_undo());
        assert!(!video.exists());

        let lines = session.undo_last_rename().unwrap();
        assert_eq!(lines, vec!["Restored \"Final.mp4\" to \"take1.mp4\""]);
        assert!(video.exists());
        assert!(!session.can_undo());
        assert!(session.undo_last_rename().is_none());
    }

    #[test]
    fn clear_drops_the_undo_journal() {
        let dir = TempDir::new().unwrap();
        let video = dir.path().join("v.avi");
        let sub = dir.path().join("s.sub");
        fs::write(&video, "v").unwrap();
        fs::write(&sub, "s").unwrap();

        let mut session = Session::new();
        session.import([video, sub]);
        session.rename_all(RenameDirection::Subtitles);
        assert!(session.can_undo());

        session.clear();
        assert!(!session.can_undo());
        assert!(session.snapshot().is_empty());
    }

    #[test]
    fn batch_without_successes_leaves_nothing_to_undo() {
        let mut session = Session::new();
        session.import(["/m/only.mkv"]);
        let lines = session.rename_all(RenameDirection::Videos);
        assert_eq!(lines, vec!["Skipped files \"only.mkv\" & \"\""]);
        assert!(!session.can_undo());
    }
}
