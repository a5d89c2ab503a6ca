//! Rename engine
//!
//! Renames one side of every complete pair after the other side and builds a
//! fresh pairing store holding the post-rename files. Renames run one after
//! the other on the calling thread, in display order, so the log reads in the
//! same order the files were touched.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::data_structures::{FileRef, Pair, RenameDirection};
use crate::error::PairingError;
use crate::helper_functions::Utils;
use crate::pairing::PairingStore;

/// One rename that went through, kept so it can be undone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// What happened to a single pair
#[derive(Debug)]
pub enum RenameOutcome {
    Renamed { from: FileRef, to: FileRef },
    Skipped(PairingError),
    Failed(PairingError),
}

impl RenameOutcome {
    /// Line appended to the session log
    pub fn log_line(&self) -> String {
        match self {
            RenameOutcome::Renamed { from, to } => {
                format!("Renamed \"{}\" to \"{}\"", from.name(), to.name())
            }
            RenameOutcome::Skipped(err) | RenameOutcome::Failed(err) => err.to_string(),
        }
    }
}

/// Result of a rename batch
#[derive(Debug)]
pub struct RenameReport {
    pub store: PairingStore,
    pub outcomes: Vec<RenameOutcome>,
}

impl RenameReport {
    pub fn log_lines(&self) -> Vec<String> {
        self.outcomes.iter().map(RenameOutcome::log_line).collect()
    }

    /// Successful renames in the order they were applied
    pub fn journal(&self) -> Vec<RenameRecord> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                RenameOutcome::Renamed { from, to } => Some(RenameRecord {
                    from: from.path().to_path_buf(),
                    to: to.path().to_path_buf(),
                }),
                _ => None,
            })
            .collect()
    }

    pub fn renamed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RenameOutcome::Renamed { .. }))
            .count()
    }
}

/// Rename a file without ever replacing another one.
///
/// A destination that resolves to the file being renamed (its own path, or a
/// case-only change on a case-insensitive filesystem) is handed to the OS.
pub fn rename_file(from: &Path, to: &Path) -> io::Result<()> {
    if from != to && to.exists() && !Utils::is_same_file(from, to) {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", to.display()),
        ));
    }
    std::fs::rename(from, to)
}

/// Rename every complete pair of `store` in `direction`
pub fn rename_all(store: &PairingStore, direction: RenameDirection) -> RenameReport {
    let mut next = PairingStore::new();
    let mut outcomes = Vec::with_capacity(store.len());
    // Paths of every file in the batch plus destinations taken so far
    let mut claimed: HashSet<PathBuf> = store
        .iter()
        .flat_map(|pair| [pair.video.path(), pair.subtitle.path()])
        .filter(|path| !path.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .collect();

    for pair in store.iter() {
        let outcome = rename_pair(pair, direction, &mut claimed);
        let carried = match &outcome {
            RenameOutcome::Renamed { to, .. } => match direction {
                RenameDirection::Videos => Pair::new(to.clone(), pair.subtitle.clone()),
                RenameDirection::Subtitles => Pair::new(pair.video.clone(), to.clone()),
            },
            _ => Some(pair.clone()),
        };
        if let Some(carried) = carried {
            next.insert(carried);
        }
        outcomes.push(outcome);
    }

    let report = RenameReport { store: next, outcomes };
    info!(
        "Rename of {} finished: {} of {} pair(s) renamed",
        direction.label(),
        report.renamed_count(),
        report.outcomes.len()
    );
    report
}

fn rename_pair(pair: &Pair, direction: RenameDirection, claimed: &mut HashSet<PathBuf>) -> RenameOutcome {
    if !pair.is_complete() {
        let err = PairingError::IncompletePair {
            video: pair.video.name(),
            subtitle: pair.subtitle.name(),
        };
        info!("{}", err);
        return RenameOutcome::Skipped(err);
    }

    let (source, target) = match direction {
        RenameDirection::Videos => (&pair.subtitle, &pair.video),
        RenameDirection::Subtitles => (&pair.video, &pair.subtitle),
    };
    // Both sides passed classification, so both carry an extension
    let Some(new_file) = target.renamed_after(source) else {
        return RenameOutcome::Failed(PairingError::RenameFailure {
            from: target.name(),
            to: source.stem(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "file has no extension"),
        });
    };

    let result = if new_file.path() != target.path() && claimed.contains(new_file.path()) {
        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} belongs to another pair", new_file.path().display()),
        ))
    } else {
        rename_file(target.path(), new_file.path())
    };

    match result {
        Ok(()) => {
            claimed.insert(new_file.path().to_path_buf());
            info!("Renamed {} -> {}", target.path().display(), new_file.path().display());
            RenameOutcome::Renamed {
                from: target.clone(),
                to: new_file,
            }
        }
        Err(source) => {
            warn!(
                "Failed to rename {} -> {}: {}",
                target.path().display(),
                new_file.path().display(),
                source
            );
            RenameOutcome::Failed(PairingError::RenameFailure {
                from: target.name(),
                to: new_file.name(),
                source,
            })
        }
    }
}

/// Result of undoing a rename batch
#[derive(Debug)]
pub struct RevertReport {
    pub store: PairingStore,
    pub log: Vec<String>,
    pub restored: usize,
}

/// Rename the files of `journal` back, newest first, and point the pairs of
/// `store` at the restored paths. A file that cannot be moved back stays in
/// the store under its renamed path.
pub fn revert(store: &PairingStore, journal: &[RenameRecord]) -> RevertReport {
    let mut log = Vec::with_capacity(journal.len());
    let mut restored: Vec<&RenameRecord> = Vec::new();

    for record in journal.iter().rev() {
        let renamed = FileRef::new(&record.to);
        let original = FileRef::new(&record.from);
        match rename_file(&record.to, &record.from) {
            Ok(()) => {
                info!("Restored {} -> {}", record.to.display(), record.from.display());
                log.push(format!(
                    "Restored \"{}\" to \"{}\"",
                    renamed.name(),
                    original.name()
                ));
                restored.push(record);
            }
            Err(source) => {
                warn!("Failed to restore {}: {}", record.to.display(), source);
                let err = PairingError::RenameFailure {
                    from: renamed.name(),
                    to: original.name(),
                    source,
                };
                log.push(err.to_string());
            }
        }
    }

    let restore = |file: &FileRef| -> FileRef {
        restored
            .iter()
            .find(|r| r.to.as_path() == file.path())
            .map(|r| FileRef::new(&r.from))
            .unwrap_or_else(|| file.clone())
    };
    let mut next = PairingStore::new();
    for pair in store.iter() {
        if let Some(pair) = Pair::new(restore(&pair.video), restore(&pair.subtitle)) {
            next.insert(pair);
        }
    }

    RevertReport {
        store: next,
        log,
        restored: restored.len(),
    }
}
