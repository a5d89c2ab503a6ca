//! Ordered store of video/subtitle pairs
//!
//! Entries are kept in a `BTreeMap` whose key gives the display order:
//! named videos ascend by base name (full path breaks ties) and rows without
//! a video come last, in the order they were inserted. Placeholder videos get
//! a fresh id each, so two rows lacking a video never merge.

use std::collections::BTreeMap;
use std::path::PathBuf;

use log::{debug, warn};

use crate::data_structures::{FileRef, MediaKind, Pair};
use crate::error::{PairingError, ReorderError};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum VideoKey {
    Named { name: String, path: PathBuf },
    Placeholder(u64),
}

/// Outcome of an import batch
#[derive(Debug, Default)]
pub struct ImportReport {
    pub videos: usize,
    pub subtitles: usize,
    pub rejected: Vec<PairingError>,
}

impl ImportReport {
    /// Session log lines for this batch, one per rejected file
    pub fn log_lines(&self) -> Vec<String> {
        self.rejected.iter().map(|e| e.to_string()).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PairingStore {
    entries: BTreeMap<VideoKey, Pair>,
    next_placeholder: u64,
}

impl PairingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.entries.values()
    }

    /// Pair shown at a given row
    pub fn get(&self, row: usize) -> Option<&Pair> {
        self.entries.values().nth(row)
    }

    /// Owned copy of the pairs in display order
    pub fn snapshot(&self) -> Vec<Pair> {
        self.entries.values().cloned().collect()
    }

    /// Insert a pair under its video, replacing any entry for the same video
    pub fn insert(&mut self, pair: Pair) {
        let key = self.key_for(&pair.video);
        if let Some(previous) = self.entries.insert(key, pair) {
            debug!("Replaced pairing for {}", previous.video);
        }
    }

    fn key_for(&mut self, video: &FileRef) -> VideoKey {
        if video.is_placeholder() {
            let id = self.next_placeholder;
            self.next_placeholder += 1;
            VideoKey::Placeholder(id)
        } else {
            VideoKey::Named {
                name: video.name(),
                path: video.path().to_path_buf(),
            }
        }
    }

    /// Classify `paths` and pair the accepted videos and subtitles by position
    pub fn import<I, P>(&mut self, paths: I) -> ImportReport
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut report = ImportReport::default();
        let mut videos = Vec::new();
        let mut subtitles = Vec::new();

        for path in paths {
            let file = FileRef::new(path);
            match file.kind() {
                Some(MediaKind::Video) => videos.push(file),
                Some(MediaKind::Subtitle) => subtitles.push(file),
                None => {
                    warn!("Rejected {}: unsupported extension", file.path().display());
                    report.rejected.push(PairingError::UnclassifiableFile {
                        name: file.name(),
                        path: file.path().to_path_buf(),
                    });
                }
            }
        }
        report.videos = videos.len();
        report.subtitles = subtitles.len();

        let rows = videos.len().max(subtitles.len());
        let mut videos = videos.into_iter();
        let mut subtitles = subtitles.into_iter();
        for _ in 0..rows {
            let video = videos.next().unwrap_or_default();
            let subtitle = subtitles.next().unwrap_or_default();
            // One side always exists while i < max(len)
            if let Some(pair) = Pair::new(video, subtitle) {
                self.insert(pair);
            }
        }
        debug!(
            "Imported {} video(s) and {} subtitle(s), {} rejected",
            report.videos,
            report.subtitles,
            report.rejected.len()
        );
        report
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Swap the subtitles shown at rows `a` and `b`; each row keeps its video.
    pub fn reorder(&mut self, a: usize, b: usize) -> Result<(), ReorderError> {
        let len = self.entries.len();
        for index in [a, b] {
            if index >= len {
                return Err(ReorderError::RowOutOfRange { index, len });
            }
        }
        if a == b {
            return Err(ReorderError::SameRow(a));
        }

        let keys: Vec<VideoKey> = self.entries.keys().cloned().collect();
        let (key_a, key_b) = (&keys[a], &keys[b]);
        let sub_a = self.entries[key_a].subtitle.clone();
        let sub_b = self.entries[key_b].subtitle.clone();

        let leaves_empty = |key: &VideoKey, sub: &FileRef| {
            matches!(key, VideoKey::Placeholder(_)) && sub.is_placeholder()
        };
        if leaves_empty(key_a, &sub_b) || leaves_empty(key_b, &sub_a) {
            return Err(ReorderError::EmptyPair(a, b));
        }

        if let Some(pair) = self.entries.get_mut(key_a) {
            pair.subtitle = sub_b;
        }
        if let Some(pair) = self.entries.get_mut(key_b) {
            pair.subtitle = sub_a;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(store: &PairingStore) -> Vec<(String, String)> {
        store
            .iter()
            .map(|p| (p.video().name(), p.subtitle().name()))
            .collect()
    }

    #[test]
    fn import_classifies_each_path_once() {
        let mut store = PairingStore::new();
        let report = store.import(["/m/a.MP4", "/m/b.srt", "/m/c.txt", "/m/d", "/m/e.Sub", "/m/f.mkv"]);
        assert_eq!(report.videos, 2);
        assert_eq!(report.subtitles, 2);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(
            report.log_lines(),
            vec!["Impossible to import file c.txt", "Impossible to import file d"]
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn import_pairs_by_position_with_placeholders() {
        let mut store = PairingStore::new();
        store.import(["/m/a.mp4", "/m/b.avi", "/m/a.srt"]);
        assert_eq!(
            names(&store),
            vec![
                ("a.mp4".to_string(), "a.srt".to_string()),
                ("b.avi".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn extra_subtitles_get_placeholder_videos_sorted_last() {
        let mut store = PairingStore::new();
        store.import(["/m/z.mkv", "/m/1.srt", "/m/2.srt", "/m/3.srt"]);
        assert_eq!(store.len(), 3);
        let rows = names(&store);
        assert_eq!(rows[0], ("z.mkv".to_string(), "1.srt".to_string()));
        assert_eq!(rows[1], (String::new(), "2.srt".to_string()));
        assert_eq!(rows[2], (String::new(), "3.srt".to_string()));
    }

    #[test]
    fn placeholder_rows_never_merge() {
        let mut store = PairingStore::new();
        store.import(["/m/1.srt"]);
        store.import(["/m/2.srt"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn reimporting_a_video_overwrites_its_subtitle() {
        let mut store = PairingStore::new();
        store.import(["/m/a.mp4", "/m/old.srt"]);
        store.import(["/m/a.mp4", "/m/new.srt"]);
        assert_eq!(names(&store), vec![("a.mp4".to_string(), "new.srt".to_string())]);
    }

    #[test]
    fn snapshot_orders_by_name() {
        let mut store = PairingStore::new();
        store.import(["/m/c.mp4", "/m/a.mp4", "/m/b.mp4", "/m/1.srt", "/m/2.srt", "/m/3.srt"]);
        let videos: Vec<String> = store.snapshot().iter().map(|p| p.video().name()).collect();
        assert_eq!(videos, vec!["a.mp4", "b.mp4", "c.mp4"]);
        // Input order decides pairing, display order decides rows
        assert_eq!(store.get(0).unwrap().subtitle().name(), "2.srt");
    }

    #[test]
    fn reorder_swaps_subtitles_and_is_self_inverse() {
        let mut store = PairingStore::new();
        store.import(["/m/a.mp4", "/m/b.mp4", "/m/b.srt", "/m/a.srt"]);
        let before = store.snapshot();

        store.reorder(0, 1).unwrap();
        assert_eq!(
            names(&store),
            vec![
                ("a.mp4".to_string(), "a.srt".to_string()),
                ("b.mp4".to_string(), "b.srt".to_string()),
            ]
        );
        assert_eq!(store.len(), 2);

        store.reorder(0, 1).unwrap();
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn reorder_rejects_same_row_and_out_of_range() {
        let mut store = PairingStore::new();
        store.import(["/m/a.mp4", "/m/a.srt"]);
        let before = store.snapshot();
        assert_eq!(store.reorder(0, 0), Err(ReorderError::SameRow(0)));
        assert_eq!(
            store.reorder(0, 3),
            Err(ReorderError::RowOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn reorder_refuses_to_build_an_empty_pair() {
        let mut store = PairingStore::new();
        // (a.mp4, placeholder) then (placeholder, x.srt) after a second import
        store.import(["/m/a.mp4"]);
        store.import(["/m/x.srt"]);
        assert_eq!(store.reorder(0, 1), Err(ReorderError::EmptyPair(0, 1)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn reorder_can_move_a_subtitle_onto_a_lone_video() {
        let mut store = PairingStore::new();
        store.import(["/m/a.mp4", "/m/b.mp4", "/m/x.srt"]);
        store.reorder(0, 1).unwrap();
        assert_eq!(
            names(&store),
            vec![
                ("a.mp4".to_string(), String::new()),
                ("b.mp4".to_string(), "x.srt".to_string()),
            ]
        );
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = PairingStore::new();
        store.import(["/m/a.mp4", "/m/b.srt", "/m/c.srt"]);
        store.reorder(0, 1).unwrap();
        store.clear();
        assert!(store.is_empty());
        assert!(store.snapshot().is_empty());
    }
}
