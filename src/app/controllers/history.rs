use std::collections::VecDeque;

use crate::app::domain::content::{ContentDocument, SECTION_KEYS};

pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Receives restored sections when a snapshot is reapplied.
///
/// Implemented by whoever owns the live document; the history never holds a
/// writable reference to it.
pub trait SectionUpdater {
    fn update_section(&mut self, key: &str, value: serde_json::Value);
}

/// Toolbar-facing view of the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryStatus {
    pub can_undo: bool,
    pub can_redo: bool,
    pub history_length: usize,
    pub has_changes: bool,
}

/// Linear undo/redo history over content snapshots.
///
/// The live document stays with its owner and is passed in on every call.
/// `past` runs oldest to newest, `future` nearest to farthest.
pub struct ContentHistory {
    past: VecDeque<ContentDocument>,
    future: VecDeque<ContentDocument>,
    limit: usize,
    baseline: String,
}

impl ContentHistory {
    pub fn new(initial: &ContentDocument) -> Self {
        Self::with_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(initial: &ContentDocument, limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: VecDeque::new(),
            limit: limit.max(1),
            baseline: initial.fingerprint(),
        }
    }

    /// Record a committed edit. `previous` is the document as it was before
    /// the edit; it becomes the newest undo step and any redo steps are dropped.
    pub fn push_state(&mut self, previous: ContentDocument) {
        self.past.push_back(previous);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
        self.future.clear();
        log::debug!("history push: {} undo / 0 redo", self.past.len());
    }

    /// Step back. Returns the snapshot to apply, or None when there is nothing
    /// to undo.
    pub fn undo(&mut self, current: &ContentDocument) -> Option<ContentDocument> {
        let snapshot = self.past.pop_back()?;
        self.future.push_front(current.clone());
        log::debug!("undo: {} undo / {} redo", self.past.len(), self.future.len());
        Some(snapshot)
    }

    /// Step forward. Returns the snapshot to apply, or None when there is
    /// nothing to redo.
    pub fn redo(&mut self, current: &ContentDocument) -> Option<ContentDocument> {
        let snapshot = self.future.pop_front()?;
        self.past.push_back(current.clone());
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
        log::debug!("redo: {} undo / {} redo", self.past.len(), self.future.len());
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of undo steps available.
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Drop both stacks and take `document` as the new baseline.
    pub fn reset(&mut self, document: &ContentDocument) {
        self.past.clear();
        self.future.clear();
        self.baseline = document.fingerprint();
    }

    /// Capture `document` as the save point used by `has_changes`.
    pub fn mark_saved(&mut self, document: &ContentDocument) {
        self.baseline = document.fingerprint();
    }

    pub fn has_changes(&self, current: &ContentDocument) -> bool {
        current.fingerprint() != self.baseline
    }

    pub fn status(&self, current: &ContentDocument) -> HistoryStatus {
        HistoryStatus {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            history_length: self.undo_depth(),
            has_changes: self.has_changes(current),
        }
    }
}

/// Reapply a snapshot one section at a time through the updater.
pub fn apply_snapshot<U: SectionUpdater + ?Sized>(snapshot: &ContentDocument, updater: &mut U) {
    for key in SECTION_KEYS {
        if let Some(value) = snapshot.section(key) {
            updater.update_section(key, value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc_with_title(title: &str) -> ContentDocument {
        let mut doc = ContentDocument::defaults();
        doc.set_section("hero", json!({ "title": title }));
        doc
    }

    /// Simulates the editor: commits `next` as the live document.
    fn commit(history: &mut ContentHistory, live: &mut ContentDocument, next: ContentDocument) {
        let previous = std::mem::replace(live, next);
        history.push_state(previous);
    }

    struct Recorder {
        doc: ContentDocument,
        calls: Vec<String>,
    }

    impl SectionUpdater for Recorder {
        fn update_section(&mut self, key: &str, value: serde_json::Value) {
            self.calls.push(key.to_string());
            self.doc.set_section(key, value);
        }
    }

    #[test]
    fn test_new_history_is_empty() {
        let doc = ContentDocument::defaults();
        let history = ContentHistory::new(&doc);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo_depth(), 0);
        assert!(!history.has_changes(&doc));
    }

    #[test]
    fn test_undo_redo_inverse() {
        let mut live = doc_with_title("d0");
        let mut history = ContentHistory::new(&live);
        let docs: Vec<_> = (1..=5).map(|i| doc_with_title(&format!("d{i}"))).collect();
        for d in &docs {
            commit(&mut history, &mut live, d.clone());
        }

        for _ in 0..5 {
            live = history.undo(&live).unwrap();
        }
        assert_eq!(live, doc_with_title("d0"));
        assert!(!history.can_undo());

        for _ in 0..5 {
            live = history.redo(&live).unwrap();
        }
        assert_eq!(live, docs[4]);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut live = doc_with_title("a");
        let mut history = ContentHistory::new(&live);
        commit(&mut history, &mut live, doc_with_title("b"));
        live = history.undo(&live).unwrap();
        assert!(history.can_redo());

        commit(&mut history, &mut live, doc_with_title("x"));
        assert!(!history.can_redo());
        assert!(history.redo(&live).is_none());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut live = doc_with_title("0");
        let mut history = ContentHistory::new(&live);
        for i in 1..=25 {
            commit(&mut history, &mut live, doc_with_title(&i.to_string()));
        }
        assert_eq!(history.undo_depth(), DEFAULT_HISTORY_LIMIT);

        for _ in 0..20 {
            live = history.undo(&live).unwrap();
        }
        // Oldest retained snapshot is the document before edit #6.
        assert_eq!(live, doc_with_title("5"));
        let before = live.clone();
        assert!(history.undo(&live).is_none());
        assert_eq!(live, before);
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let live = ContentDocument::defaults();
        let mut history = ContentHistory::new(&live);
        assert!(history.undo(&live).is_none());
        assert!(history.redo(&live).is_none());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_reset_clears_stacks_and_baseline() {
        let mut live = doc_with_title("a");
        let mut history = ContentHistory::new(&live);
        commit(&mut history, &mut live, doc_with_title("b"));
        commit(&mut history, &mut live, doc_with_title("c"));
        live = history.undo(&live).unwrap();
        assert!(history.has_changes(&live));

        history.reset(&live);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(!history.has_changes(&live));
    }

    #[test]
    fn test_has_changes_follows_baseline() {
        let mut live = ContentDocument::defaults();
        let mut history = ContentHistory::new(&live);
        commit(&mut history, &mut live, doc_with_title("edited"));
        assert!(history.has_changes(&live));

        // Undoing back to the baseline content is not a change.
        live = history.undo(&live).unwrap();
        assert!(!history.has_changes(&live));

        live = history.redo(&live).unwrap();
        history.mark_saved(&live);
        assert!(!history.has_changes(&live));
    }

    #[test]
    fn test_status_snapshot() {
        let mut live = ContentDocument::defaults();
        let mut history = ContentHistory::new(&live);
        commit(&mut history, &mut live, doc_with_title("one"));
        let status = history.status(&live);
        assert_eq!(
            status,
            HistoryStatus {
                can_undo: true,
                can_redo: false,
                history_length: 1,
                has_changes: true,
            }
        );
    }

    #[test]
    fn test_apply_snapshot_updates_each_section() {
        let snapshot = doc_with_title("restored");
        let mut recorder = Recorder {
            doc: ContentDocument::defaults(),
            calls: Vec::new(),
        };
        apply_snapshot(&snapshot, &mut recorder);
        assert_eq!(recorder.calls.len(), SECTION_KEYS.len());
        assert_eq!(recorder.doc, snapshot);
    }

    #[test]
    fn test_custom_limit() {
        let mut live = doc_with_title("0");
        let mut history = ContentHistory::with_limit(&live, 3);
        for i in 1..=10 {
            commit(&mut history, &mut live, doc_with_title(&i.to_string()));
        }
        assert_eq!(history.undo_depth(), 3);
    }
}
