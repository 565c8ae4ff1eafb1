use std::time::{Duration, Instant};

use serde_json::{Map, Value};

use super::commands::{CommandDispatcher, Dispatch, EditorCommand, KeyChord};
use super::debounce::Debouncer;
use super::history::{ContentHistory, HistoryStatus, SectionUpdater, apply_snapshot};
use crate::app::domain::content::{ContentDocument, is_known_section};

impl SectionUpdater for ContentDocument {
    fn update_section(&mut self, key: &str, value: Value) {
        self.set_section(key, value);
    }
}

/// What the debounce timer should do after checking the pending burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuietPeriod {
    /// The burst was recorded as one history step.
    Recorded,
    /// The timer fired early; check again after this long.
    Waiting(Duration),
    /// Nothing pending.
    Idle,
}

/// The editor context: sole owner of the live content document.
///
/// Edits go through `update_section`, which feeds the debouncer; undo and
/// redo write restored sections straight into the document so they never
/// record themselves as new edits.
pub struct EditorSession {
    document: ContentDocument,
    history: ContentHistory,
    debouncer: Debouncer,
    dispatcher: CommandDispatcher,
    edit_mode: bool,
}

impl EditorSession {
    pub fn new(initial: ContentDocument, history_limit: usize, debounce: Duration) -> Self {
        let history = ContentHistory::with_limit(&initial, history_limit);
        Self {
            document: initial,
            history,
            debouncer: Debouncer::new(debounce),
            dispatcher: CommandDispatcher::new(),
            edit_mode: false,
        }
    }

    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    pub fn history(&self) -> &ContentHistory {
        &self.history
    }

    pub fn status(&self) -> HistoryStatus {
        self.history.status(&self.document)
    }

    pub fn debounce_delay(&self) -> Duration {
        self.debouncer.delay()
    }

    // --- Edit mode ---

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn set_edit_mode(&mut self, enabled: bool) {
        if self.edit_mode == enabled {
            return;
        }
        if !enabled {
            self.flush_pending();
        }
        self.edit_mode = enabled;
        self.dispatcher.sync(enabled);
        log::info!("edit mode {}", if enabled { "on" } else { "off" });
    }

    pub fn toggle_edit_mode(&mut self) {
        self.set_edit_mode(!self.edit_mode);
    }

    /// Route a key press through the shortcut table and run the command.
    pub fn handle_key(&mut self, chord: KeyChord) -> Option<Dispatch> {
        let dispatch = self.dispatcher.dispatch(chord, self.edit_mode)?;
        match dispatch.command {
            EditorCommand::Undo => {
                self.undo();
            }
            EditorCommand::Redo => {
                self.redo();
            }
            EditorCommand::ExitEditMode => self.set_edit_mode(false),
        }
        Some(dispatch)
    }

    // --- Editing ---

    /// Apply an in-place edit to one section and start (or extend) the
    /// debounce window. Returns false for unknown keys or no-op edits.
    ///
    /// A burst whose quiet period already elapsed is recorded first, so an
    /// edit never extends a burst that should have closed.
    pub fn update_section(&mut self, key: &str, value: Value, now: Instant) -> bool {
        if !is_known_section(key) || self.document.section(key) == Some(&value) {
            return false;
        }
        self.commit_pending(now);
        let current = &self.document;
        self.debouncer.schedule(|| current.clone(), now);
        self.document.set_section(key, value);
        true
    }

    /// Record the pending burst if its quiet period has elapsed.
    pub fn commit_pending(&mut self, now: Instant) -> bool {
        let before = self.debouncer.poll(now);
        self.record(before)
    }

    /// Record the pending burst immediately.
    pub fn flush_pending(&mut self) -> bool {
        let before = self.debouncer.flush();
        self.record(before)
    }

    /// Debounce timer callback: record the burst or say how long to wait.
    pub fn check_quiet_period(&mut self, now: Instant) -> QuietPeriod {
        if self.commit_pending(now) {
            return QuietPeriod::Recorded;
        }
        match self.debouncer.remaining(now) {
            Some(remaining) => QuietPeriod::Waiting(remaining),
            None => QuietPeriod::Idle,
        }
    }

    /// The debounce timer was dropped without being rescheduled. Record the
    /// pending burst now so the next edit starts a fresh one.
    pub fn settle_pending(&mut self) -> bool {
        let recorded = self.flush_pending();
        if recorded {
            log::debug!("pending edit recorded after the debounce timer was dropped");
        }
        recorded
    }

    pub fn has_pending_edit(&self) -> bool {
        self.debouncer.is_pending()
    }

    fn record(&mut self, before: Option<ContentDocument>) -> bool {
        match before {
            Some(before) if before != self.document => {
                self.history.push_state(before);
                true
            }
            _ => false,
        }
    }

    // --- History ---

    pub fn undo(&mut self) -> bool {
        self.flush_pending();
        match self.history.undo(&self.document) {
            Some(snapshot) => {
                apply_snapshot(&snapshot, &mut self.document);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        self.flush_pending();
        match self.history.redo(&self.document) {
            Some(snapshot) => {
                apply_snapshot(&snapshot, &mut self.document);
                true
            }
            None => false,
        }
    }

    pub fn mark_saved(&mut self) {
        self.history.mark_saved(&self.document);
    }

    // --- Bulk replacement ---

    /// Replace every known section present in `sections` as one undo step.
    /// Unknown keys are skipped. Returns the number of sections replaced.
    pub fn replace_sections(&mut self, sections: &Map<String, Value>) -> usize {
        self.flush_pending();
        let before = self.document.clone();
        let mut replaced = 0;
        for (key, value) in sections {
            if is_known_section(key) {
                self.document.update_section(key, value.clone());
                replaced += 1;
            } else {
                log::debug!("skipping unknown section {key:?}");
            }
        }
        self.record(Some(before));
        replaced
    }

    /// Restore the compiled-in defaults and forget all history.
    pub fn reset_to_defaults(&mut self) {
        self.debouncer.cancel();
        self.document = ContentDocument::defaults();
        self.history.reset(&self.document);
    }

    /// Teardown: keep the last burst in history and drop the shortcuts.
    pub fn close(&mut self) {
        self.flush_pending();
        self.dispatcher.detach();
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(
            ContentDocument::defaults(),
            super::history::DEFAULT_HISTORY_LIMIT,
            super::debounce::DEFAULT_DEBOUNCE,
        )
    }
}
