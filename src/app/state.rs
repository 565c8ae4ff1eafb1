use std::time::{Duration, Instant};

use fltk::{
    app::{self, Sender, TimeoutHandle},
    prelude::*,
};

use super::controllers::commands::{EditorCommand, KeyChord};
use super::controllers::editor::{EditorSession, QuietPeriod};
use super::domain::content::SECTION_KEYS;
use super::domain::messages::Message;
use super::domain::notification::{Notification, Notifier};
use super::domain::settings::{AppSettings, ThemeMode};
use super::services::content_io::{ContentIo, IoOutcome, default_export_dir};
use super::services::kv_store::{EDIT_HINT_DISMISSED, KeyValueStore, LAST_IMPORT_DIR};
use crate::ui::dialogs::{BannerNotifier, DialogConfirm, hide_banner};
use crate::ui::file_dialogs::NativeContentPicker;
use crate::ui::main_window::MainWidgets;
use crate::ui::shortcuts::{attach_shortcuts, detach_shortcuts};
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

/// Builds a banner notifier from disjoint fields so it can live alongside a
/// mutable borrow of the session.
macro_rules! banner {
    ($self:ident) => {
        BannerNotifier {
            frame: &mut $self.widgets.banner_frame,
            flex: &mut $self.widgets.flex,
            sender: $self.sender,
            is_dark: $self.dark_mode,
            timer: &mut $self.banner_timer,
        }
    };
}

pub struct AppState {
    pub session: EditorSession,
    pub io: ContentIo,
    pub settings: AppSettings,
    pub store: Box<dyn KeyValueStore>,
    pub widgets: MainWidgets,
    pub sender: Sender<Message>,
    pub dark_mode: bool,
    selected_section: usize,
    history_timer: Option<TimeoutHandle>,
    banner_timer: Option<TimeoutHandle>,
    picker: NativeContentPicker,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: AppSettings,
        store: Box<dyn KeyValueStore>,
        dark_mode: bool,
    ) -> Self {
        let session = EditorSession::new(
            Default::default(),
            settings.history_limit,
            settings.debounce(),
        );
        let io = ContentIo::new(settings.export_dir().unwrap_or_else(default_export_dir));
        let picker = NativeContentPicker {
            last_directory: store.get(LAST_IMPORT_DIR),
        };

        let mut state = Self {
            session,
            io,
            settings,
            store,
            widgets,
            sender,
            dark_mode,
            selected_section: 0,
            history_timer: None,
            banner_timer: None,
            picker,
        };
        apply_theme(&mut state.widgets, dark_mode);
        state.widgets.section_list.select(1);
        state.show_section(0);
        let start_editing = state.settings.start_in_edit_mode;
        state.set_edit_mode(start_editing);
        state
    }

    pub fn show(&mut self) {
        self.widgets.wind.show();
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.widgets.wind, self.dark_mode);
    }

    // --- Sections ---

    fn selected_key(&self) -> &'static str {
        SECTION_KEYS[self.selected_section.min(SECTION_KEYS.len() - 1)]
    }

    pub fn show_section(&mut self, index: usize) {
        if index >= SECTION_KEYS.len() {
            return;
        }
        self.selected_section = index;
        let text = self
            .session
            .document()
            .section(self.selected_key())
            .and_then(|v| serde_json::to_string_pretty(v).ok())
            .unwrap_or_default();
        self.widgets.section_buffer.set_text(&text);
    }

    /// The section editor changed: apply it if it parses.
    pub fn on_section_edited(&mut self) {
        if !self.session.is_edit_mode() {
            return;
        }
        let key = self.selected_key();
        let text = self.widgets.section_buffer.text();
        match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(value) => {
                if self.session.update_section(key, value, Instant::now()) {
                    let delay = self.session.debounce_delay();
                    self.schedule_history_timer(delay);
                    self.refresh_toolbar();
                }
            }
            Err(e) => {
                log::debug!("section {} not applied: {}", key, e);
                self.widgets
                    .toolbar
                    .history_label
                    .set_label(&format!("{}: invalid JSON, not applied", key));
            }
        }
    }

    /// Cancel any pending timer and start a fresh one.
    fn schedule_history_timer(&mut self, delay: Duration) {
        if let Some(handle) = self.history_timer.take() {
            app::remove_timeout3(handle);
        }
        let s = self.sender;
        self.history_timer = Some(app::add_timeout3(delay.as_secs_f64(), move |_| {
            s.send(Message::HistoryDebounceElapsed)
        }));
    }

    pub fn on_history_timer(&mut self) {
        self.history_timer = None;
        match self.session.check_quiet_period(Instant::now()) {
            QuietPeriod::Recorded => self.refresh_toolbar(),
            QuietPeriod::Waiting(remaining) => self.schedule_history_timer(remaining),
            QuietPeriod::Idle => {}
        }
    }

    /// Drop the debounce timer. Any burst it was waiting on is recorded.
    fn stop_history_timer(&mut self) {
        if let Some(handle) = self.history_timer.take() {
            app::remove_timeout3(handle);
        }
        if self.session.settle_pending() {
            self.refresh_toolbar();
        }
    }

    // --- History ---

    pub fn undo(&mut self) {
        if !self.session.is_edit_mode() {
            return;
        }
        self.stop_history_timer();
        if self.session.undo() {
            self.after_document_replaced();
        }
    }

    pub fn redo(&mut self) {
        if !self.session.is_edit_mode() {
            return;
        }
        self.stop_history_timer();
        if self.session.redo() {
            self.after_document_replaced();
        }
    }

    pub fn on_key(&mut self, chord: KeyChord) {
        let Some(dispatch) = self.session.handle_key(chord) else {
            return;
        };
        // The session flushed any pending burst before running the command.
        self.stop_history_timer();
        match dispatch.command {
            EditorCommand::Undo | EditorCommand::Redo => self.after_document_replaced(),
            EditorCommand::ExitEditMode => self.apply_edit_mode_ui(false),
        }
    }

    fn after_document_replaced(&mut self) {
        let index = self.selected_section;
        self.show_section(index);
        self.refresh_toolbar();
    }

    // --- Edit mode ---

    pub fn toggle_edit_mode(&mut self) {
        let enabled = !self.session.is_edit_mode();
        self.set_edit_mode(enabled);
    }

    pub fn set_edit_mode(&mut self, enabled: bool) {
        if !enabled {
            self.stop_history_timer();
        }
        self.session.set_edit_mode(enabled);
        self.apply_edit_mode_ui(enabled);
    }

    fn apply_edit_mode_ui(&mut self, enabled: bool) {
        let w = &mut self.widgets;
        if enabled {
            attach_shortcuts(&mut w.wind, &self.sender);
            attach_shortcuts(&mut w.section_editor, &self.sender);
            w.section_editor.activate();
            w.toolbar.edit_button.set_label("Done");
        } else {
            detach_shortcuts(&mut w.wind);
            detach_shortcuts(&mut w.section_editor);
            w.section_editor.deactivate();
            w.toolbar.edit_button.set_label("Edit");
        }
        if enabled && !self.store.flag(EDIT_HINT_DISMISSED) {
            banner!(self).notify(Notification::success(
                "Edit mode",
                "Ctrl+Z undo, Ctrl+Y redo, Esc to finish",
            ));
            if let Err(e) = self.store.set(EDIT_HINT_DISMISSED, "true") {
                log::warn!("could not persist hint flag: {}", e);
            }
        }
        self.refresh_toolbar();
    }

    // --- Content IO ---

    pub fn export_content(&mut self) {
        let outcome = self.io.export_content(self.session.document(), &mut banner!(self));
        if outcome == IoOutcome::Done {
            self.session.mark_saved();
        }
        self.refresh_toolbar();
    }

    pub fn import_content(&mut self) {
        self.stop_history_timer();
        let outcome = self
            .io
            .import_content(&mut self.session, &mut self.picker, &mut banner!(self));
        if outcome == IoOutcome::Done {
            self.session.mark_saved();
            if let Some(dir) = self.picker.last_directory.as_deref() {
                if let Err(e) = self.store.set(LAST_IMPORT_DIR, dir) {
                    log::warn!("could not remember import folder: {}", e);
                }
            }
            self.after_document_replaced();
        }
    }

    pub fn reset_content(&mut self) {
        self.stop_history_timer();
        let outcome = self
            .io
            .reset_content(&mut self.session, &mut DialogConfirm, &mut banner!(self));
        if outcome == IoOutcome::Done {
            self.after_document_replaced();
        }
    }

    // --- View ---

    pub fn refresh_toolbar(&mut self) {
        let status = self.session.status();
        let editing = self.session.is_edit_mode();
        let tb = &mut self.widgets.toolbar;

        for (button, enabled) in [
            (&mut tb.undo_button, editing && status.can_undo),
            (&mut tb.redo_button, editing && status.can_redo),
        ] {
            if enabled { button.activate() } else { button.deactivate() }
        }
        tb.history_label
            .set_label(&format!("History: {} step(s)", status.history_length));
        tb.dirty_label
            .set_label(if status.has_changes { "\u{25cf} Unsaved changes" } else { "" });

        let prefix = if status.has_changes { "*" } else { "" };
        let mode = if editing { " [editing]" } else { "" };
        self.widgets
            .wind
            .set_label(&format!("{}Spark Studio{}", prefix, mode));
        self.widgets.wind.redraw();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        apply_theme(&mut self.widgets, self.dark_mode);
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.widgets.wind, self.dark_mode);

        self.settings.theme_mode = if self.dark_mode { ThemeMode::Dark } else { ThemeMode::Light };
        if let Err(e) = self.settings.save() {
            log::warn!("could not save settings: {}", e);
        }
    }

    pub fn dismiss_banner(&mut self) {
        if let Some(handle) = self.banner_timer.take() {
            app::remove_timeout3(handle);
        }
        hide_banner(&mut self.widgets.banner_frame, &mut self.widgets.flex);
    }

    /// Window teardown: keep the last burst, drop timers and shortcut handlers.
    pub fn shutdown(&mut self) {
        self.stop_history_timer();
        self.session.close();
        detach_shortcuts(&mut self.widgets.wind);
        detach_shortcuts(&mut self.widgets.section_editor);
        log::info!(
            "closing with {} undo step(s), unsaved changes: {}",
            self.session.history().undo_depth(),
            self.session.status().has_changes
        );
    }
}
