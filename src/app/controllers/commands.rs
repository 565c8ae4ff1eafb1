/// Key identity as far as the editor shortcuts care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Escape,
    Other,
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: KeyCode,
    /// Ctrl, or Command on macOS.
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyChord {
    pub fn new(key: KeyCode, ctrl: bool, shift: bool) -> Self {
        Self { key, ctrl, shift }
    }

    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), true, false)
    }

    pub fn ctrl_shift(c: char) -> Self {
        Self::new(KeyCode::Char(c), true, true)
    }

    pub fn escape() -> Self {
        Self::new(KeyCode::Escape, false, false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Undo,
    Redo,
    ExitEditMode,
}

/// What the shell should do with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub command: EditorCommand,
    /// Stop the key from reaching widgets (and their default action).
    pub suppress_default: bool,
}

/// Maps global shortcuts to editor commands while edit mode is on.
///
/// The dispatcher is attached when edit mode starts and detached when it
/// ends or the window closes; a detached dispatcher never fires.
#[derive(Debug, Default)]
pub struct CommandDispatcher {
    attached: bool,
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach if `edit_mode` is already on at mount.
    pub fn mount(edit_mode: bool) -> Self {
        Self { attached: edit_mode }
    }

    pub fn attach(&mut self) {
        if !self.attached {
            log::debug!("editor shortcuts attached");
        }
        self.attached = true;
    }

    pub fn detach(&mut self) {
        if self.attached {
            log::debug!("editor shortcuts detached");
        }
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Follow an edit mode transition.
    pub fn sync(&mut self, edit_mode: bool) {
        if edit_mode { self.attach() } else { self.detach() }
    }

    pub fn dispatch(&self, chord: KeyChord, edit_mode: bool) -> Option<Dispatch> {
        if !self.attached || !edit_mode {
            return None;
        }
        resolve(chord)
    }
}

fn resolve(chord: KeyChord) -> Option<Dispatch> {
    let suppressed = |command| Some(Dispatch { command, suppress_default: true });
    match chord.key {
        KeyCode::Char(c) if chord.ctrl => match c.to_ascii_lowercase() {
            'z' if chord.shift => suppressed(EditorCommand::Redo),
            'z' => suppressed(EditorCommand::Undo),
            'y' => suppressed(EditorCommand::Redo),
            _ => None,
        },
        KeyCode::Escape => Some(Dispatch {
            command: EditorCommand::ExitEditMode,
            suppress_default: false,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached() -> CommandDispatcher {
        CommandDispatcher::mount(true)
    }

    #[test]
    fn test_ctrl_z_undoes() {
        let d = attached().dispatch(KeyChord::ctrl('z'), true).unwrap();
        assert_eq!(d.command, EditorCommand::Undo);
        assert!(d.suppress_default);
    }

    #[test]
    fn test_redo_bindings() {
        let dispatcher = attached();
        for chord in [KeyChord::ctrl('y'), KeyChord::ctrl_shift('z'), KeyChord::ctrl_shift('Z')] {
            let d = dispatcher.dispatch(chord, true).unwrap();
            assert_eq!(d.command, EditorCommand::Redo);
            assert!(d.suppress_default);
        }
    }

    #[test]
    fn test_escape_exits_without_suppressing() {
        let d = attached().dispatch(KeyChord::escape(), true).unwrap();
        assert_eq!(d.command, EditorCommand::ExitEditMode);
        assert!(!d.suppress_default);
    }

    #[test]
    fn test_view_mode_ignores_shortcuts() {
        let dispatcher = attached();
        assert_eq!(dispatcher.dispatch(KeyChord::ctrl('z'), false), None);
        assert_eq!(dispatcher.dispatch(KeyChord::escape(), false), None);
    }

    #[test]
    fn test_detached_ignores_shortcuts() {
        let mut dispatcher = attached();
        dispatcher.detach();
        assert!(!dispatcher.is_attached());
        assert_eq!(dispatcher.dispatch(KeyChord::ctrl('z'), true), None);
    }

    #[test]
    fn test_sync_follows_mode() {
        let mut dispatcher = CommandDispatcher::mount(false);
        assert!(!dispatcher.is_attached());
        dispatcher.sync(true);
        assert!(dispatcher.is_attached());
        dispatcher.sync(false);
        assert!(!dispatcher.is_attached());
    }

    #[test]
    fn test_unbound_keys() {
        let dispatcher = attached();
        assert_eq!(dispatcher.dispatch(KeyChord::new(KeyCode::Char('z'), false, false), true), None);
        assert_eq!(dispatcher.dispatch(KeyChord::ctrl('s'), true), None);
        assert_eq!(dispatcher.dispatch(KeyChord::new(KeyCode::Other, true, false), true), None);
    }
}
