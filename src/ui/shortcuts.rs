use fltk::{
    app::{self, Sender},
    enums::{Event, EventState, Key},
    prelude::*,
};

use crate::app::controllers::commands::{CommandDispatcher, KeyChord, KeyCode};
use crate::app::domain::messages::Message;

/// Read the key press FLTK is currently delivering.
pub fn current_chord() -> KeyChord {
    let state = app::event_state();
    let key = app::event_key();
    let code = if key == Key::Escape {
        KeyCode::Escape
    } else {
        key.to_char().map(KeyCode::Char).unwrap_or(KeyCode::Other)
    };
    KeyChord::new(
        code,
        state.contains(EventState::Ctrl) || state.contains(EventState::Command),
        state.contains(EventState::Shift),
    )
}

/// Install the edit-mode shortcut handler on `widget`.
///
/// Keys that map to a command are forwarded as `Message::KeyPressed` and
/// consumed, so the text editor's own Ctrl+Z never runs and FLTK does not
/// redeliver the key to the window as a second `KeyDown` or `Shortcut`.
/// Escape only leaves edit mode; nothing else in the window acts on it.
pub fn attach_shortcuts<W: WidgetBase>(widget: &mut W, sender: &Sender<Message>) {
    let s = *sender;
    let dispatcher = CommandDispatcher::mount(true);
    widget.handle(move |_, ev| match ev {
        Event::KeyDown | Event::Shortcut => match forwarded(&dispatcher, current_chord()) {
            Some(chord) => {
                s.send(Message::KeyPressed(chord));
                true
            }
            None => false,
        },
        _ => false,
    });
}

/// The chord to forward, if it names an edit-mode command. A forwarded key
/// is always consumed.
fn forwarded(dispatcher: &CommandDispatcher, chord: KeyChord) -> Option<KeyChord> {
    dispatcher.dispatch(chord, true).map(|_| chord)
}

/// Remove the shortcut handler; events fall through to default handling.
pub fn detach_shortcuts<W: WidgetBase>(widget: &mut W) {
    widget.handle(|_, _| false);
}
