use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::messages::Message;

/// Menu items carry no Ctrl+Z/Ctrl+Y shortcuts: those belong to the
/// edit-mode handler so they stay inert outside edit mode.
pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, initial_dark_mode: bool) {
    let s = sender;

    // File
    menu.add("File/Export Content...", Shortcut::Ctrl | 'e', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ExportContent) });
    menu.add("File/Import Content...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ImportContent) });
    menu.add("File/Restore Defaults...", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::ResetContent) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Edit
    menu.add("Edit/Undo", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditUndo) });
    menu.add("Edit/Redo", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditRedo) });
    menu.add("Edit/Toggle Edit Mode", Shortcut::Ctrl | 'd', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ToggleEditMode) });
    menu.add("Edit/Finish Editing", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ExitEditMode) });

    // View
    let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Dark Mode", Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });
}
