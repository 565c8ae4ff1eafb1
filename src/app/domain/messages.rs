use crate::app::controllers::commands::KeyChord;

/// All messages that can be sent through the FLTK channel.
/// Each menu/button callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    ExportContent,
    ImportContent,
    ResetContent,
    FileQuit,
    WindowClose,

    // Edit
    EditUndo,
    EditRedo,
    ToggleEditMode,
    ExitEditMode,

    // Sections
    SectionSelected(usize),
    SectionEdited,
    HistoryDebounceElapsed,

    // Global shortcut caught by the window handler
    KeyPressed(KeyChord),

    // View
    ToggleDarkMode,
    DismissBanner,
}
