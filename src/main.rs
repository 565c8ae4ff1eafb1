use fltk::{
    app,
    enums::Event,
    prelude::*,
};

use spark_studio::app::domain::messages::Message;
use spark_studio::app::domain::settings::AppSettings;
use spark_studio::app::infrastructure::platform::resolve_dark_mode;
use spark_studio::app::services::kv_store::{JsonFileStore, KeyValueStore, MemoryStore};
use spark_studio::app::state::AppState;
use spark_studio::ui::main_window::build_main_window;
use spark_studio::ui::menu::build_menu;

fn open_store() -> Box<dyn KeyValueStore> {
    match JsonFileStore::open(JsonFileStore::default_path()) {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("Failed to open preference store: {}. Flags will not persist.", e);
            Box::new(MemoryStore::new())
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let dark_mode = resolve_dark_mode(settings.theme_mode);

    let mut widgets = build_main_window(&sender, settings.font_size as i32);
    build_menu(&mut widgets.menu, &sender, dark_mode);

    // Escape must not close the window; only the window manager's close does.
    widgets.wind.set_callback({
        let s = sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    let mut state = AppState::new(widgets, sender, settings, open_store(), dark_mode);
    state.show();
    log::info!("Spark Studio started");

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        match msg {
            Message::ExportContent => state.export_content(),
            Message::ImportContent => state.import_content(),
            Message::ResetContent => state.reset_content(),
            Message::EditUndo => state.undo(),
            Message::EditRedo => state.redo(),
            Message::ToggleEditMode => state.toggle_edit_mode(),
            Message::ExitEditMode => state.set_edit_mode(false),
            Message::SectionSelected(index) => state.show_section(index),
            Message::SectionEdited => state.on_section_edited(),
            Message::HistoryDebounceElapsed => state.on_history_timer(),
            Message::KeyPressed(chord) => state.on_key(chord),
            Message::ToggleDarkMode => state.toggle_dark_mode(),
            Message::DismissBanner => state.dismiss_banner(),
            Message::FileQuit | Message::WindowClose => {
                state.shutdown();
                app.quit();
                break;
            }
        }
    }
}
