use fltk::{
    app::Sender,
    browser::HoldBrowser,
    button::Button,
    enums::{Align, Color, Font, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use crate::app::domain::content::SECTION_KEYS;
use crate::app::domain::messages::Message;

pub const TOOLBAR_HEIGHT: i32 = 34;
pub const BANNER_HEIGHT: i32 = 28;
const SECTION_LIST_WIDTH: i32 = 180;

/// Undo/redo buttons plus the history counter and dirty indicator.
pub struct Toolbar {
    pub row: Flex,
    pub edit_button: Button,
    pub undo_button: Button,
    pub redo_button: Button,
    pub history_label: Frame,
    pub dirty_label: Frame,
}

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub toolbar: Toolbar,
    pub banner_frame: Frame,
    pub section_list: HoldBrowser,
    pub section_editor: TextEditor,
    pub section_buffer: TextBuffer,
}

pub fn build_main_window(sender: &Sender<Message>, font_size: i32) -> MainWidgets {
    let mut wind = Window::new(100, 100, 900, 600, "Spark Studio");
    wind.set_xclass("SparkStudio");

    let mut flex = Flex::new(0, 0, 900, 600, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let toolbar = build_toolbar(sender);
    flex.fixed(&toolbar.row, TOOLBAR_HEIGHT);

    // Notification banner (initially hidden)
    let mut banner_frame = Frame::default().with_size(0, 0);
    banner_frame.set_frame(FrameType::FlatBox);
    banner_frame.set_label_size(13);
    banner_frame.set_align(Align::Left | Align::Inside);
    banner_frame.hide();
    {
        let s = *sender;
        banner_frame.handle(move |_, ev| {
            if ev == fltk::enums::Event::Push {
                s.send(Message::DismissBanner);
                return true;
            }
            false
        });
    }
    flex.fixed(&banner_frame, 0);

    let mut body = Flex::default();
    body.set_type(FlexType::Row);

    let mut section_list = HoldBrowser::default();
    for key in SECTION_KEYS {
        section_list.add(key);
    }
    {
        let s = *sender;
        section_list.set_callback(move |b| {
            let line = b.value();
            if line > 0 {
                s.send(Message::SectionSelected((line - 1) as usize));
            }
        });
    }
    body.fixed(&section_list, SECTION_LIST_WIDTH);

    let mut section_buffer = TextBuffer::default();
    let mut section_editor = TextEditor::default();
    section_editor.set_buffer(section_buffer.clone());
    section_editor.set_text_font(Font::Courier);
    section_editor.set_text_size(font_size);
    {
        let s = *sender;
        section_buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _text| {
            if inserted > 0 || deleted > 0 {
                s.send(Message::SectionEdited);
            }
        });
    }
    body.end();

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        flex,
        menu,
        toolbar,
        banner_frame,
        section_list,
        section_editor,
        section_buffer,
    }
}

fn build_toolbar(sender: &Sender<Message>) -> Toolbar {
    let mut row = Flex::default();
    row.set_type(FlexType::Row);
    row.set_margin(3);
    row.set_pad(4);

    let mut edit_button = Button::default().with_label("Edit");
    edit_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::ToggleEditMode)
    });
    row.fixed(&edit_button, 90);

    let mut undo_button = Button::default().with_label("Undo");
    undo_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::EditUndo)
    });
    row.fixed(&undo_button, 80);

    let mut redo_button = Button::default().with_label("Redo");
    redo_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::EditRedo)
    });
    row.fixed(&redo_button, 80);

    let mut history_label = Frame::default();
    history_label.set_align(Align::Left | Align::Inside);
    history_label.set_label_size(12);

    let mut dirty_label = Frame::default();
    dirty_label.set_align(Align::Right | Align::Inside);
    dirty_label.set_label_size(12);
    dirty_label.set_label_color(Color::from_rgb(200, 120, 0));
    row.fixed(&dirty_label, 160);

    row.end();

    Toolbar {
        row,
        edit_button,
        undo_button,
        redo_button,
        history_label,
        dirty_label,
    }
}
