use fltk::{enums::Color, prelude::*};

use super::main_window::MainWidgets;
use crate::app::domain::notification::NotificationKind;

pub fn apply_theme(w: &mut MainWidgets, is_dark: bool) {
    let (bg, fg, panel, selection) = if is_dark {
        (
            Color::from_rgb(30, 30, 30),
            Color::from_rgb(220, 220, 220),
            Color::from_rgb(35, 35, 35),
            Color::from_rgb(70, 70, 100),
        )
    } else {
        (
            Color::White,
            Color::Black,
            Color::from_rgb(240, 240, 240),
            Color::from_rgb(173, 216, 230),
        )
    };

    w.section_editor.set_color(bg);
    w.section_editor.set_text_color(fg);
    w.section_editor.set_cursor_color(fg);
    w.section_editor.set_selection_color(selection);
    w.section_list.set_color(panel);
    w.section_list.set_selection_color(selection);
    w.wind.set_color(panel);
    w.wind.set_label_color(fg);
    w.menu.set_color(panel);
    w.menu.set_text_color(fg);
    w.menu.set_selection_color(if is_dark {
        Color::from_rgb(60, 60, 60)
    } else {
        Color::from_rgb(200, 200, 200)
    });
    w.toolbar.row.set_color(panel);
    w.toolbar.history_label.set_label_color(fg);

    w.wind.redraw();
}

/// Banner colors for a notification.
pub fn banner_colors(kind: NotificationKind, is_dark: bool) -> (Color, Color) {
    match (kind, is_dark) {
        (NotificationKind::Success, false) => (Color::from_rgb(220, 245, 220), Color::Black),
        (NotificationKind::Success, true) => (Color::from_rgb(40, 90, 40), Color::White),
        (NotificationKind::Error, false) => (Color::from_rgb(255, 220, 220), Color::Black),
        (NotificationKind::Error, true) => (Color::from_rgb(120, 35, 35), Color::White),
    }
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &fltk::window::Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    let on: i32 = if is_dark { 1 } else { 0 };
    // SAFETY: the window is shown, so raw_handle is a live HWND; `on` outlives the calls.
    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
        // 20 = DWMWA_USE_IMMERSIVE_DARK_MODE, 19 = its pre-2004 value
        for attribute in [20, 19] {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
