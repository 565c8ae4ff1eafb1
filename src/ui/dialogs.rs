use fltk::{app::{self, Sender, TimeoutHandle}, dialog, frame::Frame, group::Flex, prelude::*};

use super::main_window::BANNER_HEIGHT;
use super::theme::banner_colors;
use crate::app::domain::messages::Message;
use crate::app::domain::notification::{Notification, Notifier};
use crate::app::services::content_io::Confirm;

const BANNER_SECONDS: f64 = 4.0;

/// Blocking yes/no prompt.
pub struct DialogConfirm;

impl Confirm for DialogConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        dialog::choice2_default(message, "Cancel", "Restore defaults", "") == Some(1)
    }
}

/// Shows notifications in the banner strip under the toolbar and hides
/// them again after a few seconds.
pub struct BannerNotifier<'a> {
    pub frame: &'a mut Frame,
    pub flex: &'a mut Flex,
    pub sender: Sender<Message>,
    pub is_dark: bool,
    /// Pending auto-hide, replaced by each new notification.
    pub timer: &'a mut Option<TimeoutHandle>,
}

impl Notifier for BannerNotifier<'_> {
    fn notify(&mut self, notification: Notification) {
        let (bg, fg) = banner_colors(notification.kind, self.is_dark);
        self.frame.set_color(bg);
        self.frame.set_label_color(fg);
        self.frame.set_label(&format!("  {}", notification.banner_text()));
        self.frame.show();
        self.flex.fixed(&*self.frame, BANNER_HEIGHT);
        self.flex.redraw();

        if let Some(handle) = self.timer.take() {
            app::remove_timeout3(handle);
        }
        let s = self.sender;
        *self.timer = Some(app::add_timeout3(BANNER_SECONDS, move |_| s.send(Message::DismissBanner)));
    }
}

pub fn hide_banner(frame: &mut Frame, flex: &mut Flex) {
    frame.hide();
    flex.fixed(&*frame, 0);
    flex.redraw();
}
