//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - The landing-page content document and its defaults
//! - Application settings
//! - Message and notification types for the event system

pub mod content;
pub mod messages;
pub mod notification;
pub mod settings;

pub use content::ContentDocument;
pub use messages::Message;
pub use notification::{Notification, NotificationKind, Notifier};
pub use settings::{AppSettings, ThemeMode};
