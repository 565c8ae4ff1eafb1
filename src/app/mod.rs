//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (ContentDocument, Settings, Messages)
//! - `controllers/` - Orchestration (history, debounce, shortcuts, editor session)
//! - `services/` - Business operations (content import/export, key-value store)
//! - `infrastructure/` - External integrations (platform detection)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::editor::EditorSession;
pub use controllers::history::{ContentHistory, HistoryStatus};
pub use domain::{AppSettings, ContentDocument, Message, ThemeMode};
pub use error::{AppError, Result};
