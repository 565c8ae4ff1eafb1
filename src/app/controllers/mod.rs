//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Undo/redo history
//! - Edit debouncing
//! - Keyboard shortcut dispatch
//! - The editor session that owns the live document

pub mod commands;
pub mod debounce;
pub mod editor;
pub mod history;
