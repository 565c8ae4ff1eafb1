//! Spark Studio: a desktop visual editor for the Spark landing-page content,
//! with bounded undo/redo, JSON import/export and edit-mode shortcuts.

pub mod app;
pub mod ui;
