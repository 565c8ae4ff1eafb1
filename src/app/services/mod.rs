//! Services layer - business operations and utilities.
//!
//! - Content export/import/reset
//! - File dialog filters
//! - Persisted key-value flags

pub mod content_io;
pub mod file_filters;
pub mod kv_store;
