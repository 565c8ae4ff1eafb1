//! Infrastructure layer - external integrations.
//!
//! - Platform-specific theme detection

pub mod platform;
