//! Foundation module - shared utilities
//!
//! - Logging initialisation and re-exports

pub mod logging;
