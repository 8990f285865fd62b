//! Core console settings

pub mod config;

pub use config::{DeviceConfig, LoggingConfig, StarlightConfig};
