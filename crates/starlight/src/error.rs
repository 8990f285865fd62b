//! Error taxonomy for device access
//!
//! Clipped pixel writes and out-of-range glyph codes are defined no-ops and
//! never surface here. Everything in this module is terminal: nothing in the
//! crate retries a failed device operation.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, StarlightError>;

/// Errors raised while opening, reading or writing devices
#[derive(Error, Debug)]
pub enum StarlightError {
    /// The device file is missing or could not be opened
    #[error("Failed to open device {path}: {source}")]
    DeviceOpen {
        /// Path that was opened
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The device answered with a short or malformed record
    #[error("Protocol error on {device}: {reason}")]
    DeviceProtocol {
        /// Which device misbehaved
        device: &'static str,
        /// What was wrong with the record
        reason: String,
    },

    /// Writing the pixel buffer to the device failed
    #[error("Failed to write to device: {0}")]
    DeviceWrite(#[source] std::io::Error),

    /// Saving a debug capture of the surface failed
    #[error("Capture error: {0}")]
    Capture(String),

    /// Configuration could not be loaded or was invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl StarlightError {
    /// Build a protocol error for `device`
    pub fn protocol(device: &'static str, reason: impl Into<String>) -> Self {
        Self::DeviceProtocol {
            device,
            reason: reason.into(),
        }
    }

    /// Map a failed `read_exact` into the right variant
    ///
    /// A short read is a protocol violation; anything else is reported as-is
    /// under the protocol variant with the I/O message attached.
    pub(crate) fn from_read(device: &'static str, expected: usize, err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Self::protocol(device, format!("short read, expected {expected} bytes"))
        } else {
            Self::protocol(device, format!("read of {expected} bytes failed: {err}"))
        }
    }
}
