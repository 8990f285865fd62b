//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize logging at `level` unless `RUST_LOG` overrides it
///
/// Safe to call more than once; later calls are ignored.
pub fn init_with_level(level: &str) {
    let filter = level.parse().unwrap_or(log::LevelFilter::Info);
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .try_init();
}
