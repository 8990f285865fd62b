//! # Starlight
//!
//! A small widget renderer for a bare graphical console. It paints windows,
//! labels and buttons straight into a framebuffer device using a monospace
//! bitmap font and bevelled rectangles.
//!
//! ## Features
//!
//! - **Pixel Surface**: owned ARGB buffer with clipped point, line and fill primitives
//! - **Bitmap Font**: 1-bit glyph atlas read from a font device
//! - **Shading**: outline, fill and tri-shade bevel helpers
//! - **Element Tree**: parent-relative widgets drawn in painter's order
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use starlight::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = StarlightConfig::default();
//!     let mut ctx = Starlight::open(&config)?;
//!
//!     let screen = ctx.surface().bounds();
//!     let mut desktop = Element::window("Desktop");
//!     desktop.resize(screen.width, screen.height);
//!     let label = Element::label("hello", ctx.font());
//!     desktop.append_child(label).reposition(20, 20);
//!
//!     ctx.render(&desktop);
//!     ctx.present()?;
//!     ctx.shutdown();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod font;
pub mod foundation;
pub mod geometry;
pub mod surface;
pub mod ui;

pub use context::Starlight;
pub use error::{Result, StarlightError};

/// Common imports for frame drivers
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        context::Starlight,
        core::config::{DeviceConfig, LoggingConfig, StarlightConfig},
        error::{Result, StarlightError},
        font::FontAtlas,
        geometry::{shade, Rect},
        surface::{Canvas, Color, PixelSurface},
        ui::{Element, ElementKind, Theme},
    };
}
