//! Top-level console context
//!
//! Owns the surface and the font for as long as the frame driver runs and
//! releases them through [`Starlight::shutdown`].

use std::fs::File;
use std::io::{Read, Write};

use crate::core::config::StarlightConfig;
use crate::error::Result;
use crate::font::FontAtlas;
use crate::geometry::Rect;
use crate::surface::PixelSurface;
use crate::ui::{Element, Theme};

/// Open devices plus the palette used to draw on them
pub struct Starlight<D = File> {
    surface: PixelSurface<D>,
    font: FontAtlas,
    theme: Theme,
    frames: u64,
}

impl Starlight<File> {
    /// Open the framebuffer and font devices named in `config`
    ///
    /// Fails on the first device that cannot be opened or read; there is no
    /// fallback surface or font.
    pub fn open(config: &StarlightConfig) -> Result<Self> {
        config.validate()?;

        let surface = PixelSurface::open(&config.devices.framebuffer)?;
        log::info!("width = {}, height = {}", surface.width(), surface.height());

        let font = FontAtlas::open(&config.devices.font)?;
        log::info!(
            "font_width = {}, font_height = {}, stride = {}, max_glyph = {}",
            font.glyph_width(),
            font.glyph_height(),
            font.row_stride(),
            font.max_glyph()
        );

        Ok(Self::new(surface, font, config.theme))
    }
}

impl<D> Starlight<D> {
    /// Assemble a context from already opened parts
    pub fn new(surface: PixelSurface<D>, font: FontAtlas, theme: Theme) -> Self {
        Self {
            surface,
            font,
            theme,
            frames: 0,
        }
    }

    /// The pixel surface
    pub const fn surface(&self) -> &PixelSurface<D> {
        &self.surface
    }

    /// Mutable pixel surface, for drawing outside the element tree
    pub fn surface_mut(&mut self) -> &mut PixelSurface<D> {
        &mut self.surface
    }

    /// The font atlas
    pub const fn font(&self) -> &FontAtlas {
        &self.font
    }

    /// The palette
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Frames presented so far
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw `root` and its subtree with `root` positioned relative to the screen origin
    pub fn render(&mut self, root: &Element) {
        root.draw_with_theme(&Rect::ZERO, &mut self.surface, &self.font, &self.theme);
    }
}

impl<D: Read + Write> Starlight<D> {
    /// Push the finished frame to the display
    pub fn present(&mut self) -> Result<()> {
        self.surface.swap()?;
        self.frames += 1;
        Ok(())
    }

    /// Release the devices and return the surface's device handle
    pub fn shutdown(self) -> D {
        log::info!("Shutting down after {} frames", self.frames);
        self.surface.into_device()
    }
}
