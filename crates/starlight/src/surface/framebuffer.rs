//! Device-backed pixel surface

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use super::{to_rgba, Canvas, Color};
use crate::error::{Result, StarlightError};
use crate::geometry::Rect;

/// Size of the `{width, height}` record the device answers with on first read
pub const INFO_RECORD_SIZE: usize = 2 * std::mem::size_of::<u64>();

const DEVICE: &str = "framebuffer";

/// Owned ARGB pixel buffer paired with the device it is flushed to
///
/// Pixels are only shown when [`PixelSurface::swap`] writes the whole buffer
/// out in a single operation; there are no partial updates.
pub struct PixelSurface<D = File> {
    width: usize,
    height: usize,
    device: D,
    pixels: Vec<Color>,
}

impl PixelSurface<File> {
    /// Open the framebuffer device at `path` read-write and allocate its buffer
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| StarlightError::DeviceOpen {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!("Opened framebuffer device {}", path.display());
        Self::from_device(file)
    }
}

impl<D: Read + Write> PixelSurface<D> {
    /// Read the info record from `device` and allocate a zeroed buffer
    pub fn from_device(mut device: D) -> Result<Self> {
        let mut record = [0u8; INFO_RECORD_SIZE];
        device
            .read_exact(&mut record)
            .map_err(|e| StarlightError::from_read(DEVICE, INFO_RECORD_SIZE, &e))?;

        let [width, height]: [u64; 2] = bytemuck::cast(record);
        if width == 0 || height == 0 {
            return Err(StarlightError::protocol(
                DEVICE,
                format!("device reported an empty {width}x{height} surface"),
            ));
        }

        let count = usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h))
            .filter(|count| count.checked_mul(4).is_some())
            .ok_or_else(|| {
                StarlightError::protocol(DEVICE, format!("surface {width}x{height} does not fit in memory"))
            })?;

        log::debug!("Framebuffer is {}x{} ({} bytes)", width, height, count * 4);

        Ok(Self {
            width: width as usize,
            height: height as usize,
            device,
            pixels: vec![0; count],
        })
    }

    /// Write the entire pixel buffer to the device
    pub fn swap(&mut self) -> Result<()> {
        let bytes: &[u8] = bytemuck::cast_slice(&self.pixels);
        self.device.write_all(bytes).map_err(StarlightError::DeviceWrite)?;
        self.device.flush().map_err(StarlightError::DeviceWrite)?;
        log::trace!("Swapped {} bytes to framebuffer", bytes.len());
        Ok(())
    }
}

impl<D> PixelSurface<D> {
    /// Width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whole surface as a rectangle anchored at the origin
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i64, self.height as i64)
    }

    /// Buffer size in bytes, which is also the size of every swap
    pub fn byte_len(&self) -> usize {
        self.pixels.len() * 4
    }

    /// Buffer index of an in-bounds coordinate
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Read back one pixel
    pub fn pixel(&self, x: i64, y: i64) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Set every pixel to `color`
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Borrow the device
    pub const fn device(&self) -> &D {
        &self.device
    }

    /// Give up the surface and return the device handle
    pub fn into_device(self) -> D {
        self.device
    }

    /// Save the current buffer as a PNG for debugging
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let width = u32::try_from(self.width).map_err(|e| StarlightError::Capture(e.to_string()))?;
        let height = u32::try_from(self.height).map_err(|e| StarlightError::Capture(e.to_string()))?;

        let image = image::RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba(to_rgba(self.pixels[y as usize * self.width + x as usize]))
        });
        image
            .save_with_format(path.as_ref(), image::ImageFormat::Png)
            .map_err(|e| StarlightError::Capture(e.to_string()))?;

        log::info!("Saved {}x{} capture to {}", width, height, path.as_ref().display());
        Ok(())
    }
}

impl<D> Canvas for PixelSurface<D> {
    fn put_pixel(&mut self, x: i64, y: i64, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }
}
