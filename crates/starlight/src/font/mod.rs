//! Monospace bitmap font
//!
//! The font device answers with a 32-byte header of four native-endian
//! `u64` fields followed by the glyph blob:
//!
//! ```text
//! glyph_width | glyph_height | row_stride | max_glyph | blob...
//! ```
//!
//! Each glyph occupies `row_stride` bytes starting at `code * row_stride`.
//! One byte encodes one row with column `c` in bit `c` (low bit is the
//! leftmost column), which caps glyphs at 8 columns.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, StarlightError};
use crate::surface::{Canvas, Color};

/// Size of the font header in bytes
pub const HEADER_SIZE: usize = 4 * std::mem::size_of::<u64>();

/// Widest glyph a one-byte row can describe
pub const MAX_GLYPH_WIDTH: u64 = 8;

/// Largest glyph blob a font device may declare
pub const MAX_BLOB_SIZE: usize = 256 * 256;

const DEVICE: &str = "font";

/// Immutable glyph atlas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontAtlas {
    glyph_width: u64,
    glyph_height: u64,
    row_stride: u64,
    max_glyph: u64,
    glyphs: Vec<u8>,
}

impl FontAtlas {
    /// Open the font device at `path` and read the atlas
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StarlightError::DeviceOpen {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Opened font device {}", path.display());
        Self::from_reader(file)
    }

    /// Read the header and the glyph blob it declares in a single device read
    ///
    /// The font device answers every read from its first byte, so the whole
    /// atlas has to arrive in one call. Blobs larger than [`MAX_BLOB_SIZE`]
    /// are rejected before anything is allocated for them.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut buffer = vec![0u8; HEADER_SIZE + MAX_BLOB_SIZE];
        let read = reader
            .read(&mut buffer)
            .map_err(|e| StarlightError::protocol(DEVICE, format!("read failed: {e}")))?;
        if read < HEADER_SIZE {
            return Err(StarlightError::protocol(
                DEVICE,
                format!("short read, expected {HEADER_SIZE} header bytes, got {read}"),
            ));
        }

        let mut header = [0u8; HEADER_SIZE];
        header.copy_from_slice(&buffer[..HEADER_SIZE]);
        let [glyph_width, glyph_height, row_stride, max_glyph]: [u64; 4] = bytemuck::cast(header);

        let blob_len = max_glyph
            .checked_add(1)
            .and_then(|count| count.checked_mul(row_stride))
            .and_then(|len| usize::try_from(len).ok())
            .filter(|&len| len <= MAX_BLOB_SIZE)
            .ok_or_else(|| {
                StarlightError::protocol(
                    DEVICE,
                    format!("{max_glyph} glyphs of {row_stride} bytes exceed the {MAX_BLOB_SIZE} byte blob limit"),
                )
            })?;

        let payload = read - HEADER_SIZE;
        if payload < blob_len {
            return Err(StarlightError::protocol(
                DEVICE,
                format!("short read, expected {blob_len} glyph bytes, got {payload}"),
            ));
        }

        buffer.truncate(HEADER_SIZE + blob_len);
        let glyphs = buffer.split_off(HEADER_SIZE);

        let atlas = Self::from_parts(glyph_width, glyph_height, row_stride, max_glyph, glyphs)?;
        log::debug!(
            "Font: {}x{} glyphs, stride {}, max glyph {}",
            glyph_width,
            glyph_height,
            row_stride,
            max_glyph
        );
        Ok(atlas)
    }

    /// Build an atlas from already decoded parts
    pub fn from_parts(
        glyph_width: u64,
        glyph_height: u64,
        row_stride: u64,
        max_glyph: u64,
        glyphs: Vec<u8>,
    ) -> Result<Self> {
        if glyph_width == 0 || glyph_width > MAX_GLYPH_WIDTH {
            return Err(StarlightError::protocol(
                DEVICE,
                format!("glyph width {glyph_width} outside 1..={MAX_GLYPH_WIDTH}"),
            ));
        }
        if glyph_height > row_stride {
            return Err(StarlightError::protocol(
                DEVICE,
                format!("glyph height {glyph_height} exceeds row stride {row_stride}"),
            ));
        }
        let needed = max_glyph
            .checked_add(1)
            .and_then(|count| count.checked_mul(row_stride))
            .and_then(|len| usize::try_from(len).ok());
        if needed.map_or(true, |needed| glyphs.len() < needed) {
            return Err(StarlightError::protocol(
                DEVICE,
                format!(
                    "glyph blob of {} bytes too small for {} glyphs of {row_stride} bytes",
                    glyphs.len(),
                    max_glyph.saturating_add(1)
                ),
            ));
        }

        Ok(Self {
            glyph_width,
            glyph_height,
            row_stride,
            max_glyph,
            glyphs,
        })
    }

    /// Glyph width in pixels, which is also the advance
    pub const fn glyph_width(&self) -> u64 {
        self.glyph_width
    }

    /// Glyph height in pixels
    pub const fn glyph_height(&self) -> u64 {
        self.glyph_height
    }

    /// Bytes per glyph in the blob
    pub const fn row_stride(&self) -> u64 {
        self.row_stride
    }

    /// Highest code with a glyph
    pub const fn max_glyph(&self) -> u64 {
        self.max_glyph
    }

    /// Whether `code` has a glyph
    pub const fn has_glyph(&self, code: u32) -> bool {
        code as u64 <= self.max_glyph
    }

    /// Pixel width of `text` set on one line
    pub fn text_width(&self, text: &str) -> i64 {
        self.glyph_width as i64 * text.chars().count() as i64
    }

    /// Blit one glyph with its top-left corner at `(x, y)`
    ///
    /// Only set bits are painted. Codes above [`FontAtlas::max_glyph`] paint nothing.
    pub fn blit_glyph<C: Canvas + ?Sized>(&self, code: u32, x: i64, y: i64, color: Color, canvas: &mut C) {
        if !self.has_glyph(code) {
            return;
        }

        let offset = (u64::from(code) * self.row_stride) as usize;
        let rows = &self.glyphs[offset..offset + self.glyph_height as usize];

        for (row, bits) in rows.iter().enumerate() {
            for col in 0..self.glyph_width {
                if (bits >> col) & 1 == 1 {
                    canvas.put_pixel(x + col as i64, y + row as i64, color);
                }
            }
        }
    }

    /// Blit `text` left to right, advancing one glyph width per character
    ///
    /// No kerning and no wrapping; control characters are looked up like any
    /// other code.
    pub fn blit_string<C: Canvas + ?Sized>(&self, text: &str, x: i64, y: i64, color: Color, canvas: &mut C) {
        let advance = self.glyph_width as i64;
        for (i, ch) in text.chars().enumerate() {
            self.blit_glyph(u32::from(ch), x + i as i64 * advance, y, color, canvas);
        }
    }
}
