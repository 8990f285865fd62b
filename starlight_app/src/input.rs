//! Mouse device input
//!
//! The mouse device answers each read with one packed record:
//!
//! ```text
//! i16 dx | i16 dy | u8 buttons | pad
//! ```
//!
//! Deltas accumulate in the kernel between reads and reset once read.

use std::io::Read;

use bitflags::bitflags;
use starlight::{Result, StarlightError};

/// Size of one mouse record, including the trailing pad byte
pub const PACKET_SIZE: usize = 6;

bitflags! {
    /// Buttons held down when the packet was produced
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MouseButtons: u8 {
        /// Left button
        const LEFT = 0b001;
        /// Right button
        const RIGHT = 0b010;
        /// Middle button
        const MIDDLE = 0b100;
    }
}

/// One decoded mouse record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MousePacket {
    /// Horizontal motion, right positive
    pub dx: i16,
    /// Vertical motion, up positive
    pub dy: i16,
    /// Buttons held
    pub buttons: MouseButtons,
}

impl MousePacket {
    /// Decode a native-endian record
    pub fn decode(bytes: &[u8; PACKET_SIZE]) -> Self {
        let [dx, dy, _]: [i16; 3] = bytemuck::cast(*bytes);
        Self {
            dx,
            dy,
            buttons: MouseButtons::from_bits_truncate(bytes[4]),
        }
    }

    /// Encode as the device would
    #[cfg(test)]
    pub fn encode(&self) -> [u8; PACKET_SIZE] {
        let mut bytes: [u8; PACKET_SIZE] = bytemuck::cast([self.dx, self.dy, 0i16]);
        bytes[4] = self.buttons.bits();
        bytes
    }
}

/// Reader of mouse records
pub struct MouseDevice<R> {
    reader: R,
}

impl<R: Read> MouseDevice<R> {
    /// Wrap an opened mouse device
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read the next packet, or `None` if the device had nothing to report
    pub fn poll(&mut self) -> Result<Option<MousePacket>> {
        let mut record = [0u8; PACKET_SIZE];
        let read = self
            .reader
            .read(&mut record)
            .map_err(|e| StarlightError::protocol("mouse", format!("read failed: {e}")))?;
        if read == 0 {
            return Ok(None);
        }

        self.reader.read_exact(&mut record[read..]).map_err(|_| {
            StarlightError::protocol("mouse", format!("short read, expected {PACKET_SIZE} bytes, got {read}"))
        })?;

        Ok(Some(MousePacket::decode(&record)))
    }
}

/// On-screen pointer position
///
/// Deltas are accumulated and clamped to the last valid pixel,
/// `[0, width - 1] × [0, height - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pointer {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
}

impl Pointer {
    /// Pointer at the origin of a `width` × `height` screen
    pub const fn new(width: i64, height: i64) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Apply one packet; vertical motion is flipped to screen coordinates
    pub fn apply(&mut self, packet: &MousePacket) {
        self.x = (self.x + i64::from(packet.dx)).clamp(0, (self.width - 1).max(0));
        self.y = (self.y - i64::from(packet.dy)).clamp(0, (self.height - 1).max(0));
    }

    /// Current `(x, y)`
    pub const fn position(&self) -> (i64, i64) {
        (self.x, self.y)
    }
}
