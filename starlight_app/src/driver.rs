//! Frame loop
//!
//! Each frame runs in strict order: poll the mouse, move the pointer label,
//! draw the desktop, draw the pointer, swap.

use std::io::{Read, Write};

use starlight::ui::Element;
use starlight::{Result, Starlight};

use crate::input::{MouseDevice, Pointer};

/// Everything the loop mutates between frames
pub struct FrameDriver<M> {
    desktop: Element,
    pointer_label: Element,
    pointer: Pointer,
    mouse: Option<MouseDevice<M>>,
}

impl<M: Read> FrameDriver<M> {
    /// Driver for `desktop`; without a mouse the pointer stays at the origin
    pub fn new(desktop: Element, pointer_label: Element, pointer: Pointer, mouse: Option<MouseDevice<M>>) -> Self {
        Self {
            desktop,
            pointer_label,
            pointer,
            mouse,
        }
    }

    /// Pointer position after the last frame
    pub const fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// Produce one frame
    pub fn frame<D: Read + Write>(&mut self, ctx: &mut Starlight<D>) -> Result<()> {
        if let Some(mouse) = self.mouse.as_mut() {
            if let Some(packet) = mouse.poll()? {
                self.pointer.apply(&packet);
                let (x, y) = self.pointer.position();
                self.pointer_label.reposition(x, y);
                log::trace!("Pointer at ({}, {}) buttons {:?}", x, y, packet.buttons);
            }
        }

        ctx.render(&self.desktop);
        ctx.render(&self.pointer_label);
        ctx.present()
    }

    /// Produce `limit` frames, or run until an error if `limit` is `None`
    pub fn run<D: Read + Write>(&mut self, ctx: &mut Starlight<D>, limit: Option<u64>) -> Result<()> {
        log::info!("Starting frame loop...");
        let mut produced = 0;
        while limit.map_or(true, |limit| produced < limit) {
            self.frame(ctx)?;
            produced += 1;
        }
        log::info!("Frame loop finished after {} frames", produced);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{MouseButtons, MousePacket};
    use crate::scene;
    use starlight::font::FontAtlas;
    use starlight::surface::PixelSurface;
    use starlight::ui::Theme;
    use std::io::Cursor;

    fn context(width: u64, height: u64) -> Starlight<Cursor<Vec<u8>>> {
        let mut record = width.to_ne_bytes().to_vec();
        record.extend_from_slice(&height.to_ne_bytes());
        let surface = PixelSurface::from_device(Cursor::new(record)).unwrap();
        let font = FontAtlas::from_parts(8, 8, 8, 255, vec![0xFF; 256 * 8]).unwrap();
        Starlight::new(surface, font, Theme::CLASSIC)
    }

    #[test]
    fn test_frames_follow_mouse() {
        let mut ctx = context(200, 100);
        let desktop = scene::desktop(&ctx.surface().bounds(), ctx.font());
        let label = scene::pointer(ctx.font());

        let mut packets = Vec::new();
        for delta in [(50, -10), (500, -500)] {
            let packet = MousePacket {
                dx: delta.0,
                dy: delta.1,
                buttons: MouseButtons::empty(),
            };
            packets.extend_from_slice(&packet.encode());
        }
        let mouse = MouseDevice::new(Cursor::new(packets));

        let mut driver = FrameDriver::new(desktop, label, Pointer::new(200, 100), Some(mouse));
        driver.frame(&mut ctx).unwrap();
        assert_eq!(driver.pointer().position(), (50, 10));
        assert_eq!(ctx.surface().pixel(50, 10), Some(Theme::CLASSIC.text));

        driver.run(&mut ctx, Some(2)).unwrap();
        assert_eq!(driver.pointer().position(), (199, 99));
        assert_eq!(ctx.frames(), 3);
    }

    #[test]
    fn test_runs_without_mouse() {
        let mut ctx = context(64, 64);
        let desktop = scene::desktop(&ctx.surface().bounds(), ctx.font());
        let label = scene::pointer(ctx.font());

        let mut driver: FrameDriver<Cursor<Vec<u8>>> = FrameDriver::new(desktop, label, Pointer::new(64, 64), None);
        driver.run(&mut ctx, Some(1)).unwrap();

        assert_eq!(driver.pointer().position(), (0, 0));
        assert_eq!(ctx.surface().pixel(0, 0), Some(Theme::CLASSIC.text));
        let written = ctx.shutdown().into_inner();
        assert_eq!(written.len(), 16 + 64 * 64 * 4);
    }
}
