//! Blit target abstraction and the command-recording backend.
//!
//! The factory's draw step issues fire-and-forget scaled blits; where those
//! land is a backend concern. `BlitRecorder` packs them into a flat Pod
//! buffer for hand-off to a host renderer, `IndexedSurface` rasterizes them
//! in software.

use bytemuck::{Pod, Zeroable};

use crate::assets::sprite::Sprite;

/// One scaled blit request: destination rectangle in screen space plus the
/// source rectangle to sample from the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlitOp {
    pub dst_x: i32,
    pub dst_y: i32,
    pub dst_w: i32,
    pub dst_h: i32,
    pub src_x: u32,
    pub src_y: u32,
    pub src_w: u32,
    pub src_h: u32,
}

impl BlitOp {
    /// Blit the whole sprite into the given destination rectangle.
    pub fn full_sprite(dst_x: i32, dst_y: i32, dst_w: i32, dst_h: i32, sprite: &Sprite) -> Self {
        BlitOp {
            dst_x,
            dst_y,
            dst_w,
            dst_h,
            src_x: 0,
            src_y: 0,
            src_w: sprite.width(),
            src_h: sprite.height(),
        }
    }
}

/// Sink for scaled sprite blits. No return value, no error signalling;
/// a degenerate request (empty rectangles) is simply dropped.
pub trait BlitTarget {
    fn blit(&mut self, op: BlitOp, sprite: &Sprite);
}

/// One recorded blit as 9 floats, `repr(C)` for zero-copy hand-off.
/// `sprite_id` is the sprite's index within its factory's variant set.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BlitCommand {
    pub dst_x: f32,
    pub dst_y: f32,
    pub dst_w: f32,
    pub dst_h: f32,
    pub src_x: f32,
    pub src_y: f32,
    pub src_w: f32,
    pub src_h: f32,
    pub sprite_id: f32,
}

impl BlitCommand {
    pub const FLOATS: usize = 9;
}

/// Records blits into a flat command buffer instead of rasterizing them.
/// A host renderer drains the buffer once per frame via `as_floats`/`ptr`.
pub struct BlitRecorder {
    commands: Vec<BlitCommand>,
}

impl BlitRecorder {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn with_capacity(commands: usize) -> Self {
        Self {
            commands: Vec::with_capacity(commands),
        }
    }

    /// Clear recorded commands (call at the start of each frame).
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[BlitCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The buffer as a flat float slice, `BlitCommand::FLOATS` per command.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.commands)
    }

    pub fn ptr(&self) -> *const f32 {
        self.commands.as_ptr() as *const f32
    }
}

impl Default for BlitRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl BlitTarget for BlitRecorder {
    fn blit(&mut self, op: BlitOp, sprite: &Sprite) {
        if op.dst_w <= 0 || op.dst_h <= 0 {
            return;
        }
        self.commands.push(BlitCommand {
            dst_x: op.dst_x as f32,
            dst_y: op.dst_y as f32,
            dst_w: op.dst_w as f32,
            dst_h: op.dst_h as f32,
            src_x: op.src_x as f32,
            src_y: op.src_y as f32,
            src_w: op.src_w as f32,
            src_h: op.src_h as f32,
            sprite_id: sprite.id() as f32,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_one_command_per_blit() {
        let sprite = Sprite::parse("1 2\n3 4").unwrap();
        let mut rec = BlitRecorder::new();
        rec.blit(BlitOp::full_sprite(5, 6, 4, 4, &sprite), &sprite);
        rec.blit(BlitOp::full_sprite(0, 0, 2, 2, &sprite), &sprite);

        assert_eq!(rec.len(), 2);
        let cmd = rec.commands()[0];
        assert_eq!(cmd.dst_x, 5.0);
        assert_eq!(cmd.dst_y, 6.0);
        assert_eq!(cmd.dst_w, 4.0);
        assert_eq!(cmd.src_w, 2.0);
        assert_eq!(cmd.src_h, 2.0);
    }

    #[test]
    fn degenerate_blits_dropped() {
        let sprite = Sprite::parse("1").unwrap();
        let mut rec = BlitRecorder::new();
        rec.blit(BlitOp::full_sprite(0, 0, 0, 4, &sprite), &sprite);
        rec.blit(BlitOp::full_sprite(0, 0, 4, -1, &sprite), &sprite);
        assert!(rec.is_empty());
    }

    #[test]
    fn float_buffer_layout() {
        let sprite = Sprite::parse("1").unwrap();
        let mut rec = BlitRecorder::new();
        rec.blit(BlitOp::full_sprite(1, 2, 3, 4, &sprite), &sprite);

        let floats = rec.as_floats();
        assert_eq!(floats.len(), BlitCommand::FLOATS);
        assert_eq!(&floats[0..4], &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn clear_resets_buffer() {
        let sprite = Sprite::parse("1").unwrap();
        let mut rec = BlitRecorder::with_capacity(16);
        rec.blit(BlitOp::full_sprite(0, 0, 1, 1, &sprite), &sprite);
        rec.clear();
        assert!(rec.is_empty());
    }
}
