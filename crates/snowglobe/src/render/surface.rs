use crate::assets::sprite::{Sprite, TRANSPARENT};

use super::target::{BlitOp, BlitTarget};

/// Software rasterization target: a flat buffer of palette indices.
///
/// Scaled blits sample the source sprite nearest-neighbor, skip transparent
/// pixels, and clip to the surface. Intended for tests, headless runs, and
/// host-side presentation of small screens.
pub struct IndexedSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl IndexedSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill the whole surface with one palette index.
    pub fn clear(&mut self, index: u8) {
        self.pixels.fill(index);
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Palette index at (x, y), or None out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u8> {
        if self.in_bounds(x, y) {
            Some(self.pixels[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Count of non-transparent pixels on the surface.
    pub fn opaque_pixels(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != TRANSPARENT).count()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

impl BlitTarget for IndexedSurface {
    fn blit(&mut self, op: BlitOp, sprite: &Sprite) {
        if op.dst_w <= 0 || op.dst_h <= 0 || op.src_w == 0 || op.src_h == 0 {
            return;
        }
        for dy in 0..op.dst_h {
            let y = op.dst_y + dy;
            if y < 0 || y >= self.height as i32 {
                continue;
            }
            let sy = op.src_y + dy as u32 * op.src_h / op.dst_h as u32;
            for dx in 0..op.dst_w {
                let x = op.dst_x + dx;
                if x < 0 || x >= self.width as i32 {
                    continue;
                }
                let sx = op.src_x + dx as u32 * op.src_w / op.dst_w as u32;
                let color = sprite.pixel(sx, sy);
                if color != TRANSPARENT {
                    self.pixels[(y as u32 * self.width + x as u32) as usize] = color;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blit_at_native_size() {
        let sprite = Sprite::parse("1 .\n. 2").unwrap();
        let mut surf = IndexedSurface::new(4, 4);
        surf.blit(BlitOp::full_sprite(1, 1, 2, 2, &sprite), &sprite);

        assert_eq!(surf.pixel(1, 1), Some(1));
        assert_eq!(surf.pixel(2, 2), Some(2));
        // Transparent source pixels leave the destination untouched
        assert_eq!(surf.pixel(2, 1), Some(TRANSPARENT));
        assert_eq!(surf.opaque_pixels(), 2);
    }

    #[test]
    fn blit_scales_up() {
        let sprite = Sprite::parse("7").unwrap();
        let mut surf = IndexedSurface::new(8, 8);
        surf.blit(BlitOp::full_sprite(2, 2, 4, 4, &sprite), &sprite);

        assert_eq!(surf.opaque_pixels(), 16);
        assert_eq!(surf.pixel(2, 2), Some(7));
        assert_eq!(surf.pixel(5, 5), Some(7));
        assert_eq!(surf.pixel(6, 6), Some(TRANSPARENT));
    }

    #[test]
    fn blit_clips_to_surface() {
        let sprite = Sprite::parse("3 3\n3 3").unwrap();
        let mut surf = IndexedSurface::new(4, 4);
        // Half off the top-left corner
        surf.blit(BlitOp::full_sprite(-1, -1, 2, 2, &sprite), &sprite);
        assert_eq!(surf.opaque_pixels(), 1);
        assert_eq!(surf.pixel(0, 0), Some(3));

        // Entirely off-surface draws nothing
        surf.clear(TRANSPARENT);
        surf.blit(BlitOp::full_sprite(10, 10, 2, 2, &sprite), &sprite);
        assert_eq!(surf.opaque_pixels(), 0);
    }

    #[test]
    fn clear_fills_surface() {
        let mut surf = IndexedSurface::new(3, 3);
        surf.clear(5);
        assert_eq!(surf.opaque_pixels(), 9);
        assert_eq!(surf.pixel(0, 2), Some(5));
    }
}
