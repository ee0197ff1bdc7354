//! 2D framebuffer with clipped fills and blits

use super::types::{Color, ImageData, SourceRect, Texture};

/// Framebuffer for software rendering
pub struct Framebuffer {
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            Color::from_bytes([
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
                self.pixels[idx + 3],
            ])
        } else {
            Color::TRANSPARENT
        }
    }

    /// Composite a color over the pixel at (x, y); off-screen coordinates are ignored
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if color.a == 0 || x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            let out = color.blend_over(self.get_pixel(x, y));
            self.set_pixel(x, y, out);
        }
    }

    /// Fill a rectangle, clipped to the framebuffer
    pub fn fill_rect(&mut self, x: i32, y: i32, width: usize, height: usize, color: Color) {
        let (x0, x1) = clip_span(x, width, self.width);
        let (y0, y1) = clip_span(y, height, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_pixel(px as i32, py as i32, color);
            }
        }
    }

    /// Composite a pixel buffer at (x, y)
    pub fn draw_image_data(&mut self, image: &ImageData, x: i32, y: i32) {
        for iy in 0..image.height {
            for ix in 0..image.width {
                let color = image.get_pixel(ix, iy);
                self.blend_pixel(x + ix as i32, y + iy as i32, color);
            }
        }
    }

    /// Blit a region of a texture at (x, y); the region is clipped to the texture too
    pub fn draw_texture_region(&mut self, texture: &Texture, src: SourceRect, x: i32, y: i32) {
        let w = src.width.min(texture.width.saturating_sub(src.x));
        let h = src.height.min(texture.height.saturating_sub(src.y));
        for ty in 0..h {
            for tx in 0..w {
                let color = texture.get_pixel(src.x + tx, src.y + ty);
                self.blend_pixel(x + tx as i32, y + ty as i32, color);
            }
        }
    }
}

/// Clip `[start, start + len)` to `[0, limit)`
fn clip_span(start: i32, len: usize, limit: usize) -> (usize, usize) {
    let lo = start.max(0) as i64;
    let hi = (start as i64 + len as i64).min(limit as i64);
    if hi <= lo {
        (0, 0)
    } else {
        (lo as usize, hi as usize)
    }
}
