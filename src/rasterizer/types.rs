//! Core types for the 2D rasterizer

use serde::{Deserialize, Serialize};

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0, a: 255 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255, a: 255 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha forced to 255
    pub fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    /// Composite `self` over `dst` (source-over, straight alpha)
    pub fn blend_over(self, dst: Color) -> Self {
        match self.a {
            0 => dst,
            255 => self,
            a => {
                let sa = a as u32;
                let da = dst.a as u32 * (255 - sa) / 255;
                let out_a = sa + da;
                if out_a == 0 {
                    return Color::TRANSPARENT;
                }
                let mix = |s: u8, d: u8| ((s as u32 * sa + d as u32 * da) / out_a) as u8;
                Self {
                    r: mix(self.r, dst.r),
                    g: mix(self.g, dst.g),
                    b: mix(self.b, dst.b),
                    a: out_a as u8,
                }
            }
        }
    }

    /// Convert to [u8; 4] for framebuffer
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self { r: bytes[0], g: bytes[1], b: bytes[2], a: bytes[3] }
    }
}

/// Region of a texture, in texels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl SourceRect {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self { x, y, width, height }
    }
}

/// Simple texture (array of colors)
#[derive(Debug, Clone)]
pub struct Texture {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color>,
    pub name: String,
}

impl Texture {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::WHITE; width * height],
            name: String::new(),
        }
    }

    /// Load texture from raw encoded image bytes
    pub fn from_bytes(bytes: &[u8], name: String) -> Result<Self, String> {
        use image::GenericImageView;

        let img = image::load_from_memory(bytes)
            .map_err(|e| format!("Failed to decode image: {}", e))?;

        let (width, height) = img.dimensions();
        let rgba = img.to_rgba8();

        let pixels: Vec<Color> = rgba
            .pixels()
            .map(|p| Color::with_alpha(p[0], p[1], p[2], p[3]))
            .collect();

        Ok(Self {
            width: width as usize,
            height: height as usize,
            pixels,
            name,
        })
    }

    /// Create a checkerboard test texture with 4x4 cells
    pub fn checkerboard(width: usize, height: usize, color1: Color, color2: Color) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let checker = ((x / 4) + (y / 4)) % 2 == 0;
                pixels.push(if checker { color1 } else { color2 });
            }
        }
        Self { width, height, pixels, name: "checkerboard".to_string() }
    }

    /// Get pixel at x,y coordinates
    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            Color::TRANSPARENT
        }
    }
}

/// Mutable RGBA pixel buffer, the unit blitted by `Screen::draw_image_data`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>, // RGBA, 4 bytes per pixel
}

impl ImageData {
    /// Fully transparent buffer
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 4],
        }
    }

    /// Reset every channel of every pixel to zero
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            self.data[idx..idx + 4].copy_from_slice(&color.to_bytes());
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            Color::from_bytes([self.data[idx], self.data[idx + 1], self.data[idx + 2], self.data[idx + 3]])
        } else {
            Color::TRANSPARENT
        }
    }

    /// True when no pixel has any coverage
    pub fn is_blank(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Number of pixels with nonzero alpha
    pub fn opaque_count(&self) -> usize {
        self.data.chunks_exact(4).filter(|px| px[3] != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_over_extremes() {
        let dst = Color::new(10, 20, 30);
        assert_eq!(Color::TRANSPARENT.blend_over(dst), dst);
        assert_eq!(Color::RED.blend_over(dst), Color::RED);
    }

    #[test]
    fn test_blend_over_half() {
        let src = Color::with_alpha(255, 255, 255, 128);
        let out = src.blend_over(Color::BLACK);
        assert_eq!(out.a, 255);
        assert!(out.r > 120 && out.r < 135);
    }

    #[test]
    fn test_image_data_clear() {
        let mut img = ImageData::new(16, 16);
        assert!(img.is_blank());
        img.set_pixel(3, 4, Color::WHITE);
        assert_eq!(img.get_pixel(3, 4), Color::WHITE);
        assert_eq!(img.opaque_count(), 1);
        img.clear();
        assert!(img.is_blank());
    }

    #[test]
    fn test_image_data_out_of_bounds() {
        let mut img = ImageData::new(4, 4);
        img.set_pixel(4, 0, Color::WHITE);
        img.set_pixel(0, 4, Color::WHITE);
        assert!(img.is_blank());
        assert_eq!(img.get_pixel(10, 10), Color::TRANSPARENT);
    }
}
