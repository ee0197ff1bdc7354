//! Drawing surface consumed by scene nodes and fonts
//!
//! Everything above the rasterizer paints through `Screen`, so scene code
//! never touches framebuffer memory directly.

use crate::rasterizer::{Color, Framebuffer, ImageData, SourceRect, Texture};

/// Canvas-like drawing surface
pub trait Screen {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Allocate a fully transparent pixel buffer
    fn create_image_data(&self, width: usize, height: usize) -> ImageData {
        ImageData::new(width, height)
    }

    /// Composite a pixel buffer at (x, y); transparent pixels leave the surface untouched
    fn draw_image_data(&mut self, image: &ImageData, x: i32, y: i32);

    /// Color used by subsequent `draw_rect` calls
    fn set_fill_style(&mut self, color: Color);

    fn draw_rect(&mut self, x: i32, y: i32, width: usize, height: usize);

    /// Blit a texture region at (x, y)
    fn draw_image(&mut self, texture: &Texture, src: SourceRect, x: i32, y: i32);
}

/// Software screen backed by a framebuffer
pub struct Canvas {
    pub framebuffer: Framebuffer,
    fill_style: Color,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            framebuffer: Framebuffer::new(width, height),
            fill_style: Color::WHITE,
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.framebuffer.clear(color);
    }

    pub fn fill_style(&self) -> Color {
        self.fill_style
    }

    /// Raw RGBA bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.framebuffer.pixels
    }
}

impl Screen for Canvas {
    fn width(&self) -> usize {
        self.framebuffer.width
    }

    fn height(&self) -> usize {
        self.framebuffer.height
    }

    fn draw_image_data(&mut self, image: &ImageData, x: i32, y: i32) {
        self.framebuffer.draw_image_data(image, x, y);
    }

    fn set_fill_style(&mut self, color: Color) {
        self.fill_style = color;
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: usize, height: usize) {
        self.framebuffer.fill_rect(x, y, width, height, self.fill_style);
    }

    fn draw_image(&mut self, texture: &Texture, src: SourceRect, x: i32, y: i32) {
        self.framebuffer.draw_texture_region(texture, src, x, y);
    }
}
