//! Solid color rectangle

use crate::rasterizer::Color;
use crate::screen::Screen;

#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub color: Color,
}

impl Plane {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn draw(&self, screen: &mut dyn Screen, x: i32, y: i32, width: usize, height: usize) {
        screen.set_fill_style(self.color);
        screen.draw_rect(x, y, width, height);
    }
}
