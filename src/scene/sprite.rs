//! Texture region blitted at the node position

use std::rc::Rc;

use crate::rasterizer::{SourceRect, Texture};
use crate::screen::Screen;

/// Draws `(sx, sy, width, height)` of a shared texture; moving the
/// source offset selects animation frames in a sprite sheet
#[derive(Debug, Clone)]
pub struct Sprite {
    pub texture: Rc<Texture>,
    pub sx: usize,
    pub sy: usize,
}

impl Sprite {
    pub fn new(texture: Rc<Texture>, sx: usize, sy: usize) -> Self {
        Self { texture, sx, sy }
    }

    pub fn set_source_x(&mut self, sx: usize) {
        self.sx = sx;
    }

    pub fn set_source_y(&mut self, sy: usize) {
        self.sy = sy;
    }

    pub fn draw(&self, screen: &mut dyn Screen, x: i32, y: i32, width: usize, height: usize) {
        let src = SourceRect::new(self.sx, self.sy, width, height);
        screen.draw_image(&self.texture, src, x, y);
    }
}
