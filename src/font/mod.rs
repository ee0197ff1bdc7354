//! Bitmap fonts
//!
//! - `glyph_table`: decoded glyph bitmaps (8x16 Latin, 16x16 Hangul components)
//! - `hangul`: syllable -> component glyph indices
//! - `glyph_raster`: row bitmask -> RGBA cell
//! - `dos_font`: the font facade used by text nodes

mod dos_font;
mod glyph_raster;
mod glyph_table;
pub mod hangul;
mod loader;

pub use dos_font::*;
pub use glyph_raster::*;
pub use glyph_table::*;

use crate::rasterizer::Color;
use crate::screen::Screen;

/// Metrics and glyph drawing, as consumed by text layout
pub trait Font {
    /// Horizontal advance of a character in pixels
    fn width(&self, ch: char) -> usize;

    /// Line height in pixels
    fn height(&self) -> usize;

    /// Draw one character with its top-left corner at (x, y)
    fn draw_glyph(&mut self, screen: &mut dyn Screen, x: i32, y: i32, color: Color, ch: char);
}
