//! Text node: lays out characters and hands each one to a font

use std::cell::RefCell;
use std::rc::Rc;

use crate::font::Font;
use crate::rasterizer::Color;
use crate::screen::Screen;

/// A character placed relative to the text node origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedGlyph {
    pub ch: char,
    pub x: i32,
    pub y: i32,
    pub width: usize,
}

pub struct Text {
    font: Rc<RefCell<dyn Font>>,
    text: String,
    font_color: Color,
    background_color: Option<Color>,
    line_height: f32,
}

impl Text {
    pub fn new(font: Rc<RefCell<dyn Font>>, text: &str, font_color: Color) -> Self {
        Self {
            font,
            text: text.to_string(),
            font_color,
            background_color: None,
            line_height: 1.0,
        }
    }

    pub fn set_font(&mut self, font: Rc<RefCell<dyn Font>>) -> &mut Self {
        self.font = font;
        self
    }

    pub fn font(&self) -> &Rc<RefCell<dyn Font>> {
        &self.font
    }

    pub fn set_font_color(&mut self, color: Color) -> &mut Self {
        self.font_color = color;
        self
    }

    pub fn font_color(&self) -> Color {
        self.font_color
    }

    pub fn set_background_color(&mut self, color: Option<Color>) -> &mut Self {
        self.background_color = color;
        self
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.text = text.to_string();
        self
    }

    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Multiplier applied to the font height when advancing lines
    pub fn set_line_height(&mut self, line_height: f32) -> &mut Self {
        self.line_height = line_height;
        self
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Place every drawable character. `max_width == 0` disables wrapping;
    /// otherwise the cursor wraps after a glyph that reaches the edge.
    pub fn layout(&self, max_width: usize) -> Vec<PlacedGlyph> {
        let Ok(font) = self.font.try_borrow() else {
            return Vec::new();
        };
        // Fractional cursor, truncated only when a glyph is placed
        let advance_y = font.height() as f32 * self.line_height;

        let mut placed = Vec::with_capacity(self.text.len());
        let (mut x, mut y) = (0i32, 0f32);

        for ch in self.text.chars() {
            if ch == '\n' {
                x = 0;
                y += advance_y;
                continue;
            }

            let width = font.width(ch);
            placed.push(PlacedGlyph { ch, x, y: y as i32, width });

            if max_width == 0 || x + (width as i32) < max_width as i32 {
                x += width as i32;
            } else {
                x = 0;
                y += advance_y;
            }
        }

        placed
    }

    pub fn draw(&self, screen: &mut dyn Screen, x: i32, y: i32, width: usize) {
        let placed = self.layout(width);
        let Ok(mut font) = self.font.try_borrow_mut() else {
            return;
        };
        let height = font.height();

        for glyph in placed {
            let (gx, gy) = (x + glyph.x, y + glyph.y);
            if let Some(bg) = self.background_color {
                screen.set_fill_style(bg);
                screen.draw_rect(gx, gy, glyph.width, height);
            }
            font.draw_glyph(screen, gx, gy, self.font_color, glyph.ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{DosFont, GLYPH_ROWS, LATIN_GLYPH_COUNT};
    use crate::screen::Canvas;

    fn font() -> Rc<RefCell<dyn Font>> {
        let mut font = DosFont::new();
        font.load_latin(&vec![0xFF; LATIN_GLYPH_COUNT * GLYPH_ROWS]).unwrap();
        Rc::new(RefCell::new(font))
    }

    #[test]
    fn test_layout_without_wrapping() {
        let text = Text::new(font(), "ab한c", Color::WHITE);
        let xs: Vec<i32> = text.layout(0).iter().map(|g| g.x).collect();
        assert_eq!(xs, vec![0, 8, 16, 32]);
    }

    #[test]
    fn test_layout_newline() {
        let mut text = Text::new(font(), "a\nb", Color::WHITE);
        text.set_line_height(1.5);
        let placed = text.layout(0);
        assert_eq!(placed.len(), 2);
        assert_eq!((placed[1].x, placed[1].y), (0, 24));
    }

    #[test]
    fn test_layout_fractional_line_height() {
        let mut text = Text::new(font(), "a\nb\nc\nd", Color::WHITE);
        text.set_line_height(1.3);
        let ys: Vec<i32> = text.layout(0).iter().map(|g| g.y).collect();
        // 0, 20.8, 41.6, 62.4
        assert_eq!(ys, vec![0, 20, 41, 62]);
    }

    #[test]
    fn test_wrap_keeps_fractional_advance() {
        let mut text = Text::new(font(), "abcdef", Color::WHITE);
        text.set_line_height(1.3);
        let ys: Vec<i32> = text.layout(16).iter().map(|g| g.y).collect();
        assert_eq!(ys, vec![0, 0, 20, 20, 41, 41]);
    }

    #[test]
    fn test_layout_wraps_after_edge_glyph() {
        let text = Text::new(font(), "abcd", Color::WHITE);
        let placed = text.layout(16);
        // 'b' ends exactly at the edge, 'c' starts the next line
        let pos: Vec<(i32, i32)> = placed.iter().map(|g| (g.x, g.y)).collect();
        assert_eq!(pos, vec![(0, 0), (8, 0), (0, 16), (8, 16)]);
    }

    #[test]
    fn test_draw_background_and_glyphs() {
        let mut text = Text::new(font(), "a", Color::WHITE);
        text.set_background_color(Some(Color::BLUE));
        let mut canvas = Canvas::new(32, 32);
        text.draw(&mut canvas, 4, 4, 0);
        assert_eq!(canvas.framebuffer.get_pixel(4, 4), Color::WHITE);
        assert_eq!(canvas.framebuffer.get_pixel(11, 19), Color::WHITE);
        assert_eq!(canvas.framebuffer.get_pixel(12, 4), Color::TRANSPARENT);
    }

    #[test]
    fn test_setters_chain() {
        let mut text = Text::new(font(), "hi", Color::WHITE);
        text.append_text("!").set_font_color(Color::RED);
        assert_eq!(text.text(), "hi!");
        assert_eq!(text.font_color(), Color::RED);
        assert_eq!(text.background_color(), None);
    }
}
