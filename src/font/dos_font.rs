//! DOS-style bitmap font: 8x16 Latin glyphs plus composed 16x16 Hangul

use serde::{Deserialize, Serialize};

use super::glyph_raster::{render_glyph, CELL_SIZE};
use super::glyph_table::{FontError, GlyphTable};
use super::hangul::{self, GlyphIndices};
use super::Font;
use crate::rasterizer::{Color, ImageData};
use crate::screen::Screen;

/// Which color glyph pixels are painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GlyphTint {
    /// Always opaque white, whatever color the caller asks for
    #[default]
    FixedWhite,
    /// The requested color with alpha forced to 255
    Requested,
}

/// Where a character's pixels come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphSource {
    /// One glyph of the Latin table
    Latin(usize),
    /// Components of the Hangul table, composited in order
    Hangul(GlyphIndices),
    /// Nothing to draw: table not loaded or no glyph for the character
    Blank,
}

/// Bitmap font built from two raw glyph tables.
///
/// Each table is write-once and becomes ready only after it is fully
/// decoded. Characters whose table is not ready draw as blank cells.
///
/// The glyph cell is reused across draws and needs `&mut self`, so one
/// font can only render one glyph at a time.
pub struct DosFont {
    latin: Option<GlyphTable>,
    hangul: Option<GlyphTable>,
    cell: Option<ImageData>,
    tint: GlyphTint,
}

impl DosFont {
    pub fn new() -> Self {
        Self {
            latin: None,
            hangul: None,
            cell: None,
            tint: GlyphTint::default(),
        }
    }

    pub fn with_tint(mut self, tint: GlyphTint) -> Self {
        self.tint = tint;
        self
    }

    pub fn tint(&self) -> GlyphTint {
        self.tint
    }

    /// Decode and install the Latin table (256 glyphs, 1 byte per row)
    pub fn load_latin(&mut self, bytes: &[u8]) -> Result<(), FontError> {
        if self.latin.is_some() {
            return Err(FontError::AlreadyLoaded("latin"));
        }
        self.latin = Some(GlyphTable::latin(bytes)?);
        Ok(())
    }

    /// Decode and install the Hangul table (360 glyphs, 2 bytes per row)
    pub fn load_hangul(&mut self, bytes: &[u8]) -> Result<(), FontError> {
        if self.hangul.is_some() {
            return Err(FontError::AlreadyLoaded("hangul"));
        }
        self.hangul = Some(GlyphTable::hangul(bytes)?);
        Ok(())
    }

    pub fn is_latin_ready(&self) -> bool {
        self.latin.is_some()
    }

    pub fn is_hangul_ready(&self) -> bool {
        self.hangul.is_some()
    }

    /// Pick the rendering strategy for a character given what is loaded
    pub fn classify(&self, ch: char) -> GlyphSource {
        let code = ch as u32;
        if code < 256 {
            if self.is_latin_ready() {
                return GlyphSource::Latin(code as usize);
            }
            return GlyphSource::Blank;
        }
        if !self.is_hangul_ready() {
            return GlyphSource::Blank;
        }
        match hangul::compose(ch) {
            Some(indices) => GlyphSource::Hangul(indices),
            None => GlyphSource::Blank,
        }
    }

    /// Clear the shared cell and composite the glyph for `ch` into it
    pub fn render_cell(&mut self, color: Color, ch: char) -> &ImageData {
        let source = self.classify(ch);
        let color = match self.tint {
            GlyphTint::FixedWhite => Color::WHITE,
            GlyphTint::Requested => color,
        };

        let cell = self
            .cell
            .get_or_insert_with(|| ImageData::new(CELL_SIZE, CELL_SIZE));
        cell.clear();

        match (source, &self.latin, &self.hangul) {
            (GlyphSource::Latin(index), Some(table), _) => {
                render_glyph(cell, table, index, color);
            }
            (GlyphSource::Hangul(indices), _, Some(table)) => {
                for index in indices.iter() {
                    render_glyph(cell, table, index, color);
                }
            }
            _ => {}
        }

        cell
    }
}

impl Default for DosFont {
    fn default() -> Self {
        Self::new()
    }
}

impl Font for DosFont {
    fn width(&self, ch: char) -> usize {
        if (ch as u32) < 256 {
            8
        } else {
            16
        }
    }

    fn height(&self) -> usize {
        16
    }

    fn draw_glyph(&mut self, screen: &mut dyn Screen, x: i32, y: i32, color: Color, ch: char) {
        if self.cell.is_none() {
            self.cell = Some(screen.create_image_data(CELL_SIZE, CELL_SIZE));
        }
        let cell = self.render_cell(color, ch);
        screen.draw_image_data(cell, x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::glyph_table::{GLYPH_ROWS, HANGUL_GLYPH_COUNT, LATIN_GLYPH_COUNT};
    use crate::screen::Canvas;

    const GLYPH_A: [u8; 16] = [0x18, 0x24, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0, 0, 0, 0, 0, 0, 0, 0];

    fn latin_blob() -> Vec<u8> {
        let mut bytes = vec![0u8; LATIN_GLYPH_COUNT * GLYPH_ROWS];
        bytes[65 * 16..66 * 16].copy_from_slice(&GLYPH_A);
        bytes
    }

    /// Every Hangul glyph draws a single pixel on its own row, at a column
    /// derived from its index, so composited components stay distinguishable
    fn hangul_blob() -> Vec<u8> {
        let mut bytes = vec![0u8; HANGUL_GLYPH_COUNT * GLYPH_ROWS * 2];
        for glyph in 0..HANGUL_GLYPH_COUNT {
            let row = glyph % 16;
            let mask: u16 = 0x8000 >> (glyph / 16 % 16);
            let offset = (glyph * 16 + row) * 2;
            bytes[offset..offset + 2].copy_from_slice(&mask.to_be_bytes());
        }
        bytes
    }

    fn loaded_font() -> DosFont {
        let mut font = DosFont::new();
        font.load_latin(&latin_blob()).unwrap();
        font.load_hangul(&hangul_blob()).unwrap();
        font
    }

    #[test]
    fn test_metrics() {
        let font = DosFont::new();
        for code in 0u32..256 {
            let ch = char::from_u32(code).unwrap();
            assert_eq!(font.width(ch), 8);
        }
        assert_eq!(font.width('Ā'), 16);
        assert_eq!(font.width('한'), 16);
        assert_eq!(font.height(), 16);
    }

    #[test]
    fn test_latin_a_pixels() {
        let mut font = loaded_font();
        let cell = font.render_cell(Color::WHITE, 'A').clone();
        for (y, mask) in GLYPH_A.iter().enumerate() {
            for x in 0..16 {
                let set = x < 8 && mask & (0x80u8 >> x) != 0;
                let expected = if set { Color::WHITE } else { Color::TRANSPARENT };
                assert_eq!(cell.get_pixel(x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_draw_before_load_is_blank() {
        let mut font = DosFont::new();
        let mut canvas = Canvas::new(32, 32);
        font.draw_glyph(&mut canvas, 0, 0, Color::WHITE, 'A');
        font.draw_glyph(&mut canvas, 16, 0, Color::WHITE, '한');
        assert!(canvas.pixels().iter().all(|&b| b == 0));
        assert_eq!(font.classify('A'), GlyphSource::Blank);
        assert_eq!(font.classify('한'), GlyphSource::Blank);
    }

    #[test]
    fn test_tables_gate_independently() {
        let mut font = DosFont::new();
        font.load_hangul(&hangul_blob()).unwrap();
        assert!(!font.is_latin_ready());
        assert_eq!(font.classify('A'), GlyphSource::Blank);
        assert!(matches!(font.classify('가'), GlyphSource::Hangul(_)));
    }

    #[test]
    fn test_unmapped_code_point_is_blank() {
        let mut font = loaded_font();
        assert_eq!(font.classify('日'), GlyphSource::Blank);
        assert!(font.render_cell(Color::WHITE, '日').is_blank());
    }

    #[test]
    fn test_hangul_composites_components() {
        let mut font = loaded_font();
        let cell = font.render_cell(Color::WHITE, '한').clone();
        // 한 -> glyphs 119, 227, 252
        assert_eq!(cell.opaque_count(), 3);
        for glyph in [119usize, 227, 252] {
            let (x, y) = (glyph / 16 % 16, glyph % 16);
            assert_eq!(cell.get_pixel(x, y), Color::WHITE);
        }
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let mut font = loaded_font();
        let first = font.render_cell(Color::WHITE, '한').clone();
        font.render_cell(Color::WHITE, '각');
        let second = font.render_cell(Color::WHITE, '한').clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tables_are_write_once() {
        let mut font = loaded_font();
        assert_eq!(font.load_latin(&latin_blob()), Err(FontError::AlreadyLoaded("latin")));
        assert_eq!(font.load_hangul(&hangul_blob()), Err(FontError::AlreadyLoaded("hangul")));
    }

    #[test]
    fn test_truncated_load_stays_not_ready() {
        let mut font = DosFont::new();
        assert!(font.load_latin(&[0u8; 100]).is_err());
        assert!(!font.is_latin_ready());
        // A later good load still succeeds
        font.load_latin(&latin_blob()).unwrap();
        assert!(font.is_latin_ready());
    }

    #[test]
    fn test_fixed_white_ignores_tint() {
        let mut font = loaded_font();
        let cell = font.render_cell(Color::RED, 'A');
        assert_eq!(cell.get_pixel(3, 0), Color::WHITE);
    }

    #[test]
    fn test_requested_tint() {
        let mut font = loaded_font().with_tint(GlyphTint::Requested);
        let cell = font.render_cell(Color::with_alpha(255, 0, 0, 10), 'A');
        assert_eq!(cell.get_pixel(3, 0), Color::RED);
    }

    #[test]
    fn test_draw_glyph_blits_at_position() {
        let mut font = loaded_font();
        let mut canvas = Canvas::new(32, 32);
        canvas.clear(Color::BLUE);
        font.draw_glyph(&mut canvas, 10, 4, Color::WHITE, 'A');
        assert_eq!(canvas.framebuffer.get_pixel(13, 4), Color::WHITE);
        assert_eq!(canvas.framebuffer.get_pixel(10, 4), Color::BLUE);
    }
}
