//! Bit-unpacking of glyph rows into a pixel cell

use super::glyph_table::GlyphTable;
use crate::rasterizer::{Color, ImageData};

/// Edge length of the square glyph cell
pub const CELL_SIZE: usize = 16;

/// Paint one glyph into `cell`, MSB-first per row.
///
/// Only set bits are written; unset bits keep whatever the cell holds, so
/// successive calls composite. Returns `false` (nothing drawn) when `index`
/// is past the end of the table.
pub fn render_glyph(cell: &mut ImageData, table: &GlyphTable, index: usize, color: Color) -> bool {
    let Some(rows) = table.glyph(index) else {
        return false;
    };

    let bits = table.format().bits();
    let color = color.opaque();
    for (y, &mask) in rows.iter().enumerate() {
        for x in 0..bits {
            if mask & (1u16 << (bits - 1 - x)) != 0 {
                cell.set_pixel(x, y, color);
            }
        }
    }
    true
}
