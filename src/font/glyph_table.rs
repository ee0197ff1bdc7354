//! Decoded bitmap glyph tables
//!
//! A font resource is a flat byte array: `glyph_count * 16` rows, each row
//! one byte (8px wide glyphs) or two bytes (16px wide glyphs). Tables are
//! decoded in full before they are handed out, so a reader never sees a
//! partially filled table.

use thiserror::Error;

/// Rows per glyph, for both tables
pub const GLYPH_ROWS: usize = 16;

/// Glyphs in the Latin (code page) table
pub const LATIN_GLYPH_COUNT: usize = 256;

/// Glyphs in the Hangul component table
pub const HANGUL_GLYPH_COUNT: usize = 360;

/// Row bitmask width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFormat {
    /// 8 bits per row, 1 byte
    Narrow,
    /// 16 bits per row, 2 bytes
    Wide,
}

impl RowFormat {
    pub fn bits(self) -> usize {
        match self {
            RowFormat::Narrow => 8,
            RowFormat::Wide => 16,
        }
    }

    pub fn bytes(self) -> usize {
        self.bits() / 8
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FontError {
    #[error("{table} font resource is {actual} bytes, expected at least {expected}")]
    Truncated {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{0} font table is already loaded")]
    AlreadyLoaded(&'static str),
}

/// Fixed-size table of monochrome glyph bitmaps
#[derive(Debug, Clone)]
pub struct GlyphTable {
    format: RowFormat,
    glyphs: Vec<[u16; GLYPH_ROWS]>,
}

impl GlyphTable {
    /// Decode `glyph_count` glyphs from a raw resource.
    /// Trailing bytes past the last glyph are ignored.
    pub fn decode(
        table: &'static str,
        bytes: &[u8],
        format: RowFormat,
        glyph_count: usize,
    ) -> Result<Self, FontError> {
        let stride = GLYPH_ROWS * format.bytes();
        let expected = glyph_count * stride;
        if bytes.len() < expected {
            return Err(FontError::Truncated {
                table,
                expected,
                actual: bytes.len(),
            });
        }

        let glyphs = bytes[..expected]
            .chunks_exact(stride)
            .map(|glyph| {
                let mut rows = [0u16; GLYPH_ROWS];
                for (row, raw) in rows.iter_mut().zip(glyph.chunks_exact(format.bytes())) {
                    *row = match format {
                        RowFormat::Narrow => raw[0] as u16,
                        // First byte holds the left 8 columns
                        RowFormat::Wide => u16::from_be_bytes([raw[0], raw[1]]),
                    };
                }
                rows
            })
            .collect();

        Ok(Self { format, glyphs })
    }

    /// 256 glyphs, 8x16
    pub fn latin(bytes: &[u8]) -> Result<Self, FontError> {
        Self::decode("latin", bytes, RowFormat::Narrow, LATIN_GLYPH_COUNT)
    }

    /// 360 glyph components, 16x16
    pub fn hangul(bytes: &[u8]) -> Result<Self, FontError> {
        Self::decode("hangul", bytes, RowFormat::Wide, HANGUL_GLYPH_COUNT)
    }

    pub fn format(&self) -> RowFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Row masks of one glyph, `None` past the end of the table
    pub fn glyph(&self, index: usize) -> Option<&[u16; GLYPH_ROWS]> {
        self.glyphs.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_decode_preserves_byte_order() {
        let mut bytes = vec![0u8; LATIN_GLYPH_COUNT * GLYPH_ROWS];
        for (i, b) in bytes[65 * 16..66 * 16].iter_mut().enumerate() {
            *b = i as u8;
        }
        let table = GlyphTable::latin(&bytes).unwrap();
        assert_eq!(table.len(), 256);
        assert_eq!(table.format(), RowFormat::Narrow);
        let glyph = table.glyph(65).unwrap();
        assert_eq!(glyph[0], 0);
        assert_eq!(glyph[15], 15);
        assert_eq!(table.glyph(64).unwrap(), &[0u16; 16]);
    }

    #[test]
    fn test_hangul_row_left_byte_first() {
        let mut bytes = vec![0u8; HANGUL_GLYPH_COUNT * GLYPH_ROWS * 2];
        // glyph 1, row 2
        let offset = (16 + 2) * 2;
        bytes[offset] = 0x80;
        bytes[offset + 1] = 0x01;
        let table = GlyphTable::hangul(&bytes).unwrap();
        assert_eq!(table.len(), 360);
        assert_eq!(table.glyph(1).unwrap()[2], 0x8001);
    }

    #[test]
    fn test_truncated_resource_rejected() {
        let bytes = vec![0u8; LATIN_GLYPH_COUNT * GLYPH_ROWS - 1];
        let err = GlyphTable::latin(&bytes).unwrap_err();
        assert_eq!(
            err,
            FontError::Truncated {
                table: "latin",
                expected: 4096,
                actual: 4095
            }
        );
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let bytes = vec![0xFFu8; LATIN_GLYPH_COUNT * GLYPH_ROWS + 100];
        let table = GlyphTable::latin(&bytes).unwrap();
        assert_eq!(table.len(), LATIN_GLYPH_COUNT);
        assert!(table.glyph(LATIN_GLYPH_COUNT).is_none());
    }
}
