//! Hangul syllable decomposition
//!
//! A precomposed syllable in U+AC00..=U+D7A3 is split into a leading
//! consonant (choseong), a vowel (jungseong) and an optional trailing
//! consonant (jongseong). Each component is drawn from one 360-glyph
//! table that stores several shape variants per jamo:
//!
//! - indices `0..160`: leading consonants, 8 variants x 20
//! - indices `160..248`: vowels, 4 variants x 22
//! - indices `248..360`: trailing consonants, 4 variants x 28
//!
//! The variant is picked from the neighbouring components, since a jamo is
//! drawn differently next to a vertical or horizontal vowel, and above a
//! trailing consonant.

pub const SYLLABLE_FIRST: u32 = 0xAC00;
pub const SYLLABLE_LAST: u32 = 0xD7A3;

/// Compatibility jamo ㄱ..ㅎ
const JAMO_CONSONANT_FIRST: u32 = 0x3131;
const JAMO_CONSONANT_LAST: u32 = 0x314E;
/// Compatibility jamo ㅏ..ㅣ
const JAMO_VOWEL_FIRST: u32 = 0x314F;
const JAMO_VOWEL_LAST: u32 = 0x3163;

const JOONG_COUNT: u32 = 21;
const JONG_COUNT: u32 = 28;

/// First vowel glyph in the table
pub const JOONG_START: usize = 160;
/// First trailing consonant glyph in the table
pub const JONG_START: usize = JOONG_START + 88;

/// Leading consonant variant by vowel, no trailing consonant
const CHO_TYPE: [usize; 22] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 3, 3, 3, 1, 2, 4, 4, 4, 2, 1, 3, 0,
];

/// Leading consonant variant by vowel, with a trailing consonant
const CHO_TYPE_JONG_EXIST: [usize; 22] = [
    0, 5, 5, 5, 5, 5, 5, 5, 5, 6, 7, 7, 7, 6, 6, 7, 7, 7, 6, 6, 7, 5,
];

/// Trailing consonant variant by vowel
const JONG_TYPE: [usize; 22] = [
    0, 0, 2, 0, 2, 1, 2, 1, 2, 3, 0, 2, 1, 3, 3, 1, 2, 1, 3, 3, 1, 1,
];

/// Compatibility consonant jamo -> leading consonant position (0 = cluster, no glyph)
const JAMO_TABLE: [usize; 30] = [
    1, 2, 0, 3, 0, 0, 4, 5, 6, 0, 0, 0, 0, 0, 0,
    0, 7, 8, 9, 0, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
];

/// One to three glyph-table indices, drawn in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphIndices {
    indices: [usize; 3],
    len: usize,
}

impl GlyphIndices {
    fn one(a: usize) -> Self {
        Self { indices: [a, 0, 0], len: 1 }
    }

    fn two(a: usize, b: usize) -> Self {
        Self { indices: [a, b, 0], len: 2 }
    }

    fn three(a: usize, b: usize, c: usize) -> Self {
        Self { indices: [a, b, c], len: 3 }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().copied()
    }
}

/// Component positions of a syllable (all 1-based except `jong`, where 0 = none)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    /// Leading consonant, 1..=19
    pub cho: usize,
    /// Vowel, 1..=21
    pub joong: usize,
    /// Trailing consonant, 0..=27
    pub jong: usize,
}

impl Syllable {
    /// Split a precomposed syllable; `None` outside U+AC00..=U+D7A3
    pub fn decompose(code: u32) -> Option<Self> {
        if !(SYLLABLE_FIRST..=SYLLABLE_LAST).contains(&code) {
            return None;
        }
        let offset = code - SYLLABLE_FIRST;
        Some(Self {
            cho: (offset / JONG_COUNT / JOONG_COUNT) as usize + 1,
            joong: ((offset / JONG_COUNT) % JOONG_COUNT) as usize + 1,
            jong: (offset % JONG_COUNT) as usize,
        })
    }

    pub fn has_jong(&self) -> bool {
        self.jong != 0
    }

    /// Leading consonant variant, 0..=7
    pub fn cho_type(&self) -> usize {
        if self.has_jong() {
            CHO_TYPE_JONG_EXIST[self.joong]
        } else {
            CHO_TYPE[self.joong]
        }
    }

    /// Vowel variant, 0..=3: ㄱ and ㅋ take the flat-consonant shapes
    pub fn joong_type(&self) -> usize {
        let shape = if self.cho == 1 || self.cho == 16 { 0 } else { 1 };
        shape + if self.has_jong() { 2 } else { 0 }
    }

    /// Trailing consonant variant, 0..=3
    pub fn jong_type(&self) -> usize {
        JONG_TYPE[self.joong]
    }

    /// Glyph indices in draw order: leading, vowel, then trailing if present
    pub fn glyph_indices(&self) -> GlyphIndices {
        let cho = self.cho_type() * 20 + self.cho;
        let joong = JOONG_START + self.joong_type() * 22 + self.joong;
        if self.has_jong() {
            let jong = JONG_START + self.jong_type() * 28 + self.jong;
            GlyphIndices::three(cho, joong, jong)
        } else {
            GlyphIndices::two(cho, joong)
        }
    }
}

/// Glyph indices for a standalone compatibility jamo
fn jamo_indices(code: u32) -> Option<GlyphIndices> {
    match code {
        JAMO_CONSONANT_FIRST..=JAMO_CONSONANT_LAST => {
            match JAMO_TABLE[(code - JAMO_CONSONANT_FIRST) as usize] {
                0 => None,
                cho => Some(GlyphIndices::one(cho)),
            }
        }
        JAMO_VOWEL_FIRST..=JAMO_VOWEL_LAST => {
            let joong = (code - JAMO_VOWEL_FIRST) as usize + 1;
            Some(GlyphIndices::one(JOONG_START + joong))
        }
        _ => None,
    }
}

/// Hangul table indices for a character, `None` if it has no Hangul glyph
pub fn compose(ch: char) -> Option<GlyphIndices> {
    let code = ch as u32;
    Syllable::decompose(code)
        .map(|s| s.glyph_indices())
        .or_else(|| jamo_indices(code))
}
