//! Asynchronous font loading
//!
//! Works the same on native and WASM: both tables are fetched through
//! macroquad's file loader. A missing or malformed resource only disables
//! its own table.

use macroquad::logging::{info, warn};

use super::dos_font::DosFont;
use super::glyph_table::FontError;
use crate::assets::load_binary;

impl DosFont {
    /// Load both glyph tables; failures are logged and leave that table not ready
    pub async fn load(latin_path: &str, hangul_path: &str) -> Self {
        let mut font = DosFont::new();

        let latin = load_binary(latin_path).await;
        font.install_latin(latin_path, latin.as_deref());

        let hangul = load_binary(hangul_path).await;
        font.install_hangul(hangul_path, hangul.as_deref());

        font
    }

    /// Install the Latin table from fetched bytes, if any. Returns readiness.
    ///
    /// `None` means the fetch failed (already reported by the asset loader).
    pub fn install_latin(&mut self, path: &str, bytes: Option<&[u8]>) -> bool {
        if let Some(bytes) = bytes {
            log_install("Latin", path, self.load_latin(bytes));
        }
        self.is_latin_ready()
    }

    /// Install the Hangul table from fetched bytes, if any. Returns readiness.
    pub fn install_hangul(&mut self, path: &str, bytes: Option<&[u8]>) -> bool {
        if let Some(bytes) = bytes {
            log_install("Hangul", path, self.load_hangul(bytes));
        }
        self.is_hangul_ready()
    }
}

fn log_install(table: &str, path: &str, result: Result<(), FontError>) {
    match result {
        Ok(()) => info!("Loaded {} font: {}", table, path),
        Err(e) => warn!("Failed to decode {}: {}", path, e),
    }
}
