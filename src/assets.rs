//! Asset loading
//!
//! Goes through macroquad's `load_file`, which reads from disk on native
//! and fetches over HTTP on WASM.

use macroquad::logging::{info, warn};

use crate::rasterizer::Texture;

/// Load a file as raw bytes; `None` (with a warning) if it can't be read
pub async fn load_binary(path: &str) -> Option<Vec<u8>> {
    use macroquad::prelude::load_file;

    match load_file(path).await {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!("Failed to load {}: {}", path, e);
            None
        }
    }
}

/// Load and decode an image into a texture
pub async fn load_texture(path: &str) -> Option<Texture> {
    let bytes = load_binary(path).await?;
    let name = std::path::Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    match Texture::from_bytes(&bytes, name) {
        Ok(tex) => {
            info!("Loaded texture: {} ({}x{})", tex.name, tex.width, tex.height);
            Some(tex)
        }
        Err(e) => {
            warn!("{}: {}", path, e);
            None
        }
    }
}
