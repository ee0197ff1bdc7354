//! Bonnie 2D: scene-graph engine on a software canvas
//!
//! - Planes, sprites, tile maps and text composed into a node tree
//! - Low resolution RGBA framebuffer, blitted to the window each frame
//! - DOS-style bitmap fonts with composed Hangul syllables

pub mod assets;
pub mod config;
pub mod font;
pub mod rasterizer;
pub mod scene;
pub mod screen;

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
