//! Software 2D rasterizer
//!
//! Features:
//! - RGBA8 framebuffer with clipped fills and blits
//! - Straight-alpha source-over compositing
//! - Reusable pixel buffers for glyph cells

mod framebuffer;
mod types;

pub use framebuffer::*;
pub use types::*;

/// Default canvas dimensions (authentic low resolution)
pub const WIDTH: usize = 320;
pub const HEIGHT: usize = 240;
