//! Tile maps: tile sets plus layers of tile numbers

use std::rc::Rc;

use crate::rasterizer::{SourceRect, Texture};
use crate::screen::Screen;

/// A grid of equally sized tiles cut from one texture
#[derive(Debug, Clone)]
pub struct TileSet {
    pub texture: Rc<Texture>,
    pub tile_width: usize,
    pub tile_height: usize,
}

impl TileSet {
    pub fn new(texture: Rc<Texture>, tile_width: usize, tile_height: usize) -> Self {
        Self { texture, tile_width, tile_height }
    }

    pub fn columns(&self) -> usize {
        if self.tile_width == 0 {
            0
        } else {
            self.texture.width / self.tile_width
        }
    }

    pub fn rows(&self) -> usize {
        if self.tile_height == 0 {
            0
        } else {
            self.texture.height / self.tile_height
        }
    }

    pub fn tile_count(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Texel region of a tile, 0-based within this set
    pub fn tile_rect(&self, tile: usize) -> Option<SourceRect> {
        if tile >= self.tile_count() {
            return None;
        }
        let columns = self.columns();
        Some(SourceRect::new(
            tile % columns * self.tile_width,
            tile / columns * self.tile_height,
            self.tile_width,
            self.tile_height,
        ))
    }
}

/// One layer of 1-based global tile numbers, 0 = empty
#[derive(Debug, Clone)]
pub struct TileMapLayer {
    pub map_width: usize,
    pub map_height: usize,
    /// Row-major, `map_data[row][column]`
    pub map_data: Vec<Vec<usize>>,
}

impl TileMapLayer {
    pub fn new(map_data: Vec<Vec<usize>>) -> Self {
        let map_height = map_data.len();
        let map_width = map_data.iter().map(|row| row.len()).max().unwrap_or(0);
        Self { map_width, map_height, map_data }
    }

    pub fn get(&self, column: usize, row: usize) -> usize {
        self.map_data
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .unwrap_or(0)
    }

    pub fn set(&mut self, column: usize, row: usize, tile: usize) {
        if let Some(slot) = self.map_data.get_mut(row).and_then(|r| r.get_mut(column)) {
            *slot = tile;
        }
    }
}

/// Tile sets shared by a stack of layers, drawn bottom to top
#[derive(Debug, Clone)]
pub struct TileMap {
    pub tile_width: usize,
    pub tile_height: usize,
    pub tile_sets: Vec<TileSet>,
    pub layers: Vec<TileMapLayer>,
}

impl TileMap {
    pub fn new(tile_width: usize, tile_height: usize) -> Self {
        Self {
            tile_width,
            tile_height,
            tile_sets: Vec::new(),
            layers: Vec::new(),
        }
    }

    pub fn with_tile_set(mut self, tile_set: TileSet) -> Self {
        self.tile_sets.push(tile_set);
        self
    }

    pub fn with_layer(mut self, layer: TileMapLayer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Pixel size of the largest layer
    pub fn pixel_size(&self) -> (usize, usize) {
        let w = self.layers.iter().map(|l| l.map_width).max().unwrap_or(0);
        let h = self.layers.iter().map(|l| l.map_height).max().unwrap_or(0);
        (w * self.tile_width, h * self.tile_height)
    }

    /// Map a 1-based global tile number to its set and source rect
    pub fn resolve(&self, tile: usize) -> Option<(&TileSet, SourceRect)> {
        let mut n = tile.checked_sub(1)?;
        for set in &self.tile_sets {
            let count = set.tile_count();
            if n < count {
                return set.tile_rect(n).map(|rect| (set, rect));
            }
            n -= count;
        }
        None
    }

    /// Tile range `[start, end)` along one axis that can be visible
    fn visible_span(abs: i32, tile: usize, screen: usize, map: usize) -> (usize, usize) {
        if tile == 0 {
            return (0, 0);
        }
        let start = (-abs / tile as i32).max(0) as usize;
        let end = (start + screen.div_ceil(tile) + 1).min(map);
        (start, end)
    }

    /// Visible tile window `(start_x, end_x, start_y, end_y)` of a layer
    pub fn visible_range(&self, layer: &TileMapLayer, abs_x: i32, abs_y: i32, screen_w: usize, screen_h: usize) -> (usize, usize, usize, usize) {
        let (start_x, end_x) = Self::visible_span(abs_x, self.tile_width, screen_w, layer.map_width);
        let (start_y, end_y) = Self::visible_span(abs_y, self.tile_height, screen_h, layer.map_height);
        (start_x, end_x, start_y, end_y)
    }

    pub fn draw(&self, screen: &mut dyn Screen, x: i32, y: i32) {
        let (screen_w, screen_h) = (screen.width(), screen.height());

        for layer in &self.layers {
            let (start_x, end_x, start_y, end_y) = self.visible_range(layer, x, y, screen_w, screen_h);

            for row in start_y..end_y {
                for column in start_x..end_x {
                    let Some((set, src)) = self.resolve(layer.get(column, row)) else {
                        continue;
                    };
                    let dx = x + (column * self.tile_width) as i32;
                    let dy = y + (row * self.tile_height) as i32;
                    screen.draw_image(&set.texture, src, dx, dy);
                }
            }
        }
    }
}
