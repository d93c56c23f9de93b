//! Tile grid geometry
//!
//! Tiles are 1-indexed `(column, row)`. Row 1 is the goal strip at the top;
//! the vertical offset leaves room for the score strip above it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A discrete tile coordinate (column, row), 1-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Grid dimensions and tile geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub tile_width: f32,
    pub tile_height: f32,
    /// Vertical pixel offset of the grid (score strip height)
    pub top_offset: f32,
    pub columns: u32,
    pub rows: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
            top_offset: TOP_OFFSET,
            columns: COLUMNS,
            rows: ROWS,
        }
    }
}

impl GridConfig {
    /// Convert a tile coordinate to its top-left pixel position.
    ///
    /// Tile (1, 1) lands at `(0, top_offset - tile_height)`.
    #[inline]
    pub fn to_pixels(&self, x: i32, y: i32) -> Vec2 {
        Vec2::new(
            self.tile_width * (x - 1) as f32,
            self.tile_height * (y - 1) as f32 + self.top_offset - self.tile_height,
        )
    }

    #[inline]
    pub fn tile_to_pixels(&self, tile: TilePos) -> Vec2 {
        self.to_pixels(tile.x, tile.y)
    }

    /// Size of one tile in pixels
    #[inline]
    pub fn tile_size(&self) -> Vec2 {
        Vec2::new(self.tile_width, self.tile_height)
    }

    /// Rendered width of the whole grid
    pub fn pixel_width(&self) -> f32 {
        self.tile_width * self.columns as f32
    }

    /// Check whether a tile lies on the grid
    pub fn contains(&self, tile: TilePos) -> bool {
        tile.x >= 1 && tile.x <= self.columns as i32 && tile.y >= 1 && tile.y <= self.rows as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_tile_sits_above_offset() {
        let grid = GridConfig::default();
        let p = grid.to_pixels(1, 1);
        assert_eq!(p, Vec2::new(0.0, 50.0 - 83.0));
    }

    #[test]
    fn test_player_start_pixels() {
        let grid = GridConfig::default();
        // (3, 6): x = 101 * 2, y = 83 * 5 + 50 - 83
        assert_eq!(grid.to_pixels(3, 6), Vec2::new(202.0, 382.0));
    }

    #[test]
    fn test_enemy_spawn_column_is_off_screen() {
        let grid = GridConfig::default();
        let p = grid.to_pixels(ENEMY_SPAWN_COLUMN, 2);
        assert_eq!(p.x, -202.0);
        assert_eq!(p.y, 50.0);
    }

    #[test]
    fn test_to_pixels_deterministic() {
        let grid = GridConfig::default();
        for x in 1..=5 {
            for y in 1..=6 {
                assert_eq!(grid.to_pixels(x, y), grid.to_pixels(x, y));
            }
        }
    }

    #[test]
    fn test_contains() {
        let grid = GridConfig::default();
        assert!(grid.contains(TilePos::new(1, 1)));
        assert!(grid.contains(TilePos::new(5, 6)));
        assert!(!grid.contains(TilePos::new(0, 3)));
        assert!(!grid.contains(TilePos::new(6, 3)));
        assert!(!grid.contains(TilePos::new(3, 7)));
        assert_eq!(grid.pixel_width(), 505.0);
    }
}
