//! Lane Crossing - a tile-grid arcade game
//!
//! Core modules:
//! - `sim`: Frame simulation (grid mapping, enemies, player, collisions)
//! - `input`: Directional command routing
//! - `render`: Drawing collaborator boundary
//! - `config`: Construction-time configuration

pub mod config;
pub mod input;
pub mod render;
pub mod sim;

pub use config::{ConfigError, EnemyConfig, GameConfig, PlayerConfig};
pub use input::{Direction, InputRouter};
pub use render::{LogSurface, Sprite, Surface, render_frame};
pub use sim::{FrameClock, GameEvent, GameState, GridConfig, tick};

/// Game configuration constants
pub mod consts {
    /// Tile dimensions in pixels
    pub const TILE_WIDTH: f32 = 101.0;
    pub const TILE_HEIGHT: f32 = 83.0;
    /// Height of the score strip above row 1
    pub const TOP_OFFSET: f32 = 50.0;

    /// Grid dimensions
    pub const COLUMNS: u32 = 5;
    pub const ROWS: u32 = 6;
    /// Upper bound on columns and rows, keeps tile coordinates within `i32`
    pub const MAX_GRID_TILES: u32 = 1 << 16;

    /// Enemy speed range (pixels/s), upper bound exclusive
    pub const ENEMY_MIN_SPEED: f32 = 100.0;
    pub const ENEMY_MAX_SPEED: f32 = 500.0;
    /// Column enemies (re)enter from, left of the visible field
    pub const ENEMY_SPAWN_COLUMN: i32 = -1;
    /// Rows enemies may run along (inclusive); row 1 is water, the last row is grass
    pub const ENEMY_ROW_MIN: u32 = 2;
    pub const ENEMY_ROW_MAX: u32 = 4;

    /// Player start tile
    pub const PLAYER_START_X: u32 = 3;
    pub const PLAYER_START_Y: u32 = 6;

    /// Largest frame delta accepted from the host (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
