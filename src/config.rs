//! Game configuration
//!
//! Fixed at construction time. Defaults reproduce the classic 5x6 board.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{GridConfig, TilePos};

/// Errors raised when loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must have at least one column and one row (got {columns}x{rows})")]
    EmptyGrid { columns: u32, rows: u32 },
    #[error("grid of {columns}x{rows} tiles exceeds the {max} tile limit per axis")]
    GridTooLarge { columns: u32, rows: u32, max: u32 },
    #[error("tile dimensions must be positive (got {width}x{height})")]
    InvalidTileSize { width: f32, height: f32 },
    #[error("top offset must be finite (got {0})")]
    InvalidTopOffset(f32),
    #[error("enemy speed range [{min}, {max}) is empty or negative")]
    InvalidSpeedRange { min: f32, max: f32 },
    #[error("enemy rows {min}..={max} must lie strictly between the goal row 1 and the start row {rows}")]
    InvalidSpawnBand { min: u32, max: u32, rows: u32 },
    #[error("player start ({x}, {y}) lies outside the {columns}x{rows} grid")]
    StartOutsideGrid { x: u32, y: u32, columns: u32, rows: u32 },
    #[error("player cannot start on the goal row")]
    StartOnGoalRow,
    #[error("field width must be positive (got {0})")]
    InvalidFieldWidth(f32),
    #[error("at least one enemy is required")]
    NoEnemies,
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Enemy spawn parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Minimum speed (pixels/s, inclusive)
    pub min_speed: f32,
    /// Maximum speed (pixels/s, exclusive)
    pub max_speed: f32,
    /// Column enemies enter from (usually left of column 1)
    pub spawn_column: i32,
    /// Lowest-numbered lane (inclusive)
    pub row_min: u32,
    /// Highest-numbered lane (inclusive)
    pub row_max: u32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            min_speed: ENEMY_MIN_SPEED,
            max_speed: ENEMY_MAX_SPEED,
            spawn_column: ENEMY_SPAWN_COLUMN,
            row_min: ENEMY_ROW_MIN,
            row_max: ENEMY_ROW_MAX,
        }
    }
}

/// Player parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub start_x: u32,
    pub start_y: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_x: PLAYER_START_X,
            start_y: PLAYER_START_Y,
        }
    }
}

impl PlayerConfig {
    pub fn start(&self) -> TilePos {
        TilePos::new(self.start_x as i32, self.start_y as i32)
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid: GridConfig,
    pub enemy: EnemyConfig,
    pub player: PlayerConfig,
    /// Width past which enemies respawn (defaults to the grid width)
    pub field_width: Option<f32>,
    /// Enemies on the board at game start
    pub initial_enemies: usize,
    /// RNG seed (random when absent)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            enemy: EnemyConfig::default(),
            player: PlayerConfig::default(),
            field_width: None,
            initial_enemies: 1,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded config: {}x{} grid, {} enemies",
            config.grid.columns,
            config.grid.rows,
            config.initial_enemies
        );
        Ok(config)
    }

    /// Effective respawn boundary
    pub fn field_width(&self) -> f32 {
        self.field_width.unwrap_or_else(|| self.grid.pixel_width())
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = &self.grid;
        if grid.columns == 0 || grid.rows == 0 {
            return Err(ConfigError::EmptyGrid {
                columns: grid.columns,
                rows: grid.rows,
            });
        }
        if grid.columns > MAX_GRID_TILES || grid.rows > MAX_GRID_TILES {
            return Err(ConfigError::GridTooLarge {
                columns: grid.columns,
                rows: grid.rows,
                max: MAX_GRID_TILES,
            });
        }
        let tile_ok = |v: f32| v.is_finite() && v > 0.0;
        if !tile_ok(grid.tile_width) || !tile_ok(grid.tile_height) {
            return Err(ConfigError::InvalidTileSize {
                width: grid.tile_width,
                height: grid.tile_height,
            });
        }
        if !grid.top_offset.is_finite() {
            return Err(ConfigError::InvalidTopOffset(grid.top_offset));
        }

        let enemy = &self.enemy;
        if !(enemy.min_speed >= 0.0 && enemy.min_speed < enemy.max_speed && enemy.max_speed.is_finite())
        {
            return Err(ConfigError::InvalidSpeedRange {
                min: enemy.min_speed,
                max: enemy.max_speed,
            });
        }
        if enemy.row_min < 2 || enemy.row_min > enemy.row_max || enemy.row_max >= grid.rows {
            return Err(ConfigError::InvalidSpawnBand {
                min: enemy.row_min,
                max: enemy.row_max,
                rows: grid.rows,
            });
        }

        let player = &self.player;
        if !grid.contains(player.start()) {
            return Err(ConfigError::StartOutsideGrid {
                x: player.start_x,
                y: player.start_y,
                columns: grid.columns,
                rows: grid.rows,
            });
        }
        if player.start_y == 1 {
            return Err(ConfigError::StartOnGoalRow);
        }

        let field_width = self.field_width();
        if !(field_width.is_finite() && field_width > 0.0) {
            return Err(ConfigError::InvalidFieldWidth(field_width));
        }
        if self.initial_enemies == 0 {
            return Err(ConfigError::NoEnemies);
        }
        Ok(())
    }
}
