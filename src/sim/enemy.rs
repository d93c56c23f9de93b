//! Enemy bugs crossing the lanes

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::grid::GridConfig;
use crate::config::EnemyConfig;

/// An enemy running left to right along one lane
///
/// The row is picked on (re)spawn and stays fixed until the next respawn.
/// Horizontal motion is continuous in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Lane (tile row) the enemy runs along
    pub row: u32,
    /// Top-left pixel position
    pub pos: Vec2,
    /// Horizontal speed (pixels/s)
    pub speed: f32,
}

impl Enemy {
    /// Spawn a fresh enemy at the left edge
    pub fn new<R: Rng + ?Sized>(grid: &GridConfig, cfg: &EnemyConfig, rng: &mut R) -> Self {
        let mut enemy = Self {
            row: cfg.row_min,
            pos: Vec2::ZERO,
            speed: cfg.min_speed,
        };
        enemy.initialize(grid, cfg, rng);
        enemy
    }

    /// Pixel offset enemies (re)enter from
    pub fn spawn_x(grid: &GridConfig, cfg: &EnemyConfig) -> f32 {
        grid.to_pixels(cfg.spawn_column, 1).x
    }

    /// Re-roll lane and speed and move back to the off-screen sentinel
    pub fn initialize<R: Rng + ?Sized>(&mut self, grid: &GridConfig, cfg: &EnemyConfig, rng: &mut R) {
        self.row = rng.random_range(cfg.row_min..=cfg.row_max);
        self.pos = grid.to_pixels(cfg.spawn_column, self.row as i32);
        // Whole pixels per second
        self.speed = rng
            .random_range(cfg.min_speed..cfg.max_speed)
            .floor()
            .max(cfg.min_speed);
    }

    /// Advance by `dt` seconds, or respawn if already past the field edge.
    ///
    /// Returns true when the enemy respawned instead of moving.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        field_width: f32,
        grid: &GridConfig,
        cfg: &EnemyConfig,
        rng: &mut R,
    ) -> bool {
        if self.pos.x > field_width {
            self.initialize(grid, cfg, rng);
            return true;
        }
        self.pos.x += dt * self.speed;
        false
    }

    /// Collision box (one tile)
    pub fn rect(&self, grid: &GridConfig) -> Rect {
        Rect::new(self.pos, grid.tile_size())
    }
}
