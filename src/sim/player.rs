//! The player token
//!
//! Moves one tile per command, scores on reaching row 1, and is sent back
//! to its start tile on any hit.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, overlaps};
use super::enemy::Enemy;
use super::grid::{GridConfig, TilePos};
use crate::config::EnemyConfig;
use crate::input::Direction;

/// What happened to the player during one update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Enemies overlapping the player this frame
    pub hits: usize,
    /// Reached the goal row
    pub won: bool,
}

/// The player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Current tile
    pub pos: TilePos,
    pub score: u32,
    /// Tile the player returns to on reset
    start: TilePos,
    /// Top-left pixel position, refreshed after every tile change
    pixel: Vec2,
}

impl Player {
    pub fn new(start: TilePos, grid: &GridConfig) -> Self {
        Self {
            pos: start,
            score: 0,
            start,
            pixel: grid.tile_to_pixels(start),
        }
    }

    pub fn start(&self) -> TilePos {
        self.start
    }

    pub fn pixel(&self) -> Vec2 {
        self.pixel
    }

    /// Collision box (one tile)
    pub fn rect(&self, grid: &GridConfig) -> Rect {
        Rect::new(self.pixel, grid.tile_size())
    }

    #[inline]
    fn refresh_pixel(&mut self, grid: &GridConfig) {
        self.pixel = grid.tile_to_pixels(self.pos);
    }

    /// Apply one directional command; `None` is ignored
    pub fn handle_input(&mut self, command: Option<Direction>, grid: &GridConfig) {
        let Some(direction) = command else {
            return;
        };
        match direction {
            Direction::Up => self.move_up(grid),
            Direction::Down => self.move_down(grid),
            Direction::Left => self.move_left(grid),
            Direction::Right => self.move_right(grid),
        }
    }

    pub fn move_up(&mut self, grid: &GridConfig) {
        if self.pos.y > 1 {
            self.pos.y -= 1;
            self.refresh_pixel(grid);
        }
    }

    pub fn move_down(&mut self, grid: &GridConfig) {
        if self.pos.y < grid.rows as i32 {
            self.pos.y += 1;
            self.refresh_pixel(grid);
        }
    }

    pub fn move_left(&mut self, grid: &GridConfig) {
        if self.pos.x > 1 {
            self.pos.x -= 1;
            self.refresh_pixel(grid);
        }
    }

    pub fn move_right(&mut self, grid: &GridConfig) {
        if self.pos.x < grid.columns as i32 {
            self.pos.x += 1;
            self.refresh_pixel(grid);
        }
    }

    /// Send the player back to the start tile. Score is kept.
    pub fn reset(&mut self, grid: &GridConfig) {
        self.pos = self.start;
        self.refresh_pixel(grid);
    }

    pub fn add_score(&mut self) {
        self.score += 1;
    }

    /// Reset on overlap with any enemy. Returns the number of overlapping enemies.
    pub fn check_collision(&mut self, enemies: &[Enemy], grid: &GridConfig) -> usize {
        let mut hits = 0;
        for enemy in enemies {
            if overlaps(&self.rect(grid), &enemy.rect(grid)) {
                self.reset(grid);
                hits += 1;
            }
        }
        if hits > 0 {
            log::debug!("Player hit by {} enemies, back to {:?}", hits, self.start);
        }
        hits
    }

    /// Score and add an enemy if the goal row was reached
    pub fn check_if_won<R: Rng + ?Sized>(
        &mut self,
        grid: &GridConfig,
        enemies: &mut Vec<Enemy>,
        enemy_cfg: &EnemyConfig,
        rng: &mut R,
    ) -> bool {
        if self.pos.y != 1 {
            return false;
        }
        self.reset(grid);
        self.add_score();
        enemies.push(Enemy::new(grid, enemy_cfg, rng));
        log::info!("Crossed! score={}, enemies={}", self.score, enemies.len());
        true
    }

    /// Per-frame player update: collisions first, then the goal check.
    ///
    /// The score strip is not drawn here; `render::render_frame` redraws it
    /// every frame from `score`.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        grid: &GridConfig,
        enemies: &mut Vec<Enemy>,
        enemy_cfg: &EnemyConfig,
        rng: &mut R,
    ) -> UpdateOutcome {
        let hits = self.check_collision(enemies, grid);
        let won = self.check_if_won(grid, enemies, enemy_cfg, rng);
        UpdateOutcome { hits, won }
    }
}
