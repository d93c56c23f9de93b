//! Game state and session-level operations

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::player::Player;
use crate::config::{ConfigError, GameConfig};
use crate::input::Direction;

/// Notable things that happened during a tick, for the host to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player was sent back to start by overlapping enemies
    PlayerHit { enemies: usize },
    /// Player reached the goal row
    Won { score: u32 },
    /// Enemy at this index left the field and re-entered on the left
    EnemyRespawned { index: usize },
    /// A new enemy joined after a win
    EnemySpawned { total: usize },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Immutable after construction
    config: GameConfig,
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub player: Player,
    /// Grows by one per win, never shrinks
    pub enemies: Vec<Enemy>,
    /// Frames simulated so far
    pub frame: u64,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session from a validated config
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(config, seed, Pcg32::seed_from_u64(seed))
    }

    /// Create a session driven by an explicit RNG; `seed` is recorded only
    pub fn with_rng(config: GameConfig, seed: u64, mut rng: Pcg32) -> Result<Self, ConfigError> {
        config.validate()?;
        let enemies = (0..config.initial_enemies)
            .map(|_| Enemy::new(&config.grid, &config.enemy, &mut rng))
            .collect();
        let player = Player::new(config.player.start(), &config.grid);
        log::info!(
            "New game: {}x{} grid, seed {}",
            config.grid.columns,
            config.grid.rows,
            seed
        );
        Ok(Self {
            config,
            seed,
            rng,
            player,
            enemies,
            frame: 0,
            events: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Apply one directional command to the player
    pub fn handle_input(&mut self, command: Option<Direction>) {
        self.player.handle_input(command, &self.config.grid);
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance every enemy by `dt` seconds
    pub(super) fn advance_enemies(&mut self, dt: f32) {
        let field_width = self.config.field_width();
        let grid = &self.config.grid;
        let enemy_cfg = &self.config.enemy;
        for (index, enemy) in self.enemies.iter_mut().enumerate() {
            if enemy.advance(dt, field_width, grid, enemy_cfg, &mut self.rng) {
                log::debug!("Enemy {} respawned in row {} at {} px/s", index, enemy.row, enemy.speed);
                self.events.push(GameEvent::EnemyRespawned { index });
            }
        }
    }

    /// Run the player's collision and goal checks
    pub(super) fn update_player(&mut self) {
        let outcome = self.player.update(
            &self.config.grid,
            &mut self.enemies,
            &self.config.enemy,
            &mut self.rng,
        );
        if outcome.hits > 0 {
            self.events.push(GameEvent::PlayerHit {
                enemies: outcome.hits,
            });
        }
        if outcome.won {
            self.events.push(GameEvent::Won {
                score: self.player.score,
            });
            self.events.push(GameEvent::EnemySpawned {
                total: self.enemies.len(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TilePos;

    #[test]
    fn test_new_state() {
        let config = GameConfig {
            seed: Some(5),
            initial_enemies: 3,
            ..Default::default()
        };
        let state = GameState::new(config).unwrap();
        assert_eq!(state.seed, 5);
        assert_eq!(state.enemies.len(), 3);
        assert_eq!(state.player.pos, TilePos::new(3, 6));
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = GameConfig::default();
        config.grid.rows = 0;
        assert!(GameState::new(config).is_err());
    }

    #[test]
    fn test_injected_rng_rejects_invalid_config() {
        let mut config = GameConfig::default();
        config.enemy.row_min = 5;
        config.enemy.row_max = 3;
        let result = GameState::with_rng(config, 0, Pcg32::seed_from_u64(0));
        assert!(matches!(result, Err(ConfigError::InvalidSpawnBand { .. })));
    }

    #[test]
    fn test_injected_rng_matches_seeded_new() {
        let config = GameConfig {
            seed: Some(11),
            initial_enemies: 2,
            ..Default::default()
        };
        let a = GameState::new(config.clone()).unwrap();
        let b = GameState::with_rng(config, 11, Pcg32::seed_from_u64(11)).unwrap();
        assert_eq!(a.enemies, b.enemies);
    }

    #[test]
    fn test_same_seed_same_enemies() {
        let config = GameConfig {
            seed: Some(77),
            initial_enemies: 4,
            ..Default::default()
        };
        let a = GameState::new(config.clone()).unwrap();
        let b = GameState::new(config).unwrap();
        assert_eq!(a.enemies, b.enemies);
    }

    #[test]
    fn test_drain_events_empties() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        state.events.push(GameEvent::PlayerHit { enemies: 1 });
        assert_eq!(state.drain_events().len(), 1);
        assert!(state.drain_events().is_empty());
    }
}
