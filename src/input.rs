//! Directional input routing
//!
//! The host decodes key events into tokens; anything outside the four
//! directions is dropped here.

use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// One of the four movement commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Parse a decoded direction token
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Map a browser arrow key code
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Direction::Left),
            38 => Some(Direction::Up),
            39 => Some(Direction::Right),
            40 => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Forwards host commands to the player
#[derive(Debug, Default)]
pub struct InputRouter {
    /// Commands dropped because they were not a direction
    ignored: u64,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route an already-decoded command. `None` is a no-op.
    pub fn route(&mut self, state: &mut GameState, command: Option<Direction>) {
        if command.is_none() {
            self.ignored += 1;
        }
        state.handle_input(command);
    }

    pub fn route_token(&mut self, state: &mut GameState, token: &str) {
        self.route(state, Direction::from_token(token));
    }

    pub fn route_key_code(&mut self, state: &mut GameState, code: u32) {
        self.route(state, Direction::from_key_code(code));
    }

    pub fn ignored(&self) -> u64 {
        self.ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::TilePos;

    fn state() -> GameState {
        let config = GameConfig {
            seed: Some(1),
            ..Default::default()
        };
        GameState::new(config).unwrap()
    }

    #[test]
    fn test_token_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_token(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        assert_eq!(Direction::from_token("Up"), None);
        assert_eq!(Direction::from_token("jump"), None);
        assert_eq!(Direction::from_token(""), None);
        assert_eq!(Direction::from_token("upp"), None);
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(Direction::from_key_code(37), Some(Direction::Left));
        assert_eq!(Direction::from_key_code(38), Some(Direction::Up));
        assert_eq!(Direction::from_key_code(39), Some(Direction::Right));
        assert_eq!(Direction::from_key_code(40), Some(Direction::Down));
        assert_eq!(Direction::from_key_code(32), None);
    }

    #[test]
    fn test_route_moves_player() {
        let mut state = state();
        let mut router = InputRouter::new();
        router.route_token(&mut state, "left");
        router.route_key_code(&mut state, 38);
        assert_eq!(state.player.pos, TilePos::new(2, 5));
        assert_eq!(router.ignored(), 0);
    }

    #[test]
    fn test_route_ignores_garbage() {
        let mut state = state();
        let mut router = InputRouter::new();
        router.route_token(&mut state, "teleport");
        router.route_key_code(&mut state, 13);
        router.route(&mut state, None);
        assert_eq!(state.player.pos, TilePos::new(3, 6));
        assert_eq!(router.ignored(), 3);
    }
}
