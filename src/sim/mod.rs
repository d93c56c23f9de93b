//! Frame simulation module
//!
//! All gameplay logic lives here:
//! - Tile to pixel mapping
//! - Enemy motion and respawn
//! - Player movement, collision and win handling
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod grid;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use enemy::Enemy;
pub use grid::{GridConfig, TilePos};
pub use player::Player;
pub use state::{GameEvent, GameState};
pub use tick::{FrameClock, tick};
