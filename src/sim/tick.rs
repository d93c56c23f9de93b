//! Per-frame simulation step
//!
//! The host calls `tick` once per animation frame with the elapsed time.

use super::state::GameState;
use crate::consts::MAX_FRAME_DT;

/// Advance the game by one frame of `dt` seconds.
///
/// Enemies move first, then the player is checked against their new
/// positions. Enemies added by a win are first advanced on the next frame.
pub fn tick(state: &mut GameState, dt: f32) {
    state.frame += 1;
    state.advance_enemies(dt);
    state.update_player();
}

/// Converts host timestamps (ms) into frame deltas (s)
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous timestamp, clamped to `[0, MAX_FRAME_DT]`.
    /// The first call returns 0.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_time = Some(now_ms);
        dt.clamp(0.0, MAX_FRAME_DT)
    }
}
