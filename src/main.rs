//! Lane Crossing headless runner
//!
//! Usage: `lane-crossing [config.json] [frames]`
//!
//! Runs a scripted session at 60 Hz against a logging surface and prints
//! the final score. Set `RUST_LOG=debug` to watch hits and respawns.

use lane_crossing::{
    Direction, FrameClock, GameConfig, GameEvent, GameState, InputRouter, LogSurface, render_frame,
    tick,
};

const FRAME_MS: f64 = 1000.0 / 60.0;
const DEFAULT_FRAMES: u64 = 3600;
/// Frames between scripted key presses
const INPUT_EVERY: u64 = 20;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let mut state = match GameState::new(config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Lane Crossing (headless) starting, seed {}", state.seed);

    let mut clock = FrameClock::new();
    let mut router = InputRouter::new();
    let mut surface = LogSurface::default();
    let (mut hits, mut wins) = (0u32, 0u32);

    for frame in 0..frames {
        // Mostly push forward, sidestep now and then
        if frame % INPUT_EVERY == 0 {
            let command = match (frame / INPUT_EVERY) % 7 {
                3 => Direction::Left,
                5 => Direction::Right,
                _ => Direction::Up,
            };
            router.route(&mut state, Some(command));
        }

        let dt = clock.advance(frame as f64 * FRAME_MS);
        tick(&mut state, dt);
        render_frame(&state, &mut surface);

        for event in state.drain_events() {
            match event {
                GameEvent::PlayerHit { .. } => hits += 1,
                GameEvent::Won { .. } => wins += 1,
                GameEvent::EnemyRespawned { .. } | GameEvent::EnemySpawned { .. } => {}
            }
        }
    }

    log::info!(
        "Finished {} frames: {} crossings, {} hits, {} enemies, {} draws",
        frames,
        wins,
        hits,
        state.enemies.len(),
        surface.draws
    );
    println!("SCORE: {}", state.score());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives `tick` and `render_frame` itself
}
