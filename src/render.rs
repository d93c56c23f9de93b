//! Drawing collaborator boundary
//!
//! The core never draws itself; it hands pixel positions and resource paths
//! to a `Surface` supplied by the host (canvas, terminal, test recorder).

use crate::sim::GameState;

/// Sprites the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Enemy,
    Player,
}

impl Sprite {
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::Enemy => "images/enemy-bug.png",
            Sprite::Player => "images/char-boy.png",
        }
    }
}

/// Score strip geometry and style
pub mod hud {
    pub const CLEAR_WIDTH: f32 = 400.0;
    pub const CLEAR_HEIGHT: f32 = 50.0;
    pub const FILL_STYLE: &str = "red";
    pub const FONT: &str = "30px  Impact";
    pub const TEXT_X: f32 = 30.0;
    pub const TEXT_Y: f32 = 30.0;
}

/// A host drawing surface
pub trait Surface {
    /// Loaded image handle
    type Handle;

    fn get_resource(&mut self, path: &str) -> Self::Handle;
    fn draw_image(&mut self, image: &Self::Handle, x: f32, y: f32);

    fn clear_region(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn set_fill_style(&mut self, style: &str);
    fn set_font(&mut self, font: &str);
    fn draw_text(&mut self, text: &str, x: f32, y: f32);
}

/// Redraw the score strip
pub fn draw_score<S: Surface + ?Sized>(surface: &mut S, score: u32) {
    surface.clear_region(0.0, 0.0, hud::CLEAR_WIDTH, hud::CLEAR_HEIGHT);
    surface.set_fill_style(hud::FILL_STYLE);
    surface.set_font(hud::FONT);
    surface.draw_text(&format!("SCORE: {}", score), hud::TEXT_X, hud::TEXT_Y);
}

/// Draw one frame: score, enemies, then the player on top
pub fn render_frame<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    draw_score(surface, state.score());

    let bug = surface.get_resource(Sprite::Enemy.path());
    for enemy in &state.enemies {
        surface.draw_image(&bug, enemy.pos.x, enemy.pos.y);
    }

    let hero = surface.get_resource(Sprite::Player.path());
    let p = state.player.pixel();
    surface.draw_image(&hero, p.x, p.y);
}

/// Surface that only traces draw calls (headless runs)
#[derive(Debug, Default)]
pub struct LogSurface {
    /// Images drawn since creation
    pub draws: u64,
}

impl Surface for LogSurface {
    type Handle = String;

    fn get_resource(&mut self, path: &str) -> Self::Handle {
        path.to_string()
    }

    fn draw_image(&mut self, image: &Self::Handle, x: f32, y: f32) {
        self.draws += 1;
        log::trace!("draw {} at ({:.1}, {:.1})", image, x, y);
    }

    fn clear_region(&mut self, x: f32, y: f32, w: f32, h: f32) {
        log::trace!("clear ({}, {}, {}, {})", x, y, w, h);
    }

    fn set_fill_style(&mut self, _style: &str) {}

    fn set_font(&mut self, _font: &str) {}

    fn draw_text(&mut self, text: &str, _x: f32, _y: f32) {
        log::trace!("text {:?}", text);
    }
}
