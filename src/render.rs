//! Renderer-agnostic draw pass
//!
//! [`draw`] walks the game state and emits ordered calls on a
//! [`RenderSurface`]. The surface is the host's problem: a canvas, a
//! terminal, a GPU quad batcher. [`DrawList`] records the calls verbatim
//! for tests and headless runs.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GamePhase, GameState, Rect};

/// Sprite identifiers; the host maps them to whatever image assets it loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    /// Background animation frame
    Background(u8),
    CraftIdle,
    /// Boost flame animation frame
    CraftBoost(u8),
    /// Pillar segment; `flipped` is the top segment drawn upside down
    Pillar { flipped: bool },
}

/// Horizontal text alignment relative to the given position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// RGBA fill color
pub type Color = [u8; 4];

pub const WHITE: Color = [255, 255, 255, 255];

/// Minimal drawing capability the core needs from the host
pub trait RenderSurface {
    fn set_fill(&mut self, color: Color);
    fn draw_image(&mut self, sprite: Sprite, dst: Rect);
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign);
}

/// Emit one frame of draw calls for the current state
pub fn draw(state: &GameState, surface: &mut impl RenderSurface) {
    surface.draw_image(
        Sprite::Background(state.background.frame()),
        Rect::new(0.0, 0.0, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
    );

    let center_x = PLAYFIELD_WIDTH / 2.0;
    let mid_y = PLAYFIELD_HEIGHT / 2.0;

    match state.phase {
        GamePhase::Idle => {
            surface.set_fill(WHITE);
            surface.draw_text(
                "TAP TO PLAY",
                Vec2::new(center_x, mid_y),
                26.0,
                TextAlign::Center,
            );
            surface.draw_text(
                "ARCADE MODE",
                Vec2::new(center_x, mid_y + 40.0),
                18.0,
                TextAlign::Center,
            );
        }
        GamePhase::Over => {
            surface.set_fill(WHITE);
            surface.draw_text(
                "GAME OVER",
                Vec2::new(center_x, mid_y - 20.0),
                26.0,
                TextAlign::Center,
            );
            surface.draw_text(
                &format!("SCORE: {}", state.score),
                Vec2::new(center_x, mid_y + 20.0),
                26.0,
                TextAlign::Center,
            );
            surface.draw_text(
                "TAP TO RESTART",
                Vec2::new(center_x, mid_y + 60.0),
                18.0,
                TextAlign::Center,
            );
        }
        GamePhase::Running => {
            let craft_sprite = if state.boosting {
                Sprite::CraftBoost(state.boost.frame())
            } else {
                Sprite::CraftIdle
            };
            surface.draw_image(craft_sprite, state.craft.rect());

            for pipe in &state.pipes.pipes {
                surface.draw_image(Sprite::Pillar { flipped: true }, pipe.top_rect());
                surface.draw_image(Sprite::Pillar { flipped: false }, pipe.bottom_rect());
            }

            surface.set_fill(WHITE);
            surface.draw_text(
                &state.score.to_string(),
                Vec2::new(20.0, 40.0),
                22.0,
                TextAlign::Left,
            );
        }
    }
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill(Color),
    Image { sprite: Sprite, dst: Rect },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        align: TextAlign,
    },
}

/// Surface that records calls instead of rasterizing, for tests and the
/// headless binary
#[derive(Debug, Default)]
pub struct DrawList {
    pub cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.cmds.clear();
    }
}

impl RenderSurface for DrawList {
    fn set_fill(&mut self, color: Color) {
        self.cmds.push(DrawCmd::Fill(color));
    }

    fn draw_image(&mut self, sprite: Sprite, dst: Rect) {
        self.cmds.push(DrawCmd::Image { sprite, dst });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign) {
        self.cmds.push(DrawCmd::Text {
            text: text.to_string(),
            pos,
            size,
            align,
        });
    }
}
