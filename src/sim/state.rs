//! Game state and core simulation types
//!
//! All mutable state lives in [`GameState`], owned by the frame driver and
//! advanced by [`super::tick::tick`]. The RNG is seeded per run and stored
//! with the state, so a serialized snapshot resumes the exact pillar stream.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::anim::{BoostAnim, PingPong};
use super::geom::Rect;
use super::pipes::PipeStream;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, waiting for the first input
    Idle,
    /// Full simulation active
    Running,
    /// Craft collided or left the playfield; score shown
    Over,
}

/// The player-controlled craft. Horizontal position is fixed; only the
/// vertical axis integrates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Craft {
    /// Top-left corner of the sprite
    pub pos: Vec2,
    /// Vertical velocity (px/frame, positive is down)
    pub velocity: f32,
}

impl Default for Craft {
    fn default() -> Self {
        Self {
            pos: Vec2::new(CRAFT_X, CRAFT_START_Y),
            velocity: 0.0,
        }
    }
}

impl Craft {
    /// Full sprite geometry
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, CRAFT_WIDTH, CRAFT_HEIGHT)
    }

    /// Forgiving hitbox, inset on both axes
    pub fn hitbox(&self) -> Rect {
        self.rect().inset(CRAFT_HITBOX_PAD_X, CRAFT_HITBOX_PAD_Y)
    }

    /// One frame of gravity integration: accelerate, then move.
    /// Deliberately not delta-scaled; see the driver docs.
    pub fn integrate(&mut self) {
        self.velocity += GRAVITY;
        self.pos.y += self.velocity;
    }

    /// Instantaneous upward kick, overriding accumulated velocity
    pub fn apply_lift(&mut self) {
        self.velocity = LIFT;
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gap-position RNG, advanced once per pillar spawn
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub craft: Craft,
    pub pipes: PipeStream,
    /// Pairs cleared this run
    pub score: u32,
    /// True while the input is held during Running
    pub boosting: bool,
    pub boost: BoostAnim,
    pub background: PingPong,
    /// Frames simulated since process start (all phases)
    pub frames: u64,
}

impl GameState {
    /// Create a fresh state in Idle with the given run seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            craft: Craft::default(),
            pipes: PipeStream::default(),
            score: 0,
            boosting: false,
            boost: BoostAnim::default(),
            background: PingPong::default(),
            frames: 0,
        }
    }

    /// Full reset back to Idle: craft pose, stream, score, boost and the
    /// spawn accumulator all return to their initial values. The RNG keeps
    /// its position so the next run sees a fresh pillar layout.
    pub fn reset(&mut self) {
        self.craft = Craft::default();
        self.pipes.clear();
        self.score = 0;
        self.boosting = false;
        self.boost.reset();
        self.phase = GamePhase::Idle;
    }
}
