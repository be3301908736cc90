//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One frame per call, driven from outside
//! - Seeded RNG only
//! - Stable iteration order (oldest pillar first)
//! - No rendering or platform dependencies

pub mod anim;
pub mod collision;
pub mod geom;
pub mod pipes;
pub mod state;
pub mod tick;

pub use anim::{BoostAnim, PingPong};
pub use collision::{craft_hits_pipe, craft_out_of_bounds, craft_passed_pipe};
pub use geom::Rect;
pub use pipes::{PipePair, PipeStream};
pub use state::{Craft, GamePhase, GameState};
pub use tick::{FrameInput, tick};
