//! Skydrift - a gravity-and-pillars arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pillar stream, collisions, game state)
//! - `render`: Renderer-agnostic draw pass over an abstract surface
//! - `driver`: Frame driver wiring a monotonic clock and input events to the sim
//!
//! The crate never touches pixels or the OS event loop. The host owns a
//! render surface and a frame scheduler and calls [`driver::FrameDriver::frame`]
//! once per display refresh.

pub mod driver;
pub mod render;
pub mod sim;

pub use driver::{Clock, FrameDriver, InputEvent, SystemClock};
pub use render::{DrawList, RenderSurface, Sprite};
pub use sim::{GamePhase, GameState};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions in pixels
    pub const PLAYFIELD_WIDTH: f32 = 360.0;
    pub const PLAYFIELD_HEIGHT: f32 = 640.0;

    /// Craft sprite size
    pub const CRAFT_WIDTH: f32 = 64.0;
    pub const CRAFT_HEIGHT: f32 = 48.0;
    /// The craft never moves horizontally; the world scrolls instead
    pub const CRAFT_X: f32 = 80.0;
    /// Vertical spawn/reset position
    pub const CRAFT_START_Y: f32 = 300.0;

    /// Downward acceleration, applied once per frame (px/frame²)
    pub const GRAVITY: f32 = 0.68;
    /// Instantaneous upward velocity applied on input (px/frame)
    pub const LIFT: f32 = -11.0;

    /// Pillar pair geometry and motion
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 150.0;
    /// Horizontal scroll speed, applied once per frame (px/frame)
    pub const PIPE_SPEED: f32 = 2.5;
    /// Milliseconds between pillar spawns
    pub const PIPE_SPAWN_INTERVAL_MS: f64 = 1300.0;
    /// Minimum visible pillar height above and below the gap
    pub const PIPE_GAP_MARGIN: f32 = 60.0;

    /// Forgiving-collision insets (per side, per axis)
    pub const CRAFT_HITBOX_PAD_X: f32 = 10.0;
    pub const CRAFT_HITBOX_PAD_Y: f32 = 8.0;
    pub const PIPE_HITBOX_PAD_X: f32 = 6.0;
    pub const PIPE_HITBOX_PAD_Y: f32 = 6.0;

    /// Background ping-pong animation
    pub const BG_FRAME_COUNT: u8 = 5;
    pub const BG_FRAME_TIME_MS: f64 = 70.0;

    /// Boost flame animation
    pub const BOOST_FRAME_COUNT: u8 = 4;
    pub const BOOST_FRAME_TIME_MS: f64 = 50.0;
}
