//! Frame driver
//!
//! Owns the game state and glues it to the host's collaborators: a
//! monotonic [`Clock`], an input event source, and a [`RenderSurface`].
//! The host's frame scheduler (vsync callback, timer loop) calls
//! [`FrameDriver::frame`] once per display refresh; input events arrive
//! asynchronously through [`FrameDriver::handle_event`] and are latched
//! for the next frame.
//!
//! Elapsed wall time only drives the spawn accumulator and animation
//! timers. Physics constants apply once per frame, so simulation speed
//! tracks the refresh rate exactly as the original tuning intends.

use std::time::Instant;

use crate::render::RenderSurface;
use crate::sim::{FrameInput, GameState, tick};

/// Monotonic time source delivering milliseconds since an arbitrary origin
pub trait Clock {
    fn now_ms(&mut self) -> f64;
}

/// Wall-clock time for native hosts
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Discrete input events, mapped 1:1 from key down/up and touch start/end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Activate,
    Deactivate,
}

/// Pulls the clock, steps the simulation, emits the frame
pub struct FrameDriver<C: Clock> {
    clock: C,
    state: GameState,
    input: FrameInput,
    last_time_ms: Option<f64>,
}

impl<C: Clock> FrameDriver<C> {
    pub fn new(clock: C, seed: u64) -> Self {
        log::info!("frame driver starting with seed {seed}");
        Self {
            clock,
            state: GameState::new(seed),
            input: FrameInput::default(),
            last_time_ms: None,
        }
    }

    /// Latch an input event for the next frame. Safe to call at any time
    /// between frames; edges accumulate until the next tick consumes them.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Activate => self.input.activate = true,
            InputEvent::Deactivate => self.input.deactivate = true,
        }
    }

    /// Run one frame: compute the elapsed delta, advance the simulation,
    /// draw, and clear the consumed input edges. The first frame sees a
    /// zero delta.
    pub fn frame(&mut self, surface: &mut impl RenderSurface) {
        let now = self.clock.now_ms();
        let delta_ms = match self.last_time_ms {
            Some(last) => now - last,
            None => 0.0,
        };
        self.last_time_ms = Some(now);

        tick(&mut self.state, &self.input, delta_ms);
        crate::render::draw(&self.state, surface);

        self.input = FrameInput::default();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
