//! Presentational animation state
//!
//! None of this affects gameplay. The background cycles 0..4..0 forever
//! (ping-pong) in every phase; the boost flame loops modulo its frame
//! count only while the player holds the input.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Ping-pong frame index over a fixed-length sequence: advances by a
/// signed direction each time the accumulated timer crosses the frame
/// interval, bouncing at both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingPong {
    frame: u8,
    direction: i8,
    timer_ms: f64,
}

impl Default for PingPong {
    fn default() -> Self {
        Self {
            frame: 0,
            direction: 1,
            timer_ms: 0.0,
        }
    }
}

impl PingPong {
    /// Current frame index in `0..BG_FRAME_COUNT`
    pub fn frame(&self) -> u8 {
        self.frame
    }

    pub fn advance(&mut self, delta_ms: f64) {
        self.timer_ms += delta_ms;
        if self.timer_ms > BG_FRAME_TIME_MS {
            self.frame = (self.frame as i8 + self.direction) as u8;
            if self.frame == BG_FRAME_COUNT - 1 {
                self.direction = -1;
            }
            if self.frame == 0 {
                self.direction = 1;
            }
            self.timer_ms = 0.0;
        }
    }
}

/// Boost flame loop, advanced only while boosting. Snaps back to frame 0
/// the moment boost ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoostAnim {
    frame: u8,
    timer_ms: f64,
}

impl BoostAnim {
    /// Current frame index in `0..BOOST_FRAME_COUNT`
    pub fn frame(&self) -> u8 {
        self.frame
    }

    pub fn advance(&mut self, delta_ms: f64) {
        self.timer_ms += delta_ms;
        if self.timer_ms > BOOST_FRAME_TIME_MS {
            self.frame = (self.frame + 1) % BOOST_FRAME_COUNT;
            self.timer_ms = 0.0;
        }
    }

    pub fn reset(&mut self) {
        self.frame = 0;
        self.timer_ms = 0.0;
    }
}
