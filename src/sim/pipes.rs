//! Pillar stream: spawning, scrolling and recycling
//!
//! Pillar pairs live in a FIFO ordered oldest/leftmost first. The stream
//! owns the pairs exclusively; collision and scoring only read them.

use std::collections::VecDeque;

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::consts::*;

/// A top/bottom pillar pair with a fixed-size gap between the segments.
///
/// Invariant: `top + PIPE_GAP + bottom == PLAYFIELD_HEIGHT`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipePair {
    /// Left edge, decreases every frame
    pub x: f32,
    /// Height of the top segment (from y = 0 down to the gap)
    pub top: f32,
    /// Height of the bottom segment (from the gap down to the floor)
    pub bottom: f32,
    /// Set once the pair has awarded its point
    pub scored: bool,
}

impl PipePair {
    /// Spawn at the right edge with the gap position drawn from `rng`,
    /// keeping at least `PIPE_GAP_MARGIN` of pillar visible on each side.
    pub fn spawn(rng: &mut Pcg32) -> Self {
        let top = rng.random_range(PIPE_GAP_MARGIN..PLAYFIELD_HEIGHT - PIPE_GAP - PIPE_GAP_MARGIN);
        Self {
            x: PLAYFIELD_WIDTH,
            top,
            bottom: PLAYFIELD_HEIGHT - top - PIPE_GAP,
            scored: false,
        }
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// Full top segment geometry (for rendering)
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, PIPE_WIDTH, self.top)
    }

    /// Full bottom segment geometry (for rendering)
    pub fn bottom_rect(&self) -> Rect {
        Rect::new(self.x, PLAYFIELD_HEIGHT - self.bottom, PIPE_WIDTH, self.bottom)
    }

    /// Top hitbox, inset on the sides and shortened at the gap edge.
    /// The playfield-edge end stays flush at y = 0.
    pub fn top_hitbox(&self) -> Rect {
        Rect::new(
            self.x + PIPE_HITBOX_PAD_X,
            0.0,
            PIPE_WIDTH - PIPE_HITBOX_PAD_X * 2.0,
            self.top - PIPE_HITBOX_PAD_Y,
        )
    }

    /// Bottom hitbox, inset on the sides and shortened at the gap edge.
    /// The floor end stays flush with the playfield bottom.
    pub fn bottom_hitbox(&self) -> Rect {
        Rect::new(
            self.x + PIPE_HITBOX_PAD_X,
            PLAYFIELD_HEIGHT - self.bottom + PIPE_HITBOX_PAD_Y,
            PIPE_WIDTH - PIPE_HITBOX_PAD_X * 2.0,
            self.bottom - PIPE_HITBOX_PAD_Y,
        )
    }
}

/// Ordered stream of active pillar pairs plus the spawn accumulator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipeStream {
    pub pipes: VecDeque<PipePair>,
    spawn_timer_ms: f64,
}

impl PipeStream {
    /// Advance the stream by one frame: accumulate spawn time, append a
    /// new pair when the interval elapses, then scroll every pair left by
    /// the fixed per-frame speed.
    pub fn advance(&mut self, delta_ms: f64, rng: &mut Pcg32) {
        self.spawn_timer_ms += delta_ms;
        if self.spawn_timer_ms > PIPE_SPAWN_INTERVAL_MS {
            let pair = PipePair::spawn(rng);
            log::debug!("pillar spawned, gap top at {:.1}", pair.top);
            self.pipes.push_back(pair);
            self.spawn_timer_ms = 0.0;
        }

        for pipe in &mut self.pipes {
            pipe.x -= PIPE_SPEED;
        }
    }

    /// Drop the oldest pair once it has moved fully off-screen to the left.
    /// At most one pair can cross the threshold per frame given the spawn
    /// interval and scroll speed.
    pub fn recycle(&mut self) {
        if let Some(front) = self.pipes.front() {
            if front.right_edge() < 0.0 {
                self.pipes.pop_front();
            }
        }
    }

    pub fn clear(&mut self) {
        self.pipes.clear();
        self.spawn_timer_ms = 0.0;
    }
}
