//! Axis-aligned rectangle geometry
//!
//! Everything in the playfield is an AABB: the craft, both pillar segments
//! and their inset hitboxes. Screen coordinates, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict AABB overlap test: projections must overlap on both axes.
    /// Rectangles that merely touch along an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Shrink the rectangle by `dx`/`dy` on each side (forgiving hitboxes).
    /// Callers keep insets well below half the extent, so no clamping here.
    pub fn inset(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            pos: self.pos + Vec2::new(dx, dy),
            size: self.size - Vec2::new(dx * 2.0, dy * 2.0),
        }
    }
}
