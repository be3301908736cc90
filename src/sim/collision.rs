//! Collision and bounds checks
//!
//! All tests run on inset hitboxes so grazing a pillar edge by a couple of
//! pixels stays survivable. The evaluator only reads pillar state; the
//! stream keeps exclusive ownership.

use super::pipes::PipePair;
use super::state::Craft;
use crate::consts::*;

/// True if the craft's hitbox intersects either segment of the pair
pub fn craft_hits_pipe(craft: &Craft, pipe: &PipePair) -> bool {
    let hitbox = craft.hitbox();
    hitbox.overlaps(&pipe.top_hitbox()) || hitbox.overlaps(&pipe.bottom_hitbox())
}

/// True if the craft's sprite has left the playfield vertically.
/// The full sprite is used here, not the inset hitbox, matching the
/// ceiling/floor feel of the original tuning.
pub fn craft_out_of_bounds(craft: &Craft) -> bool {
    craft.pos.y < 0.0 || craft.pos.y + CRAFT_HEIGHT > PLAYFIELD_HEIGHT
}

/// True if the pair's trailing edge has passed the craft's leading edge
/// (the moment the pair counts as cleared)
pub fn craft_passed_pipe(craft: &Craft, pipe: &PipePair) -> bool {
    pipe.right_edge() < craft.pos.x
}
