//! Idle/demo mode: the ship flies itself
//!
//! Rewrites the tick input the same way a player would: mouse motion to turn,
//! movement keys, and fire edges.

use super::state::Game;
use super::tick::{HeldKeys, TickInput};
use crate::{heading_toward, wrap_degrees};

/// Most the autopilot turns in one tick, degrees
const MAX_TURN_PER_TICK: f32 = 6.0;
/// Fire when the target is within this many degrees of the nose
const FIRE_CONE: f32 = 4.0;
/// Fire at most every this many ticks
const FIRE_CADENCE: u64 = 8;
/// Back away from enemies closer than this
const RETREAT_DISTANCE: f32 = 3.0;

/// Replace steering and fire input with autopilot decisions
pub fn steer(game: &Game, input: &mut TickInput) {
    input.held = HeldKeys::default();
    input.mouse_dx = 0.0;
    input.fire = false;

    let player = &game.player;
    let nearest = game
        .enemies
        .iter_active()
        .map(|(_, e)| (e.pos, e.pos.distance(player.pos)))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let Some((target, dist)) = nearest else {
        return;
    };

    let error = wrap_degrees(heading_toward(player.pos, target) - player.heading);
    let sensitivity = game.tuning.mouse_sensitivity;
    if sensitivity > 0.0 {
        let turn = error.clamp(-MAX_TURN_PER_TICK, MAX_TURN_PER_TICK);
        // heading -= mouse_dx * sensitivity
        input.mouse_dx = -turn / sensitivity;
    }

    input.fire = error.abs() < FIRE_CONE && game.time_ticks % FIRE_CADENCE == 0;
    input.held.back = dist < RETREAT_DISTANCE;
}
