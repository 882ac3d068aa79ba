//! Per-frame simulation step
//!
//! The driver calls `advance` once per frame with the elapsed wall-clock time.
//! There is no fixed timestep, so behavior depends on frame rate.

use serde::{Deserialize, Serialize};

use super::phase::PhaseEvent;
use super::state::Game;
use super::{autopilot, collision, movement, player, spawn};

/// Movement keys currently held (non-exclusive)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

/// Input for a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub held: HeldKeys,
    /// Horizontal mouse movement since the last tick
    pub mouse_dx: f32,
    /// Leave the title screen
    pub start: bool,
    /// Shoot (edge, not held)
    pub fire: bool,
    /// Pause toggle
    pub pause: bool,
    /// New run after game over
    pub restart: bool,
    /// Idle/demo mode - autopilot flies the ship
    pub idle_mode: bool,
}

/// Advance the game by `dt` milliseconds
pub fn advance(game: &mut Game, input: &TickInput, dt: f32) {
    game.clear_events();
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    // Phase input; illegal combinations are dropped by the state machine
    if input.restart {
        let _ = game.apply_phase_event(PhaseEvent::Restart);
    }
    if input.start {
        let _ = game.apply_phase_event(PhaseEvent::Start);
    }
    if input.pause {
        let _ = game.apply_phase_event(PhaseEvent::TogglePause);
    }

    // Don't tick unless playing
    if !game.phase.is_simulating() {
        return;
    }

    game.time_ticks += 1;

    let mut input = input.clone();
    if input.idle_mode {
        autopilot::steer(game, &mut input);
    }
    let input = &input;

    player::control(game, input, dt);
    movement::integrate(game, dt);
    spawn::run(game, dt);
    collision::resolve(game);
}
