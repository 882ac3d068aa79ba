//! Player steering, movement and shooting

use super::state::{Entity, Game, GameEvent};
use super::tick::{HeldKeys, TickInput};
use crate::{heading_forward, heading_left, wrap_degrees};

/// Apply one tick of player input. Only called while playing.
pub fn control(game: &mut Game, input: &TickInput, dt: f32) {
    turn(game, input.mouse_dx);
    move_player(game, &input.held, dt);
    if input.fire {
        fire(game);
    }
}

/// Mouse moves right, ship turns right (heading decreases)
pub fn turn(game: &mut Game, mouse_dx: f32) {
    let heading = game.player.heading - mouse_dx * game.tuning.mouse_sensitivity;
    game.player.heading = wrap_degrees(heading);
}

/// Sum the contribution of every held direction key
pub fn move_player(game: &mut Game, held: &HeldKeys, dt: f32) {
    let step = game.tuning.player_speed * dt;
    let forward = heading_forward(game.player.heading);
    let left = heading_left(game.player.heading);

    let mut delta = glam::Vec3::ZERO;
    if held.forward {
        delta += forward;
    }
    if held.back {
        delta -= forward;
    }
    if held.left {
        delta += left;
    }
    if held.right {
        delta -= left;
    }
    game.player.pos += delta * step;
}

/// Launch a projectile along the player's heading
pub fn fire(game: &mut Game) -> Option<usize> {
    let projectile = Entity {
        pos: game.player.pos,
        vel: heading_forward(game.player.heading) * game.tuning.projectile_speed,
        heading: game.player.heading,
    };

    match game.projectiles.spawn(projectile) {
        Some(slot) => {
            game.emit(GameEvent::ShotFired { slot });
            Some(slot)
        }
        None => {
            log::debug!("Projectile pool full, shot dropped");
            game.emit(GameEvent::ShotDropped);
            None
        }
    }
}
