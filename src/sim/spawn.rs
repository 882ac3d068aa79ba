//! Wave-based enemy spawning and wave progression

use glam::Vec3;

use super::state::{Entity, Game, GameEvent};

/// Advance the spawn timer, spawn when due, then check for wave clear
pub fn run(game: &mut Game, dt: f32) {
    game.wave.spawn_timer += dt;

    let wave = game.wave.wave;
    let interval = game.tuning.spawn_interval(wave);
    let cap = game.tuning.enemies_per_wave(wave) as usize;

    if game.wave.spawn_timer > interval && game.enemies.active_count() < cap {
        spawn_enemy(game);
        // Resets even when the pool was full and nothing spawned
        game.wave.spawn_timer = 0.0;
    }

    check_wave_clear(game);
}

/// Spawn one enemy on a ring around the player
pub fn spawn_enemy(game: &mut Game) -> Option<usize> {
    let angle = game.random_unit() * std::f32::consts::TAU;
    let dist = game.random_range(game.tuning.spawn_ring_min, game.tuning.spawn_ring_max);
    let height = game.tuning.spawn_height;
    let y = game.random_range(-height, height);

    let origin = game.player.pos;
    let pos = Vec3::new(
        origin.x + angle.sin() * dist,
        y,
        origin.z + angle.cos() * dist,
    );

    let enemy = Entity {
        pos,
        vel: Vec3::ZERO,
        heading: 0.0,
    };

    match game.enemies.spawn(enemy) {
        Some(slot) => {
            game.emit(GameEvent::EnemySpawned { slot, pos });
            Some(slot)
        }
        None => {
            log::debug!("Enemy pool full, spawn dropped");
            game.emit(GameEvent::SpawnDropped);
            None
        }
    }
}

/// Advance the wave once enough enemies have been killed
pub fn check_wave_clear(game: &mut Game) -> bool {
    let target = game.tuning.wave_kill_target(game.wave.wave);
    if game.wave.enemies_killed < target {
        return false;
    }

    game.wave.wave += 1;
    game.wave.enemies_killed = 0;
    let max = game.tuning.max_health;
    game.player.health = (game.player.health + game.tuning.wave_health_regen).min(max);

    log::info!(
        "Wave {} reached (health {}, score {})",
        game.wave.wave,
        game.player.health,
        game.player.score
    );
    game.emit(GameEvent::WaveAdvanced {
        wave: game.wave.wave,
    });
    true
}
