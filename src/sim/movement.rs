//! Per-tick integration of enemies, projectiles and particles

use glam::Vec3;

use super::state::Game;
use crate::consts::SEEK_MIN_DISTANCE;
use crate::wrap_degrees;

/// Move every active entity by `dt` milliseconds
pub fn integrate(game: &mut Game, dt: f32) {
    seek_enemies(game, dt);
    advance_projectiles(game, dt);
    advance_particles(game, dt);
}

/// Steer enemies straight at the player
pub fn seek_enemies(game: &mut Game, dt: f32) {
    let target = game.player.pos;
    let speed = game.tuning.enemy_speed(game.wave.wave);
    let spin = game.tuning.enemy_spin_rate;

    for (_, enemy) in game.enemies.iter_active_mut() {
        enemy.vel = seek_velocity(enemy.pos, target, speed);
        enemy.pos += enemy.vel * dt;
        enemy.heading = wrap_degrees(enemy.heading + spin * dt);
    }
}

/// Velocity that closes on `target` at `speed`, zero when already on top of it
#[inline]
pub fn seek_velocity(from: Vec3, target: Vec3, speed: f32) -> Vec3 {
    let delta = target - from;
    let dist = delta.length();
    if dist > SEEK_MIN_DISTANCE {
        delta / dist * speed
    } else {
        Vec3::ZERO
    }
}

pub fn advance_projectiles(game: &mut Game, dt: f32) {
    for (_, projectile) in game.projectiles.iter_active_mut() {
        projectile.pos += projectile.vel * dt;
    }
}

/// Drift, fall and fade particles; release the ones that burned out
pub fn advance_particles(game: &mut Game, dt: f32) {
    let gravity = game.tuning.particle_gravity;
    let decay = game.tuning.particle_decay;

    let mut expired = Vec::new();
    for (slot, particle) in game.particles.iter_active_mut() {
        particle.pos += particle.vel * dt;
        particle.vel.y -= gravity * dt;
        particle.life -= dt * decay;
        if particle.life <= 0.0 {
            expired.push(slot);
        }
    }
    for slot in expired {
        game.particles.release(slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Entity, Particle};

    fn game() -> Game {
        Game::new(7)
    }

    #[test]
    fn test_enemy_seeks_player() {
        let mut game = game();
        let slot = game
            .enemies
            .spawn(Entity {
                pos: Vec3::new(10.0, 0.0, 0.0),
                ..Default::default()
            })
            .unwrap();

        seek_enemies(&mut game, 100.0);

        let enemy = game.enemies.get(slot).unwrap();
        // Wave 1 speed is 0.0125 * 1.1 per ms
        assert!((enemy.pos.x - (10.0 - 1.375)).abs() < 1e-4);
        assert!(enemy.pos.y.abs() < 1e-6 && enemy.pos.z.abs() < 1e-6);
        assert!((enemy.heading - 2.5).abs() < 1e-4);
        assert!(enemy.vel.x < 0.0);
    }

    #[test]
    fn test_enemy_on_player_does_not_move() {
        let mut game = game();
        let start = Vec3::new(0.05, 0.0, 0.0);
        let slot = game
            .enemies
            .spawn(Entity {
                pos: start,
                ..Default::default()
            })
            .unwrap();

        seek_enemies(&mut game, 16.0);

        let enemy = game.enemies.get(slot).unwrap();
        assert_eq!(enemy.pos, start);
        assert_eq!(enemy.vel, Vec3::ZERO);
        // Spin still applies
        assert!(enemy.heading > 0.0);
    }

    #[test]
    fn test_projectile_flies_straight() {
        let mut game = game();
        let vel = Vec3::new(0.0, 0.0, 0.125);
        let slot = game
            .projectiles
            .spawn(Entity {
                pos: Vec3::ZERO,
                vel,
                heading: 0.0,
            })
            .unwrap();

        for _ in 0..10 {
            advance_projectiles(&mut game, 16.0);
        }

        let projectile = game.projectiles.get(slot).unwrap();
        assert!((projectile.pos.z - 20.0).abs() < 1e-3);
        assert_eq!(projectile.vel, vel);
    }

    #[test]
    fn test_particle_falls_and_fades() {
        let mut game = game();
        let slot = game
            .particles
            .spawn(Particle {
                life: 1.0,
                ..Default::default()
            })
            .unwrap();

        advance_particles(&mut game, 10.0);

        let particle = game.particles.get(slot).unwrap();
        assert!((particle.life - 0.9).abs() < 1e-6);
        assert!(particle.vel.y < 0.0);
    }

    #[test]
    fn test_particle_expires_on_schedule() {
        let mut game = game();
        let dt = 16.0;
        let slot = game
            .particles
            .spawn(Particle {
                life: 1.0,
                ..Default::default()
            })
            .unwrap();

        let ticks = (1.0 / (dt * 0.01f32)).ceil() as usize;
        for _ in 0..ticks - 1 {
            advance_particles(&mut game, dt);
        }
        assert!(game.particles.is_active(slot));

        for _ in 0..2 {
            advance_particles(&mut game, dt);
        }
        assert!(!game.particles.is_active(slot));
    }

    #[test]
    fn test_enemy_spin_stays_wrapped() {
        let mut game = game();
        let slot = game
            .enemies
            .spawn(Entity {
                pos: Vec3::new(40.0, 0.0, 0.0),
                ..Default::default()
            })
            .unwrap();

        // 0.025 deg/ms for 100 s is 2500 degrees of spin
        for _ in 0..1000 {
            seek_enemies(&mut game, 100.0);
        }

        let heading = game.enemies.get(slot).unwrap().heading;
        assert!((-180.0..180.0).contains(&heading), "heading {heading}");
        // 2500 = 7 * 360 - 20
        assert!((heading + 20.0).abs() < 0.01, "heading {heading}");
    }
}
