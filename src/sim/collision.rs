//! Proximity collisions and their effects
//!
//! All checks are sphere-vs-sphere distance tests. Order matters: enemies that
//! reach the player are removed before projectiles get a chance to hit them.

use glam::Vec3;

use super::phase::PhaseEvent;
use super::state::{Game, GameEvent, Particle};
use crate::consts::EXPLOSION_BURST;

/// Explosion color when an enemy rams the player
pub const CONTACT_EXPLOSION: Vec3 = Vec3::new(1.0, 0.3, 0.0);
/// Explosion color when a projectile kills an enemy
pub const KILL_EXPLOSION: Vec3 = Vec3::new(1.0, 0.5, 0.0);

/// Tally of what one collision pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    pub player_hits: u32,
    pub kills: u32,
    pub culled: u32,
}

/// Run all collision checks for this tick
pub fn resolve(game: &mut Game) -> CollisionResult {
    CollisionResult {
        player_hits: enemy_player(game),
        kills: projectile_enemy(game),
        culled: cull_projectiles(game),
    }
}

/// Enemies touching the player damage it and explode
pub fn enemy_player(game: &mut Game) -> u32 {
    let player_pos = game.player.pos;
    let radius = game.tuning.enemy_contact_radius;
    let damage = game.tuning.enemy_contact_damage;

    let contacts: Vec<(usize, Vec3)> = game
        .enemies
        .iter_active()
        .filter(|(_, enemy)| enemy.pos.distance(player_pos) < radius)
        .map(|(slot, enemy)| (slot, enemy.pos))
        .collect();

    for &(slot, pos) in &contacts {
        let health = game.player.take_damage(damage);
        spawn_explosion(game, pos, CONTACT_EXPLOSION);
        game.enemies.release(slot);
        game.emit(GameEvent::PlayerHit { damage, health });

        if game.player.is_dead() && game.phase.is_simulating() {
            // Only fails if already out of Playing, which the guard rules out
            let _ = game.apply_phase_event(PhaseEvent::PlayerDied);
        }
    }
    contacts.len() as u32
}

/// Each projectile kills at most the first enemy (by slot) in range
pub fn projectile_enemy(game: &mut Game) -> u32 {
    let radius = game.tuning.projectile_hit_radius;
    let mut kills = 0;

    let projectiles: Vec<(usize, Vec3)> = game
        .projectiles
        .iter_active()
        .map(|(slot, p)| (slot, p.pos))
        .collect();

    for (projectile_slot, projectile_pos) in projectiles {
        let hit = game
            .enemies
            .iter_active()
            .find(|(_, enemy)| enemy.pos.distance(projectile_pos) < radius)
            .map(|(slot, enemy)| (slot, enemy.pos));

        if let Some((enemy_slot, enemy_pos)) = hit {
            game.projectiles.release(projectile_slot);
            game.enemies.release(enemy_slot);
            game.player.score += game.tuning.kill_score;
            game.wave.enemies_killed += 1;
            spawn_explosion(game, enemy_pos, KILL_EXPLOSION);
            game.emit(GameEvent::EnemyDestroyed {
                slot: enemy_slot,
                pos: enemy_pos,
            });
            kills += 1;
        }
    }
    kills
}

/// Release projectiles that drifted out of range of the player
pub fn cull_projectiles(game: &mut Game) -> u32 {
    let player_pos = game.player.pos;
    let range = game.tuning.projectile_range;

    let out_of_range: Vec<usize> = game
        .projectiles
        .iter_active()
        .filter(|(_, p)| p.pos.distance(player_pos) > range)
        .map(|(slot, _)| slot)
        .collect();

    for &slot in &out_of_range {
        game.projectiles.release(slot);
    }
    out_of_range.len() as u32
}

/// Burst of particles at `pos`. Returns how many were spawned.
///
/// Fills free slots from the first free one onward, at most `EXPLOSION_BURST`
/// per call; whatever does not fit is dropped.
pub fn spawn_explosion(game: &mut Game, pos: Vec3, color: Vec3) -> usize {
    let Some(start) = game.particles.first_free() else {
        log::debug!("Particle pool full, explosion dropped");
        return 0;
    };

    let spread = game.tuning.particle_spread;
    let mut spawned = 0;
    for slot in start..game.particles.capacity() {
        if spawned == EXPLOSION_BURST {
            break;
        }
        if game.particles.is_active(slot) {
            continue;
        }
        let vel = Vec3::new(
            (game.random_unit() - 0.5) * spread,
            (game.random_unit() - 0.5) * spread,
            (game.random_unit() - 0.5) * spread,
        );
        let particle = Particle {
            pos,
            vel,
            life: 1.0,
            color,
        };
        if game.particles.occupy(slot, particle) {
            spawned += 1;
        }
    }
    spawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_PARTICLES, MAX_PROJECTILES};
    use crate::sim::phase::GamePhase;
    use crate::sim::state::Entity;

    fn playing() -> Game {
        let mut game = Game::new(11);
        game.apply_phase_event(PhaseEvent::Start).unwrap();
        game.clear_events();
        game
    }

    fn enemy_at(game: &mut Game, pos: Vec3) -> usize {
        game.enemies
            .spawn(Entity {
                pos,
                ..Default::default()
            })
            .unwrap()
    }

    fn projectile_at(game: &mut Game, pos: Vec3) -> usize {
        game.projectiles
            .spawn(Entity {
                pos,
                ..Default::default()
            })
            .unwrap()
    }

    #[test]
    fn test_contact_damages_player() {
        let mut game = playing();
        let slot = enemy_at(&mut game, Vec3::new(0.9, 0.0, 0.0));

        let result = resolve(&mut game);

        assert_eq!(result.player_hits, 1);
        assert_eq!(game.player.health, 90);
        assert!(!game.enemies.is_active(slot));
        assert!(game.particles.active_count() > 0);
        assert_eq!(game.phase, GamePhase::Playing);
    }

    #[test]
    fn test_contact_outside_radius_ignored() {
        let mut game = playing();
        enemy_at(&mut game, Vec3::new(0.0, 1.01, 0.0));
        assert_eq!(resolve(&mut game).player_hits, 0);
        assert_eq!(game.player.health, 100);
    }

    #[test]
    fn test_lethal_contact_ends_game() {
        let mut game = playing();
        game.player.health = 10;
        enemy_at(&mut game, Vec3::new(0.0, 0.0, 0.5));

        resolve(&mut game);

        assert_eq!(game.player.health, 0);
        assert_eq!(game.phase, GamePhase::GameOver);
        assert!(game.events().iter().any(|e| matches!(e, GameEvent::GameOver { .. })));
    }

    #[test]
    fn test_two_contacts_clamp_health() {
        let mut game = playing();
        game.player.health = 10;
        enemy_at(&mut game, Vec3::new(0.5, 0.0, 0.0));
        enemy_at(&mut game, Vec3::new(-0.5, 0.0, 0.0));

        resolve(&mut game);

        assert_eq!(game.player.health, 0);
        assert_eq!(game.phase, GamePhase::GameOver);
        let game_overs = game
            .events()
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_projectile_kill_scores() {
        let mut game = playing();
        let enemy = enemy_at(&mut game, Vec3::new(10.0, 0.0, 0.0));
        let projectile = projectile_at(&mut game, Vec3::new(10.4, 0.0, 0.0));

        let result = resolve(&mut game);

        assert_eq!(result.kills, 1);
        assert!(!game.enemies.is_active(enemy));
        assert!(!game.projectiles.is_active(projectile));
        assert_eq!(game.player.score, 100);
        assert_eq!(game.wave.enemies_killed, 1);
    }

    #[test]
    fn test_projectile_kills_only_first_enemy() {
        let mut game = playing();
        let first = enemy_at(&mut game, Vec3::new(10.0, 0.0, 0.0));
        let second = enemy_at(&mut game, Vec3::new(10.2, 0.0, 0.0));
        projectile_at(&mut game, Vec3::new(10.1, 0.0, 0.0));

        assert_eq!(projectile_enemy(&mut game), 1);
        assert!(!game.enemies.is_active(first));
        assert!(game.enemies.is_active(second));
        assert_eq!(game.player.score, 100);
    }

    #[test]
    fn test_enemy_removed_by_contact_cannot_be_shot() {
        let mut game = playing();
        game.player.health = 10;
        enemy_at(&mut game, Vec3::new(0.6, 0.0, 0.0));
        projectile_at(&mut game, Vec3::new(0.5, 0.0, 0.0));

        let result = resolve(&mut game);

        assert_eq!(result.player_hits, 1);
        assert_eq!(result.kills, 0);
        assert_eq!(game.player.score, 0);
        assert_eq!(game.wave.enemies_killed, 0);
        assert_eq!(game.projectiles.active_count(), 1);
    }

    #[test]
    fn test_far_projectiles_culled() {
        let mut game = playing();
        game.player.pos = Vec3::new(5.0, 0.0, 5.0);
        let near = projectile_at(&mut game, Vec3::new(5.0, 0.0, 54.0));
        let far = projectile_at(&mut game, Vec3::new(5.0, 0.0, 56.0));

        assert_eq!(cull_projectiles(&mut game), 1);
        assert!(game.projectiles.is_active(near));
        assert!(!game.projectiles.is_active(far));
    }

    #[test]
    fn test_explosion_burst_is_bounded() {
        let mut game = playing();
        let spawned = spawn_explosion(&mut game, Vec3::ONE, KILL_EXPLOSION);
        assert_eq!(spawned, EXPLOSION_BURST);
        assert_eq!(game.particles.active_count(), EXPLOSION_BURST);

        for (_, p) in game.particles.iter_active() {
            assert_eq!(p.life, 1.0);
            assert_eq!(p.color, KILL_EXPLOSION);
            assert!(p.vel.abs().max_element() <= 0.025);
        }
    }

    #[test]
    fn test_explosion_drops_overflow() {
        let mut game = playing();
        for _ in 0..MAX_PARTICLES - 5 {
            game.particles.spawn(Particle::default());
        }
        assert_eq!(spawn_explosion(&mut game, Vec3::ZERO, CONTACT_EXPLOSION), 5);
        assert!(game.particles.is_full());
        assert_eq!(spawn_explosion(&mut game, Vec3::ZERO, CONTACT_EXPLOSION), 0);
    }

    #[test]
    fn test_explosion_fills_gaps_after_first_free() {
        let mut game = playing();
        for _ in 0..10 {
            game.particles.spawn(Particle::default());
        }
        game.particles.release(2);
        game.particles.release(6);

        spawn_explosion(&mut game, Vec3::ZERO, KILL_EXPLOSION);

        assert!(game.particles.is_active(2));
        assert!(game.particles.is_active(6));
        assert_eq!(game.particles.active_count(), 10 + EXPLOSION_BURST);
    }

    #[test]
    fn test_projectiles_in_range_survive() {
        let mut game = playing();
        for i in 0..MAX_PROJECTILES {
            projectile_at(&mut game, Vec3::new(i as f32 * 0.5, 0.0, 20.0));
        }
        assert_eq!(resolve(&mut game).kills, 0);
        assert_eq!(game.projectiles.active_count(), MAX_PROJECTILES);
    }
}
