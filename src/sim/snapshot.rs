//! Read-only view of the game for renderers and tooling

use glam::Vec3;
use serde::Serialize;

use super::phase::GamePhase;
use super::state::Game;

/// Player state as the renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub pos: Vec3,
    pub heading: f32,
    pub health: i32,
    pub max_health: i32,
    pub score: u32,
}

/// An active enemy or projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntityView {
    pub slot: usize,
    pub pos: Vec3,
    pub heading: f32,
}

/// An active particle; alpha tracks remaining life
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleView {
    pub pos: Vec3,
    pub color: Vec3,
    pub alpha: f32,
}

/// Everything a frame needs, copied out of the game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub tick: u64,
    pub wave: u32,
    pub enemies_killed: u32,
    pub player: PlayerView,
    pub enemies: Vec<EntityView>,
    pub projectiles: Vec<EntityView>,
    pub particles: Vec<ParticleView>,
}

impl Snapshot {
    pub fn capture(game: &Game) -> Self {
        let entity_view = |(slot, e): (usize, &super::state::Entity)| EntityView {
            slot,
            pos: e.pos,
            heading: e.heading,
        };

        Self {
            phase: game.phase,
            tick: game.time_ticks,
            wave: game.wave.wave,
            enemies_killed: game.wave.enemies_killed,
            player: PlayerView {
                pos: game.player.pos,
                heading: game.player.heading,
                health: game.player.health,
                max_health: game.tuning.max_health,
                score: game.player.score,
            },
            enemies: game.enemies.iter_active().map(entity_view).collect(),
            projectiles: game.projectiles.iter_active().map(entity_view).collect(),
            particles: game
                .particles
                .iter_active()
                .map(|(_, p)| ParticleView {
                    pos: p.pos,
                    color: p.color,
                    alpha: p.life.clamp(0.0, 1.0),
                })
                .collect(),
        }
    }

    /// Serialize for debugging and tooling
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
