//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in one `Game` aggregate.

use glam::Vec3;
use rand::distr::Uniform;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::phase::{GamePhase, PhaseEvent};
use super::pool::SlotPool;
use crate::consts::*;
use crate::error::TransitionError;
use crate::settings::Tuning;

/// Kinds of pooled entity the renderer distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Enemy,
    Projectile,
}

/// An enemy or projectile
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Entity {
    pub pos: Vec3,
    pub vel: Vec3,
    /// Heading in degrees
    pub heading: f32,
}

/// A visual particle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Particle {
    pub pos: Vec3,
    pub vel: Vec3,
    /// 1.0 when spawned, deactivated at or below 0
    pub life: f32,
    /// RGB in [0, 1]
    pub color: Vec3,
}

pub type EnemyPool = SlotPool<Entity, MAX_ENEMIES>;
pub type ProjectilePool = SlotPool<Entity, MAX_PROJECTILES>;
pub type ParticlePool = SlotPool<Particle, MAX_PARTICLES>;

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec3,
    /// Heading in degrees (0 faces +Z)
    pub heading: f32,
    pub health: i32,
    pub score: u32,
}

impl Player {
    pub fn new(max_health: i32) -> Self {
        Self {
            pos: Vec3::ZERO,
            heading: 0.0,
            health: max_health,
            score: 0,
        }
    }

    /// Apply damage, never dropping below zero. Returns remaining health.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health = (self.health - amount).max(0);
        self.health
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// Wave progression counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveState {
    /// Current wave (1-based)
    pub wave: u32,
    /// Kills in the current wave
    pub enemies_killed: u32,
    /// Milliseconds since the last spawn attempt
    pub spawn_timer: f32,
}

impl Default for WaveState {
    fn default() -> Self {
        Self {
            wave: 1,
            enemies_killed: 0,
            spawn_timer: 0.0,
        }
    }
}

/// What happened during the last tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    EnemySpawned { slot: usize, pos: Vec3 },
    /// Spawn timer elapsed but the enemy pool was full
    SpawnDropped,
    ShotFired { slot: usize },
    /// Fire input arrived while the projectile pool was full
    ShotDropped,
    EnemyDestroyed { slot: usize, pos: Vec3 },
    PlayerHit { damage: i32, health: i32 },
    WaveAdvanced { wave: u32 },
    GameOver { score: u32, wave: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub enemies: EnemyPool,
    pub projectiles: ProjectilePool,
    pub particles: ParticlePool,
    pub wave: WaveState,
    pub tuning: Tuning,
    /// Simulated ticks since the last reset
    pub time_ticks: u64,
    events: Vec<GameEvent>,
    rng: Pcg32,
}

impl Game {
    /// Create a game at the title screen with stock tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: GamePhase::Menu,
            player: Player::new(tuning.max_health),
            enemies: EnemyPool::new(),
            projectiles: ProjectilePool::new(),
            particles: ParticlePool::new(),
            wave: WaveState::default(),
            tuning,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Release every pool slot and zero player and wave counters.
    ///
    /// The phase is left alone; callers move it through `apply_phase_event`.
    pub fn reset(&mut self) {
        self.player = Player::new(self.tuning.max_health);
        self.enemies.clear();
        self.projectiles.clear();
        self.particles.clear();
        self.wave = WaveState::default();
        self.time_ticks = 0;
    }

    /// Drive the phase machine. Start and Restart reset the run.
    pub fn apply_phase_event(&mut self, event: PhaseEvent) -> Result<GamePhase, TransitionError> {
        let from = self.phase;
        let to = match from.transition(event) {
            Ok(to) => to,
            Err(err) => {
                log::debug!("Ignoring {err}");
                return Err(err);
            }
        };

        if matches!(event, PhaseEvent::Start | PhaseEvent::Restart) {
            self.reset();
        }
        self.phase = to;
        log::info!("Phase {} -> {}", from.as_str(), to.as_str());
        self.emit(GameEvent::PhaseChanged { from, to });

        if to == GamePhase::GameOver {
            log::info!(
                "Game over: score {} on wave {}",
                self.player.score,
                self.wave.wave
            );
            self.emit(GameEvent::GameOver {
                score: self.player.score,
                wave: self.wave.wave,
            });
        }
        Ok(to)
    }

    /// Events recorded during the last `advance`
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Uniform sample in [0, 1)
    pub(crate) fn random_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Uniform sample in [lo, hi]; returns `lo` for an empty or non-finite range
    pub(crate) fn random_range(&mut self, lo: f32, hi: f32) -> f32 {
        match Uniform::new_inclusive(lo, hi) {
            Ok(range) => self.rng.sample(range),
            Err(_) => lo,
        }
    }
}
