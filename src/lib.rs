//! Cosmic Defender - a wave-based 3D arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation (pools, spawning, movement, collisions, game phase)
//! - `renderer`: Renderer contract, camera, environment and HUD model
//! - `input`: Raw key/mouse events to per-tick input
//! - `settings`: Data-driven gameplay tuning
//! - `error`: Error types shared across modules

pub mod error;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, TransitionError};
pub use settings::Tuning;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Pool capacities
    pub const MAX_ENEMIES: usize = 20;
    pub const MAX_PROJECTILES: usize = 50;
    pub const MAX_PARTICLES: usize = 100;

    /// Particles activated by a single explosion at most
    pub const EXPLOSION_BURST: usize = MAX_PARTICLES / 3;

    /// Player defaults
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    /// Movement per held key, units per millisecond
    pub const PLAYER_SPEED: f32 = 0.025;
    /// Degrees of heading per pixel of horizontal mouse motion
    pub const MOUSE_SENSITIVITY: f32 = 0.2;

    /// Projectile speed, units per millisecond
    pub const PROJECTILE_SPEED: f32 = 0.125;
    /// Projectiles beyond this distance from the player are culled
    pub const PROJECTILE_RANGE: f32 = 50.0;
    pub const PROJECTILE_HIT_RADIUS: f32 = 0.5;

    /// Enemy base seek speed, units per millisecond (scaled by wave)
    pub const ENEMY_BASE_SPEED: f32 = 0.0125;
    /// Cosmetic enemy spin, degrees per millisecond
    pub const ENEMY_SPIN_RATE: f32 = 0.025;
    /// Below this distance seek steering is skipped
    pub const SEEK_MIN_DISTANCE: f32 = 0.1;
    pub const ENEMY_CONTACT_RADIUS: f32 = 1.0;
    pub const ENEMY_CONTACT_DAMAGE: i32 = 10;

    /// Spawn ring around the player
    pub const SPAWN_RING_MIN: f32 = 30.0;
    pub const SPAWN_RING_MAX: f32 = 50.0;
    pub const SPAWN_HEIGHT: f32 = 2.0;
    /// Base spawn interval in milliseconds (wave 0)
    pub const SPAWN_INTERVAL_MS: f32 = 2000.0;

    /// Scoring and wave progression
    pub const KILL_SCORE: u32 = 100;
    pub const WAVE_HEALTH_REGEN: i32 = 20;

    /// Particle behavior
    pub const PARTICLE_SPREAD: f32 = 0.05;
    pub const PARTICLE_DECAY: f32 = 0.01;
    /// Downward velocity bias, units per millisecond squared
    pub const PARTICLE_GRAVITY: f32 = 0.00002;
}

/// Unit direction the player (or a projectile) faces for a heading in degrees.
///
/// Heading 0 faces +Z; positive headings rotate toward +X.
#[inline]
pub fn heading_forward(heading_deg: f32) -> Vec3 {
    let rad = heading_deg.to_radians();
    Vec3::new(rad.sin(), 0.0, rad.cos())
}

/// Unit strafe-left direction for a heading in degrees
#[inline]
pub fn heading_left(heading_deg: f32) -> Vec3 {
    let rad = heading_deg.to_radians();
    Vec3::new(rad.cos(), 0.0, -rad.sin())
}

/// Heading in degrees that faces from `from` toward `to` on the XZ plane
#[inline]
pub fn heading_toward(from: Vec3, to: Vec3) -> f32 {
    let d = to - from;
    d.x.atan2(d.z).to_degrees()
}

/// Wrap an angle in degrees to [-180, 180)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}
