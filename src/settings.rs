//! Gameplay tuning
//!
//! Every value defaults to the stock game balance; a JSON file can override
//! any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Starting and maximum health
    pub max_health: i32,
    /// Units per millisecond per held movement key
    pub player_speed: f32,
    /// Degrees of turn per unit of mouse delta
    pub mouse_sensitivity: f32,

    // === Projectiles ===
    pub projectile_speed: f32,
    pub projectile_range: f32,
    pub projectile_hit_radius: f32,
    pub kill_score: u32,

    // === Enemies ===
    pub enemy_base_speed: f32,
    /// Fractional speed gain per wave
    pub enemy_speed_per_wave: f32,
    pub enemy_spin_rate: f32,
    pub enemy_contact_radius: f32,
    pub enemy_contact_damage: i32,

    // === Spawning ===
    pub spawn_interval_ms: f32,
    /// Fractional spawn-rate gain per wave
    pub spawn_rate_per_wave: f32,
    pub spawn_ring_min: f32,
    pub spawn_ring_max: f32,
    pub spawn_height: f32,
    /// Active enemy cap is `base_enemies_per_wave + wave`
    pub base_enemies_per_wave: u32,
    /// Kills needed to clear a wave, as a multiple of the enemy cap
    pub kills_per_enemy_cap: u32,
    pub wave_health_regen: i32,

    // === Particles ===
    pub particle_spread: f32,
    pub particle_decay: f32,
    pub particle_gravity: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_health: PLAYER_MAX_HEALTH,
            player_speed: PLAYER_SPEED,
            mouse_sensitivity: MOUSE_SENSITIVITY,

            projectile_speed: PROJECTILE_SPEED,
            projectile_range: PROJECTILE_RANGE,
            projectile_hit_radius: PROJECTILE_HIT_RADIUS,
            kill_score: KILL_SCORE,

            enemy_base_speed: ENEMY_BASE_SPEED,
            enemy_speed_per_wave: 0.1,
            enemy_spin_rate: ENEMY_SPIN_RATE,
            enemy_contact_radius: ENEMY_CONTACT_RADIUS,
            enemy_contact_damage: ENEMY_CONTACT_DAMAGE,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_rate_per_wave: 0.2,
            spawn_ring_min: SPAWN_RING_MIN,
            spawn_ring_max: SPAWN_RING_MAX,
            spawn_height: SPAWN_HEIGHT,
            base_enemies_per_wave: 3,
            kills_per_enemy_cap: 3,
            wave_health_regen: WAVE_HEALTH_REGEN,

            particle_spread: PARTICLE_SPREAD,
            particle_decay: PARTICLE_DECAY,
            particle_gravity: PARTICLE_GRAVITY,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health <= 0 {
            return Err(invalid("max_health", "must be positive"));
        }

        let floats = [
            ("player_speed", self.player_speed),
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("projectile_speed", self.projectile_speed),
            ("projectile_range", self.projectile_range),
            ("projectile_hit_radius", self.projectile_hit_radius),
            ("enemy_base_speed", self.enemy_base_speed),
            ("enemy_speed_per_wave", self.enemy_speed_per_wave),
            ("enemy_spin_rate", self.enemy_spin_rate),
            ("enemy_contact_radius", self.enemy_contact_radius),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("spawn_rate_per_wave", self.spawn_rate_per_wave),
            ("spawn_ring_min", self.spawn_ring_min),
            ("spawn_ring_max", self.spawn_ring_max),
            ("spawn_height", self.spawn_height),
            ("particle_spread", self.particle_spread),
            ("particle_decay", self.particle_decay),
            ("particle_gravity", self.particle_gravity),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(invalid(field, format!("{value} is not finite")));
            }
        }

        if self.spawn_interval_ms <= 0.0 {
            return Err(invalid("spawn_interval_ms", "must be positive"));
        }
        if self.spawn_ring_min < 0.0 || self.spawn_ring_max < self.spawn_ring_min {
            return Err(invalid(
                "spawn_ring_max",
                format!(
                    "ring [{}, {}] is empty or negative",
                    self.spawn_ring_min, self.spawn_ring_max
                ),
            ));
        }
        // Spawn heights are sampled from [-h, h]; the span must stay finite
        if self.spawn_height < 0.0 || !(self.spawn_height * 2.0).is_finite() {
            return Err(invalid(
                "spawn_height",
                format!("{} is negative or too large", self.spawn_height),
            ));
        }
        if !(self.spawn_ring_max - self.spawn_ring_min).is_finite() {
            return Err(invalid("spawn_ring_max", "ring span is too large"));
        }
        if self.particle_decay <= 0.0 {
            return Err(invalid("particle_decay", "must be positive"));
        }

        let radii = [
            ("projectile_range", self.projectile_range),
            ("projectile_hit_radius", self.projectile_hit_radius),
            ("enemy_contact_radius", self.enemy_contact_radius),
        ];
        for (field, value) in radii {
            if value <= 0.0 {
                return Err(invalid(field, format!("{value} is not a positive distance")));
            }
        }
        Ok(())
    }

    /// Milliseconds between spawn attempts in the given wave
    pub fn spawn_interval(&self, wave: u32) -> f32 {
        self.spawn_interval_ms / (1.0 + wave as f32 * self.spawn_rate_per_wave)
    }

    /// Enemy seek speed (units per millisecond) in the given wave
    pub fn enemy_speed(&self, wave: u32) -> f32 {
        self.enemy_base_speed * (1.0 + wave as f32 * self.enemy_speed_per_wave)
    }

    /// Maximum simultaneously active enemies the director will spawn toward
    pub fn enemies_per_wave(&self, wave: u32) -> u32 {
        self.base_enemies_per_wave + wave
    }

    /// Kills that clear the given wave
    pub fn wave_kill_target(&self, wave: u32) -> u32 {
        self.enemies_per_wave(wave) * self.kills_per_enemy_cap
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_balance() {
        let tuning = Tuning::default();
        assert_eq!(tuning.enemies_per_wave(1), 4);
        assert_eq!(tuning.wave_kill_target(1), 12);
        assert!((tuning.spawn_interval(1) - 2000.0 / 1.2).abs() < 0.001);
        assert!((tuning.enemy_speed(1) - 0.01375).abs() < 1e-6);
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "kill_score": 250, "max_health": 150 }"#).unwrap();
        assert_eq!(tuning.kill_score, 250);
        assert_eq!(tuning.max_health, 150);
        assert_eq!(tuning.projectile_speed, PROJECTILE_SPEED);
    }

    #[test]
    fn test_invalid_ring_rejected() {
        let err = Tuning::from_json(r#"{ "spawn_ring_min": 40.0, "spawn_ring_max": 10.0 }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "spawn_ring_max",
                ..
            }
        ));
    }

    #[test]
    fn test_overflowing_spawn_values_rejected() {
        let err = Tuning::from_json(r#"{ "spawn_ring_max": 1e39 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "spawn_ring_max",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "spawn_height": 3e38 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "spawn_height",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_spawn_height_rejected() {
        let err = Tuning::from_json(r#"{ "spawn_height": -1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "spawn_height",
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_fields_rejected() {
        let tuning = Tuning {
            particle_decay: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::Invalid {
                field: "particle_decay",
                ..
            })
        ));

        let tuning = Tuning {
            spawn_interval_ms: f32::INFINITY,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Tuning::load("/nonexistent/cosmic-defender/tuning.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
