//! Rendering contract
//!
//! The simulation never draws. Each frame a `Scene` walks a `Snapshot` and
//! issues calls on whatever `Renderer` the host provides.

pub mod camera;
pub mod environment;
pub mod hud;
pub mod recorder;

pub use camera::ChaseCamera;
pub use environment::{Environment, GridLine, Star};
pub use hud::{Hud, HudLine};
pub use recorder::{FrameRecorder, FrameStats};

use glam::Vec3;

use crate::sim::{EntityKind, GamePhase, Snapshot};

/// Drawing backend supplied by the host program
pub trait Renderer {
    /// Called once per frame before any draw call
    fn begin_frame(&mut self, _camera: &ChaseCamera) {}
    fn draw_environment(&mut self, environment: &Environment);
    fn draw_player(&mut self, pos: Vec3, heading: f32);
    fn draw_entity(&mut self, kind: EntityKind, pos: Vec3, heading: f32);
    fn draw_particle(&mut self, pos: Vec3, color: Vec3, alpha: f32);
    fn draw_hud(&mut self, hud: &Hud);
    fn end_frame(&mut self) {}
}

/// Static scenery plus the per-frame draw order
#[derive(Debug, Clone)]
pub struct Scene {
    pub environment: Environment,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            environment: Environment::generate(),
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw one frame. The world is hidden on the title screen; the HUD is
    /// always drawn last.
    pub fn render<R: Renderer + ?Sized>(&self, snapshot: &Snapshot, renderer: &mut R) {
        let camera = ChaseCamera::follow(snapshot.player.pos, snapshot.player.heading);
        renderer.begin_frame(&camera);

        if snapshot.phase != GamePhase::Menu {
            renderer.draw_environment(&self.environment);
            renderer.draw_player(snapshot.player.pos, snapshot.player.heading);

            for enemy in &snapshot.enemies {
                renderer.draw_entity(EntityKind::Enemy, enemy.pos, enemy.heading);
            }
            for projectile in &snapshot.projectiles {
                renderer.draw_entity(EntityKind::Projectile, projectile.pos, projectile.heading);
            }
            for particle in &snapshot.particles {
                renderer.draw_particle(particle.pos, particle.color, particle.alpha);
            }
        }

        renderer.draw_hud(&Hud::from_snapshot(snapshot));
        renderer.end_frame();
    }
}
