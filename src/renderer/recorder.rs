//! Headless renderer that counts draw calls

use glam::Vec3;

use super::{ChaseCamera, Environment, Hud, Renderer};
use crate::sim::EntityKind;

/// Draw calls issued during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameStats {
    pub environment: bool,
    pub player: bool,
    pub enemies: usize,
    pub projectiles: usize,
    pub particles: usize,
    pub hud_lines: Vec<String>,
    pub camera: Option<ChaseCamera>,
}

/// Records what each frame drew
#[derive(Debug, Default)]
pub struct FrameRecorder {
    current: FrameStats,
    last: FrameStats,
    pub frames: u64,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stats of the most recently completed frame
    pub fn last_frame(&self) -> &FrameStats {
        &self.last
    }
}

impl Renderer for FrameRecorder {
    fn begin_frame(&mut self, camera: &ChaseCamera) {
        self.current = FrameStats {
            camera: Some(*camera),
            ..Default::default()
        };
    }

    fn draw_environment(&mut self, _environment: &Environment) {
        self.current.environment = true;
    }

    fn draw_player(&mut self, _pos: Vec3, _heading: f32) {
        self.current.player = true;
    }

    fn draw_entity(&mut self, kind: EntityKind, _pos: Vec3, _heading: f32) {
        match kind {
            EntityKind::Enemy => self.current.enemies += 1,
            EntityKind::Projectile => self.current.projectiles += 1,
        }
    }

    fn draw_particle(&mut self, _pos: Vec3, _color: Vec3, _alpha: f32) {
        self.current.particles += 1;
    }

    fn draw_hud(&mut self, hud: &Hud) {
        self.current.hud_lines = hud.text().map(str::to_owned).collect();
    }

    fn end_frame(&mut self) {
        self.last = std::mem::take(&mut self.current);
        self.frames += 1;
    }
}
