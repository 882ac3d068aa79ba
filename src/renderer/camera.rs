//! Third-person chase camera

use glam::Vec3;

use crate::heading_forward;

/// Distance behind the ship
pub const CAMERA_DISTANCE: f32 = 8.0;
/// Height above the ship
pub const CAMERA_HEIGHT: f32 = 4.0;

/// Look-at camera trailing the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaseCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl ChaseCamera {
    /// Place the camera behind and above a ship at `pos` facing `heading`
    pub fn follow(pos: Vec3, heading: f32) -> Self {
        let behind = -heading_forward(heading) * CAMERA_DISTANCE;
        Self {
            eye: Vec3::new(pos.x + behind.x, pos.y + CAMERA_HEIGHT, pos.z + behind.z),
            target: pos,
            up: Vec3::Y,
        }
    }

    /// Unit view direction
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }
}
