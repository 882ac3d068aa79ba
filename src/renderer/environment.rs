//! Static scenery: starfield and ground grid
//!
//! The starfield comes from a fixed seed so it looks the same every frame and
//! every run.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

pub const STARFIELD_SEED: u64 = 12345;
pub const STAR_COUNT: usize = 200;
/// Grid spans [-GRID_EXTENT, GRID_EXTENT] on X and Z
pub const GRID_EXTENT: i32 = 50;
pub const GRID_SPACING: usize = 2;
pub const GRID_HEIGHT: f32 = -3.0;
pub const GRID_COLOR: Vec3 = Vec3::new(0.2, 0.3, 0.4);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec3,
    /// Grey level in [0.5, 1]
    pub brightness: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub from: Vec3,
    pub to: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub stars: Vec<Star>,
    pub grid: Vec<GridLine>,
}

impl Environment {
    pub fn generate() -> Self {
        Self {
            stars: starfield(STARFIELD_SEED, STAR_COUNT),
            grid: ground_grid(),
        }
    }
}

/// Stars scattered over the play area, high above the grid
pub fn starfield(seed: u64, count: usize) -> Vec<Star> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let brightness = 0.5 + rng.random::<f32>() * 0.5;
            let x = (rng.random::<f32>() - 0.5) * 100.0;
            let y = rng.random::<f32>() * 30.0 + 10.0;
            let z = (rng.random::<f32>() - 0.5) * 100.0;
            Star {
                pos: Vec3::new(x, y, z),
                brightness,
            }
        })
        .collect()
}

/// Lines parallel to Z then X at every grid step
pub fn ground_grid() -> Vec<GridLine> {
    let extent = GRID_EXTENT as f32;
    let mut lines = Vec::new();
    for i in (-GRID_EXTENT..=GRID_EXTENT).step_by(GRID_SPACING) {
        let i = i as f32;
        lines.push(GridLine {
            from: Vec3::new(i, GRID_HEIGHT, -extent),
            to: Vec3::new(i, GRID_HEIGHT, extent),
        });
        lines.push(GridLine {
            from: Vec3::new(-extent, GRID_HEIGHT, i),
            to: Vec3::new(extent, GRID_HEIGHT, i),
        });
    }
    lines
}
