//! Heads-up display model
//!
//! Pure data; the renderer decides fonts and pixel placement.

use glam::Vec3;

use crate::sim::{GamePhase, Snapshot};

const WHITE: Vec3 = Vec3::ONE;
const YELLOW: Vec3 = Vec3::new(1.0, 1.0, 0.0);
const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// Where a line is anchored on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Stacked under the health bar
    TopLeft,
    /// Stacked around screen center
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    pub color: Vec3,
    pub anchor: Anchor,
}

impl HudLine {
    fn new(text: impl Into<String>, color: Vec3, anchor: Anchor) -> Self {
        Self {
            text: text.into(),
            color,
            anchor,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub phase: GamePhase,
    pub health: i32,
    pub score: u32,
    pub wave: u32,
    /// Health bar fill in [0, 1]; `None` when the bar is hidden
    pub health_ratio: Option<f32>,
    pub lines: Vec<HudLine>,
}

impl Hud {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let player = &snapshot.player;
        let mut lines = Vec::new();
        let mut health_ratio = None;

        match snapshot.phase {
            GamePhase::Menu => {
                lines.push(HudLine::new("COSMIC DEFENDER", WHITE, Anchor::Center));
                lines.push(HudLine::new("Press SPACE to Start", WHITE, Anchor::Center));
                lines.push(HudLine::new("WASD: Move  Space: Shoot", WHITE, Anchor::Center));
                lines.push(HudLine::new("Mouse: Turn", WHITE, Anchor::Center));
            }
            GamePhase::Playing | GamePhase::Paused => {
                let max = player.max_health.max(1) as f32;
                health_ratio = Some((player.health as f32 / max).clamp(0.0, 1.0));
                lines.push(HudLine::new(
                    format!("Health: {}", player.health),
                    WHITE,
                    Anchor::TopLeft,
                ));
                lines.push(HudLine::new(
                    format!("Score: {}", player.score),
                    WHITE,
                    Anchor::TopLeft,
                ));
                lines.push(HudLine::new(
                    format!("Wave: {}", snapshot.wave),
                    WHITE,
                    Anchor::TopLeft,
                ));
                if snapshot.phase == GamePhase::Paused {
                    lines.push(HudLine::new("PAUSED", YELLOW, Anchor::Center));
                    lines.push(HudLine::new("Press P to Continue", YELLOW, Anchor::Center));
                }
            }
            GamePhase::GameOver => {
                lines.push(HudLine::new("GAME OVER", RED, Anchor::Center));
                lines.push(HudLine::new(
                    format!("Final Score: {}", player.score),
                    WHITE,
                    Anchor::Center,
                ));
                lines.push(HudLine::new(
                    format!("Wave Reached: {}", snapshot.wave),
                    WHITE,
                    Anchor::Center,
                ));
                lines.push(HudLine::new("Press R to Restart", WHITE, Anchor::Center));
            }
        }

        Self {
            phase: snapshot.phase,
            health: player.health,
            score: player.score,
            wave: snapshot.wave,
            health_ratio,
            lines,
        }
    }

    /// Health bar color, red when empty and green when full
    pub fn health_color(&self) -> Option<Vec3> {
        self.health_ratio.map(|r| Vec3::new(1.0 - r, r, 0.0))
    }

    pub fn text(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.text.as_str())
    }
}
