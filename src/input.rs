//! Raw keyboard/mouse events to per-tick input
//!
//! Hosts feed key and mouse events as they arrive, then call `poll` once per
//! frame. Held keys persist across polls; presses are edges and are consumed.

use crate::sim::{GamePhase, HeldKeys, TickInput};

const ESCAPE: char = '\u{1b}';

/// Keys the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalKey {
    Forward,
    Back,
    Left,
    Right,
    /// Start on the title screen, shoot otherwise
    Action,
    Pause,
    Restart,
    /// Toggle the autopilot
    Idle,
    Quit,
}

impl LogicalKey {
    /// Case-insensitive mapping from a typed character
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'w' => Some(Self::Forward),
            's' => Some(Self::Back),
            'a' => Some(Self::Left),
            'd' => Some(Self::Right),
            ' ' => Some(Self::Action),
            'p' => Some(Self::Pause),
            'r' => Some(Self::Restart),
            'i' => Some(Self::Idle),
            ESCAPE => Some(Self::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HeldKeys,
    action: bool,
    pause: bool,
    restart: bool,
    quit: bool,
    idle_mode: bool,
    last_mouse_x: Option<i32>,
    mouse_dx: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, c: char) {
        let Some(key) = LogicalKey::from_char(c) else {
            return;
        };
        match key {
            LogicalKey::Forward => self.held.forward = true,
            LogicalKey::Back => self.held.back = true,
            LogicalKey::Left => self.held.left = true,
            LogicalKey::Right => self.held.right = true,
            LogicalKey::Action => self.action = true,
            LogicalKey::Pause => self.pause = true,
            LogicalKey::Restart => self.restart = true,
            LogicalKey::Idle => {
                self.idle_mode = !self.idle_mode;
                log::info!("Idle mode: {}", self.idle_mode);
            }
            LogicalKey::Quit => self.quit = true,
        }
    }

    pub fn key_up(&mut self, c: char) {
        match LogicalKey::from_char(c) {
            Some(LogicalKey::Forward) => self.held.forward = false,
            Some(LogicalKey::Back) => self.held.back = false,
            Some(LogicalKey::Left) => self.held.left = false,
            Some(LogicalKey::Right) => self.held.right = false,
            _ => {}
        }
    }

    /// Absolute pointer x in pixels. The first sample only sets the origin.
    pub fn mouse_moved(&mut self, x: i32) {
        if let Some(last) = self.last_mouse_x {
            self.mouse_dx += (x - last) as f32;
        }
        self.last_mouse_x = Some(x);
    }

    pub fn set_idle_mode(&mut self, on: bool) {
        self.idle_mode = on;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Build this frame's input and consume pending edges
    pub fn poll(&mut self, phase: GamePhase) -> TickInput {
        let on_menu = phase == GamePhase::Menu;
        let input = TickInput {
            held: self.held,
            mouse_dx: self.mouse_dx,
            start: self.action && on_menu,
            fire: self.action && !on_menu,
            pause: self.pause,
            restart: self.restart,
            idle_mode: self.idle_mode,
        };
        self.action = false;
        self.pause = false;
        self.restart = false;
        self.mouse_dx = 0.0;
        input
    }
}
