//! Simulation module
//!
//! All gameplay logic lives here:
//! - Driven by elapsed milliseconds from an external clock
//! - Seeded RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod movement;
pub mod phase;
pub mod player;
pub mod pool;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, spawn_explosion};
pub use phase::{GamePhase, PhaseEvent};
pub use pool::SlotPool;
pub use snapshot::{EntityView, ParticleView, PlayerView, Snapshot};
pub use state::{Entity, EntityKind, Game, GameEvent, Particle, Player, WaveState};
pub use tick::{HeldKeys, TickInput, advance};
