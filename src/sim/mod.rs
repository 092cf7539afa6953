//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no delta time
//! - Seeded RNG only
//! - Entity lists keep spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{captures_particle, strikes_obstacle};
pub use input::{PressOutcome, press};
pub use physics::{Fall, integrate, jump};
pub use spawner::spawn_due;
pub use state::{GamePhase, GameState, Obstacle, Particle, Player, Viewport};
pub use tick::{EndCause, TickReport, tick};
