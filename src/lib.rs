//! Elf Jump - a side-scrolling North Pole obstacle dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `renderer`: Canvas 2D scene building and drawing
//! - `platform`: Browser input and user-agent helpers
//! - `tuning`: Data-driven game balance
//! - `settings`: Player-facing options (game-over screen, touch input)
//! - `best`: Best score of the current page session

pub mod best;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use best::SessionBest;
pub use settings::{GameOverScreen, Settings, TouchInput};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Downward acceleration added to the elf's velocity every tick (px/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a jump (negative is up)
    pub const JUMP_STRENGTH: f32 = -10.0;

    /// Elf sprite size
    pub const PLAYER_WIDTH: f32 = 80.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Half-width of the column an obstacle must overlap to strike the elf
    pub const STRIKE_HALF_BAND: f32 = 25.0;

    /// Spawn cadence in frames
    pub const OBSTACLE_INTERVAL: u64 = 120;
    pub const PARTICLE_INTERVAL: u64 = 80;

    /// Obstacle geometry and motion
    pub const OBSTACLE_WIDTH: f32 = 50.0;
    pub const OBSTACLE_SPEED: f32 = 3.0;
    /// Gap top lies in [GAP_TOP_MIN, GAP_TOP_MIN + height * GAP_TOP_SPAN_FACTOR)
    pub const GAP_TOP_MIN: f32 = 50.0;
    pub const GAP_TOP_SPAN_FACTOR: f32 = 0.25;
    /// Gap size lies in [GAP_SIZE_MIN, GAP_SIZE_MIN + GAP_SIZE_SPAN)
    pub const GAP_SIZE_MIN: f32 = 200.0;
    pub const GAP_SIZE_SPAN: f32 = 200.0;

    /// Snowflake geometry and motion
    pub const PARTICLE_RADIUS: f32 = 10.0;
    pub const PARTICLE_SPEED: f32 = 2.0;

    /// Score awards
    pub const OBSTACLE_SCORE: u64 = 1;
    pub const PARTICLE_SCORE: u64 = 5;
}
