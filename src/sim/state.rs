//! Game state and core simulation types
//!
//! Everything a session owns lives in [`GameState`]. Nothing outside it keeps
//! references to obstacles or snowflakes between ticks.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Idle screen, waiting for the first press
    #[default]
    NotStarted,
    /// Active gameplay, frames are being scheduled
    Running,
    /// Run ended; stays here until reset
    Over,
}

/// Size of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// X of the column the elf flies in
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Starting height of the elf
    pub fn center_y(&self) -> f32 {
        self.height / 2.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// The elf
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Top edge (screen coordinates, y grows downward)
    pub y: f32,
    /// Vertical velocity in px/tick
    pub velocity: f32,
    pub width: f32,
    pub height: f32,
}

impl Player {
    pub fn new(y: f32, tuning: &Tuning) -> Self {
        Self {
            y,
            velocity: 0.0,
            width: tuning.player_width,
            height: tuning.player_height,
        }
    }
}

/// A wall with a passable gap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Bottom of the upper wall
    pub top: f32,
    /// Top of the lower wall, always below `top`
    pub bottom: f32,
    pub width: f32,
}

impl Obstacle {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn gap(&self) -> f32 {
        self.bottom - self.top
    }

    /// Fully past the left edge of the screen
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }
}

/// A falling snowflake
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub radius: f32,
}

impl Particle {
    /// Fallen below the bottom of the screen
    pub fn is_below(&self, viewport: &Viewport) -> bool {
        self.pos.y > viewport.height
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG (not reset between runs)
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    /// Simulation tick counter, drives spawn cadence
    pub frame: u64,
    pub viewport: Viewport,
    pub player: Player,
    /// Active obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Active snowflakes, oldest first
    pub particles: Vec<Particle>,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, viewport: Viewport, tuning: &Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::NotStarted,
            score: 0,
            frame: 0,
            viewport,
            player: Player::new(viewport.center_y(), tuning),
            obstacles: Vec::new(),
            particles: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Return to the idle screen with a fresh run
    pub fn reset(&mut self) {
        self.phase = GamePhase::NotStarted;
        self.score = 0;
        self.frame = 0;
        self.player.y = self.viewport.center_y();
        self.player.velocity = 0.0;
        self.obstacles.clear();
        self.particles.clear();
    }

    /// Track a new surface size. Entities already spawned keep their positions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        if self.phase == GamePhase::NotStarted {
            self.player.y = self.viewport.center_y();
        }
    }

    pub(crate) fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(1, Viewport::new(800.0, 600.0), &Tuning::default());
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.player.y, 300.0);
        assert_eq!(state.player.velocity, 0.0);
        assert_eq!(state.player.width, 80.0);
        assert!(state.obstacles.is_empty());
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut state = GameState::new(7, Viewport::new(1024.0, 600.0), &Tuning::default());
        state.phase = GamePhase::Over;
        state.score = 42;
        state.frame = 999;
        state.player.y = 12.0;
        state.player.velocity = -7.5;
        state.obstacles.push(Obstacle { x: 10.0, top: 100.0, bottom: 300.0, width: 50.0 });
        state.particles.push(Particle { pos: Vec2::new(5.0, 5.0), radius: 10.0 });

        state.reset();

        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0);
        assert_eq!(state.frame, 0);
        assert_eq!(state.player.y, 300.0);
        assert_eq!(state.player.velocity, 0.0);
        assert!(state.obstacles.is_empty());
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_resize_keeps_entities() {
        let mut state = GameState::new(7, Viewport::new(800.0, 600.0), &Tuning::default());
        state.obstacles.push(Obstacle { x: 700.0, top: 100.0, bottom: 300.0, width: 50.0 });

        state.resize(400.0, 1000.0);

        assert_eq!(state.viewport, Viewport::new(400.0, 1000.0));
        assert_eq!(state.player.y, 500.0);
        assert_eq!(state.obstacles[0].x, 700.0);

        // Reset uses the new height
        state.player.y = 0.0;
        state.reset();
        assert_eq!(state.player.y, 500.0);
    }

    #[test]
    fn test_resize_mid_run_does_not_move_player() {
        let mut state = GameState::new(7, Viewport::new(800.0, 600.0), &Tuning::default());
        state.phase = GamePhase::Running;
        state.player.y = 123.0;
        state.resize(800.0, 900.0);
        assert_eq!(state.player.y, 123.0);
    }

    #[test]
    fn test_obstacle_geometry() {
        let obstacle = Obstacle { x: -49.0, top: 100.0, bottom: 300.0, width: 50.0 };
        assert_eq!(obstacle.gap(), 200.0);
        assert!(!obstacle.is_off_screen());
        let gone = Obstacle { x: -50.5, ..obstacle };
        assert!(gone.is_off_screen());
    }
}
