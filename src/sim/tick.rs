//! One simulation tick
//!
//! Order per tick: integrate the elf, stop if it fell off the bottom, spawn
//! what is due, then move, cull, score and collide every obstacle and
//! snowflake in a single pass, and finally advance the frame counter.

use super::collision::{captures_particle, strikes_obstacle};
use super::physics::{self, Fall};
use super::spawner;
use super::state::{GamePhase, GameState};
use crate::tuning::Tuning;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCause {
    /// Fell below the bottom edge
    Fell,
    /// Flew into a wall outside its gap
    Struck,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Obstacles that scrolled off the left edge
    pub passed: u32,
    /// Snowflakes caught
    pub captured: u32,
    /// Snowflakes that fell off the bottom
    pub melted: u32,
    /// Set when this tick ended the run
    pub ended: Option<EndCause>,
}

/// Advance the session by one tick. No-op unless running.
pub fn tick(state: &mut GameState, tuning: &Tuning) -> TickReport {
    let mut report = TickReport::default();
    if !state.is_running() {
        return report;
    }

    if physics::integrate(&mut state.player, &state.viewport, tuning) == Fall::OutOfBounds {
        state.phase = GamePhase::Over;
        report.ended = Some(EndCause::Fell);
        return report;
    }

    spawner::spawn_due(state, tuning);

    let player = state.player;
    let viewport = state.viewport;
    let center_x = viewport.center_x();

    // Walls: a wall that leaves the screen scores and is never tested again
    let mut struck = false;
    let mut passed = 0u32;
    state.obstacles.retain_mut(|obstacle| {
        obstacle.x -= tuning.obstacle_speed;
        if obstacle.is_off_screen() {
            passed += 1;
            return false;
        }
        if strikes_obstacle(&player, center_x, obstacle, tuning) {
            struck = true;
        }
        true
    });

    // Snowflakes keep falling and can still be caught on the terminal tick
    let mut captured = 0u32;
    let mut melted = 0u32;
    state.particles.retain_mut(|particle| {
        particle.pos.y += tuning.particle_speed;
        if particle.is_below(&viewport) {
            melted += 1;
            return false;
        }
        if captures_particle(&player, center_x, particle) {
            captured += 1;
            return false;
        }
        true
    });

    state.add_score(u64::from(passed).saturating_mul(tuning.obstacle_score));
    state.add_score(u64::from(captured).saturating_mul(tuning.particle_score));
    report.passed = passed;
    report.captured = captured;
    report.melted = melted;

    if struck {
        state.phase = GamePhase::Over;
        report.ended = Some(EndCause::Struck);
    }

    state.frame += 1;
    report
}
