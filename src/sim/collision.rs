//! Overlap tests between the elf and the things around it
//!
//! All tests are axis-aligned. The elf occupies `[cx - w/2, cx + w/2)` by
//! `[y, y + h)`, but only a narrow band of `strike_half_band` either side of
//! `cx` counts when hitting a wall. Snowflakes use `[y, y + r)` vertically
//! and `[x - r, x + r)` horizontally.

use super::state::{Obstacle, Particle, Player};
use crate::tuning::Tuning;

/// Whether the obstacle's columns touch the elf's strike band
pub fn overlaps_strike_band(obstacle: &Obstacle, center_x: f32, half_band: f32) -> bool {
    obstacle.x < center_x + half_band && obstacle.right() > center_x - half_band
}

/// Whether `y` lies outside the gap. Exactly on an edge counts as inside.
pub fn outside_gap(obstacle: &Obstacle, y: f32) -> bool {
    y < obstacle.top || y > obstacle.bottom
}

/// The elf hits a wall of the obstacle
pub fn strikes_obstacle(player: &Player, center_x: f32, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    outside_gap(obstacle, player.y) && overlaps_strike_band(obstacle, center_x, tuning.strike_half_band)
}

/// The elf catches the snowflake
pub fn captures_particle(player: &Player, center_x: f32, particle: &Particle) -> bool {
    let half_width = player.width / 2.0;
    player.y + player.height > particle.pos.y
        && player.y < particle.pos.y + particle.radius
        && center_x - half_width < particle.pos.x + particle.radius
        && center_x + half_width > particle.pos.x - particle.radius
}
