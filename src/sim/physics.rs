//! Vertical motion of the elf

use super::state::{Player, Viewport};
use crate::tuning::Tuning;

/// What the integrator step did to the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fall {
    /// Still on screen
    InBounds,
    /// Dropped below the bottom edge
    OutOfBounds,
}

/// Apply one tick of gravity: `v += g; y += v`, clamped at the ceiling.
///
/// The ceiling clamp leaves the velocity untouched unless
/// `tuning.ceiling_stops_velocity` is set, so a pinned elf keeps "rising"
/// until gravity wins.
pub fn integrate(player: &mut Player, viewport: &Viewport, tuning: &Tuning) -> Fall {
    player.velocity += tuning.gravity;
    player.y += player.velocity;

    if player.y < 0.0 {
        player.y = 0.0;
        if tuning.ceiling_stops_velocity && player.velocity < 0.0 {
            player.velocity = 0.0;
        }
    }

    if player.y > viewport.height {
        Fall::OutOfBounds
    } else {
        Fall::InBounds
    }
}

/// Jump: replace whatever velocity has built up
pub fn jump(player: &mut Player, tuning: &Tuning) {
    player.velocity = tuning.jump_strength;
}
