//! Frame-cadence spawning of obstacles and snowflakes

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Obstacle, Particle, Viewport};
use crate::tuning::Tuning;

/// `lo + unit * span`, never panics on an empty span
fn uniform<R: Rng>(rng: &mut R, lo: f32, span: f32) -> f32 {
    lo + rng.random::<f32>() * span.max(0.0)
}

/// Roll a new obstacle at the right edge of the screen
pub fn roll_obstacle<R: Rng>(rng: &mut R, viewport: &Viewport, tuning: &Tuning) -> Obstacle {
    let top = uniform(rng, tuning.gap_top_min, viewport.height * tuning.gap_top_span_factor);
    let gap = uniform(rng, tuning.gap_size_min, tuning.gap_size_span);
    Obstacle {
        x: viewport.width,
        top,
        bottom: top + gap,
        width: tuning.obstacle_width,
    }
}

/// Roll a new snowflake somewhere along the top edge
pub fn roll_particle<R: Rng>(rng: &mut R, viewport: &Viewport, tuning: &Tuning) -> Particle {
    Particle {
        pos: Vec2::new(uniform(rng, 0.0, viewport.width), 0.0),
        radius: tuning.particle_radius,
    }
}

/// Spawn whatever is due on the current frame. Does nothing unless running.
/// A zero interval disables that spawn.
pub fn spawn_due(state: &mut GameState, tuning: &Tuning) {
    if !state.is_running() {
        return;
    }

    if state.frame.checked_rem(tuning.obstacle_interval) == Some(0) {
        let obstacle = roll_obstacle(&mut state.rng, &state.viewport, tuning);
        state.obstacles.push(obstacle);
    }
    if state.frame.checked_rem(tuning.particle_interval) == Some(0) {
        let particle = roll_particle(&mut state.rng, &state.viewport, tuning);
        state.particles.push(particle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GamePhase;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn running_state() -> GameState {
        let mut state = GameState::new(2024, Viewport::new(800.0, 600.0), &Tuning::default());
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_cadence_over_1000_frames() {
        let tuning = Tuning::default();
        let mut state = running_state();
        let mut obstacles = 0;
        let mut particles = 0;

        for frame in 0..1000 {
            state.frame = frame;
            let (o, p) = (state.obstacles.len(), state.particles.len());
            spawn_due(&mut state, &tuning);
            obstacles += state.obstacles.len() - o;
            particles += state.particles.len() - p;
        }

        assert_eq!(obstacles, 1000 / 120 + 1);
        assert_eq!(particles, 1000 / 80 + 1);
    }

    #[test]
    fn test_both_spawn_on_frame_zero() {
        let tuning = Tuning::default();
        let mut state = running_state();
        spawn_due(&mut state, &tuning);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.particles.len(), 1);
        assert_eq!(state.obstacles[0].x, 800.0);
        assert_eq!(state.obstacles[0].width, 50.0);
        assert_eq!(state.particles[0].pos.y, 0.0);
        assert_eq!(state.particles[0].radius, 10.0);
    }

    #[test]
    fn test_no_spawn_unless_running() {
        let tuning = Tuning::default();
        for phase in [GamePhase::NotStarted, GamePhase::Over] {
            let mut state = running_state();
            state.phase = phase;
            spawn_due(&mut state, &tuning);
            assert!(state.obstacles.is_empty());
            assert!(state.particles.is_empty());
        }
    }

    #[test]
    fn test_zero_height_viewport_does_not_panic() {
        let mut rng = Pcg32::seed_from_u64(1);
        let obstacle = roll_obstacle(&mut rng, &Viewport::new(0.0, 0.0), &Tuning::default());
        assert_eq!(obstacle.top, 50.0);
        assert!(obstacle.bottom > obstacle.top);
    }

    proptest! {
        #[test]
        fn prop_obstacle_ranges(seed in any::<u64>(), height in 100.0f32..2000.0, width in 100.0f32..3000.0) {
            let tuning = Tuning::default();
            let viewport = Viewport::new(width, height);
            let mut rng = Pcg32::seed_from_u64(seed);

            let obstacle = roll_obstacle(&mut rng, &viewport, &tuning);
            prop_assert!(obstacle.bottom > obstacle.top);
            prop_assert!(obstacle.top >= 50.0);
            prop_assert!(obstacle.top <= height / 4.0 + 50.0);
            prop_assert!(obstacle.gap() >= 200.0 - 0.01);
            prop_assert!(obstacle.gap() <= 400.0 + 0.01);
            prop_assert_eq!(obstacle.x, width);

            let particle = roll_particle(&mut rng, &viewport, &tuning);
            prop_assert!(particle.pos.x >= 0.0 && particle.pos.x <= width);
            prop_assert_eq!(particle.pos.y, 0.0);
        }
    }
}
