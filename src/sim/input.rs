//! Press handling (the state machine's input edge)
//!
//! Keyboard and touch both collapse into a single "press". What a press does
//! depends only on the current phase and the configured game-over screen.

use super::physics;
use super::state::{GamePhase, GameState};
use crate::settings::GameOverScreen;
use crate::tuning::Tuning;

/// Result of a press, so the frame driver knows whether to start a loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// NotStarted -> Running; the driver must schedule the first frame
    Started,
    /// Velocity set to the jump strength
    Jumped,
    /// Over -> NotStarted
    Reset,
    /// Nothing happened (game over with the wallet form showing)
    Ignored,
}

impl PressOutcome {
    /// Whether the game used the press. Ignored presses keep their browser default.
    pub fn consumes_event(&self) -> bool {
        !matches!(self, PressOutcome::Ignored)
    }
}

/// Apply a press to the session
pub fn press(state: &mut GameState, tuning: &Tuning, screen: GameOverScreen) -> PressOutcome {
    match state.phase {
        GamePhase::NotStarted => {
            state.phase = GamePhase::Running;
            PressOutcome::Started
        }
        GamePhase::Running => {
            physics::jump(&mut state.player, tuning);
            PressOutcome::Jumped
        }
        GamePhase::Over if screen.press_resets() => {
            state.reset();
            PressOutcome::Reset
        }
        GamePhase::Over => PressOutcome::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Viewport;

    fn new_state() -> GameState {
        GameState::new(5, Viewport::new(800.0, 600.0), &Tuning::default())
    }

    #[test]
    fn test_press_starts_then_jumps() {
        let tuning = Tuning::default();
        let mut state = new_state();

        assert_eq!(press(&mut state, &tuning, GameOverScreen::Inline), PressOutcome::Started);
        assert_eq!(state.phase, GamePhase::Running);
        // Starting does not jump
        assert_eq!(state.player.velocity, 0.0);

        state.player.velocity = 4.0;
        assert_eq!(press(&mut state, &tuning, GameOverScreen::Inline), PressOutcome::Jumped);
        assert_eq!(state.player.velocity, -10.0);
    }

    #[test]
    fn test_press_when_over_inline_resets() {
        let tuning = Tuning::default();
        let mut state = new_state();
        state.phase = GamePhase::Over;
        state.score = 17;

        assert_eq!(press(&mut state, &tuning, GameOverScreen::Inline), PressOutcome::Reset);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_press_when_over_wallet_form_is_ignored() {
        let tuning = Tuning::default();
        let mut state = new_state();
        state.phase = GamePhase::Over;
        state.score = 17;
        state.player.velocity = 3.0;

        assert_eq!(press(&mut state, &tuning, GameOverScreen::WalletForm), PressOutcome::Ignored);
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.score, 17);
        assert_eq!(state.player.velocity, 3.0);
    }

    #[test]
    fn test_only_ignored_press_leaves_event_alone() {
        let tuning = Tuning::default();
        let mut state = new_state();

        assert!(press(&mut state, &tuning, GameOverScreen::WalletForm).consumes_event());
        assert!(press(&mut state, &tuning, GameOverScreen::WalletForm).consumes_event());

        state.phase = GamePhase::Over;
        // Space on the focused close button or the wallet input must reach the form
        assert!(!press(&mut state, &tuning, GameOverScreen::WalletForm).consumes_event());
        assert!(press(&mut state, &tuning, GameOverScreen::Inline).consumes_event());
    }
}
