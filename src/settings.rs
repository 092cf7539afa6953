//! Game settings and preferences
//!
//! Read from LocalStorage at startup. Missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// What the player sees when a run ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameOverScreen {
    /// "Game Over!" drawn on the canvas; any press restarts
    Inline,
    /// The `#walletForm` popup receives the score; its close button restarts
    #[default]
    WalletForm,
}

impl GameOverScreen {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverScreen::Inline => "Inline",
            GameOverScreen::WalletForm => "WalletForm",
        }
    }

    /// Whether a jump press while the run is over resets the game
    pub fn press_resets(&self) -> bool {
        matches!(self, GameOverScreen::Inline)
    }
}

/// Whether touch-start counts as a press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TouchInput {
    /// Enabled on mobile user agents only
    #[default]
    Auto,
    Always,
    Never,
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game_over_screen: GameOverScreen,
    pub touch_input: TouchInput,
    /// Show the session best on the inline game-over screen
    pub show_best_score: bool,
    /// Simulation balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_over_screen: GameOverScreen::default(),
            touch_input: TouchInput::default(),
            show_best_score: true,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "elf_jump_settings";

    /// Parse settings from JSON, validating the tuning block
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        if settings.tuning.validate() {
            log::warn!("Settings contained invalid tuning values; defaults substituted");
        }
        Ok(settings)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring malformed settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_over_screen_names_match_json() {
        for screen in [GameOverScreen::Inline, GameOverScreen::WalletForm] {
            let json = serde_json::to_string(&screen).unwrap();
            assert_eq!(json, format!("\"{}\"", screen.as_str()));
        }
    }

    #[test]
    fn test_only_inline_screen_resets_on_press() {
        assert!(GameOverScreen::Inline.press_resets());
        assert!(!GameOverScreen::WalletForm.press_resets());
    }

    #[test]
    fn test_from_json_partial() {
        let settings =
            Settings::from_json(r#"{ "game_over_screen": "Inline", "tuning": { "jump_strength": -12.0 } }"#)
                .unwrap();
        assert_eq!(settings.game_over_screen, GameOverScreen::Inline);
        assert_eq!(settings.touch_input, TouchInput::Auto);
        assert!(settings.show_best_score);
        assert_eq!(settings.tuning.jump_strength, -12.0);
        assert_eq!(settings.tuning.gravity, crate::consts::GRAVITY);
    }

    #[test]
    fn test_from_json_repairs_tuning() {
        let settings = Settings::from_json(r#"{ "tuning": { "obstacle_interval": 0 } }"#).unwrap();
        assert_eq!(settings.tuning.obstacle_interval, crate::consts::OBSTACLE_INTERVAL);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Settings::from_json("not json").is_err());
    }
}
