//! Draw list generation
//!
//! Turns a [`GameState`] into an ordered list of 2D drawing commands. Kept
//! free of browser types so the layout can be tested on the host.

use crate::settings::GameOverScreen;
use crate::sim::{GamePhase, GameState};

pub const START_COLOR: &str = "green";
pub const OBSTACLE_COLOR: &str = "white";
pub const PARTICLE_COLOR: &str = "lightblue";
pub const SCORE_COLOR: &str = "black";
pub const GAME_OVER_COLOR: &str = "red";
/// Stand-ins while an image is missing
pub const BACKGROUND_PLACEHOLDER: &str = "#10233f";
pub const SPRITE_PLACEHOLDER: &str = "#2e8b57";

pub const BANNER_FONT: &str = "40px Arial";
pub const SCORE_FONT: &str = "30px Arial";
pub const HINT_FONT: &str = "24px Arial";

/// Images the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageId {
    Background,
    Sprite,
}

/// Which images have finished loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetStatus {
    pub background: bool,
    pub sprite: bool,
}

impl AssetStatus {
    pub fn is_ready(&self, image: ImageId) -> bool {
        match image {
            ImageId::Background => self.background,
            ImageId::Sprite => self.sprite,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// A single drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Image { image: ImageId, x: f32, y: f32, width: f32, height: f32 },
    Rect { x: f32, y: f32, width: f32, height: f32, color: &'static str },
    Circle { x: f32, y: f32, radius: f32, color: &'static str },
    Text { text: String, x: f32, y: f32, font: &'static str, color: &'static str, align: TextAlign },
}

/// Everything besides the session that affects what is drawn
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneOptions {
    pub assets: AssetStatus,
    /// Word prompts for touch instead of the keyboard
    pub touch: bool,
    pub game_over_screen: GameOverScreen,
    /// Session best, shown on the inline game-over screen
    pub best_score: Option<u64>,
}

/// Image if loaded, otherwise a filled rectangle in its place
fn image_or_placeholder(
    scene: &mut Vec<DrawCommand>,
    assets: AssetStatus,
    image: ImageId,
    (x, y, width, height): (f32, f32, f32, f32),
    placeholder: &'static str,
) {
    if assets.is_ready(image) {
        scene.push(DrawCommand::Image { image, x, y, width, height });
    } else {
        scene.push(DrawCommand::Rect { x, y, width, height, color: placeholder });
    }
}

fn centered(text: String, x: f32, y: f32, font: &'static str, color: &'static str) -> DrawCommand {
    DrawCommand::Text { text, x, y, font, color, align: TextAlign::Center }
}

/// Build the draw list for one frame
pub fn build_scene(state: &GameState, options: &SceneOptions) -> Vec<DrawCommand> {
    let viewport = state.viewport;
    let (width, height) = (viewport.width, viewport.height);
    let (cx, cy) = (viewport.center_x(), viewport.center_y());

    let mut scene = Vec::with_capacity(8 + state.obstacles.len() * 2 + state.particles.len());
    scene.push(DrawCommand::Clear { width, height });
    image_or_placeholder(
        &mut scene,
        options.assets,
        ImageId::Background,
        (0.0, 0.0, width, height),
        BACKGROUND_PLACEHOLDER,
    );

    if state.phase == GamePhase::NotStarted {
        let prompt = if options.touch { "Tap to Start" } else { "Press Spacebar to Start" };
        scene.push(centered(prompt.to_string(), cx, cy, BANNER_FONT, START_COLOR));
        return scene;
    }

    let player = &state.player;
    image_or_placeholder(
        &mut scene,
        options.assets,
        ImageId::Sprite,
        (cx - player.width / 2.0, player.y, player.width, player.height),
        SPRITE_PLACEHOLDER,
    );

    for obstacle in &state.obstacles {
        scene.push(DrawCommand::Rect {
            x: obstacle.x,
            y: 0.0,
            width: obstacle.width,
            height: obstacle.top,
            color: OBSTACLE_COLOR,
        });
        scene.push(DrawCommand::Rect {
            x: obstacle.x,
            y: obstacle.bottom,
            width: obstacle.width,
            height: (height - obstacle.bottom).max(0.0),
            color: OBSTACLE_COLOR,
        });
    }

    for particle in &state.particles {
        scene.push(DrawCommand::Circle {
            x: particle.pos.x,
            y: particle.pos.y,
            radius: particle.radius,
            color: PARTICLE_COLOR,
        });
    }

    scene.push(DrawCommand::Text {
        text: format!("Score: {}", state.score),
        x: 20.0,
        y: 50.0,
        font: SCORE_FONT,
        color: SCORE_COLOR,
        align: TextAlign::Left,
    });

    if state.phase == GamePhase::Over {
        scene.push(centered("Game Over!".to_string(), cx, cy - 20.0, BANNER_FONT, GAME_OVER_COLOR));

        if options.game_over_screen == GameOverScreen::Inline {
            let hint = if options.touch { "Tap to play again" } else { "Press Spacebar to play again" };
            scene.push(centered(hint.to_string(), cx, cy + 20.0, HINT_FONT, SCORE_COLOR));
            if let Some(best) = options.best_score {
                scene.push(centered(format!("Best: {}", best), cx, cy + 55.0, HINT_FONT, SCORE_COLOR));
            }
        }
    }

    scene
}
