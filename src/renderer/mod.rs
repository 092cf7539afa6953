//! Canvas 2D rendering module
//!
//! `scene` builds a backend-neutral draw list; `canvas` replays it in the
//! browser.

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{AssetStatus, DrawCommand, ImageId, SceneOptions, build_scene};
