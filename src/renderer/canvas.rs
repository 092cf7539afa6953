//! Canvas 2D backend
//!
//! Replays a draw list on a `CanvasRenderingContext2d`.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::scene::{DrawCommand, ImageId};

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    background: HtmlImageElement,
    sprite: HtmlImageElement,
}

impl CanvasRenderer {
    pub fn new(
        canvas: HtmlCanvasElement,
        background: HtmlImageElement,
        sprite: HtmlImageElement,
    ) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            background,
            sprite,
        })
    }

    /// Match the backing store to a new window size
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn image(&self, id: ImageId) -> &HtmlImageElement {
        match id {
            ImageId::Background => &self.background,
            ImageId::Sprite => &self.sprite,
        }
    }

    /// Draw a full frame
    pub fn render(&self, scene: &[DrawCommand]) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        for command in scene {
            match command {
                DrawCommand::Clear { width, height } => {
                    ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
                }
                DrawCommand::Image { image, x, y, width, height } => {
                    ctx.draw_image_with_html_image_element_and_dw_and_dh(
                        self.image(*image),
                        *x as f64,
                        *y as f64,
                        *width as f64,
                        *height as f64,
                    )?;
                }
                DrawCommand::Rect { x, y, width, height, color } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(*x as f64, *y as f64, *width as f64, *height as f64);
                }
                DrawCommand::Circle { x, y, radius, color } => {
                    ctx.set_fill_style_str(color);
                    ctx.begin_path();
                    ctx.arc(*x as f64, *y as f64, *radius as f64, 0.0, TAU)?;
                    ctx.fill();
                }
                DrawCommand::Text { text, x, y, font, color, align } => {
                    ctx.set_fill_style_str(color);
                    ctx.set_font(font);
                    ctx.set_text_align(align.as_str());
                    ctx.fill_text(text, *x as f64, *y as f64)?;
                }
            }
        }
        Ok(())
    }
}
