//! Browser Canvas 2D backend
//!
//! Sprites are plain `<img>` elements created at startup. Nothing waits for
//! them to load: drawing an image that is not ready (or failed) is a no-op
//! in the browser.

use std::collections::HashMap;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Sprite, Surface};

/// Canvas 2D context plus the sprite images it draws
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    images: HashMap<Sprite, HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        let mut images = HashMap::with_capacity(Sprite::ALL.len());
        for sprite in Sprite::ALL {
            let image = HtmlImageElement::new()?;
            image.set_src(sprite.path());
            images.insert(sprite, image);
        }
        log::info!("Requested {} sprites", images.len());

        Ok(Self { ctx, images })
    }
}

/// Log a failed canvas call; the frame carries on
fn check(result: Result<(), JsValue>, what: &str) {
    if let Err(e) = result {
        log::debug!("Canvas {} failed: {:?}", what, e);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32) {
        if let Some(image) = self.images.get(&sprite) {
            check(
                self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    image, x as f64, y as f64, w as f64, h as f64,
                ),
                "draw_image",
            );
        }
    }

    fn fill_rect(&mut self, color: &str, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        check(self.ctx.translate(x as f64, y as f64), "translate");
    }

    fn rotate(&mut self, angle: f32) {
        check(self.ctx.rotate(angle as f64), "rotate");
    }

    fn scale(&mut self, x: f32, y: f32) {
        check(self.ctx.scale(x as f64, y as f64), "scale");
    }
}
