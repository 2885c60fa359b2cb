//! Canvas presenter
//!
//! ABGR u32 pixels are little-endian RGBA bytes, so the surface is copied
//! byte-for-byte into `ImageData` and put at the canvas origin.

use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use super::PixelRenderer;

pub struct CanvasPresenter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    bytes: Vec<u8>,
}

impl CanvasPresenter {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, bytes: Vec::new() })
    }

    pub fn present(&mut self, surface: &PixelRenderer) -> Result<(), JsValue> {
        let (w, h) = (surface.width(), surface.height());
        if w == 0 || h == 0 {
            return Ok(());
        }
        if self.canvas.width() != w || self.canvas.height() != h {
            self.canvas.set_width(w);
            self.canvas.set_height(h);
        }

        self.bytes.clear();
        self.bytes.reserve(surface.pixels_byte_len());
        for px in surface.pixels() {
            self.bytes.extend_from_slice(&px.to_le_bytes());
        }

        let image = ImageData::new_with_u8_clamped_array_and_sh(Clamped(&self.bytes), w, h)?;
        self.ctx.put_image_data(&image, 0.0, 0.0)
    }
}
