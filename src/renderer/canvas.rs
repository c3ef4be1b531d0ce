//! Canvas 2D surface (browser only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::Surface;
use crate::color::Color;
use crate::error::{Result, SimError};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up a canvas by element id and grab its 2D context
    pub fn from_element_id(document: &Document, id: &str) -> Result<Self> {
        let canvas = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| SimError::MissingCanvas(id.to_string()))?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(SimError::MissingContext)?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &Color) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(x as f64, y as f64, r as f64, 0.0, std::f64::consts::TAU)
        {
            log::warn!("arc failed for r={}: {:?}", r, e);
            return;
        }
        self.ctx.fill();
    }

    fn set_background(&mut self, color: &Color) {
        if let Err(e) = self
            .canvas
            .style()
            .set_property("background-color", &color.to_string())
        {
            log::warn!("Could not set background {}: {:?}", color, e);
        }
    }
}
