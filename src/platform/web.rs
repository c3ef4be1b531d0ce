//! Browser bindings for the platform traits

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::input::CanvasGeometry;
use super::timer::{Timer, TimerHandle};
use crate::error::{Result, SimError};

/// `setInterval` timer bound to a single tick callback
pub struct WebTimer {
    window: Window,
    on_tick: Closure<dyn FnMut()>,
}

impl WebTimer {
    pub fn new(window: Window, on_tick: impl FnMut() + 'static) -> Self {
        Self {
            window,
            on_tick: Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>),
        }
    }
}

impl Timer for WebTimer {
    fn schedule_repeating(&mut self, interval_ms: f64) -> Result<TimerHandle> {
        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.on_tick.as_ref().unchecked_ref(),
                interval_ms.round() as i32,
            )
            .map_err(|e| SimError::Timer(format!("setInterval failed: {:?}", e)))?;
        Ok(TimerHandle(id))
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.window.clear_interval_with_handle(handle.0);
    }
}

/// Current backing-store size and client rect of a canvas
pub fn measure_canvas(canvas: &HtmlCanvasElement) -> CanvasGeometry {
    let rect = canvas.get_bounding_client_rect();
    CanvasGeometry::from_client_rect(
        canvas.width() as f32,
        canvas.height() as f32,
        Vec2::new(rect.x() as f32, rect.y() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}
