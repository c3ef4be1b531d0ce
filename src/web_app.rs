//! Browser app: canvas, listeners, interval and the JS control handle
//!
//! `startSimulator` boots the page and returns a [`SimulatorHandle`]. Every
//! setter on the handle applies to the running simulator and persists the
//! settings to LocalStorage.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{MouseEvent, Window};

use crate::color::Color;
use crate::error::SimError;
use crate::platform::{WebTimer, measure_canvas};
use crate::renderer::CanvasSurface;
use crate::settings::{BounceVariant, Settings};
use crate::sim::Simulator;

/// Element id used when the caller names no canvas
const DEFAULT_CANVAS_ID: &str = "canvas";

/// Everything the browser callbacks share
struct App {
    sim: Simulator,
    surface: CanvasSurface,
    timer: WebTimer,
}

fn to_js(e: SimError) -> JsValue {
    log::error!("Simulator error: {}", e);
    JsValue::from_str(&e.to_string())
}

/// Boot the simulator on a canvas and start ticking
#[wasm_bindgen(js_name = startSimulator)]
pub fn start_simulator(canvas_id: Option<String>) -> Result<SimulatorHandle, JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    log::info!("Gravity Bounce starting...");

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas_id = canvas_id.as_deref().unwrap_or(DEFAULT_CANVAS_ID);
    let mut surface = CanvasSurface::from_element_id(&document, canvas_id).map_err(to_js)?;
    let geometry = measure_canvas(surface.canvas());

    let settings = Settings::load();
    let seed = js_sys::Date::now() as u64;
    let sim = Simulator::new(settings, geometry, seed).map_err(to_js)?;
    sim.apply_background(&mut surface);

    let app = Rc::new_cyclic(|weak: &Weak<RefCell<App>>| {
        let weak = weak.clone();
        let timer = WebTimer::new(window.clone(), move || {
            let Some(app) = weak.upgrade() else {
                return;
            };
            let Ok(mut app) = app.try_borrow_mut() else {
                return;
            };
            let App { sim, surface, .. } = &mut *app;
            sim.tick(surface);
        });
        RefCell::new(App {
            sim,
            surface,
            timer,
        })
    });

    setup_input_handlers(&window, app.clone())?;

    let handle = SimulatorHandle { app };
    handle.start()?;
    log::info!("Gravity Bounce running!");
    Ok(handle)
}

fn setup_input_handlers(window: &Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    let canvas = app.borrow().surface.canvas().clone();

    // Press: remember where and when
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let client = Vec2::new(event.client_x() as f32, event.client_y() as f32);
            app.borrow_mut().sim.pointer_down(client, js_sys::Date::now());
        });
        canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Release: spawn a shape sized by the hold
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            app.borrow_mut().sim.pointer_up(js_sys::Date::now());
        });
        canvas.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Resize: re-measure the canvas
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut g = app.borrow_mut();
            let geometry = measure_canvas(g.surface.canvas());
            g.sim.resize(geometry);
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Runtime controls for a running simulator
#[wasm_bindgen]
pub struct SimulatorHandle {
    app: Rc<RefCell<App>>,
}

impl SimulatorHandle {
    fn persist(&self) {
        self.app.borrow().sim.settings().save();
    }
}

#[wasm_bindgen]
impl SimulatorHandle {
    /// Resume ticking. Returns false if already running.
    pub fn start(&self) -> Result<bool, JsValue> {
        let mut guard = self.app.borrow_mut();
        let App { sim, timer, .. } = &mut *guard;
        sim.start(timer).map_err(to_js)
    }

    /// Pause ticking. Returns false if not running.
    pub fn stop(&self) -> bool {
        let mut guard = self.app.borrow_mut();
        let App { sim, timer, .. } = &mut *guard;
        sim.stop(timer)
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.app.borrow().sim.is_running()
    }

    #[wasm_bindgen(js_name = shapeCount)]
    pub fn shape_count(&self) -> usize {
        self.app.borrow().sim.shapes().len()
    }

    /// CSS color for every new shape, or `undefined` for random colors
    #[wasm_bindgen(js_name = setFixedColor)]
    pub fn set_fixed_color(&self, color: Option<String>) {
        self.app.borrow_mut().sim.set_fixed_color(color.map(Color::Css));
        self.persist();
    }

    /// Radius for every new shape, or `undefined` to size by hold time
    #[wasm_bindgen(js_name = setFixedShapeSize)]
    pub fn set_fixed_shape_size(&self, size: Option<f32>) -> Result<(), JsValue> {
        self.app
            .borrow_mut()
            .sim
            .set_fixed_shape_size(size)
            .map_err(to_js)?;
        self.persist();
        Ok(())
    }

    #[wasm_bindgen(js_name = setBackground)]
    pub fn set_background(&self, color: String) {
        let mut guard = self.app.borrow_mut();
        let App { sim, surface, .. } = &mut *guard;
        sim.set_background(Color::Css(color), surface);
        drop(guard);
        self.persist();
    }

    /// `"bounded-return"` or `"floor-stop"`
    #[wasm_bindgen(js_name = setBounceVariant)]
    pub fn set_bounce_variant(&self, name: &str) -> Result<(), JsValue> {
        let variant = BounceVariant::parse(name).map_err(to_js)?;
        self.app.borrow_mut().sim.set_bounce_variant(variant);
        self.persist();
        Ok(())
    }

    /// Send every shape back to its spawn height
    #[wasm_bindgen(js_name = resetShapes)]
    pub fn reset_shapes(&self) {
        self.app.borrow_mut().sim.reset_shapes();
    }
}
