//! Simulator: owns the shapes, the settings and the tick loop

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::shape::{Shape, Step};
use super::spawn::SizePolicy;
use crate::color::{Color, ColorPolicy};
use crate::error::Result;
use crate::platform::{CanvasGeometry, PointerTracker, Timer, TimerHandle};
use crate::renderer::Surface;
use crate::settings::{BounceVariant, Settings};

pub struct Simulator {
    settings: Settings,
    /// Insertion order is draw order
    shapes: Vec<Shape>,
    geometry: CanvasGeometry,
    pointer: PointerTracker,
    interval: Option<TimerHandle>,
    rng: Pcg32,
    ticks: u64,
}

impl Simulator {
    /// Build a simulator for a canvas. Fails if the settings are invalid.
    pub fn new(settings: Settings, geometry: CanvasGeometry, seed: u64) -> Result<Self> {
        settings.validate()?;
        log::info!(
            "Simulator ready: {}x{} canvas, {} fps, {} bounce",
            geometry.width,
            geometry.height,
            settings.fps,
            settings.bounce_variant.as_str()
        );
        Ok(Self {
            settings,
            shapes: Vec::new(),
            geometry,
            pointer: PointerTracker::new(),
            interval: None,
            rng: Pcg32::seed_from_u64(seed),
            ticks: 0,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn width(&self) -> f32 {
        self.geometry.width
    }

    pub fn height(&self) -> f32 {
        self.geometry.height
    }

    pub fn geometry(&self) -> &CanvasGeometry {
        &self.geometry
    }

    /// Ticks run since construction
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Parameters for one shape update under the current settings
    pub fn step(&self) -> Step {
        Step::from_settings(&self.settings, self.geometry.height)
    }

    /// Clear the surface, then update and draw every shape in order
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let step = self.step();
        surface.clear(self.geometry.width, self.geometry.height);
        for shape in &mut self.shapes {
            shape.update(&step);
            shape.draw(surface);
        }
        self.ticks += 1;
        log::trace!("tick {} ({} shapes)", self.ticks, self.shapes.len());
    }

    /// Spawn a shape at a canvas point using the configured color and size policies
    pub fn spawn_from_press(&mut self, point: Vec2, held_ms: f64) -> &Shape {
        let color_policy = self.settings.color_policy();
        let size_policy = self.settings.size_policy();
        self.spawn_with(point, held_ms, &color_policy, size_policy)
    }

    /// Spawn a shape at a canvas point with explicit policies
    pub fn spawn_with(
        &mut self,
        point: Vec2,
        held_ms: f64,
        color_policy: &ColorPolicy,
        size_policy: SizePolicy,
    ) -> &Shape {
        let r = size_policy.radius(held_ms);
        let color = color_policy.pick(&mut self.rng);
        let shape = Shape::new(point, r, color, self.geometry.width, self.geometry.height);
        log::debug!(
            "Spawned r={} at ({:.1}, {:.1}) color {}",
            shape.r,
            shape.pos.x,
            shape.pos.y,
            shape.color
        );
        self.push_shape(shape)
    }

    /// Append an already built shape
    pub fn push_shape(&mut self, shape: Shape) -> &Shape {
        self.shapes.push(shape);
        &self.shapes[self.shapes.len() - 1]
    }

    /// Pointer pressed at a client-space position
    pub fn pointer_down(&mut self, client: Vec2, timestamp_ms: f64) {
        self.pointer.press(client, timestamp_ms);
    }

    /// Pointer released: spawn a shape sized by the hold. `None` without a prior press.
    pub fn pointer_up(&mut self, timestamp_ms: f64) -> Option<&Shape> {
        let Some(release) = self.pointer.release(timestamp_ms) else {
            log::warn!("Pointer released without a press, ignoring");
            return None;
        };
        let point = self.geometry.to_canvas(release.client);
        Some(self.spawn_from_press(point, release.held_ms))
    }

    /// Canvas resized or moved. Shapes outside the new bounds are pulled back in.
    pub fn resize(&mut self, geometry: CanvasGeometry) {
        log::info!("Canvas resized to {}x{}", geometry.width, geometry.height);
        for shape in &mut self.shapes {
            shape.clamp_into(geometry.width, geometry.height);
        }
        self.geometry = geometry;
    }

    /// Schedule the tick every `1000 / fps` ms. No-op if already running.
    ///
    /// Returns `Ok(false)` when already running. If the timer refuses the
    /// interval the simulator stays stopped.
    pub fn start<T: Timer + ?Sized>(&mut self, timer: &mut T) -> Result<bool> {
        if self.interval.is_some() {
            return Ok(false);
        }
        let interval_ms = self.settings.tick_interval_ms();
        self.interval = Some(timer.schedule_repeating(interval_ms)?);
        log::info!("Simulation started ({:.2} ms per tick)", interval_ms);
        Ok(true)
    }

    /// Cancel the scheduled tick. No-op if not running.
    pub fn stop<T: Timer + ?Sized>(&mut self, timer: &mut T) -> bool {
        match self.interval.take() {
            Some(handle) => {
                timer.cancel(handle);
                log::info!("Simulation stopped after {} ticks", self.ticks);
                true
            }
            None => false,
        }
    }

    /// Stop and start again so a new fps takes effect
    pub fn restart<T: Timer + ?Sized>(&mut self, timer: &mut T) -> Result<()> {
        self.stop(timer);
        self.start(timer)?;
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Handle of the scheduled tick interval, if running
    pub fn timer_handle(&self) -> Option<TimerHandle> {
        self.interval
    }

    /// Replace all settings. A running interval keeps its old rate until `restart`.
    pub fn reconfigure(&mut self, settings: Settings) -> Result<()> {
        settings.validate()?;
        if settings.fps != self.settings.fps && self.is_running() {
            log::info!("fps changed to {}; restart to apply", settings.fps);
        }
        self.settings = settings;
        Ok(())
    }

    pub fn set_fixed_color(&mut self, color: Option<Color>) {
        self.settings.fixed_color = color;
    }

    pub fn set_fixed_shape_size(&mut self, size: Option<f32>) -> Result<()> {
        let settings = Settings {
            fixed_shape_size: size,
            ..self.settings.clone()
        };
        self.reconfigure(settings)
    }

    pub fn set_bounce_variant(&mut self, variant: BounceVariant) {
        self.settings.bounce_variant = variant;
    }

    pub fn set_background<S: Surface + ?Sized>(&mut self, color: Color, surface: &mut S) {
        self.settings.background = color;
        self.apply_background(surface);
    }

    /// Push the configured background to the surface
    pub fn apply_background<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_background(&self.settings.background);
    }

    /// Send every shape back to its spawn apex (unfreezes floor-stop shapes)
    pub fn reset_shapes(&mut self) {
        for shape in &mut self.shapes {
            shape.reset();
        }
    }
}
