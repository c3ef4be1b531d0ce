//! Gravity Bounce - press-and-hold bouncing balls on a 2D canvas
//!
//! Core modules:
//! - `sim`: Shape kinematics and the simulator tick loop
//! - `renderer`: Drawing surfaces (Canvas 2D, recording)
//! - `platform`: Timers and pointer input
//! - `settings`: Validated, serializable configuration
//! - `web_app`: Browser entry point and JS control handle (wasm32 only)

pub mod color;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web_app;

pub use color::{Color, ColorPolicy};
pub use error::{Result, SimError};
pub use settings::{BounceVariant, Settings};
pub use sim::{Direction, Shape, Simulator};

/// Simulation constants
pub mod consts {
    /// Default gravity magnitude (m/s²)
    pub const DEFAULT_GRAVITY: f32 = 9.8;
    /// Default tick rate
    pub const DEFAULT_FPS: f32 = 60.0;
    /// Default unit scale
    pub const DEFAULT_UNITS: f32 = 7.5;

    /// Radius of a shape spawned by a tap
    pub const MIN_SHAPE_RADIUS: f32 = 10.0;
    /// Radius cap for long holds
    pub const MAX_SHAPE_RADIUS: f32 = 100.0;
    /// Hold time that adds one pixel of radius
    pub const HOLD_MS_PER_PIXEL: f64 = 10.0;
}
