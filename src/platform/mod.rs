//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Repeating timers (setInterval on web, manual stepping on native)
//! - Pointer input and screen-to-canvas translation

pub mod input;
pub mod timer;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{CanvasGeometry, PointerTracker, Release};
pub use timer::{ManualTimer, Timer, TimerHandle};
#[cfg(target_arch = "wasm32")]
pub use web::{WebTimer, measure_canvas};
