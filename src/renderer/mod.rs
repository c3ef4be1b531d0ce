//! Drawing surfaces
//!
//! The simulation draws through the `Surface` trait: the browser build backs
//! it with a Canvas 2D context, native runs and tests record the commands.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use crate::color::Color;

/// A 2D drawing target accepting filled circles
pub trait Surface {
    /// Clear the whole drawing area
    fn clear(&mut self, width: f32, height: f32);
    /// Fill a circle centered at `(x, y)`
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &Color);
    /// Change the backdrop shown behind cleared pixels
    fn set_background(&mut self, color: &Color);
}
