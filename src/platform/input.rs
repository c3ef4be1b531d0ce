//! Pointer input
//!
//! Browsers report pointer positions in client (CSS pixel) space, while the
//! canvas draws in backing-store pixels. `CanvasGeometry` maps one to the
//! other and `PointerTracker` turns a press/release pair into a hold.

use glam::Vec2;

/// Canvas size plus the client-to-canvas transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    /// Backing-store width in canvas pixels
    pub width: f32,
    /// Backing-store height in canvas pixels
    pub height: f32,
    /// Top-left of the canvas in client coordinates
    pub offset: Vec2,
    /// Canvas pixels per client pixel
    pub scale: Vec2,
}

impl CanvasGeometry {
    /// Geometry for a canvas displayed 1:1 at the client origin
    pub fn unscaled(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            offset: Vec2::ZERO,
            scale: Vec2::ONE,
        }
    }

    /// Build from the backing-store size and the canvas bounding client rect
    pub fn from_client_rect(width: f32, height: f32, rect_origin: Vec2, rect_size: Vec2) -> Self {
        let axis_scale = |backing: f32, client: f32| {
            if client > 0.0 { backing / client } else { 1.0 }
        };
        Self {
            width,
            height,
            offset: rect_origin,
            scale: Vec2::new(axis_scale(width, rect_size.x), axis_scale(height, rect_size.y)),
        }
    }

    /// Translate a client-space point into canvas pixels
    #[inline]
    pub fn to_canvas(&self, client: Vec2) -> Vec2 {
        (client - self.offset) * self.scale
    }
}

/// A pointer press waiting for its release
#[derive(Debug, Clone, Copy, PartialEq)]
struct Press {
    client: Vec2,
    timestamp_ms: f64,
}

/// Completed press/release pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    /// Where the press happened, in client coordinates
    pub client: Vec2,
    /// How long the pointer was held (may be negative if the clock jumped)
    pub held_ms: f64,
}

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    pending: Option<Press>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press; a second press replaces the first
    pub fn press(&mut self, client: Vec2, timestamp_ms: f64) {
        self.pending = Some(Press {
            client,
            timestamp_ms,
        });
    }

    /// Finish the pending press. `None` if nothing was pressed.
    pub fn release(&mut self, timestamp_ms: f64) -> Option<Release> {
        self.pending.take().map(|press| Release {
            client: press.client,
            held_ms: timestamp_ms - press.timestamp_ms,
        })
    }

    pub fn is_pressed(&self) -> bool {
        self.pending.is_some()
    }
}
