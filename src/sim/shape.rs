//! Shape entity and its per-tick kinematics

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::renderer::Surface;
use crate::settings::{BounceVariant, Settings};

/// Which half of the bounce cycle a shape is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Direction {
    #[default]
    Down,
    Up,
}

/// Everything one update needs from the simulator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Gravity magnitude (> 0)
    pub gravity: f32,
    pub units: f32,
    /// Ticks per second (> 0)
    pub fps: f32,
    /// Canvas height; the floor shapes bounce on
    pub floor: f32,
    pub variant: BounceVariant,
}

impl Step {
    pub fn from_settings(settings: &Settings, floor: f32) -> Self {
        Self {
            gravity: settings.gravity,
            units: settings.units,
            fps: settings.fps,
            floor,
            variant: settings.bounce_variant,
        }
    }
}

/// A falling circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Center in canvas pixels (y grows downward)
    pub pos: Vec2,
    /// Spawn height; the apex a bounded-return shape comes back to
    pub initial_y: f32,
    /// Vertical velocity, positive is downward
    pub dy: f32,
    pub r: f32,
    pub color: Color,
    pub direction: Direction,
}

impl Shape {
    /// Create a shape at rest, pulled inside a `width` x `height` canvas
    ///
    /// The radius is capped at half the smaller canvas side so the shape fits.
    pub fn new(pos: Vec2, r: f32, color: Color, width: f32, height: f32) -> Self {
        let fit = width.min(height) / 2.0;
        let r = if fit > 0.0 { r.min(fit) } else { r };
        let mut shape = Self {
            pos,
            initial_y: pos.y,
            dy: 0.0,
            r,
            color,
            direction: Direction::Down,
        };
        shape.clamp_into(width, height);
        shape.initial_y = shape.pos.y;
        shape
    }

    /// Pull the position and spawn apex back inside a `width` x `height` canvas
    pub fn clamp_into(&mut self, width: f32, height: f32) {
        let r = self.r;
        let clamp_y = |y: f32| {
            let y = if y < r { r } else { y };
            if y + r > height { height - r } else { y }
        };
        self.pos.y = clamp_y(self.pos.y);
        self.initial_y = clamp_y(self.initial_y);
        if self.pos.x < r {
            self.pos.x = r;
        }
        if self.pos.x + r > width {
            self.pos.x = width - r;
        }
    }

    /// Advance one tick
    ///
    /// Displacement comes from `v² = u² + 2as` rather than `y += v·dt`, so the
    /// height reached on the way up mirrors the height fallen on the way down.
    pub fn update(&mut self, step: &Step) {
        if step.variant == BounceVariant::FloorStop && self.pos.y > step.floor - self.r {
            self.dy = 0.0;
            return;
        }

        let previous = self.dy;
        self.dy = previous + step.gravity * step.units / step.fps;
        self.pos.y += (self.dy * self.dy - previous * previous) / (2.0 * step.gravity);

        if step.variant == BounceVariant::BoundedReturn {
            self.bounce(step.floor);
        }
    }

    fn bounce(&mut self, floor: f32) {
        if self.direction == Direction::Down && self.pos.y + self.r >= floor {
            self.dy = -self.dy;
            self.pos.y = floor - self.r;
            self.direction = Direction::Up;
        }
        // A non-negative velocity means the shape stopped rising, apex reached
        if self.direction == Direction::Up && (self.pos.y <= self.initial_y || self.dy >= 0.0) {
            self.settle_at_apex();
        }
    }

    fn settle_at_apex(&mut self) {
        self.dy = 0.0;
        self.pos.y = self.initial_y;
        self.direction = Direction::Down;
    }

    /// Put the shape back at its spawn apex, at rest
    pub fn reset(&mut self) {
        self.settle_at_apex();
    }

    /// True when a floor-stop shape has come to rest on the floor
    pub fn is_grounded(&self, floor: f32) -> bool {
        self.pos.y > floor - self.r && self.dy == 0.0
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.pos.x, self.pos.y, self.r, &self.color);
    }
}
