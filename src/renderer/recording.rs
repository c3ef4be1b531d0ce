//! In-memory surface that records draw commands

use super::Surface;
use crate::color::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    FillCircle { x: f32, y: f32, r: f32, color: Color },
    Background(Color),
}

/// Records every command in issue order
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands issued since (and including) the most recent clear
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Number of clears seen
    pub fn frame_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &Color) {
        self.commands.push(DrawCommand::FillCircle {
            x,
            y,
            r,
            color: color.clone(),
        });
    }

    fn set_background(&mut self, color: &Color) {
        self.commands.push(DrawCommand::Background(color.clone()));
    }
}
