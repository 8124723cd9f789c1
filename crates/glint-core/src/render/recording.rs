use super::{Painter, PathOp};
use crate::color::Rgba;
use glam::Vec2;

/// A painter call captured by [`RecordingPainter`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Vec2),
    SetGlow { blur: f32, color: Rgba },
    ClearGlow,
    FillCircle { center: Vec2, radius: f32, color: Rgba },
    StrokeCircle { center: Vec2, radius: f32, width: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, width: f32, color: Rgba },
    Polygon { points: Vec<Vec2>, color: Rgba },
    Path { ops: Vec<PathOp>, color: Rgba },
}

/// Painter that records every call instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct RecordingPainter {
    pub commands: Vec<DrawCommand>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, f32, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, width, color } => Some((*from, *to, *width, *color)),
            _ => None,
        })
    }

    /// Number of commands that put pixels on the surface (everything except
    /// clears and glow state changes).
    pub fn mark_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| !matches!(c, DrawCommand::Clear(_) | DrawCommand::SetGlow { .. } | DrawCommand::ClearGlow))
            .count()
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, size: Vec2) {
        self.commands.push(DrawCommand::Clear(size));
    }

    fn set_glow(&mut self, blur: f32, color: Rgba) {
        self.commands.push(DrawCommand::SetGlow { blur, color });
    }

    fn clear_glow(&mut self) {
        self.commands.push(DrawCommand::ClearGlow);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, width, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
        self.commands.push(DrawCommand::Polygon { points: points.to_vec(), color });
    }

    fn fill_path(&mut self, path: &[PathOp], color: Rgba) {
        self.commands.push(DrawCommand::Path { ops: path.to_vec(), color });
    }
}
