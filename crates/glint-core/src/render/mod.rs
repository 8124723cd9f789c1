//! Projection of simulation state onto a 2-D drawing surface.
//!
//! Rendering only ever borrows state immutably; everything that moves happens
//! in the update step before it.

mod particle;
pub mod recording;
pub mod shapes;

use crate::color::Rgba;
use crate::trail::Trail;
use glam::Vec2;

/// One step of a filled outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathOp {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Cubic bezier: two control points, then the end point.
    CubicTo(Vec2, Vec2, Vec2),
    Close,
}

/// Immediate-mode 2-D surface. Implemented over a canvas context by the
/// browser binding and by [`recording::RecordingPainter`] in tests.
pub trait Painter {
    /// Wipe the whole surface of the given size.
    fn clear(&mut self, size: Vec2);
    /// Glow (shadow blur) applied to subsequent fills until [`Painter::clear_glow`].
    fn set_glow(&mut self, blur: f32, color: Rgba);
    fn clear_glow(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba);
    fn fill_path(&mut self, path: &[PathOp], color: Rgba);
}

/// Anything that can draw itself for the current frame.
pub trait Render {
    fn render(&self, painter: &mut dyn Painter);
}

/// Draw `trail` as one stroke per segment, tapering alpha and width linearly
/// from the newest segment (full `width`, full `color` alpha) toward the oldest.
pub fn draw_trail(painter: &mut dyn Painter, trail: &Trail, width: f32, color: Rgba) {
    let n = trail.len();
    if n < 2 {
        return;
    }
    let last = (n - 1) as f32;
    for (k, newer, older) in trail.segments() {
        let t = 1.0 - k as f32 / last;
        painter.stroke_line(newer, older, width * t, color.fade(t));
    }
}
