use super::shapes::{heart_path, rect_polygon, star_polygon};
use super::{draw_trail, Painter, Render};
use crate::color::Rgba;
use crate::particle::{Particle, ParticleKind};
use crate::set::ParticleSet;
use glam::Vec2;

const STAR_INNER_RATIO: f32 = 0.5;
const FIREWORK_GLOW: f32 = 4.0;

impl Render for Particle {
    fn render(&self, painter: &mut dyn Painter) {
        if !self.is_alive() {
            return;
        }
        let color = self.color.fade(self.opacity);
        let pos = self.position;
        let size = self.size;

        match &self.kind {
            ParticleKind::Star { rotation, .. } => {
                let outline = star_polygon(pos, size, size * STAR_INNER_RATIO, *rotation);
                painter.fill_polygon(&outline, color);
            }
            ParticleKind::Sparkle { .. } => {
                painter.fill_circle(pos, size * 0.4, color);
                painter.stroke_line(pos - Vec2::X * size, pos + Vec2::X * size, 1.0, color);
                painter.stroke_line(pos - Vec2::Y * size, pos + Vec2::Y * size, 1.0, color);
            }
            ParticleKind::Heart { .. } => {
                painter.fill_path(&heart_path(pos, size), color);
            }
            ParticleKind::Bubble { .. } => {
                painter.stroke_circle(pos, size, 1.5, color);
                let highlight = pos + Vec2::new(-0.35, -0.35) * size;
                painter.fill_circle(highlight, size * 0.25, Rgba::WHITE.fade(self.opacity * 0.8));
            }
            ParticleKind::Firework { trail } => {
                draw_trail(painter, trail, size, color);
                painter.set_glow(size * FIREWORK_GLOW, color);
                painter.fill_circle(pos, size, color);
                painter.clear_glow();
            }
            ParticleKind::Confetti { rotation, aspect, .. } => {
                let outline = rect_polygon(pos, size, size * aspect, *rotation);
                painter.fill_polygon(&outline, color);
            }
        }
    }
}

impl Render for ParticleSet {
    fn render(&self, painter: &mut dyn Painter) {
        for particle in self {
            particle.render(painter);
        }
    }
}
