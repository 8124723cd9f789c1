use glam::Vec2;
use glint_core::color::Rgba;
use glint_core::error::{GlintError, Result};
use glint_core::render::{Painter, PathOp};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// [`Painter`] over a `<canvas>` 2-D context.
pub struct CanvasPainter {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn from_element_id(id: &str) -> Result<Self> {
        let window = web_sys::window().ok_or(GlintError::Unsupported("no window"))?;
        let document = window.document().ok_or(GlintError::Unsupported("no document"))?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or(GlintError::Unsupported("canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| GlintError::Unsupported("element is not a canvas"))?;
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(GlintError::Unsupported("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GlintError::Unsupported("2d context unavailable"))?;

        Ok(Self { canvas, context })
    }

    /// CSS size of the element, used as the initial backing size.
    pub fn client_size(&self) -> Vec2 {
        Vec2::new(self.canvas.client_width().max(0) as f32, self.canvas.client_height().max(0) as f32)
    }

    pub fn set_backing_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    #[allow(deprecated)]
    fn set_fill(&self, color: Rgba) {
        self.context.set_fill_style(&JsValue::from_str(&color.to_css()));
    }

    #[allow(deprecated)]
    fn set_stroke(&self, color: Rgba, width: f32) {
        self.context.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.context.set_line_width(width as f64);
    }

    fn circle(&self, center: Vec2, radius: f32) {
        self.context.begin_path();
        let _ = self
            .context
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, size: Vec2) {
        self.context.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn set_glow(&mut self, blur: f32, color: Rgba) {
        self.context.set_shadow_blur(blur as f64);
        self.context.set_shadow_color(&color.to_css());
    }

    fn clear_glow(&mut self) {
        self.context.set_shadow_blur(0.0);
        self.context.set_shadow_color("transparent");
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circle(center, radius);
        self.set_fill(color);
        self.context.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        self.circle(center, radius);
        self.set_stroke(color, width);
        self.context.stroke();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.context.begin_path();
        self.context.move_to(from.x as f64, from.y as f64);
        self.context.line_to(to.x as f64, to.y as f64);
        self.set_stroke(color, width);
        self.context.set_line_cap("round");
        self.context.stroke();
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.context.begin_path();
        self.context.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.context.line_to(p.x as f64, p.y as f64);
        }
        self.context.close_path();
        self.set_fill(color);
        self.context.fill();
    }

    fn fill_path(&mut self, path: &[PathOp], color: Rgba) {
        self.context.begin_path();
        for op in path {
            match *op {
                PathOp::MoveTo(p) => self.context.move_to(p.x as f64, p.y as f64),
                PathOp::LineTo(p) => self.context.line_to(p.x as f64, p.y as f64),
                PathOp::CubicTo(c1, c2, p) => self.context.bezier_curve_to(
                    c1.x as f64, c1.y as f64,
                    c2.x as f64, c2.y as f64,
                    p.x as f64, p.y as f64,
                ),
                PathOp::Close => self.context.close_path(),
            }
        }
        self.set_fill(color);
        self.context.fill();
    }
}
