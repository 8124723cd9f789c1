use super::PathOp;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

/// Ten-vertex five-pointed star, first point straight up before `rotation`.
pub fn star_polygon(center: Vec2, outer: f32, inner: f32, rotation: f32) -> [Vec2; 10] {
    std::array::from_fn(|i| {
        let radius = if i % 2 == 0 { outer } else { inner };
        let angle = rotation - FRAC_PI_2 + i as f32 * PI / 5.0;
        center + Vec2::from_angle(angle) * radius
    })
}

/// Rectangle of `width` x `height` centred on `center`, rotated by `rotation`.
pub fn rect_polygon(center: Vec2, width: f32, height: f32, rotation: f32) -> [Vec2; 4] {
    let rot = Vec2::from_angle(rotation);
    let (hw, hh) = (width * 0.5, height * 0.5);
    [
        Vec2::new(-hw, -hh),
        Vec2::new(hw, -hh),
        Vec2::new(hw, hh),
        Vec2::new(-hw, hh),
    ]
    .map(|corner| center + rot.rotate(corner))
}

/// Heart silhouette from four cubic beziers, roughly `size` across.
pub fn heart_path(center: Vec2, size: f32) -> [PathOp; 6] {
    let p = |x: f32, y: f32| center + Vec2::new(x, y) * size;
    [
        PathOp::MoveTo(p(0.0, -0.25)),
        PathOp::CubicTo(p(0.0, -0.55), p(-0.5, -0.55), p(-0.5, -0.2)),
        PathOp::CubicTo(p(-0.5, 0.15), p(0.0, 0.35), p(0.0, 0.6)),
        PathOp::CubicTo(p(0.0, 0.35), p(0.5, 0.15), p(0.5, -0.2)),
        PathOp::CubicTo(p(0.5, -0.55), p(0.0, -0.55), p(0.0, -0.25)),
        PathOp::Close,
    ]
}
