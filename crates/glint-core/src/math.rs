use glam::Vec2;
use rand::Rng;

/// Uniform sample in `[lo, hi)`. Collapses to `lo` for empty or inverted ranges
/// instead of panicking like `gen_range` would.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi <= lo {
        return lo;
    }
    lo + (hi - lo) * rng.gen::<f32>()
}

/// f64 flavour of [`uniform`], used for millisecond delays.
pub fn uniform_f64<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return lo;
    }
    lo + (hi - lo) * rng.gen::<f64>()
}

/// Offset `origin` by up to `amount` on each axis.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, origin: Vec2, amount: f32) -> Vec2 {
    origin + Vec2::new(uniform(rng, -amount, amount), uniform(rng, -amount, amount))
}

/// Unit vector at a random angle scaled by a random speed in `[min_speed, max_speed)`.
pub fn radial<R: Rng + ?Sized>(rng: &mut R, min_speed: f32, max_speed: f32) -> Vec2 {
    let angle = uniform(rng, 0.0, std::f32::consts::TAU);
    Vec2::from_angle(angle) * uniform(rng, min_speed, max_speed)
}

/// Pick one element of a non-empty slice.
pub fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, items: &[T], fallback: T) -> T {
    if items.is_empty() {
        return fallback;
    }
    items[rng.gen_range(0..items.len())]
}
