//! Browser binding: canvas-backed `Starfield`, `Confetti` and `ParticleBurst`.
//!
//! None of these classes throw for environment problems. A missing canvas or
//! 2-D context is logged and the instance draws nothing.

mod canvas;
mod frame;
mod host;
mod logger;

use glam::Vec2;
use glint_core::effects;
use glint_core::emitter::BurstSpec;
use glint_core::particle::ParticleVariant;
use host::Host;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    logger::init();
}

/// `"error" | "warn" | "info" | "debug" | "trace" | "off"`.
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    logger::set_level(level);
}

fn entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(err) => {
            log::debug!("getrandom failed ({err}), seeding from clock");
            js_sys::Date::now().to_bits()
        }
    }
}

fn burst_spec(x: f32, y: f32, count: u32, duration: f64) -> Option<BurstSpec> {
    match BurstSpec::new(Vec2::new(x, y), count, duration) {
        Ok(spec) => Some(spec),
        Err(err) => {
            log::warn!("burst ignored: {err}");
            None
        }
    }
}

/// Twinkling layered starfield with occasional comets.
#[wasm_bindgen]
pub struct Starfield {
    host: Host<effects::Starfield>,
}

#[wasm_bindgen]
impl Starfield {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Starfield {
        let host = Host::new(canvas_id, effects::Starfield::with_seed(entropy_seed()));
        log::info!("starfield created on #{canvas_id}");
        Starfield { host }
    }

    pub fn set_active(&mut self, active: bool) {
        if active {
            self.host.activate(|_| {});
        } else {
            self.host.deactivate();
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.host.resize(width, height);
    }

    pub fn is_supported(&self) -> bool {
        self.host.is_supported()
    }

    pub fn is_running(&self) -> bool {
        self.host.is_running()
    }

    pub fn live_count(&self) -> usize {
        self.host.live_count()
    }

    /// Re-pack `{x, y, size, opacity}` per live star/comet; returns the count.
    pub fn refresh_snapshot(&mut self) -> usize {
        self.host.refresh_snapshot()
    }

    pub fn snapshot_ptr(&self) -> *const f32 {
        self.host.snapshot_ptr()
    }

    pub fn snapshot_byte_length(&self) -> usize {
        self.host.snapshot_byte_length()
    }
}

/// Confetti burst bounded by its duration.
#[wasm_bindgen]
pub struct Confetti {
    host: Host<effects::Confetti>,
}

#[wasm_bindgen]
impl Confetti {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Confetti {
        let host = Host::new(canvas_id, effects::Confetti::with_seed(entropy_seed()));
        Confetti { host }
    }

    /// `duration` in milliseconds; `count` pieces are spread evenly across it.
    pub fn set_active(&mut self, active: bool, x: f32, y: f32, count: u32, duration: f64) {
        if !active {
            self.host.deactivate();
            return;
        }
        if let Some(spec) = burst_spec(x, y, count, duration) {
            self.host.activate(|confetti| confetti.set_burst(spec));
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.host.resize(width, height);
    }

    pub fn is_supported(&self) -> bool {
        self.host.is_supported()
    }

    pub fn is_running(&self) -> bool {
        self.host.is_running()
    }

    pub fn live_count(&self) -> usize {
        self.host.live_count()
    }

    pub fn refresh_snapshot(&mut self) -> usize {
        self.host.refresh_snapshot()
    }

    pub fn snapshot_ptr(&self) -> *const f32 {
        self.host.snapshot_ptr()
    }

    pub fn snapshot_byte_length(&self) -> usize {
        self.host.snapshot_byte_length()
    }
}

/// Burst of stars, sparkles, hearts, bubbles or fireworks.
#[wasm_bindgen]
pub struct ParticleBurst {
    host: Host<effects::ParticleBurst>,
}

#[wasm_bindgen]
impl ParticleBurst {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> ParticleBurst {
        let host = Host::new(canvas_id, effects::ParticleBurst::with_seed(entropy_seed()));
        ParticleBurst { host }
    }

    /// `kind` is one of `"star" | "sparkle" | "heart" | "bubble" | "firework"`.
    pub fn set_active(&mut self, active: bool, kind: &str, x: f32, y: f32, count: u32, duration: f64) {
        if !active {
            self.host.deactivate();
            return;
        }
        let variant = match kind.parse::<ParticleVariant>() {
            Ok(variant) => variant,
            Err(err) => {
                log::warn!("burst ignored: {err}");
                return;
            }
        };
        if let Some(spec) = burst_spec(x, y, count, duration) {
            self.host.activate(|burst| burst.set_burst(variant, spec));
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.host.resize(width, height);
    }

    pub fn is_supported(&self) -> bool {
        self.host.is_supported()
    }

    pub fn is_running(&self) -> bool {
        self.host.is_running()
    }

    pub fn live_count(&self) -> usize {
        self.host.live_count()
    }

    pub fn refresh_snapshot(&mut self) -> usize {
        self.host.refresh_snapshot()
    }

    pub fn snapshot_ptr(&self) -> *const f32 {
        self.host.snapshot_ptr()
    }

    pub fn snapshot_byte_length(&self) -> usize {
        self.host.snapshot_byte_length()
    }
}
