use crate::color::Rgba;
use crate::config::{CometConfig, StarfieldConfig};
use crate::driver::Effect;
use crate::emitter::CometTimer;
use crate::error::Result;
use crate::math::{pick, uniform};
use crate::render::{draw_trail, Painter, Render};
use crate::set::Instance;
use crate::trail::Trail;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{FRAC_PI_4, FRAC_PI_8, TAU};

const STAR_TINTS: [Rgba; 3] = [
    Rgba::rgb(255, 255, 255),
    Rgba::rgb(200, 220, 255),
    Rgba::rgb(255, 240, 220),
];
const COMET_COLOR: Rgba = Rgba::rgb(220, 235, 255);
const COMET_HEAD: f32 = 2.2;

/// Ambient, non-expiring background star.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub radius: f32,
    pub base_alpha: f32,
    pub phase: f32,
    pub twinkle_speed: f32,
    pub color: Rgba,
    /// Rightward drift in px/frame.
    pub speed: f32,
    /// Index into the configured layers.
    pub layer: usize,
}

impl Star {
    fn step(&mut self, width: f32) {
        self.phase += self.twinkle_speed;
        self.position.x += self.speed;
        if self.position.x > width {
            self.position.x = 0.0;
        }
    }

    pub fn alpha(&self) -> f32 {
        self.base_alpha * (0.7 + 0.3 * self.phase.sin())
    }
}

/// The single shooting star a starfield may show at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct Comet {
    pub position: Vec2,
    pub velocity: Vec2,
    pub trail: Trail,
    pub age: u32,
    pub max_age: u32,
}

impl Comet {
    fn launch(size: Vec2, config: &CometConfig, rng: &mut StdRng) -> Self {
        let angle = uniform(rng, FRAC_PI_8, FRAC_PI_4 + FRAC_PI_8);
        let speed = uniform(rng, config.min_speed, config.max_speed);
        let max_age = if config.max_age > config.min_age {
            rng.gen_range(config.min_age..=config.max_age)
        } else {
            config.min_age
        };
        Self {
            position: Vec2::new(uniform(rng, 0.0, size.x * 0.6), uniform(rng, -20.0, size.y * 0.3)),
            velocity: Vec2::from_angle(angle) * speed,
            trail: Trail::new(config.trail_len),
            age: 0,
            max_age,
        }
    }

    /// Returns `false` once the comet has left the surface plus `margin`, or aged out.
    fn step(&mut self, size: Vec2, margin: f32) -> bool {
        self.trail.push(self.position);
        self.position += self.velocity;
        self.age += 1;
        !self.is_expired(size, margin)
    }

    pub fn is_expired(&self, size: Vec2, margin: f32) -> bool {
        let p = self.position;
        let outside = p.x > size.x + margin || p.y > size.y + margin || p.x < -margin || p.y < -margin;
        outside || self.age > self.max_age
    }
}

/// Layered twinkling starfield with an occasional comet. Never settles on its
/// own: it runs until the driver tears it down.
pub struct Starfield {
    config: StarfieldConfig,
    rng: StdRng,
    size: Vec2,
    stars: Vec<Star>,
    comet: Option<Comet>,
    timer: CometTimer,
    comets_launched: u64,
}

impl Starfield {
    pub fn new(config: StarfieldConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Default layers `[70, 100, 60]` and comet timing.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(StarfieldConfig::default(), seed)
    }

    fn build(config: StarfieldConfig, seed: u64) -> Self {
        Self {
            stars: Vec::with_capacity(config.star_count()),
            timer: CometTimer::new(&config.comet),
            config,
            rng: StdRng::seed_from_u64(seed),
            size: Vec2::ZERO,
            comet: None,
            comets_launched: 0,
        }
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn comet(&self) -> Option<&Comet> {
        self.comet.as_ref()
    }

    pub fn timer(&self) -> &CometTimer {
        &self.timer
    }

    pub fn comets_launched(&self) -> u64 {
        self.comets_launched
    }

    /// Put a comet in flight right away, replacing any current one.
    pub fn launch_comet(&mut self) {
        self.comet = Some(Comet::launch(self.size, &self.config.comet, &mut self.rng));
        self.comets_launched += 1;
    }

    /// Discard the whole population and regenerate it for the current size.
    fn populate(&mut self) {
        self.stars.clear();
        let size = self.size;
        for (layer, cfg) in self.config.layers.iter().enumerate() {
            for _ in 0..cfg.count {
                let rng = &mut self.rng;
                self.stars.push(Star {
                    position: Vec2::new(uniform(rng, 0.0, size.x), uniform(rng, 0.0, size.y)),
                    radius: uniform(rng, cfg.min_radius, cfg.max_radius),
                    base_alpha: uniform(rng, cfg.min_alpha, cfg.max_alpha),
                    phase: uniform(rng, 0.0, TAU),
                    twinkle_speed: uniform(rng, 0.01, 0.05),
                    color: pick(rng, &STAR_TINTS, Rgba::WHITE),
                    speed: uniform(rng, cfg.min_speed, cfg.max_speed),
                    layer,
                });
            }
        }
        log::debug!("starfield populated: {} stars at {}x{}", self.stars.len(), size.x, size.y);
    }
}

impl Effect for Starfield {
    fn resize(&mut self, size: Vec2) {
        self.size = size;
        self.populate();
    }

    fn activate(&mut self, now_ms: f64) {
        if self.stars.is_empty() {
            self.populate();
        }
        self.timer.arm(now_ms, &mut self.rng);
    }

    fn advance(&mut self, now_ms: f64) {
        if self.timer.poll(now_ms, &mut self.rng) && self.comet.is_none() {
            self.launch_comet();
        }

        let width = self.size.x;
        for star in &mut self.stars {
            star.step(width);
        }

        let (size, margin) = (self.size, self.config.comet.margin);
        let expired = match self.comet.as_mut() {
            Some(comet) => !comet.step(size, margin),
            None => false,
        };
        if expired {
            self.comet = None;
        }
    }

    fn teardown(&mut self) {
        self.timer.cancel();
        self.comet = None;
    }

    fn is_settled(&self) -> bool {
        false
    }

    fn live_count(&self) -> usize {
        self.stars.len() + usize::from(self.comet.is_some())
    }

    fn instances(&self, out: &mut Vec<Instance>) {
        out.extend(self.stars.iter().map(|s| Instance {
            position: s.position,
            size: s.radius,
            opacity: s.alpha(),
        }));
        if let Some(comet) = &self.comet {
            out.push(Instance {
                position: comet.position,
                size: COMET_HEAD,
                opacity: 1.0,
            });
        }
    }
}

impl Render for Starfield {
    fn render(&self, painter: &mut dyn Painter) {
        for star in &self.stars {
            painter.fill_circle(star.position, star.radius, star.color.fade(star.alpha()));
        }

        if let Some(comet) = &self.comet {
            draw_trail(painter, &comet.trail, COMET_HEAD, COMET_COLOR.with_alpha(0.8));
            painter.set_glow(COMET_HEAD * 6.0, COMET_COLOR);
            painter.fill_circle(comet.position, COMET_HEAD, Rgba::WHITE);
            painter.clear_glow();
        }
    }
}
