use crate::config::BurstConfig;
use crate::driver::Effect;
use crate::emitter::{BurstSchedule, BurstSpec};
use crate::error::Result;
use crate::math::jitter;
use crate::particle::{Particle, ParticleVariant};
use crate::render::{Painter, Render};
use crate::set::{Instance, ParticleSet};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Time-spread burst of a single particle variant that drains naturally once
/// every particle has faded.
pub struct ParticleBurst {
    config: BurstConfig,
    rng: StdRng,
    particles: ParticleSet,
    burst: Option<(ParticleVariant, BurstSpec)>,
    schedule: Option<BurstSchedule>,
}

impl ParticleBurst {
    pub fn new(config: BurstConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::build(BurstConfig::default(), seed)
    }

    fn build(config: BurstConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            particles: ParticleSet::new(),
            burst: None,
            schedule: None,
        }
    }

    /// Set what the next activation emits.
    pub fn set_burst(&mut self, variant: ParticleVariant, spec: BurstSpec) {
        self.burst = Some((variant, spec));
    }

    pub fn burst(&self) -> Option<(ParticleVariant, BurstSpec)> {
        self.burst
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn schedule(&self) -> Option<&BurstSchedule> {
        self.schedule.as_ref()
    }

    pub fn config(&self) -> &BurstConfig {
        &self.config
    }
}

impl Effect for ParticleBurst {
    fn resize(&mut self, _size: Vec2) {
        // In-flight particles keep their coordinates.
    }

    fn activate(&mut self, now_ms: f64) {
        let Some((variant, spec)) = self.burst else {
            log::warn!("particle burst activated without a burst configured");
            return;
        };
        if let Some(previous) = self.schedule.as_mut() {
            previous.cancel();
        }
        log::debug!(
            "{variant} burst: {} particles over {}ms from ({}, {})",
            spec.count,
            spec.duration_ms,
            spec.origin.x,
            spec.origin.y
        );
        self.particles.reserve(spec.count as usize);
        self.schedule = Some(BurstSchedule::new(&spec, now_ms));
    }

    fn advance(&mut self, now_ms: f64) {
        if let (Some((variant, spec)), Some(schedule)) = (self.burst, self.schedule.as_mut()) {
            for _ in schedule.release(now_ms) {
                let at = jitter(&mut self.rng, spec.origin, self.config.jitter);
                let particle = Particle::spawn(variant, at, &self.config, &mut self.rng);
                self.particles.push(particle);
            }
        }
        self.particles.step();
    }

    fn teardown(&mut self) {
        if let Some(schedule) = self.schedule.as_mut() {
            schedule.cancel();
        }
        self.particles.clear();
    }

    fn is_settled(&self) -> bool {
        self.particles.is_empty() && self.schedule.as_ref().map_or(true, |s| s.pending() == 0)
    }

    fn live_count(&self) -> usize {
        self.particles.len()
    }

    fn instances(&self, out: &mut Vec<Instance>) {
        self.particles.instances(out);
    }
}

impl Render for ParticleBurst {
    fn render(&self, painter: &mut dyn Painter) {
        self.particles.render(painter);
    }
}
