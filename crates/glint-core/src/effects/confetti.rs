use crate::config::ConfettiConfig;
use crate::driver::Effect;
use crate::emitter::{BurstSchedule, BurstSpec};
use crate::error::Result;
use crate::math::jitter;
use crate::particle::Particle;
use crate::render::{Painter, Render};
use crate::set::{Instance, ParticleSet};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Confetti burst. Unlike [`super::ParticleBurst`] the whole effect is bounded
/// by the burst duration: once the clock passes the end of the burst every
/// remaining piece is cleared.
pub struct Confetti {
    config: ConfettiConfig,
    rng: StdRng,
    pieces: ParticleSet,
    spec: Option<BurstSpec>,
    schedule: Option<BurstSchedule>,
}

impl Confetti {
    pub fn new(config: ConfettiConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::build(ConfettiConfig::default(), seed)
    }

    fn build(config: ConfettiConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            pieces: ParticleSet::new(),
            spec: None,
            schedule: None,
        }
    }

    pub fn set_burst(&mut self, spec: BurstSpec) {
        self.spec = Some(spec);
    }

    pub fn pieces(&self) -> &ParticleSet {
        &self.pieces
    }

    pub fn schedule(&self) -> Option<&BurstSchedule> {
        self.schedule.as_ref()
    }
}

impl Effect for Confetti {
    fn resize(&mut self, _size: Vec2) {}

    fn activate(&mut self, now_ms: f64) {
        let Some(spec) = self.spec else {
            log::warn!("confetti activated without a burst configured");
            return;
        };
        if let Some(previous) = self.schedule.as_mut() {
            previous.cancel();
        }
        log::debug!("confetti: {} pieces over {}ms", spec.count, spec.duration_ms);
        self.schedule = Some(BurstSchedule::new(&spec, now_ms));
    }

    fn advance(&mut self, now_ms: f64) {
        let (Some(spec), Some(schedule)) = (self.spec, self.schedule.as_mut()) else {
            self.pieces.step();
            return;
        };

        for _ in schedule.release(now_ms) {
            let at = jitter(&mut self.rng, spec.origin, self.config.jitter);
            let piece = Particle::confetti(at, &self.config, &mut self.rng);
            self.pieces.push(piece);
        }
        self.pieces.step();

        if now_ms >= schedule.end_ms() {
            schedule.cancel();
            self.pieces.clear();
        }
    }

    fn teardown(&mut self) {
        if let Some(schedule) = self.schedule.as_mut() {
            schedule.cancel();
        }
        self.pieces.clear();
    }

    fn is_settled(&self) -> bool {
        self.pieces.is_empty() && self.schedule.as_ref().map_or(true, |s| s.pending() == 0)
    }

    fn live_count(&self) -> usize {
        self.pieces.len()
    }

    fn instances(&self, out: &mut Vec<Instance>) {
        self.pieces.instances(out);
    }
}

impl Render for Confetti {
    fn render(&self, painter: &mut dyn Painter) {
        self.pieces.render(painter);
    }
}
