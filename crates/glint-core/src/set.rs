use crate::particle::Particle;
use glam::Vec2;

/// Minimal per-particle state exported to hosts that want raw positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instance {
    pub position: Vec2,
    pub size: f32,
    pub opacity: f32,
}

/// The live particle collection of one effect.
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    particles: Vec<Particle>,
}

impl ParticleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.particles.reserve(additional);
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Advance every particle one frame and drop the ones that died.
    /// Returns how many were removed.
    pub fn step(&mut self) -> usize {
        let before = self.particles.len();
        self.particles.retain_mut(Particle::update);
        before - self.particles.len()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn instances(&self, out: &mut Vec<Instance>) {
        out.extend(self.particles.iter().map(|p| Instance {
            position: p.position,
            size: p.size,
            opacity: p.opacity,
        }));
    }
}

impl<'a> IntoIterator for &'a ParticleSet {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
