use crate::color::Rgba;
use crate::config::{BurstConfig, ConfettiConfig};
use crate::error::GlintError;
use crate::math::{pick, radial, uniform};
use crate::trail::Trail;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;

const HEART_SWAY: f32 = 0.5;
const HEART_PHASE_STEP: f32 = 0.1;
const BUBBLE_WOBBLE: f32 = 0.3;
const BUBBLE_PHASE_STEP: f32 = 0.05;
const BUBBLE_GROWTH: f32 = 0.02;
const FIREWORK_DAMPING: f32 = 0.98;
const CONFETTI_DRAG: f32 = 0.99;

/// Host-facing particle type selector for a burst.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ParticleVariant {
    Star,
    Sparkle,
    Heart,
    Bubble,
    Firework,
}

impl ParticleVariant {
    pub const ALL: [ParticleVariant; 5] = [
        ParticleVariant::Star,
        ParticleVariant::Sparkle,
        ParticleVariant::Heart,
        ParticleVariant::Bubble,
        ParticleVariant::Firework,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParticleVariant::Star => "star",
            ParticleVariant::Sparkle => "sparkle",
            ParticleVariant::Heart => "heart",
            ParticleVariant::Bubble => "bubble",
            ParticleVariant::Firework => "firework",
        }
    }
}

impl FromStr for ParticleVariant {
    type Err = GlintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParticleVariant::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GlintError::UnknownVariant(s.to_owned()))
    }
}

impl fmt::Display for ParticleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific state. Fixed for the particle's whole life.
#[derive(Clone, Debug, PartialEq)]
pub enum ParticleKind {
    Star { rotation: f32, spin: f32 },
    /// Opacity oscillates with `phase`; `lifespan` (frames) gates liveness.
    Sparkle { phase: f32, phase_speed: f32, lifespan: i32 },
    Heart { phase: f32 },
    Bubble { phase: f32 },
    Firework { trail: Trail },
    Confetti { rotation: f32, spin: f32, aspect: f32 },
}

/// One animated glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Added to `velocity.y` every frame; negative values float upward.
    pub gravity: f32,
    pub size: f32,
    pub color: Rgba,
    pub opacity: f32,
    /// Opacity lost per frame. Unused by sparkles.
    pub decay: f32,
    pub kind: ParticleKind,
}

impl Particle {
    /// Bare particle at rest; mostly useful for tests and custom emitters.
    pub fn new(position: Vec2, velocity: Vec2, kind: ParticleKind) -> Self {
        Self {
            position,
            velocity,
            gravity: 0.0,
            size: 4.0,
            color: Rgba::WHITE,
            opacity: 1.0,
            decay: 0.0,
            kind,
        }
    }

    /// Build a burst particle of `variant` at `position` with randomized motion.
    pub fn spawn<R: Rng + ?Sized>(
        variant: ParticleVariant,
        position: Vec2,
        config: &BurstConfig,
        rng: &mut R,
    ) -> Self {
        let decay = &config.decay;
        match variant {
            ParticleVariant::Star => Self {
                position,
                velocity: radial(rng, 2.0, 6.0),
                gravity: 0.1,
                size: uniform(rng, 6.0, 12.0),
                color: Rgba::from_hsl(uniform(rng, 40.0, 60.0), 1.0, 0.6),
                opacity: 1.0,
                decay: decay.star,
                kind: ParticleKind::Star {
                    rotation: uniform(rng, 0.0, TAU),
                    spin: uniform(rng, -0.1, 0.1),
                },
            },
            ParticleVariant::Sparkle => {
                let phase = uniform(rng, 0.0, TAU);
                let (lo, hi) = config.sparkle_lifespan;
                let lifespan = if hi > lo { rng.gen_range(lo..hi) } else { lo };
                Self {
                    position,
                    velocity: radial(rng, 0.5, 2.0),
                    gravity: 0.0,
                    size: uniform(rng, 3.0, 6.0),
                    color: Rgba::from_hsl(uniform(rng, 180.0, 300.0), 1.0, 0.8),
                    opacity: phase.sin() * 0.5 + 0.5,
                    decay: 0.0,
                    kind: ParticleKind::Sparkle {
                        phase,
                        phase_speed: uniform(rng, 0.15, 0.3),
                        lifespan,
                    },
                }
            }
            ParticleVariant::Heart => Self {
                position,
                velocity: Vec2::new(uniform(rng, -1.0, 1.0), uniform(rng, -3.0, -1.0)),
                gravity: -0.02,
                size: uniform(rng, 10.0, 18.0),
                color: Rgba::from_hsl(uniform(rng, 340.0, 360.0), 0.9, 0.6),
                opacity: 1.0,
                decay: decay.heart,
                kind: ParticleKind::Heart {
                    phase: uniform(rng, 0.0, TAU),
                },
            },
            ParticleVariant::Bubble => Self {
                position,
                velocity: Vec2::new(uniform(rng, -0.5, 0.5), uniform(rng, -1.5, -0.5)),
                gravity: -0.01,
                size: uniform(rng, 6.0, 14.0),
                color: Rgba::from_hsl(uniform(rng, 190.0, 210.0), 0.8, 0.7),
                opacity: 1.0,
                decay: decay.bubble,
                kind: ParticleKind::Bubble {
                    phase: uniform(rng, 0.0, TAU),
                },
            },
            ParticleVariant::Firework => Self {
                position,
                velocity: radial(rng, 2.0, 7.0),
                gravity: 0.05,
                size: uniform(rng, 2.0, 3.5),
                color: Rgba::from_hsl(uniform(rng, 0.0, 360.0), 1.0, 0.6),
                opacity: 1.0,
                decay: decay.firework,
                kind: ParticleKind::Firework {
                    trail: Trail::new(config.firework_trail),
                },
            },
        }
    }

    /// Build one confetti piece at `position`.
    pub fn confetti<R: Rng + ?Sized>(position: Vec2, config: &ConfettiConfig, rng: &mut R) -> Self {
        Self {
            position,
            velocity: Vec2::new(uniform(rng, -6.0, 6.0), uniform(rng, -10.0, -4.0)),
            gravity: config.gravity,
            size: uniform(rng, 6.0, 10.0),
            color: pick(rng, &config.palette, Rgba::WHITE),
            opacity: 1.0,
            decay: config.decay,
            kind: ParticleKind::Confetti {
                rotation: uniform(rng, 0.0, TAU),
                spin: uniform(rng, -0.2, 0.2),
                aspect: uniform(rng, 0.4, 0.7),
            },
        }
    }

    pub fn variant(&self) -> Option<ParticleVariant> {
        match self.kind {
            ParticleKind::Star { .. } => Some(ParticleVariant::Star),
            ParticleKind::Sparkle { .. } => Some(ParticleVariant::Sparkle),
            ParticleKind::Heart { .. } => Some(ParticleVariant::Heart),
            ParticleKind::Bubble { .. } => Some(ParticleVariant::Bubble),
            ParticleKind::Firework { .. } => Some(ParticleVariant::Firework),
            ParticleKind::Confetti { .. } => None,
        }
    }

    pub fn trail(&self) -> Option<&Trail> {
        match &self.kind {
            ParticleKind::Firework { trail } => Some(trail),
            _ => None,
        }
    }

    /// Advance one frame and report whether the particle survives it.
    ///
    /// The trail records the pre-step position, so it must be captured before
    /// integration; otherwise the newest trail point duplicates the head.
    pub fn update(&mut self) -> bool {
        if let ParticleKind::Firework { trail } = &mut self.kind {
            trail.push(self.position);
        }

        self.position += self.velocity;
        self.velocity.y += self.gravity;

        match &mut self.kind {
            ParticleKind::Star { rotation, spin } => {
                *rotation += *spin;
                self.opacity -= self.decay;
            }
            ParticleKind::Sparkle { phase, phase_speed, lifespan } => {
                *phase += *phase_speed;
                *lifespan -= 1;
                self.opacity = if *lifespan > 0 { phase.sin() * 0.5 + 0.5 } else { 0.0 };
            }
            ParticleKind::Heart { phase } => {
                *phase += HEART_PHASE_STEP;
                self.position.x += phase.sin() * HEART_SWAY;
                self.opacity -= self.decay;
            }
            ParticleKind::Bubble { phase } => {
                *phase += BUBBLE_PHASE_STEP;
                self.position.x += phase.sin() * BUBBLE_WOBBLE;
                self.size += BUBBLE_GROWTH;
                self.opacity -= self.decay;
            }
            ParticleKind::Firework { .. } => {
                self.velocity *= FIREWORK_DAMPING;
                self.opacity -= self.decay;
            }
            ParticleKind::Confetti { rotation, spin, .. } => {
                *rotation += *spin;
                self.velocity.x *= CONFETTI_DRAG;
                self.opacity -= self.decay;
            }
        }

        self.opacity = self.opacity.max(0.0);
        self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        match self.kind {
            ParticleKind::Sparkle { lifespan, .. } => lifespan > 0 && self.opacity > 0.0,
            _ => self.opacity > 0.0,
        }
    }
}
