use crate::color::Rgba;
use crate::error::{GlintError, Result};

/// Per-frame opacity decrements for the monotonically fading variants.
#[derive(Clone, Debug, PartialEq)]
pub struct DecayRates {
    pub star: f32,
    pub heart: f32,
    pub bubble: f32,
    pub firework: f32,
    pub confetti: f32,
}

impl Default for DecayRates {
    fn default() -> Self {
        Self {
            star: 0.02,
            heart: 0.01,
            bubble: 0.005,
            firework: 0.02,
            confetti: 0.008,
        }
    }
}

fn positive_rate(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GlintError::InvalidDecay { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GlintError::InvalidParameter { field, reason: "must be finite and not negative" })
    }
}

impl DecayRates {
    /// Every rate must be positive, otherwise particles of that variant never fade.
    pub fn validate(&self) -> Result<()> {
        positive_rate("decay.star", self.star)?;
        positive_rate("decay.heart", self.heart)?;
        positive_rate("decay.bubble", self.bubble)?;
        positive_rate("decay.firework", self.firework)?;
        positive_rate("decay.confetti", self.confetti)
    }
}

/// Tuning for the multi-variant particle burst.
#[derive(Clone, Debug, PartialEq)]
pub struct BurstConfig {
    /// Max spatial offset (px, each axis) applied to every spawn.
    pub jitter: f32,
    pub decay: DecayRates,
    pub firework_trail: usize,
    /// Sparkle lifespan range in frames.
    pub sparkle_lifespan: (i32, i32),
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            jitter: 25.0,
            decay: DecayRates::default(),
            firework_trail: 10,
            sparkle_lifespan: (40, 80),
        }
    }
}

impl BurstConfig {
    pub fn validate(&self) -> Result<()> {
        non_negative("jitter", self.jitter)?;
        self.decay.validate()?;
        let (lo, hi) = self.sparkle_lifespan;
        if lo <= 0 || hi < lo {
            return Err(GlintError::InvalidParameter {
                field: "sparkle_lifespan",
                reason: "range must be positive and not inverted",
            });
        }
        Ok(())
    }
}

/// Tuning for the confetti burst.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiConfig {
    pub jitter: f32,
    pub gravity: f32,
    pub decay: f32,
    pub palette: Vec<Rgba>,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            jitter: 25.0,
            gravity: 0.12,
            decay: DecayRates::default().confetti,
            palette: vec![
                Rgba::rgb(255, 99, 132),
                Rgba::rgb(54, 162, 235),
                Rgba::rgb(255, 206, 86),
                Rgba::rgb(75, 192, 192),
                Rgba::rgb(153, 102, 255),
                Rgba::rgb(255, 159, 64),
            ],
        }
    }
}

impl ConfettiConfig {
    pub fn validate(&self) -> Result<()> {
        non_negative("jitter", self.jitter)?;
        positive_rate("decay", self.decay)?;
        if !self.gravity.is_finite() {
            return Err(GlintError::InvalidParameter { field: "gravity", reason: "must be finite" });
        }
        Ok(())
    }
}

/// One depth layer of the ambient starfield.
#[derive(Clone, Debug, PartialEq)]
pub struct StarLayer {
    pub count: usize,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Rightward drift in px/frame.
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_alpha: f32,
    pub max_alpha: f32,
}

impl StarLayer {
    fn validate(&self, index: usize) -> Result<()> {
        if !(self.min_radius >= 0.0 && self.max_radius >= self.min_radius) {
            return Err(GlintError::InvalidLayer { index, reason: "radius range is empty or negative" });
        }
        if !(self.min_speed >= 0.0 && self.max_speed >= self.min_speed) {
            return Err(GlintError::InvalidLayer { index, reason: "speed range is empty or negative" });
        }
        if !(0.0..=1.0).contains(&self.min_alpha) || !(self.min_alpha..=1.0).contains(&self.max_alpha) {
            return Err(GlintError::InvalidLayer { index, reason: "alpha range must lie within [0, 1]" });
        }
        Ok(())
    }
}

/// Comet spawning and motion.
#[derive(Clone, Debug, PartialEq)]
pub struct CometConfig {
    pub min_interval_ms: f64,
    pub max_interval_ms: f64,
    pub trail_len: usize,
    /// Distance beyond the surface edge at which a comet is dropped.
    pub margin: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Max age range in frames.
    pub min_age: u32,
    pub max_age: u32,
}

impl Default for CometConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: 4000.0,
            max_interval_ms: 9000.0,
            trail_len: 45,
            margin: 120.0,
            min_speed: 6.0,
            max_speed: 10.0,
            min_age: 90,
            max_age: 160,
        }
    }
}

impl CometConfig {
    fn validate(&self) -> Result<()> {
        let (min, max) = (self.min_interval_ms, self.max_interval_ms);
        if !min.is_finite() || !max.is_finite() || min < 0.0 || max < min {
            return Err(GlintError::InvalidInterval { min, max });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub layers: Vec<StarLayer>,
    pub comet: CometConfig,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            layers: vec![
                // far
                StarLayer {
                    count: 70,
                    min_radius: 0.3,
                    max_radius: 0.9,
                    min_speed: 0.02,
                    max_speed: 0.06,
                    min_alpha: 0.3,
                    max_alpha: 0.6,
                },
                StarLayer {
                    count: 100,
                    min_radius: 0.6,
                    max_radius: 1.3,
                    min_speed: 0.05,
                    max_speed: 0.12,
                    min_alpha: 0.4,
                    max_alpha: 0.8,
                },
                // near
                StarLayer {
                    count: 60,
                    min_radius: 1.0,
                    max_radius: 2.0,
                    min_speed: 0.1,
                    max_speed: 0.25,
                    min_alpha: 0.6,
                    max_alpha: 1.0,
                },
            ],
            comet: CometConfig::default(),
        }
    }
}

impl StarfieldConfig {
    pub fn validate(&self) -> Result<()> {
        for (index, layer) in self.layers.iter().enumerate() {
            layer.validate(index)?;
        }
        self.comet.validate()
    }

    /// Total star population across all layers.
    pub fn star_count(&self) -> usize {
        self.layers.iter().map(|l| l.count).sum()
    }
}
