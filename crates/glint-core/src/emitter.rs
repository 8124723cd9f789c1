use crate::config::CometConfig;
use crate::error::{GlintError, Result};
use crate::math::uniform_f64;
use glam::Vec2;
use rand::Rng;
use std::ops::Range;

/// Parameters of one finite, time-spread emission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstSpec {
    pub origin: Vec2,
    pub count: u32,
    pub duration_ms: f64,
}

impl BurstSpec {
    pub fn new(origin: Vec2, count: u32, duration_ms: f64) -> Result<Self> {
        let spec = Self {
            origin,
            count,
            duration_ms,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(GlintError::ZeroCount);
        }
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(GlintError::InvalidDuration(self.duration_ms));
        }
        Ok(())
    }

    /// Spacing between consecutive spawns.
    pub fn interval_ms(&self) -> f64 {
        self.duration_ms / self.count as f64
    }
}

/// Release schedule for a burst started at `start_ms`.
///
/// Spawn `i` falls due at `start_ms + i * interval`. Nothing is emitted on its
/// own: the owner calls [`BurstSchedule::release`] from inside a frame and
/// creates one particle per returned index.
#[derive(Clone, Debug, PartialEq)]
pub struct BurstSchedule {
    start_ms: f64,
    interval_ms: f64,
    duration_ms: f64,
    count: u32,
    emitted: u32,
    cancelled: bool,
}

impl BurstSchedule {
    pub fn new(spec: &BurstSpec, start_ms: f64) -> Self {
        Self {
            start_ms,
            interval_ms: spec.interval_ms(),
            duration_ms: spec.duration_ms,
            count: spec.count,
            emitted: 0,
            cancelled: false,
        }
    }

    /// Due time of spawn `index`.
    pub fn due_at(&self, index: u32) -> f64 {
        self.start_ms + index as f64 * self.interval_ms
    }

    /// Indices of the spawns that became due at or before `now_ms` and have
    /// not been released yet.
    pub fn release(&mut self, now_ms: f64) -> Range<u32> {
        let first = self.emitted;
        if self.cancelled {
            return first..first;
        }
        while self.emitted < self.count && self.due_at(self.emitted) <= now_ms {
            self.emitted += 1;
        }
        first..self.emitted
    }

    /// Drop every spawn that has not been released. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn emitted(&self) -> u32 {
        self.emitted
    }

    pub fn pending(&self) -> u32 {
        if self.cancelled {
            0
        } else {
            self.count - self.emitted
        }
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }
}

/// Self-rearming timer for the comet chain.
///
/// Each firing immediately re-arms with a fresh uniform delay, so the chain
/// runs until [`CometTimer::cancel`] is called.
#[derive(Clone, Debug, PartialEq)]
pub struct CometTimer {
    min_interval_ms: f64,
    max_interval_ms: f64,
    next_due: Option<f64>,
}

impl CometTimer {
    pub fn new(config: &CometConfig) -> Self {
        Self {
            min_interval_ms: config.min_interval_ms,
            max_interval_ms: config.max_interval_ms,
            next_due: None,
        }
    }

    pub fn arm<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) {
        self.next_due = Some(now_ms + uniform_f64(rng, self.min_interval_ms, self.max_interval_ms));
    }

    /// Returns `true` when the timer fired at `now_ms` (and re-armed).
    pub fn poll<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> bool {
        match self.next_due {
            Some(due) if due <= now_ms => {
                self.arm(now_ms, rng);
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<f64> {
        self.next_due
    }
}
