use crate::render::{Painter, Render};
use crate::set::Instance;
use glam::Vec2;

/// A simulation the [`Driver`] can pump.
///
/// All timestamps are the host's frame clock in milliseconds. Spawns are only
/// released from inside [`Effect::advance`], so nothing mutates the effect
/// outside a frame.
pub trait Effect: Render {
    /// The drawing surface changed size.
    fn resize(&mut self, size: Vec2);
    /// Start emitting from `now_ms`.
    fn activate(&mut self, now_ms: f64);
    /// Release due spawns, then step every live particle once.
    fn advance(&mut self, now_ms: f64);
    /// Cancel all pending spawns and drop live particles. Must be idempotent.
    fn teardown(&mut self);
    /// No live particles and nothing left to emit.
    fn is_settled(&self) -> bool;
    fn live_count(&self) -> usize;
    fn instances(&self, out: &mut Vec<Instance>);
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoopState {
    Inactive,
    Active,
}

/// What the host should do after a frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FrameRequest {
    /// Schedule another frame.
    Continue,
    /// The loop is idle; do not schedule another frame.
    Stop,
}

/// Owns an effect and its active/inactive state, and runs update then render
/// once per frame.
pub struct Driver<E> {
    effect: E,
    state: LoopState,
    size: Vec2,
    frames_rendered: u64,
}

impl<E: Effect> Driver<E> {
    pub fn new(effect: E) -> Self {
        Self {
            effect,
            state: LoopState::Inactive,
            size: Vec2::ZERO,
            frames_rendered: 0,
        }
    }

    /// Inactive -> Active. Calling it while active re-activates the effect
    /// (a new burst starts, live particles keep animating).
    pub fn start(&mut self, now_ms: f64) {
        if self.state == LoopState::Active {
            log::debug!("driver restarted at {now_ms:.1}ms");
        }
        self.effect.activate(now_ms);
        self.state = LoopState::Active;
    }

    /// Run one frame. While inactive this is a no-op: the painter is not
    /// touched, which makes a stale frame callback after teardown harmless.
    pub fn frame(&mut self, now_ms: f64, painter: &mut dyn Painter) -> FrameRequest {
        if self.state == LoopState::Inactive {
            return FrameRequest::Stop;
        }

        self.effect.advance(now_ms);

        painter.clear(self.size);
        self.effect.render(painter);
        self.frames_rendered += 1;

        log::trace!(
            "frame {} at {now_ms:.1}ms: {} live",
            self.frames_rendered,
            self.effect.live_count()
        );

        if self.effect.is_settled() {
            log::debug!("effect settled after {} frames", self.frames_rendered);
            self.state = LoopState::Inactive;
            FrameRequest::Stop
        } else {
            FrameRequest::Continue
        }
    }

    /// Teardown: cancel everything pending and go inactive. Idempotent.
    pub fn stop(&mut self) {
        if self.state == LoopState::Active {
            log::debug!("driver stopped after {} frames", self.frames_rendered);
        }
        self.effect.teardown();
        self.state = LoopState::Inactive;
    }

    /// Forwarded in any state.
    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
        self.effect.resize(size);
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == LoopState::Active
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }
}
