//! Particle effects engine for 2-D canvas surfaces.
//!
//! The crate is split into a pure simulation (particles, trails, emission
//! scheduling) and a render projection onto the [`render::Painter`] seam.
//! [`driver::Driver`] ties both together into a per-frame loop that a host
//! (the browser binding, or a test) pumps with frame timestamps.

pub mod color;
pub mod config;
pub mod driver;
pub mod effects;
pub mod emitter;
pub mod error;
pub mod math;
pub mod particle;
pub mod render;
pub mod set;
pub mod trail;

pub use driver::{Driver, Effect, FrameRequest, LoopState};
pub use effects::{Confetti, ParticleBurst, Starfield};
pub use error::{GlintError, Result};
pub use particle::{Particle, ParticleKind, ParticleVariant};
