//! The three concrete particle loops: ambient starfield with comets, a
//! multi-variant particle burst, and a confetti burst.

pub mod burst;
pub mod confetti;
pub mod starfield;

pub use burst::ParticleBurst;
pub use confetti::Confetti;
pub use starfield::{Comet, Star, Starfield};
