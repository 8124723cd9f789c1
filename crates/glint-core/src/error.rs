use thiserror::Error;

/// Errors raised while configuring or activating an effect.
///
/// None of these are fatal to a host page: the browser binding logs them and
/// degrades to drawing nothing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GlintError {
    #[error("burst count must be at least 1")]
    ZeroCount,

    #[error("burst duration must be a positive number of milliseconds, got {0}")]
    InvalidDuration(f64),

    #[error("unknown particle variant: {0:?}")]
    UnknownVariant(String),

    #[error("star layer {index} is invalid: {reason}")]
    InvalidLayer { index: usize, reason: &'static str },

    #[error("{field} must be a positive finite rate, got {value}")]
    InvalidDecay { field: &'static str, value: f32 },

    #[error("{field} is invalid: {reason}")]
    InvalidParameter { field: &'static str, reason: &'static str },

    #[error("comet interval [{min}, {max}] ms is invalid")]
    InvalidInterval { min: f64, max: f64 },

    /// The host is missing something the renderer needs (window, canvas, 2-D context).
    #[error("unsupported environment: {0}")]
    Unsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, GlintError>;
