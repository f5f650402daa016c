//! Error types for noise generation.

use thiserror::Error;

/// Errors raised while validating inputs to seed generation or synthesis.
///
/// Every check happens before any computation starts, so an error never
/// leaves a partially written field behind.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NoiseError {
    #[error("invalid size: {width}x{height}")]
    InvalidSize { width: usize, height: usize },

    #[error("invalid octave count {octaves}: must be between 1 and {max}")]
    InvalidOctaveCount { octaves: u32, max: u32 },

    #[error("invalid bias {0}: must be finite and greater than zero")]
    InvalidBias(f64),

    #[error("shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("seed value {value} at index {index} is outside [0, 1)")]
    SeedOutOfRange { index: usize, value: f64 },
}

pub type Result<T> = std::result::Result<T, NoiseError>;
