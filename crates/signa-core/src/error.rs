//! Error types for SIGNA

use thiserror::Error;

/// Core SIGNA errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignaError {
    // Validation errors
    #[error("Invalid duration: {0}s (must be finite and greater than zero)")]
    InvalidDuration(f64),

    #[error("Invalid frame rate: {0} (must be at least 1 fps)")]
    InvalidFrameRate(u32),

    #[error("Duration too long: requested {requested}s, limit is {max}s")]
    DurationTooLong { requested: f64, max: f64 },

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Boundary errors
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl SignaError {
    /// Validation errors are caused by the request, not the environment
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SignaError::InvalidDuration(_)
                | SignaError::InvalidFrameRate(_)
                | SignaError::DurationTooLong { .. }
        )
    }
}

impl From<std::io::Error> for SignaError {
    fn from(err: std::io::Error) -> Self {
        SignaError::Io(err.to_string())
    }
}

/// Result type for SIGNA operations
pub type SignaResult<T> = Result<T, SignaError>;
