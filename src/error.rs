//! Error handling for the vec4i library
//!
//! Lane arithmetic never fails; these errors cover the fallible edges of the
//! crate: slice construction, batch kernels and configuration.

use thiserror::Error;

/// Main error type for the vec4i library
#[derive(Error, Debug)]
pub enum Vec4iError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Index out of bounds access
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Slices handed to a batch kernel disagree in length
    #[error("Length mismatch: expected {expected} vectors, got {actual}")]
    LengthMismatch {
        /// Length of the first operand
        expected: usize,
        /// Length of the offending operand
        actual: usize,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl Vec4iError {
    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create a length mismatch error
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::OutOfBounds { .. } => false,
            Self::LengthMismatch { .. } => false,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::OutOfBounds { .. } => "bounds",
            Self::LengthMismatch { .. } => "length",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Vec4iError>;

/// Check that two operand lengths agree
#[inline]
pub fn check_same_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        Err(Vec4iError::length_mismatch(expected, actual))
    } else {
        Ok(())
    }
}
