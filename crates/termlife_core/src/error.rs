//! Error types for termlife_core.

use thiserror::Error;

/// Main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Raw cell lookup outside the grid
    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u16,
        height: u16,
    },

    /// Variant name not in the supported set
    #[error("Unknown variant `{0}` (expected one of: life, daynight, highlife, seed)")]
    UnknownVariant(String),

    /// Pattern table that cannot be turned into a cell matrix
    #[error("Invalid pattern `{name}`: {reason}")]
    InvalidPattern { name: String, reason: String },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Creates a new invalid pattern error.
    #[must_use]
    pub fn invalid_pattern<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        Self::InvalidPattern {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
