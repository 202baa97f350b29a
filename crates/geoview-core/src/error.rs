//! Error types for the map-state core.
//!
//! - [`ColorParseError`] - Invalid color picker input
//! - [`LoadError`] - A vector layer's data could not be loaded

use thiserror::Error;

/// A color string that is not `#rgb` or `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color must start with '#': {0}")]
    MissingHash(String),
    #[error("color must have 3 or 6 hex digits: {0}")]
    InvalidLength(String),
    #[error("invalid hex digit in color: {0}")]
    InvalidDigit(String),
}

/// Failure reported by the engine when a layer's source did not load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The data request failed (network error, non-2xx response).
    #[error("failed to fetch layer data: {0}")]
    Fetch(String),
    /// The body arrived but the map library could not read features from it.
    #[error("failed to parse layer data: {0}")]
    Parse(String),
}
