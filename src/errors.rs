//! Shared error types used across submodules.

use thiserror::Error;

use crate::units::Unit;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum PhasorPlotError {
    /// Raised when a phasor, its origin, and the reference scale do not share
    /// the same physical dimension.
    #[error("incompatible units: expected {expected}, found {found}")]
    IncompatibleUnits {
        /// Unit demanded by the quantity being normalized against.
        expected: Unit,
        /// Unit actually supplied.
        found: Unit,
    },
    /// Wraps failures reported by the rendering backend.
    #[error("render error: {0}")]
    Render(String),
}
