//! Errors for integration methods

use thiserror::Error;

/// Validation errors returned by the integrator entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Fewer than two grid points leave the step size undefined.
    #[error("grid must have at least two points (got {0})")]
    GridTooSmall(usize),
}
