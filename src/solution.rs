//! A struct representing the outputted result of a numerical integrator.

use crate::Float;

/// The full trajectory produced by a fixed-step integrator.
///
/// The sequences `x` and `t` have the same length and line up index by index:
/// `x[i]` is the state at time `t[i]`, with `x[0]` the initial condition.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<Y> {
    /// State at each grid point, starting with the initial condition.
    pub x: Vec<Y>,
    /// The time grid, evenly spaced from `t0` to `tf` inclusive.
    pub t: Vec<Float>,
    /// Step size used, `t[1] - t[0]`.
    pub h: Float,
    /// Number of derivative evaluations.
    pub nfev: usize,
    /// Number of steps taken, one less than the number of grid points.
    pub nstep: usize,
}

impl<Y> Solution<Y> {
    /// Split into the `(x, t)` sequence pair.
    pub fn into_parts(self) -> (Vec<Y>, Vec<Float>) {
        (self.x, self.t)
    }
}
