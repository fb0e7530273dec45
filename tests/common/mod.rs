//! Shared systems and helpers for the integration tests.
#![allow(dead_code)]

use fixedstep::{Float, Ode, Solution};

/// x' = -x, the canonical decay problem with solution x0*exp(-(t - t0)).
pub struct Decay;

impl Ode for Decay {
    fn ode(&self, x: Float, _t: Float) -> Float {
        -x
    }
}

/// x' = c, whose solution is the line x0 + c*(t - t0).
pub struct Constant(pub Float);

impl Ode for Constant {
    fn ode(&self, _x: Float, _t: Float) -> Float {
        self.0
    }
}

/// Largest pointwise deviation of a scalar trajectory from an exact solution.
pub fn max_abs_error(sol: &Solution<Float>, exact: impl Fn(Float) -> Float) -> Float {
    sol.x
        .iter()
        .zip(&sol.t)
        .map(|(&x, &t)| (x - exact(t)).abs())
        .fold(0.0, Float::max)
}
