//! Method selection and a single dispatching entry point.

use crate::{euler, rk2, rk4, Error, Float, Ode, Solution, State};

/// Integrator selection for [`solve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// First-order explicit Euler.
    Euler,
    /// Midpoint-style second-order Runge-Kutta.
    RK2,
    /// Classical fourth-order Runge-Kutta.
    RK4,
}

/// Solve an initial value problem on a fixed grid with the chosen method.
///
/// Equivalent to calling [`euler`], [`rk2`], or [`rk4`] directly; useful when
/// the method is a runtime choice.
pub fn solve<Y, F>(
    f: &F,
    x0: Y,
    t0: Float,
    tf: Float,
    n: usize,
    method: Method,
) -> Result<Solution<Y>, Error>
where
    Y: State,
    F: Ode<Y>,
{
    match method {
        Method::Euler => euler(f, x0, t0, tf, n),
        Method::RK2 => rk2(f, x0, t0, tf, n),
        Method::RK4 => rk4(f, x0, t0, tf, n),
    }
}
