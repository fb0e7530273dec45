//! Explicit (forward) Euler fixed-step integrator.

use crate::{grid, Error, Float, Ode, Solution, State};

/// First-order explicit Euler integrator on a fixed grid.
///
/// Advances
///
/// ```text
/// x[i+1] = x[i] + h*f(x[i], t[i])
/// ```
///
/// over `n - 1` steps from `t0` to `tf`, with one derivative evaluation per
/// step. Global error is O(h).
pub fn euler<Y, F>(f: &F, x0: Y, t0: Float, tf: Float, n: usize) -> Result<Solution<Y>, Error>
where
    Y: State,
    F: Ode<Y>,
{
    let t = grid::linspace(t0, tf, n)?;
    let h = t[1] - t[0];

    let mut x = vec![x0; n];
    let mut nfev = 0;

    for i in 0..n - 1 {
        x[i + 1] = x[i] + f.ode(x[i], t[i]) * h;
        nfev += 1;
    }

    Ok(Solution { x, t, h, nfev, nstep: n - 1 })
}
