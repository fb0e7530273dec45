//! Midpoint-style second-order Runge-Kutta fixed-step integrator.

use crate::{grid, Error, Float, Ode, Solution, State};

/// Second-order Runge-Kutta (midpoint) integrator on a fixed grid.
///
/// Each step samples the derivative once more at the interval midpoint:
///
/// ```text
/// k1     = h*f(x[i], t[i])
/// xm     = x[i] + k1/2
/// x[i+1] = x[i] + h*f(xm, t[i] + h/2)
/// ```
///
/// Two derivative evaluations per step. Global error is O(h^2).
pub fn rk2<Y, F>(f: &F, x0: Y, t0: Float, tf: Float, n: usize) -> Result<Solution<Y>, Error>
where
    Y: State,
    F: Ode<Y>,
{
    let t = grid::linspace(t0, tf, n)?;
    let h = t[1] - t[0];

    let mut x = vec![x0; n];
    let mut nfev = 0;

    for i in 0..n - 1 {
        let k1 = f.ode(x[i], t[i]) * h;
        let xm = x[i] + k1 * 0.5;
        x[i + 1] = x[i] + f.ode(xm, t[i] + h * 0.5) * h;
        nfev += 2;
    }

    Ok(Solution { x, t, h, nfev, nstep: n - 1 })
}
