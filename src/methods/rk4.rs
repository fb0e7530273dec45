//! Classic explicit Runge-Kutta 4 (RK4) fixed-step integrator.

use crate::{grid, Error, Float, Ode, Solution, State};

/// Classical fourth-order Runge-Kutta integrator on a fixed grid.
///
/// Each step combines four derivative samples:
///
/// ```text
/// k1     = h*f(x[i], t[i])
/// k2     = h*f(x[i] + k1/2, t[i] + h/2)
/// k3     = h*f(x[i] + k2/2, t[i] + h/2)
/// k4     = h*f(x[i] + k3,   t[i] + h)
/// x[i+1] = x[i] + (k1 + 2*k2 + 2*k3 + k4)/6
/// ```
///
/// Four derivative evaluations per step. Global error is O(h^4); the most
/// accurate of the fixed-step methods here and the reference the others are
/// validated against.
pub fn rk4<Y, F>(f: &F, x0: Y, t0: Float, tf: Float, n: usize) -> Result<Solution<Y>, Error>
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
        let k2 = f.ode(x[i] + k1 * 0.5, t[i] + h * 0.5) * h;
        let k3 = f.ode(x[i] + k2 * 0.5, t[i] + h * 0.5) * h;
        let k4 = f.ode(x[i] + k3, t[i] + h) * h;
        x[i + 1] = x[i] + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (1.0 / 6.0);
        nfev += 4;
    }

    Ok(Solution { x, t, h, nfev, nstep: n - 1 })
}
