//! # Example: Driven Decay
//!
//! Solve dx/dt = -x^3 + sin(t), a nonlinear equation with no closed-form
//! solution, and compare each method against a finely resolved RK4 run.
//!
//! Initial condition: x(0) = 0.0
//!

use fixedstep::prelude::*;

fn main() {
    let f = |x: Float, t: Float| -x.powi(3) + t.sin();
    let t0 = 0.0;
    let tf = 10.0;
    let x0 = 0.0;

    // Reference endpoint from a much finer grid.
    let reference = match rk4(&f, x0, t0, tf, 20_001) {
        Ok(sol) => sol.x[sol.x.len() - 1],
        Err(e) => {
            eprintln!("Integration failed: {:?}", e);
            return;
        }
    };
    println!("Reference x({tf}) = {reference:.10} (RK4, 20000 steps)");

    for method in [Method::Euler, Method::RK2, Method::RK4] {
        match solve(&f, x0, t0, tf, 201, method) {
            Ok(sol) => {
                let last = sol.x[sol.x.len() - 1];
                println!(
                    "{:?}: x({}) = {:.10}, error = {:.3e}, nfev = {}",
                    method,
                    tf,
                    last,
                    (last - reference).abs(),
                    sol.nfev
                );
            }
            Err(e) => eprintln!("Integration failed: {:?}", e),
        }
    }
}
