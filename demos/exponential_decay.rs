//! # Example: Exponential Decay
//!
//! Solve the exponential decay equation with each fixed-step method.
//!
//! Equations:
//! dx/dt = -x
//!
//! Initial condition: x(0) = 1.0
//!

use fixedstep::prelude::*;

struct Decay;

impl Ode for Decay {
    fn ode(&self, x: Float, _t: Float) -> Float {
        -x
    }
}

fn main() {
    let f = Decay;
    let t0: Float = 0.0;
    let tf: Float = 5.0;
    let x0 = 1.0;
    let n = 51;
    let exact = (t0 - tf).exp();

    for method in [Method::Euler, Method::RK2, Method::RK4] {
        match solve(&f, x0, t0, tf, n, method) {
            Ok(sol) => {
                let last = sol.x[sol.x.len() - 1];
                println!("{method:?}:");
                println!(
                    "  Final state: t = {:.5}, x = {:.10}",
                    sol.t[sol.t.len() - 1],
                    last
                );
                println!("  Error vs exact: {:.3e}", (last - exact).abs());
                println!("  Number of function evaluations: {}", sol.nfev);
            }
            Err(e) => eprintln!("Integration failed: {:?}", e),
        }
    }
}
