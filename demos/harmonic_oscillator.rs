//! Example demonstrating RK4 on a harmonic oscillator with a vector state.

use fixedstep::prelude::*;
use std::f64::consts::PI;

struct HarmonicOscillator;

impl Ode<Vector2> for HarmonicOscillator {
    fn ode(&self, x: Vector2, _t: Float) -> Vector2 {
        Vector2::new(x[1], -x[0])
    }
}

fn main() {
    let harmonic_oscillator = HarmonicOscillator;
    let t0 = 0.0;
    let tf = 2.0 * PI;
    let x0 = Vector2::new(1.0, 0.0);

    match rk4(&harmonic_oscillator, x0, t0, tf, 201) {
        Ok(sol) => {
            if let (Some(&t_last), Some(x_last)) = (sol.t.last(), sol.x.last()) {
                println!(
                    "Final state: t = {:.5}, x = ({:.5}, {:.5})",
                    t_last, x_last[0], x_last[1]
                );
            }
            println!("Number of function evaluations: {}", sol.nfev);
            println!("Number of steps taken: {}", sol.nstep);

            for (ti, xi) in sol.t.iter().zip(sol.x.iter()).step_by(20) {
                println!("t = {:>8.5}, x = ({:>8.5}, {:>8.5})", ti, xi[0], xi[1]);
            }
        }
        Err(err) => eprintln!("Integration failed: {:?}", err),
    }
}
