//! A library of fixed-step numerical methods for solving initial value problems
//! (IVPs) for ordinary differential equations (ODEs) of the form dx/dt = f(x, t).
//!
//! Three explicit methods share one contract: [`euler`], [`rk2`], and [`rk4`]
//! all take a derivative function, an initial state, time bounds, and a sample
//! count, and return the discretized trajectory together with its time grid.
//!
//! The supplied derivative function is assumed finite on the sampled domain.
//! Non-finite values (NaN or infinity) it produces are not detected; they
//! propagate through the remaining samples unchanged.

mod error;
mod ode;
mod solution;
mod solve;
mod state;

pub mod grid;
pub mod methods;
pub mod prelude;

pub use error::Error;
pub use methods::{euler, rk2, rk4};
pub use ode::Ode;
pub use solution::Solution;
pub use solve::{solve, Method};
pub use state::State;

// Re-export from external crate
pub use nalgebra::SVector;

/// Fixed-size vector state of dimension 1.
pub type Vector1 = SVector<Float, 1>;
/// Fixed-size vector state of dimension 2.
pub type Vector2 = SVector<Float, 2>;
/// Fixed-size vector state of dimension 3.
pub type Vector3 = SVector<Float, 3>;

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Floating-point precision used throughout, selected by feature.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
