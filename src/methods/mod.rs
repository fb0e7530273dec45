//! Fixed-step explicit integrators sharing one contract.
//!
//! Each routine takes the same inputs (derivative, initial state, time bounds,
//! sample count) and returns the same [`Solution`](crate::Solution) shape;
//! they differ only in the per-step update formula and order of accuracy.

mod euler;
mod rk2;
mod rk4;

pub use euler::euler;
pub use rk2::rk2;
pub use rk4::rk4;
