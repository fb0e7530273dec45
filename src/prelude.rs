//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use fixedstep::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `Ode`, `State`, `Solution`, `Error`.
//! - Integrators: `euler`, `rk2`, `rk4`, plus `solve` and `Method` for
//!   runtime method choice.

pub use crate::solve::{solve, Method};
pub use crate::{euler, rk2, rk4, Error, Float, Ode, Solution, State};
pub use crate::{Vector1, Vector2, Vector3};
