//! State types the integrators can advance.

use std::ops::{Add, Mul};

use crate::Float;

/// Types usable as the dependent variable of an ODE.
///
/// Implemented automatically for any `Copy` type with the arithmetic the
/// update formulas need: state + state and state * [`Float`]. Scalars qualify,
/// as do fixed-size vectors such as [`Vector2`](crate::Vector2) for
/// elementwise systems.
pub trait State: Copy + Add<Output = Self> + Mul<Float, Output = Self> {}

impl<Y> State for Y where Y: Copy + Add<Output = Y> + Mul<Float, Output = Y> {}
