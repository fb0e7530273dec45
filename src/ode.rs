//! User-supplied ODE right-hand side.

use crate::{Float, State};

/// User-supplied ODE right-hand side.
///
/// Implement this trait for your problem to provide the derivative function
/// x' = f(x, t). The integrators repeatedly call [`ode`](Ode::ode) with the
/// current state `x` and time `t` and expect the derivative back.
///
/// Any closure `Fn(Y, Float) -> Y` implements the trait, so simple systems
/// need no named type at all.
///
/// # Example
///
/// ```ignore
/// struct Logistic { r: Float }
/// impl Ode for Logistic {
///     fn ode(&self, x: Float, _t: Float) -> Float {
///         self.r * x * (1.0 - x)
///     }
/// }
/// ```
pub trait Ode<Y: State = Float> {
    fn ode(&self, x: Y, t: Float) -> Y;
}

impl<Y, F> Ode<Y> for F
where
    Y: State,
    F: Fn(Y, Float) -> Y,
{
    fn ode(&self, x: Y, t: Float) -> Y {
        self(x, t)
    }
}
