//! Uniform time-grid construction.

use crate::{Error, Float};

/// Produce `n` evenly spaced samples from `t0` to `tf` inclusive.
///
/// The spacing is `(tf - t0) / (n - 1)` and the final sample is exactly `tf`.
/// `n < 2` cannot define a spacing and is rejected.
pub fn linspace(t0: Float, tf: Float, n: usize) -> Result<Vec<Float>, Error> {
    if n < 2 {
        return Err(Error::GridTooSmall(n));
    }
    let h = (tf - t0) / (n - 1) as Float;
    let mut t = Vec::with_capacity(n);
    for i in 0..n {
        t.push(t0 + i as Float * h);
    }
    // Multiplying out the spacing can land a rounding error away from tf.
    t[n - 1] = tf;
    Ok(t)
}
