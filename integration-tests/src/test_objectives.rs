use std::cell::Cell;

use stride_core::Objective;

/// `4x² − 2x + 1`, minimized at `x = 0.25` with value `0.75`.
pub fn parabola(x: f64) -> f64 {
    4.0 * x * x - 2.0 * x + 1.0
}

/// `2 − x − ln(3.638 − x)`, minimized at `x = 2.638`.
///
/// Only defined for `x < 3.638`.
pub fn log_barrier(x: f64) -> f64 {
    2.0 - x - (3.638 - x).ln()
}

pub const LOG_BARRIER_MINIMIZER: f64 = 2.638;

/// `10 x1² + 4 x2² + 3 x1 x2 + 2 x1 + 2 x2 + 1`.
pub fn bowl(x: &[f64; 2]) -> f64 {
    let [x1, x2] = *x;
    10.0 * x1 * x1 + 4.0 * x2 * x2 + 3.0 * x1 * x2 + 2.0 * x1 + 2.0 * x2 + 1.0
}

/// Analytic gradient of [`bowl`].
pub fn bowl_gradient(x: &[f64; 2]) -> [f64; 2] {
    let [x1, x2] = *x;
    [20.0 * x1 + 3.0 * x2 + 2.0, 8.0 * x2 + 3.0 * x1 + 2.0]
}

/// The step that exactly minimizes [`bowl`] along `direction` from `base`.
///
/// For a quadratic with Hessian `H` this is `-(∇f · d) / (dᵀ H d)`.
pub fn bowl_exact_step(base: [f64; 2], direction: [f64; 2]) -> f64 {
    let [g1, g2] = bowl_gradient(&base);
    let [d1, d2] = direction;
    let slope = g1 * d1 + g2 * d2;
    let curvature = 20.0 * d1 * d1 + 6.0 * d1 * d2 + 8.0 * d2 * d2;
    -slope / curvature
}

/// Wraps an objective and counts how many times it is evaluated.
pub struct Counting<O> {
    inner: O,
    calls: Cell<usize>,
}

impl<O> Counting<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<O, const N: usize> Objective<N> for Counting<O>
where
    O: Objective<N>,
{
    type Error = O::Error;

    fn value(&self, x: &[f64; N]) -> Result<f64, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        self.inner.value(x)
    }
}
