use stride_core::Objective;

use crate::numeric::along;

/// An objective restricted to the ray `base + α * direction`.
///
/// Implements [`Objective<1>`] over the step length `α`, so any
/// single-variable minimizer can search along a direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray<'a, O, const N: usize> {
    objective: &'a O,
    base: [f64; N],
    direction: [f64; N],
}

impl<'a, O, const N: usize> Ray<'a, O, N> {
    pub fn new(objective: &'a O, base: [f64; N], direction: [f64; N]) -> Self {
        Self {
            objective,
            base,
            direction,
        }
    }

    /// Returns the point reached after a step of `alpha`.
    #[must_use]
    pub fn point(&self, alpha: f64) -> [f64; N] {
        along(&self.base, &self.direction, alpha)
    }

    #[must_use]
    pub fn base(&self) -> &[f64; N] {
        &self.base
    }

    #[must_use]
    pub fn direction(&self) -> &[f64; N] {
        &self.direction
    }
}

impl<O, const N: usize> Objective<1> for Ray<'_, O, N>
where
    O: Objective<N>,
{
    type Error = O::Error;

    fn value(&self, alpha: &[f64; 1]) -> Result<f64, Self::Error> {
        self.objective.value(&self.point(alpha[0]))
    }
}
