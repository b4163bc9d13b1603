use std::convert::Infallible;

/// A scalar-valued function of `N` real variables.
///
/// Solvers only ever compare objective values, so an implementation should be
/// pure: calling it twice with the same point must return the same value.
/// Solvers may evaluate the same point more than once.
///
/// Any `Fn(&[f64; N]) -> f64` closure is an infallible objective.
/// Implement the trait directly when evaluation can fail.
pub trait Objective<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be evaluated at `x`.
    fn value(&self, x: &[f64; N]) -> Result<f64, Self::Error>;
}

impl<F, const N: usize> Objective<N> for F
where
    F: Fn(&[f64; N]) -> f64,
{
    type Error = Infallible;

    fn value(&self, x: &[f64; N]) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Adapter that turns a function of one `f64` into an [`Objective<1>`].
///
/// ```
/// use stride_core::{Objective, Scalar};
///
/// let parabola = Scalar(|x: f64| (x - 1.0).powi(2));
/// assert_eq!(parabola.value(&[3.0]), Ok(4.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Scalar<F>(pub F);

impl<F> Objective<1> for Scalar<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn value(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok((self.0)(x[0]))
    }
}
