//! Forward finite-difference gradient estimation.
//!
//! Component `i` of the estimate is
//!
//! ```text
//! (f(x + step * e_i) - f(x)) / step
//! ```
//!
//! The baseline `f(x)` is evaluated once and shared across all components,
//! so an estimate in `N` dimensions calls the objective exactly `N + 1` times.

use std::error::Error as StdError;

use stride_core::Objective;

/// Default perturbation used by [`estimate`] callers that have no better choice.
pub const DEFAULT_STEP: f64 = 1e-5;

/// Errors that can occur while estimating a gradient.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("finite-difference step must be finite and positive, got {step}")]
    InvalidStep { step: f64 },

    #[error("non-finite objective {value} at {x:?}")]
    NonFiniteValue { x: Vec<f64>, value: f64 },

    #[error("objective error: {0}")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn objective<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Objective(Box::new(err))
    }
}

/// Estimates the gradient of `objective` at `x` with forward differences.
///
/// # Errors
///
/// Returns an error if `step` is not finite and positive, or if the objective
/// fails or returns a non-finite value at any perturbed point.
pub fn estimate<O, const N: usize>(
    objective: &O,
    x: &[f64; N],
    step: f64,
) -> Result<[f64; N], Error>
where
    O: Objective<N>,
{
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::InvalidStep { step });
    }

    let baseline = checked_value(objective, x)?;

    let mut gradient = [0.0; N];
    for (i, component) in gradient.iter_mut().enumerate() {
        let mut shifted = *x;
        shifted[i] += step;
        *component = (checked_value(objective, &shifted)? - baseline) / step;
    }

    Ok(gradient)
}

fn checked_value<O, const N: usize>(objective: &O, x: &[f64; N]) -> Result<f64, Error>
where
    O: Objective<N>,
{
    let value = objective.value(x).map_err(Error::objective)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteValue {
            x: x.to_vec(),
            value,
        })
    }
}
