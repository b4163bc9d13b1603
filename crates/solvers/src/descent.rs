//! Numerical descent-direction checks.
//!
//! A direction `d` is a descent direction at `x` when the directional
//! derivative `∇f(x) · d` is negative. The gradient is estimated with
//! [`gradient::estimate`], so the classification is approximate near
//! stationary points or with a large step. No adaptive step sizing is done.

use stride_core::Objective;

use crate::{
    gradient::{self, DEFAULT_STEP},
    numeric::dot,
};

/// Returns the estimated directional derivative of `objective` at `x` along
/// `direction`.
///
/// # Errors
///
/// Returns an error if the gradient cannot be estimated.
pub fn slope<O, const N: usize>(
    objective: &O,
    direction: &[f64; N],
    x: &[f64; N],
    step: f64,
) -> Result<f64, gradient::Error>
where
    O: Objective<N>,
{
    let gradient = gradient::estimate(objective, x, step)?;
    Ok(dot(&gradient, direction))
}

/// Returns true if `direction` is a descent direction of `objective` at `x`.
///
/// Uses [`DEFAULT_STEP`] for the gradient estimate. A direction orthogonal to
/// the gradient is not a descent direction.
///
/// # Errors
///
/// Returns an error if the gradient cannot be estimated.
pub fn is_descent<O, const N: usize>(
    objective: &O,
    direction: &[f64; N],
    x: &[f64; N],
) -> Result<bool, gradient::Error>
where
    O: Objective<N>,
{
    is_descent_with_step(objective, direction, x, DEFAULT_STEP)
}

/// Same as [`is_descent`] with an explicit finite-difference step.
///
/// # Errors
///
/// Returns an error if the gradient cannot be estimated.
pub fn is_descent_with_step<O, const N: usize>(
    objective: &O,
    direction: &[f64; N],
    x: &[f64; N],
    step: f64,
) -> Result<bool, gradient::Error>
where
    O: Objective<N>,
{
    Ok(slope(objective, direction, x, step)? < 0.0)
}
