//! Equal-interval line search along a descent direction.
//!
//! Given a base point `x0` and a direction `d` in `N` dimensions, the search
//! minimizes the step length `α` of
//!
//! ```text
//! g(α) = f(x0 + α * d)
//! ```
//!
//! over a bracket of `α` values using [`equal_interval`]. Before any search
//! evaluation, `d` is checked to be a descent direction at `x0` with a
//! forward-difference gradient; a non-descent direction fails immediately.
//!
//! The direction is not normalized, so `α` is measured in multiples of `d`.
//! Events and actions are those of [`equal_interval`], with `x` being `α`.

mod config;
mod error;
mod ray;
mod solution;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use ray::Ray;
pub use solution::Solution;

use stride_core::{Objective, Observer};

use crate::{
    descent,
    numeric::all_finite,
    optimization::equal_interval::{self, Action, Bracket, Event},
};

/// Finds the step length that minimizes the objective along `direction`.
///
/// The observer receives the [`equal_interval::Event`]s of the underlying
/// scalar search.
///
/// # Errors
///
/// Returns an error if the inputs are non-finite, the direction is not a
/// descent direction at `base`, the gradient check fails, or the scalar
/// search fails.
pub fn minimize<O, Obs, const N: usize>(
    objective: &O,
    base: [f64; N],
    direction: [f64; N],
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    O: Objective<N>,
    Obs: Observer<Event, Action>,
{
    if !all_finite(&base) || !all_finite(&direction) {
        return Err(Error::NonFiniteInput);
    }

    let bracket = Bracket::try_from(bracket).map_err(equal_interval::Error::from)?;

    let slope = descent::slope(objective, &direction, &base, config.gradient_step())?;
    let is_descent = slope < 0.0;
    if !is_descent {
        tracing::warn!(slope, "rejected non-descent direction");
        return Err(Error::NonDescentDirection { slope });
    }
    tracing::debug!(slope, "descent direction confirmed");

    let ray = Ray::new(objective, base, direction);
    let found = equal_interval::search(&ray, bracket, config.search(), &mut observer)?;

    Ok(Solution::new(found, ray.point(found.x), N + 1))
}

/// Runs [`minimize`] without observer support.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn minimize_unobserved<O, const N: usize>(
    objective: &O,
    base: [f64; N],
    direction: [f64; N],
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    O: Objective<N>,
{
    minimize(objective, base, direction, bracket, config, ())
}
