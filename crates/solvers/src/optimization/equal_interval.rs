//! Equal-interval search for single-variable minimization.
//!
//! # Algorithm
//!
//! Each pass samples the current bracket `[lo, hi]` at `intervals` evenly
//! spaced points, endpoints included, and scans them left to right. At the
//! first sample whose value is not lower than its predecessor, the bracket
//! shrinks to the two samples straddling that predecessor and the next pass
//! starts. The search stops once the bracket width is within the tolerance
//! and reports the bracket midpoint.
//!
//! When the very first comparison rises there is no sample to the left of
//! `lo`, so the narrowed bracket is clamped to `[p0, p1]`.
//!
//! # When to Use
//!
//! - The objective is unimodal on the bracket
//! - Derivatives are unavailable
//! - A simple, predictable evaluation pattern matters more than speed
//!
//! # Limitations
//!
//! - **Unimodal assumption**: never verified; a multimodal objective may
//!   narrow onto the wrong minimum.
//! - **Bracket must contain the minimum**: if the samples decrease across the
//!   whole bracket the search fails with [`Error::MinimumBeyondBracket`].
//! - **At least 3 intervals**: with exactly 3 the search can only narrow when
//!   the minimum sits in the lower half; otherwise it fails with
//!   [`Error::DidNotConverge`].
//!
//! # Observer Events
//!
//! - [`Event::Evaluated`] after every objective evaluation
//! - [`Event::Narrowed`] after every pass that shrinks the bracket
//!
//! Observers can return [`Action::StopEarly`] to end the search with the
//! current bracket.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod search;
mod solution;


pub use action::Action;
pub use bracket::{Bracket, BracketError};
pub use config::{Config, ConfigError, EvalPolicy, MIN_INTERVALS, tolerance_for_decimal_places};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

pub(crate) use search::search;

use stride_core::{Objective, Observer};

/// Finds the minimum of the objective on `bracket` by equal-interval search.
///
/// The observer receives an [`Event`] after each evaluation and each
/// narrowing. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the objective fails or
/// returns a non-finite value, the minimum is not inside the bracket, or the
/// bracket stops shrinking before the tolerance is met.
pub fn minimize<O, Obs>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<1>,
    Obs: Observer<Event, Action>,
{
    let bracket = Bracket::try_from(bracket)?;
    search(objective, bracket, config, &mut observer)
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn minimize_unobserved<O>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    O: Objective<1>,
{
    minimize(objective, bracket, config, ())
}
