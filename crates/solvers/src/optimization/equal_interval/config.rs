use thiserror::Error;

/// Fewest sample points per pass that can ever narrow a bracket.
pub const MIN_INTERVALS: usize = 3;

/// How the first sample of each pass is obtained.
///
/// The narrowed bracket's left endpoint was already evaluated in the previous
/// pass. The policy decides whether that value is evaluated again. Both
/// policies visit the same brackets and report the same step; they differ
/// only in [`Solution::evals`](super::Solution::evals).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvalPolicy {
    /// Evaluate the first sample of every pass afresh.
    #[default]
    Reevaluate,

    /// Carry the known value at the new left endpoint into the next pass,
    /// saving one evaluation per pass after the first.
    Reuse,
}

/// Configuration for the equal-interval search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    intervals: usize,
    tolerance: f64,
    max_iters: usize,
    policy: EvalPolicy,
}

/// Errors that can occur when validating an equal-interval search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("intervals must be at least 3")]
    Intervals,

    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            intervals: 10,
            tolerance: 1e-12,
            max_iters: 100,
            policy: EvalPolicy::Reevaluate,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `intervals` is the number of evenly spaced sample points per pass,
    /// both bracket endpoints included. `max_iters` caps the number of
    /// narrowing passes.
    ///
    /// # Errors
    ///
    /// Returns an error if `intervals` is below [`MIN_INTERVALS`] or the
    /// tolerance is not a finite positive number.
    pub fn new(intervals: usize, tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if intervals < MIN_INTERVALS {
            return Err(ConfigError::Intervals);
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            intervals,
            tolerance,
            max_iters,
            policy: EvalPolicy::default(),
        })
    }

    /// Returns a copy of this config using the given evaluation policy.
    #[must_use]
    pub fn with_policy(self, policy: EvalPolicy) -> Self {
        Self { policy, ..self }
    }

    /// Returns the number of sample points per pass.
    #[must_use]
    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// Returns the bracket width at which the search stops.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of narrowing passes.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the evaluation policy.
    #[must_use]
    pub fn policy(&self) -> EvalPolicy {
        self.policy
    }
}

/// Returns the bracket tolerance `10^-(places + 1)` that pins down the
/// minimizer to `places` decimal places.
#[must_use]
pub fn tolerance_for_decimal_places(places: u8) -> f64 {
    10f64.powi(-(i32::from(places) + 1))
}
