use super::Bracket;

/// Indicates how the search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket width reached the configured tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an equal-interval search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final search status.
    pub status: Status,

    /// Estimate of the minimizer: the midpoint of `bracket`.
    pub x: f64,

    /// The final bracket.
    pub bracket: Bracket,

    /// Number of completed narrowing passes.
    pub iters: usize,

    /// Number of objective evaluations made by the search.
    pub evals: usize,
}

impl Solution {
    pub(super) fn new(status: Status, bracket: Bracket, iters: usize, evals: usize) -> Self {
        Self {
            status,
            x: bracket.midpoint(),
            bracket,
            iters,
            evals,
        }
    }
}
