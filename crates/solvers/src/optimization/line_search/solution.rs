use crate::optimization::equal_interval::{self, Bracket, Status};

/// The result of a directional line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<const N: usize> {
    /// Final search status.
    pub status: Status,

    /// The step length: the midpoint of `bracket`.
    pub step: f64,

    /// The point `base + step * direction`.
    pub point: [f64; N],

    /// The final bracket of step lengths.
    pub bracket: Bracket,

    /// Number of completed narrowing passes.
    pub iters: usize,

    /// Number of objective evaluations made by the step search.
    pub evals: usize,

    /// Number of objective evaluations made by the descent check.
    pub check_evals: usize,
}

impl<const N: usize> Solution<N> {
    pub(super) fn new(
        found: equal_interval::Solution,
        point: [f64; N],
        check_evals: usize,
    ) -> Self {
        Self {
            status: found.status,
            step: found.x,
            point,
            bracket: found.bracket,
            iters: found.iters,
            evals: found.evals,
            check_evals,
        }
    }
}
