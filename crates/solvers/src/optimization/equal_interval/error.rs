use std::error::Error as StdError;

use thiserror::Error;

use super::{Bracket, BracketError};

/// Errors that can occur during equal-interval search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    /// Every sample of a pass was lower than the one before it, so the
    /// minimum is not inside the bracket.
    #[error("objective decreases across the whole bracket {bracket}")]
    MinimumBeyondBracket { bracket: Bracket, evals: usize },

    /// The pass limit was reached, or a pass could not shrink the bracket.
    #[error("no convergence after {iters} passes and {evals} evaluations, bracket {bracket}")]
    DidNotConverge {
        iters: usize,
        evals: usize,
        bracket: Bracket,
    },

    #[error("non-finite objective {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("objective error: {0}")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn objective<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Objective(Box::new(err))
    }
}
