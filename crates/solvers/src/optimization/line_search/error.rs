use thiserror::Error;

use crate::{gradient, optimization::equal_interval};

/// Errors that can occur during a directional line search.
#[derive(Debug, Error)]
pub enum Error {
    /// The estimated directional derivative at the base point is not negative.
    #[error("not a descent direction: estimated slope {slope} is not negative")]
    NonDescentDirection { slope: f64 },

    #[error("base point and direction must be finite")]
    NonFiniteInput,

    #[error("descent check failed: {0}")]
    Gradient(#[from] gradient::Error),

    #[error("step search failed: {0}")]
    Search(#[from] equal_interval::Error),
}
