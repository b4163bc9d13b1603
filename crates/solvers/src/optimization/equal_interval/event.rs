use super::Bracket;

/// Events emitted by the equal-interval search.
///
/// `pass` is 1-based and counts the narrowing pass in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The objective was evaluated at a sample point.
    Evaluated {
        /// The pass that requested the evaluation.
        pass: usize,

        /// The sample point.
        x: f64,

        /// The objective value at `x`.
        value: f64,
    },

    /// A pass finished and shrank the bracket.
    Narrowed {
        /// The pass that produced the bracket.
        pass: usize,

        /// The narrowed bracket.
        bracket: Bracket,
    },
}

impl Event {
    /// Returns the pass this event belongs to.
    #[must_use]
    pub fn pass(&self) -> usize {
        match self {
            Self::Evaluated { pass, .. } | Self::Narrowed { pass, .. } => *pass,
        }
    }
}
