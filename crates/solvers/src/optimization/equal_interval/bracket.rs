use std::fmt;

use thiserror::Error;

/// Errors that can occur when creating a [`Bracket`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite, or the width overflows.
    #[error("non-finite endpoint(s) or width")]
    NonFinite,

    /// The low endpoint is not strictly below the high endpoint.
    #[error("low endpoint must be below high endpoint")]
    Degenerate,
}

/// An interval `[low, high]` assumed to contain a local minimum.
///
/// Endpoints and width are finite and `low < high`. A bracket is never modified in
/// place; narrowing produces a new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    low: f64,
    high: f64,
}

impl Bracket {
    /// Creates a validated bracket.
    ///
    /// Reversed endpoints are rejected rather than swapped.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::NonFinite`] if either endpoint is NaN or
    /// infinite or `high - low` overflows, or [`BracketError::Degenerate`]
    /// if `low >= high`.
    pub fn new(low: f64, high: f64) -> Result<Self, BracketError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(BracketError::NonFinite);
        }
        if low >= high {
            return Err(BracketError::Degenerate);
        }
        if !(high - low).is_finite() {
            return Err(BracketError::NonFinite);
        }
        Ok(Self { low, high })
    }

    /// Returns the low endpoint.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the high endpoint.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.low + 0.5 * self.width()
    }

    /// Returns true if `x` lies inside the bracket, endpoints included.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }

    /// Returns true if the bracket width is within `tolerance`.
    pub(super) fn is_converged(&self, tolerance: f64) -> bool {
        self.width() <= tolerance
    }

    /// Returns `points` evenly spaced samples covering the bracket.
    pub(super) fn grid(&self, points: usize) -> Grid {
        Grid::new(*self, points)
    }

    /// Returns the bracket straddling a rise found on `grid`.
    ///
    /// Returns `None` if the result would not be strictly narrower than
    /// `self`, which happens when the rise spans the whole grid or the
    /// samples have run out of floating-point resolution.
    pub(super) fn narrow(&self, grid: &Grid, rise: Rise) -> Option<Self> {
        let low = grid.point(rise.left_index());
        let high = grid.point(rise.right_index());
        if low < high && high - low < self.width() {
            Some(Self { low, high })
        } else {
            None
        }
    }
}

impl TryFrom<[f64; 2]> for Bracket {
    type Error = BracketError;

    fn try_from(bracket: [f64; 2]) -> Result<Self, Self::Error> {
        let [low, high] = bracket;
        Self::new(low, high)
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Evenly spaced sample points covering a bracket, both endpoints included.
#[derive(Debug, Clone, Copy)]
pub(super) struct Grid {
    low: f64,
    high: f64,
    spacing: f64,
    points: usize,
}

impl Grid {
    /// `points` must be at least 2.
    #[allow(clippy::cast_precision_loss)]
    fn new(bracket: Bracket, points: usize) -> Self {
        debug_assert!(points >= 2);
        Self {
            low: bracket.low,
            high: bracket.high,
            spacing: bracket.width() / (points - 1) as f64,
            points,
        }
    }

    /// Returns the number of sample points.
    pub(super) fn len(&self) -> usize {
        self.points
    }

    /// Returns sample `k`. The first and last samples are exactly the
    /// bracket endpoints.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn point(&self, k: usize) -> f64 {
        if k == 0 {
            self.low
        } else if k + 1 >= self.points {
            self.high
        } else {
            self.low + k as f64 * self.spacing
        }
    }
}

/// Where a pass first saw the objective stop decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Rise {
    /// `f(p1) >= f(p0)`. There is no sample before `p0`, so the narrowed
    /// bracket is clamped to `[p0, p1]`.
    Immediate,

    /// `f(p[i + 1]) >= f(p[i])` for some `i >= 1`, after strictly decreasing
    /// values up to `p[i]`. The narrowed bracket is `[p[i - 1], p[i + 1]]`.
    After(usize),
}

impl Rise {
    /// Classifies a rise detected between samples `i` and `i + 1`.
    pub(super) fn at(i: usize) -> Self {
        if i == 0 { Self::Immediate } else { Self::After(i) }
    }

    fn left_index(self) -> usize {
        match self {
            Self::Immediate => 0,
            Self::After(i) => i - 1,
        }
    }

    fn right_index(self) -> usize {
        match self {
            Self::Immediate => 1,
            Self::After(i) => i + 1,
        }
    }
}
