//! Solvers for one-dimensional minimization along a line.
//!
//! # Solvers
//!
//! - [`equal_interval`]: derivative-free bracket narrowing over a scalar
//!   interval for unimodal functions
//! - [`line_search`]: the same search over the step length along a descent
//!   direction in `N` dimensions

pub mod equal_interval;
pub mod line_search;
