//! Core traits for the stride line search toolkit.
//!
//! This crate defines the shared abstractions that the solvers build on:
//!
//! - [`Objective`]: a scalar function of `N` real variables
//! - [`Scalar`]: adapts a plain `f64 -> f64` function into an [`Objective<1>`]
//! - [`Observer`]: receives solver events and optionally returns control actions

mod objective;
mod observer;

pub use objective::{Objective, Scalar};
pub use observer::Observer;
