//! Derivative-free line search for the stride toolkit.
//!
//! # Modules
//!
//! - [`gradient`]: forward finite-difference gradient estimates
//! - [`descent`]: numerical descent-direction checks built on [`gradient`]
//! - [`optimization`]: equal-interval bracket narrowing, in scalar and
//!   directional (line search) form

pub mod descent;
pub mod gradient;
pub mod optimization;

mod numeric;
