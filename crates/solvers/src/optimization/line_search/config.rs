use thiserror::Error;

use crate::{gradient::DEFAULT_STEP, optimization::equal_interval};

/// Configuration for the directional line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    search: equal_interval::Config,
    gradient_step: f64,
}

/// Errors that can occur when validating a line search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("gradient step must be finite and positive")]
    GradientStep,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: equal_interval::Config::default(),
            gradient_step: DEFAULT_STEP,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `search` configures the equal-interval search over the step length.
    /// `gradient_step` is the forward-difference step of the descent check.
    ///
    /// # Errors
    ///
    /// Returns an error if `gradient_step` is not finite and positive.
    pub fn new(search: equal_interval::Config, gradient_step: f64) -> Result<Self, ConfigError> {
        if !gradient_step.is_finite() || gradient_step <= 0.0 {
            return Err(ConfigError::GradientStep);
        }

        Ok(Self {
            search,
            gradient_step,
        })
    }

    /// Returns the step-length search config.
    #[must_use]
    pub fn search(&self) -> &equal_interval::Config {
        &self.search
    }

    /// Returns the finite-difference step of the descent check.
    #[must_use]
    pub fn gradient_step(&self) -> f64 {
        self.gradient_step
    }
}

impl From<equal_interval::Config> for Config {
    fn from(search: equal_interval::Config) -> Self {
        Self {
            search,
            ..Self::default()
        }
    }
}
