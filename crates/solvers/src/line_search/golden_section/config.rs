#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the golden section solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize))]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
    strategy: Strategy,
}

/// How interior points are evaluated after the bracket shrinks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Carry the surviving interior point's objective into the next pass.
    ///
    /// One new evaluation per pass.
    #[default]
    Reuse,

    /// Evaluate both interior points on every pass.
    ///
    /// Two evaluations per pass. Useful when evaluation counts must match a
    /// search that never caches.
    Recompute,
}

/// Errors that can occur when validating a golden section solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            max_iters: 500,
            strategy: Strategy::Reuse,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// The search stops once the bracket width is at most `tolerance`, or
    /// after `max_iters` shrink passes.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite or not positive.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            tolerance,
            max_iters,
            strategy: Strategy::default(),
        })
    }

    /// Returns this config with the given evaluation strategy.
    #[must_use]
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    /// Returns the bracket width below which the search has converged.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of shrink passes.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the evaluation strategy.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}
