#[cfg(feature = "serde-derive")]
use serde::Serialize;
use thiserror::Error;

use crate::line_search::golden_section;

/// Configuration for the steepest descent solver.
///
/// Holds both tolerances in one place: `convergence_tolerance` decides when the
/// gradient is small enough to stop, and the line search config decides how
/// precisely each step length is found.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize))]
pub struct Config {
    convergence_tolerance: f64,
    max_iters: usize,
    step_bracket: [f64; 2],
    line_search: golden_section::Config,
}

/// Errors that can occur when validating a steepest descent solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("convergence_tolerance must be finite and positive")]
    ConvergenceTolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("step_bracket bounds must be finite with low < high")]
    StepBracket,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            convergence_tolerance: 1e-6,
            max_iters: 1000,
            step_bracket: [-1.0, 1.0],
            line_search: golden_section::Config::default(),
        }
    }
}

impl Config {
    /// Creates a new config with the default step bracket and line search.
    ///
    /// # Errors
    ///
    /// Returns an error if `convergence_tolerance` is not finite and positive,
    /// or if `max_iters` is zero.
    pub fn new(convergence_tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !convergence_tolerance.is_finite() || convergence_tolerance <= 0.0 {
            return Err(ConfigError::ConvergenceTolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            convergence_tolerance,
            max_iters,
            ..Self::default()
        })
    }

    /// Returns this config with a different bracket of candidate step lengths.
    ///
    /// Steps outside the bracket are never taken, so a bracket that is too
    /// narrow silently caps progress along each direction.
    ///
    /// # Errors
    ///
    /// Returns an error unless both bounds are finite with `low < high`.
    pub fn with_step_bracket(self, step_bracket: [f64; 2]) -> Result<Self, ConfigError> {
        let [low, high] = step_bracket;
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(ConfigError::StepBracket);
        }

        Ok(Self {
            step_bracket,
            ..self
        })
    }

    /// Returns this config with a different line search config.
    #[must_use]
    pub fn with_line_search(self, line_search: golden_section::Config) -> Self {
        Self {
            line_search,
            ..self
        }
    }

    /// Returns the gradient norm below which the solver has converged.
    #[must_use]
    pub fn convergence_tolerance(&self) -> f64 {
        self.convergence_tolerance
    }

    /// Returns the maximum number of descent iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the bracket of candidate step lengths.
    #[must_use]
    pub fn step_bracket(&self) -> [f64; 2] {
        self.step_bracket
    }

    /// Returns the line search config.
    #[must_use]
    pub fn line_search(&self) -> &golden_section::Config {
        &self.line_search
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_unit_step_bracket_and_fixed_line_tolerance() {
        let config = Config::default();

        assert_eq!(config.convergence_tolerance(), 1e-6);
        assert_eq!(config.max_iters(), 1000);
        assert_eq!(config.step_bracket(), [-1.0, 1.0]);
        assert_eq!(config.line_search().tolerance(), 1e-5);
    }

    #[test]
    fn rejects_invalid_arguments() {
        assert_eq!(Config::new(0.0, 10), Err(ConfigError::ConvergenceTolerance));
        assert_eq!(Config::new(f64::NAN, 10), Err(ConfigError::ConvergenceTolerance));
        assert_eq!(Config::new(1e-6, 0), Err(ConfigError::MaxIters));

        let config = Config::default();
        assert_eq!(
            config.with_step_bracket([1.0, -1.0]),
            Err(ConfigError::StepBracket)
        );
        assert_eq!(
            config.with_step_bracket([0.0, f64::INFINITY]),
            Err(ConfigError::StepBracket)
        );
    }

    #[test]
    fn builders_keep_other_fields() {
        let line_search = golden_section::Config::new(1e-8, 200).unwrap();
        let config = Config::new(1e-4, 50)
            .unwrap()
            .with_step_bracket([0.0, 10.0])
            .unwrap()
            .with_line_search(line_search);

        assert_eq!(config.convergence_tolerance(), 1e-4);
        assert_eq!(config.max_iters(), 50);
        assert_eq!(config.step_bracket(), [0.0, 10.0]);
        assert_eq!(config.line_search(), &line_search);
    }
}
