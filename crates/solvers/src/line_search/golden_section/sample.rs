#[cfg(feature = "serde-derive")]
use serde::Serialize;

/// A step length with its evaluated objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize))]
pub struct Sample {
    /// The step length.
    pub x: f64,

    /// The objective value at `x`.
    pub objective: f64,
}

impl Sample {
    /// Creates a new sample.
    #[must_use]
    pub fn new(x: f64, objective: f64) -> Self {
        Self { x, objective }
    }
}
