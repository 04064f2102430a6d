#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use super::bracket::GoldenBracket;

/// Indicates whether the solver converged or stopped for another reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub enum Status {
    /// The bracket narrowed to within the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a golden section search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Midpoint of the final bracket.
    pub x: f64,

    /// The final bracket `[low, high]`.
    pub bracket: [f64; 2],

    /// Number of shrink passes completed.
    pub iters: usize,

    /// Number of objective evaluations.
    pub evaluations: usize,
}

impl Solution {
    pub(super) fn new(
        status: Status,
        bracket: &GoldenBracket,
        iters: usize,
        evaluations: usize,
    ) -> Self {
        Self {
            status,
            x: bracket.midpoint(),
            bracket: bracket.bounds(),
            iters,
            evaluations,
        }
    }
}
