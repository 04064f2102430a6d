use std::fmt;

use descent_core::Point;
#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// Indicates whether the solver converged or stopped for another reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub enum Status {
    /// The gradient norm fell below the convergence tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a steepest descent run.
///
/// The convergence test runs on the gradient at the start of an iteration,
/// and that iteration's step is still applied before the solver returns.
/// `gradient_norm_checked` is the norm that passed (or failed) the test;
/// `gradient_norm` is measured at the returned `point`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The returned iterate.
    pub point: Point,

    /// Objective value at `point`.
    pub objective: f64,

    /// Iteration count reported for the run.
    ///
    /// For [`Status::Converged`] this is the zero-based index of the iteration
    /// whose gradient passed the test. Otherwise it equals `steps`.
    pub iters: usize,

    /// Number of descent steps applied to reach `point`.
    pub steps: usize,

    /// Gradient norm tested in the final iteration, before its step.
    pub gradient_norm_checked: f64,

    /// Gradient norm at `point`.
    pub gradient_norm: f64,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Point { x, y } = self.point;
        match self.status {
            Status::Converged => {
                write!(f, "converged after {} iterations at ({x}, {y})", self.iters)
            }
            Status::MaxIters => write!(
                f,
                "maximum number of iterations ({}) exceeded at ({x}, {y})",
                self.iters
            ),
            Status::StoppedByObserver => write!(
                f,
                "stopped by observer after {} iterations at ({x}, {y})",
                self.iters
            ),
        }
    }
}
