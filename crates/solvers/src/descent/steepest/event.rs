use descent_core::{Point, Vector};

/// Emitted once per descent iteration, after the step is taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Zero-based iteration index.
    pub iter: usize,

    /// The iterate at the start of the iteration.
    pub point: Point,

    /// The gradient at `point`.
    pub gradient: Vector,

    /// The norm of `gradient`, the value tested for convergence.
    pub gradient_norm: f64,

    /// The step length chosen by the line search.
    pub step: f64,

    /// The iterate after the step.
    pub next: Point,
}
