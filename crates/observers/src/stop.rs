use descent_core::Observer;

use crate::traits::{CanStopEarly, HasGradientNorm, HasIteration};

/// Stops any solver once `iters` iterations have been observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter {
    iters: usize,
}

impl StopAfter {
    /// Creates an observer that stops after `iters` iterations.
    #[must_use]
    pub fn new(iters: usize) -> Self {
        Self { iters }
    }
}

impl<E: HasIteration, A: CanStopEarly> Observer<E, A> for StopAfter {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.iter() + 1 >= self.iters).then(A::stop_early)
    }
}

/// Stops descent in the first iteration whose tested gradient norm is below
/// `threshold`.
///
/// Steepest descent always applies the step of the iteration whose gradient
/// passes its convergence test. Since observers see each event after the step,
/// this observer gives the same result at a threshold of its own choosing,
/// and reports [`Status::StoppedByObserver`] instead of `Converged`.
///
/// [`Status::StoppedByObserver`]: descent_solvers::descent::steepest::Status::StoppedByObserver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientBelow {
    threshold: f64,
}

impl GradientBelow {
    /// Creates an observer that stops once the gradient norm drops below `threshold`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl<E: HasGradientNorm, A: CanStopEarly> Observer<E, A> for GradientBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.gradient_norm() < self.threshold).then(A::stop_early)
    }
}
