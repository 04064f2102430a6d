//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events that carry an iteration index
//! - [`HasObjective`] — events that carry an objective value
//! - [`HasGradientNorm`] — events that carry a gradient norm
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use descent_core::Observer;
//! use descent_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() < self.target).then(A::stop_early)
//!     }
//! }
//! ```

use descent_solvers::{descent::steepest, line_search::golden_section};

/// An event that carries a zero-based iteration index.
pub trait HasIteration {
    /// Returns the iteration index for this event.
    fn iter(&self) -> usize;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An event that carries a gradient norm.
pub trait HasGradientNorm {
    /// Returns the gradient norm for this event.
    fn gradient_norm(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- golden_section ---

impl HasIteration for golden_section::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

/// The smaller of the two interior objectives.
impl HasObjective for golden_section::Event {
    fn objective(&self) -> f64 {
        self.lower().objective
    }
}

impl CanStopEarly for golden_section::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- steepest ---

impl HasIteration for steepest::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasGradientNorm for steepest::Event {
    fn gradient_norm(&self) -> f64 {
        self.gradient_norm
    }
}

impl CanStopEarly for steepest::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use descent_core::{Observer, Point, Vector};
    use golden_section::Sample;

    struct GoodEnough {
        target: f64,
    }

    impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.objective() < self.target).then(A::stop_early)
        }
    }

    #[test]
    fn golden_section_objective_is_the_lower_sample() {
        let event = golden_section::Event {
            iter: 3,
            bracket: [0.0, 1.0],
            low: Sample::new(0.382, 0.5),
            high: Sample::new(0.618, 0.25),
        };

        assert_eq!(event.iter(), 3);
        assert_eq!(event.objective(), 0.25);

        let mut observer = GoodEnough { target: 0.3 };
        let action: Option<golden_section::Action> = observer.observe(&event);
        assert_eq!(action, Some(golden_section::Action::StopEarly));
    }

    #[test]
    fn steepest_event_exposes_gradient_norm() {
        let event = steepest::Event {
            iter: 7,
            point: Point::new(3.0, 4.0),
            gradient: Vector::new(3.0, 4.0),
            gradient_norm: 5.0,
            step: 0.25,
            next: Point::new(2.25, 3.0),
        };

        assert_eq!(event.iter(), 7);
        assert_eq!(event.gradient_norm(), 5.0);
    }
}
