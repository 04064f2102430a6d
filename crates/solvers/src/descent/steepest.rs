//! Steepest descent with a golden section line search.
//!
//! # Algorithm
//!
//! Starting from a point `p₀`, each iteration:
//!
//! 1. Computes the gradient `g = ∇f(pₖ)` and tests `|g| < tol`.
//! 2. Sets the direction `d = -g`.
//! 3. Minimizes `φ(α) = f(pₖ + α·d)` over the configured step bracket with
//!    [`golden_section`](crate::line_search::golden_section).
//! 4. Steps to `pₖ₊₁ = pₖ + α*·d`.
//! 5. Returns `pₖ₊₁` if the test in step 1 passed, otherwise repeats.
//!
//! The convergence test looks at the gradient from *before* the step, and the
//! step is taken regardless. A run that converges therefore always returns one
//! step past the point where the gradient first fell below tolerance, and
//! [`Solution`] reports the gradient norm both where it was tested and at the
//! returned point.
//!
//! # Step bracket
//!
//! Step lengths are searched over [`Config::step_bracket`], `[-1, 1]` by
//! default. When the best step along a direction lies outside the bracket the
//! line search settles on the nearest bound, so badly scaled objectives may
//! need a wider bracket to converge in a reasonable number of iterations.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the step is taken.
//! Observers can return [`Action::StopEarly`] to stop at the new point.

mod action;
mod config;
mod error;
mod event;
mod search;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use descent_core::{Objective, Observer, Point};

use search::descend;

/// Minimizes `objective` by steepest descent from `start`.
///
/// The observer receives an [`Event`] after each iteration's step.
///
/// # Errors
///
/// Returns an error if the start point, a gradient, or a new iterate is not
/// finite, or if a line search fails.
pub fn minimize<O, Obs>(
    objective: &O,
    start: Point,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: Observer<Event, Action>,
{
    descend(objective, start, config, observer)
}

/// Minimizes `objective` without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<O>(
    objective: &O,
    start: Point,
    config: &Config,
) -> Result<Solution, Error>
where
    O: Objective,
{
    minimize(objective, start, config, ())
}
