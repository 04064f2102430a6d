//! Golden section search for step lengths along a line.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum (or maximum) of a unimodal function
//! on a bounded interval `[a, b]`. With φ the golden ratio and ρ = 2 - φ, it
//! keeps two interior points
//!
//! ```text
//! x1 = a + ρ·(b - a)
//! x2 = b - ρ·(b - a)
//! ```
//!
//! and on each pass compares the objective at both. If `f(x1) < f(x2)` the
//! bracket becomes `[a, x2]`, otherwise `[x1, b]`. The interior points are
//! then recomputed from the new bracket. The search stops once `b - a` is at
//! most the configured tolerance and returns the midpoint `(a + b) / 2`.
//!
//! Every pass shrinks the bracket by a factor of φ⁻¹ ≈ 0.618.
//!
//! # Evaluations
//!
//! One interior point always survives a shrink. With [`Strategy::Reuse`]
//! (the default) its objective is carried into the next pass, so each pass
//! costs one evaluation. [`Strategy::Recompute`] evaluates both points every
//! pass.
//!
//! # Limitations
//!
//! - **Unimodal assumption**: if the function has several local minima on the
//!   bracket, the search settles on one of them without warning
//! - **Bounded**: a minimizer outside the bracket is never found; the search
//!   converges to the nearest bound instead
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per shrink pass. Observers can return
//! [`Action::StopEarly`] to halt and take the midpoint of the current bracket.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod sample;
mod search;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError, Strategy};
pub use error::Error;
pub use event::Event;
pub use sample::Sample;
pub use solution::{Solution, Status};

use descent_core::{Observer, Univariate};

use search::search;

/// Finds the minimum of `function` on `bracket` using golden section search.
///
/// The observer receives an [`Event`] for each shrink pass.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] unless both bounds are finite with
/// `bracket[0] < bracket[1]`, and [`Error::NonFiniteObjective`] if the
/// function returns a non-finite value.
pub fn minimize<U, Obs>(
    function: &U,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    U: Univariate + ?Sized,
    Obs: Observer<Event, Action>,
{
    search(function, bracket, config, observer, |v| v)
}

/// Finds the minimum of `function` without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<U>(
    function: &U,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    U: Univariate + ?Sized,
{
    minimize(function, bracket, config, ())
}

/// Finds the maximum of `function` on `bracket` using golden section search.
///
/// # Errors
///
/// See [`minimize`].
pub fn maximize<U, Obs>(
    function: &U,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    U: Univariate + ?Sized,
    Obs: Observer<Event, Action>,
{
    search(function, bracket, config, observer, |v| -v)
}

/// Finds the maximum of `function` without observer support.
///
/// # Errors
///
/// See [`minimize`].
pub fn maximize_unobserved<U>(
    function: &U,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    U: Univariate + ?Sized,
{
    maximize(function, bracket, config, ())
}
