//! Numerical solvers for unconstrained minimization.
//!
//! - [`line_search`] — one-dimensional searches for a step length
//! - [`descent`] — iterative descent methods built on a line search

pub mod descent;
pub mod line_search;
