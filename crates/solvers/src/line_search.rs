//! Solvers that pick a step length along a line.
//!
//! A line search minimizes a [`Univariate`] function, typically an objective
//! restricted to a ray through the current iterate, over a bracket of
//! candidate step lengths.
//!
//! # Solvers
//!
//! - [`golden_section`] — derivative-free search over a bracketed interval for
//!   unimodal functions
//!
//! [`Univariate`]: descent_core::Univariate

pub mod golden_section;
