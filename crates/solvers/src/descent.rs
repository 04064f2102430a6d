//! Descent methods for objectives of two variables.
//!
//! An [`Objective`] supplies a value and a gradient at every point. Solvers in
//! this module repeatedly pick a descent direction from the gradient and a
//! step length from a line search until the gradient vanishes.
//!
//! # Solvers
//!
//! - [`steepest`] — steepest descent with a golden section line search
//!
//! [`Objective`]: descent_core::Objective

pub mod steepest;
