//! Core traits and types for steepest descent minimization.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Point`], [`Vector`], [`Direction`] — the two-dimensional geometry of
//!   an iterate, its gradient, and the descent direction
//! - [`Step`] — moving a value a given length along a direction
//! - [`Objective`] — a function of two variables together with its gradient
//! - [`Univariate`] — a scalar function of one variable, the input to line
//!   searches
//! - [`Ray`], [`Restriction`] — an objective restricted to a line through
//!   an iterate
//! - [`Observer`] — receives solver events and optionally returns control
//!   actions

mod geometry;
mod objective;
mod observer;
mod ray;
mod step;

pub use geometry::{Direction, Point, Vector};
pub use objective::{FnObjective, Objective, Univariate, from_fns};
pub use observer::Observer;
pub use ray::{Ray, Restriction};
pub use step::Step;
