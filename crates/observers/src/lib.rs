//! Reusable observers for the descent solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across both the golden section line search and steepest descent.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasObjective`], [`HasGradientNorm`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Recorder`] — keeps a copy of every event
//! - [`StopAfter`] — stops any solver after a fixed number of iterations
//! - [`GradientBelow`] — stops descent as soon as the tested gradient is small
//! - [`Logger`] — writes each event to the `log` facade
//!
//! [`Observer`]: descent_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasObjective`]: traits::HasObjective
//! [`HasGradientNorm`]: traits::HasGradientNorm
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logger;
mod recorder;
mod stop;

pub use logger::Logger;
pub use recorder::Recorder;
pub use stop::{GradientBelow, StopAfter};
