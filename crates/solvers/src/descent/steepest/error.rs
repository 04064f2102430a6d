use descent_core::{Point, Vector};

use crate::line_search::golden_section;

/// Errors that can occur during steepest descent.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("iteration {iter}: gradient is not finite at {point:?} (got {gradient:?})")]
    NonFiniteGradient {
        iter: usize,
        point: Point,
        gradient: Vector,
    },

    #[error("iteration {iter}: point is not finite ({point:?})")]
    NonFinitePoint { iter: usize, point: Point },

    #[error("iteration {iter}: line search failed")]
    LineSearch {
        iter: usize,
        #[source]
        source: golden_section::Error,
    },
}
