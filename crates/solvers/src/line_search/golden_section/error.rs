/// Errors that can occur during golden section search.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid bracket [{low}, {high}]: bounds must be finite with low < high")]
    InvalidBracket { low: f64, high: f64 },

    #[error("objective is not finite at x={x} (got {value})")]
    NonFiniteObjective { x: f64, value: f64 },
}
