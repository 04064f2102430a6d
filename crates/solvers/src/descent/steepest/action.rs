/// Actions an observer can take during steepest descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current step and return the point it reached.
    StopEarly,
}
