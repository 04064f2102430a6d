use super::Sample;

/// Emitted once per shrink pass, after both interior points are known and
/// before the bracket shrinks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Number of shrink passes completed before this one.
    pub iter: usize,

    /// The bracket `[low, high]` this pass will shrink.
    pub bracket: [f64; 2],

    /// The interior point nearer the low end.
    ///
    /// A sample carried over from the previous pass keeps the step length it
    /// was evaluated at.
    pub low: Sample,

    /// The interior point nearer the high end.
    pub high: Sample,
}

impl Event {
    /// Returns the bracket width for this pass.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }

    /// Returns the interior point with the smaller objective.
    #[must_use]
    pub fn lower(&self) -> Sample {
        if self.low.objective < self.high.objective {
            self.low
        } else {
            self.high
        }
    }
}
