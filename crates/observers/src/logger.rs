use std::fmt::Debug;

use descent_core::Observer;
use log::{Level, log};

/// Writes every event to the `log` facade at a fixed level.
///
/// The logger never intervenes; it only reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    level: Level,
    target: &'static str,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl Logger {
    /// Creates a logger writing at `level` to the `descent` target.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            target: "descent",
        }
    }

    /// Returns this logger with a different log target.
    #[must_use]
    pub fn with_target(self, target: &'static str) -> Self {
        Self { target, ..self }
    }

    /// Returns the level events are logged at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl<E: Debug, A> Observer<E, A> for Logger {
    fn observe(&mut self, event: &E) -> Option<A> {
        log!(target: self.target, self.level, "{event:?}");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use descent_solvers::line_search::golden_section;

    #[test]
    fn logging_does_not_change_the_result() {
        let function = |t: f64| (t - 0.3).powi(2);
        let config = golden_section::Config::default();

        let logged = golden_section::minimize(
            &function,
            [-1.0, 1.0],
            &config,
            Logger::new(Level::Trace).with_target("golden"),
        )
        .unwrap();
        let plain = golden_section::minimize_unobserved(&function, [-1.0, 1.0], &config).unwrap();

        assert_eq!(logged, plain);
    }
}
