use descent_core::Observer;

/// An observer that keeps a copy of every event it sees.
///
/// Pass `&mut recorder` to a solver so the events are still available after
/// the solver returns.
#[derive(Debug, Clone)]
pub struct Recorder<E> {
    events: Vec<E>,
}

impl<E> Default for Recorder<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E> Recorder<E> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in the order they were observed.
    #[must_use]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    /// Consumes the recorder and returns its events.
    #[must_use]
    pub fn into_events(self) -> Vec<E> {
        self.events
    }
}

impl<E: Clone, A> Observer<E, A> for &mut Recorder<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events.push(event.clone());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use descent_core::{Point, Vector, from_fns};
    use descent_solvers::{descent::steepest, line_search::golden_section};

    #[test]
    fn records_every_descent_iteration() {
        let objective = from_fns(
            |p: Point| p.x.powi(2) + 10.0 * p.y.powi(2),
            |p: Point| Vector::new(2.0 * p.x, 20.0 * p.y),
        );
        let mut recorder = Recorder::new();

        let solution = steepest::minimize(
            &objective,
            Point::new(1.0, 1.0),
            &steepest::Config::default(),
            &mut recorder,
        )
        .unwrap();

        let events: &[steepest::Event] = recorder.events();
        assert_eq!(events.len(), solution.steps);
        assert_eq!(events[0].point, Point::new(1.0, 1.0));
        for pair in events.windows(2) {
            assert_eq!(pair[0].next, pair[1].point);
        }
    }

    #[test]
    fn records_every_line_search_pass() {
        let mut recorder = Recorder::new();

        let solution = golden_section::minimize(
            &|t: f64| (t - 0.3).powi(2),
            [-1.0, 1.0],
            &golden_section::Config::default(),
            &mut recorder,
        )
        .unwrap();

        let events = recorder.into_events();
        assert_eq!(events.len(), solution.iters);
        assert_relative_eq!(events[0].width(), 2.0);
    }
}
