/// A hook called by the solvers once per pass.
///
/// The golden section line search reports each shrink pass before it
/// narrows the bracket, and steepest descent reports each iteration after its
/// step. `E` is the solver's event type and `A` its action type; both solvers
/// currently accept a single `StopEarly` action.
///
/// Returning `None` lets the solver carry on. Any `FnMut(&E) -> Option<A>`
/// closure is an observer, and `()` is the observer that never acts. Reusable
/// observers such as loggers and stopping rules live in `descent-observers`.
pub trait Observer<E, A> {
    /// Inspects `event` and optionally asks the solver to act.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Stop {
        Now,
    }

    #[test]
    fn closure_observer_can_return_action() {
        let mut seen = Vec::new();
        let mut observer = |event: &usize| {
            seen.push(*event);
            (*event >= 2).then_some(Stop::Now)
        };

        assert_eq!(observer.observe(&1), None);
        assert_eq!(observer.observe(&2), Some(Stop::Now));
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn unit_observer_never_acts() {
        let action: Option<Stop> = ().observe(&"event");
        assert_eq!(action, None);
    }
}
