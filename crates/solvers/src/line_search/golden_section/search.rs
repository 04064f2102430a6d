use descent_core::{Observer, Univariate};
use log::{info, trace};

use super::{
    Action, Config, Error, Event, Sample, Solution, Status, Strategy, bracket::GoldenBracket,
};

/// The interior sample that survives a shrink, and the slot it moves into.
///
/// The sample keeps the `x` it was evaluated at, which may differ by rounding
/// from the interior point recomputed from the new bounds.
#[derive(Debug, Clone, Copy)]
enum Retained {
    Low(Sample),
    High(Sample),
}

/// Core golden section search implementation.
///
/// The `transform` function is applied to objective values before
/// comparison, allowing the same algorithm to handle both minimization
/// (transform = identity) and maximization (transform = negation).
pub(super) fn search<U, Obs, F>(
    function: &U,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
    transform: F,
) -> Result<Solution, Error>
where
    U: Univariate + ?Sized,
    Obs: Observer<Event, Action>,
    F: Fn(f64) -> f64,
{
    let [low, high] = bracket;
    if !low.is_finite() || !high.is_finite() || low >= high {
        return Err(Error::InvalidBracket { low, high });
    }

    let mut bracket = GoldenBracket::new(low, high);
    let mut evaluations = 0;
    let mut retained: Option<Retained> = None;
    let mut iters = 0;

    while bracket.width() > config.tolerance() {
        if iters == config.max_iters() {
            info!(
                "golden section search reached {iters} passes with bracket width {}",
                bracket.width()
            );
            return Ok(Solution::new(Status::MaxIters, &bracket, iters, evaluations));
        }

        let (low, high) = match retained.take() {
            Some(Retained::Low(kept)) => (
                kept,
                sample(function, bracket.inner_high, &mut evaluations)?,
            ),
            Some(Retained::High(kept)) => (
                sample(function, bracket.inner_low, &mut evaluations)?,
                kept,
            ),
            None => (
                sample(function, bracket.inner_low, &mut evaluations)?,
                sample(function, bracket.inner_high, &mut evaluations)?,
            ),
        };

        trace!(
            "pass {iters}: bracket [{}, {}], f({}) = {}, f({}) = {}",
            bracket.low, bracket.high, low.x, low.objective, high.x, high.objective
        );

        let event = Event {
            iter: iters,
            bracket: bracket.bounds(),
            low,
            high,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                Status::StoppedByObserver,
                &bracket,
                iters,
                evaluations,
            ));
        }

        let reuse = config.strategy() == Strategy::Reuse;
        if transform(low.objective) < transform(high.objective) {
            bracket.shrink_high();
            retained = reuse.then_some(Retained::High(low));
        } else {
            bracket.shrink_low();
            retained = reuse.then_some(Retained::Low(high));
        }

        iters += 1;
    }

    Ok(Solution::new(Status::Converged, &bracket, iters, evaluations))
}

/// Evaluates `function` at `x`, rejecting non-finite values.
fn sample<U>(function: &U, x: f64, evaluations: &mut usize) -> Result<Sample, Error>
where
    U: Univariate + ?Sized,
{
    *evaluations += 1;
    let value = function.value(x);
    if value.is_finite() {
        Ok(Sample::new(x, value))
    } else {
        Err(Error::NonFiniteObjective { x, value })
    }
}
