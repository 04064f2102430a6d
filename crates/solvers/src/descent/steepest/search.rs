use descent_core::{Direction, Objective, Observer, Point, Ray, Restriction};
use log::{debug, info};

use crate::line_search::golden_section;

use super::{Action, Config, Error, Event, Solution, Status};

/// Core steepest descent loop.
pub(super) fn descend<O, Obs>(
    objective: &O,
    start: Point,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: Observer<Event, Action>,
{
    if !start.is_finite() {
        return Err(Error::NonFinitePoint {
            iter: 0,
            point: start,
        });
    }

    let mut current = start;
    let mut gradient_norm_checked = f64::NAN;

    for iter in 0..config.max_iters() {
        let gradient = objective.gradient(current);
        if !gradient.is_finite() {
            return Err(Error::NonFiniteGradient {
                iter,
                point: current,
                gradient,
            });
        }

        gradient_norm_checked = gradient.norm();
        let converged = gradient_norm_checked < config.convergence_tolerance();

        let ray = Ray::new(current, Direction::steepest(gradient));
        let step = golden_section::minimize_unobserved(
            &Restriction::new(objective, ray),
            config.step_bracket(),
            config.line_search(),
        )
        .map_err(|source| Error::LineSearch { iter, source })?;

        let next = ray.at(step.x);
        if !next.is_finite() {
            return Err(Error::NonFinitePoint { iter, point: next });
        }

        debug!(
            "iteration {iter}: |grad| = {gradient_norm_checked:e}, step = {}, next = ({}, {})",
            step.x, next.x, next.y
        );

        let event = Event {
            iter,
            point: current,
            gradient,
            gradient_norm: gradient_norm_checked,
            step: step.x,
            next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            let steps = iter + 1;
            return Ok(finish(
                objective,
                Status::StoppedByObserver,
                next,
                steps,
                steps,
                gradient_norm_checked,
            ));
        }

        if converged {
            debug!("converged at iteration {iter} with |grad| = {gradient_norm_checked:e}");
            return Ok(finish(
                objective,
                Status::Converged,
                next,
                iter,
                iter + 1,
                gradient_norm_checked,
            ));
        }

        current = next;
    }

    let steps = config.max_iters();
    info!("steepest descent reached {steps} iterations with |grad| = {gradient_norm_checked:e}");
    Ok(finish(
        objective,
        Status::MaxIters,
        current,
        steps,
        steps,
        gradient_norm_checked,
    ))
}

/// Builds the solution at `point`, measuring the objective and gradient there.
fn finish<O: Objective>(
    objective: &O,
    status: Status,
    point: Point,
    iters: usize,
    steps: usize,
    gradient_norm_checked: f64,
) -> Solution {
    Solution {
        status,
        point,
        objective: objective.value(point),
        iters,
        steps,
        gradient_norm_checked,
        gradient_norm: objective.gradient(point).norm(),
    }
}
